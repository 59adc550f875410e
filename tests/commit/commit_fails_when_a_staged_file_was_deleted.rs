use crate::common;
use crate::common::command::{init_repository_dir, run_sgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_fails_when_a_staged_file_was_deleted(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("doomed.txt"),
        "soon gone".to_string(),
    ));
    run_sgit_command(repository_dir.path(), &["add", "doomed.txt"])
        .assert()
        .success();

    std::fs::remove_file(repository_dir.path().join("doomed.txt"))?;

    // Staged paths are assumed to remain valid until commit; a deleted
    // one is a broken-repository condition, not a silent skip.
    run_sgit_command(repository_dir.path(), &["commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FATAL ERROR: repository broken"))
        .stderr(predicate::str::contains("doomed.txt"));

    // HEAD was never moved to a partial commit.
    assert_eq!(common::head_of(repository_dir.path()), "");

    Ok(())
}
