use crate::common;
use crate::common::command::{init_repository_dir, run_sgit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_snapshots_staged_file_content(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "x".to_string(),
    ));

    run_sgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_sgit_command(repository_dir.path(), &["commit"])
        .assert()
        .success();

    let head = common::head_of(repository_dir.path());
    assert!(!head.is_empty());

    // Root commit: no predecessor.
    assert_eq!(common::previous_commit_of(repository_dir.path(), &head), "");
    assert_eq!(
        common::tracked_list_of(repository_dir.path(), &head),
        vec!["a.txt"]
    );
    assert_eq!(
        std::fs::read_to_string(common::snapshot_path_of(
            repository_dir.path(),
            &head,
            "a.txt"
        ))?,
        "x"
    );

    Ok(())
}

#[rstest]
fn snapshot_keeps_bytes_from_commit_time(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "x".to_string(),
    ));

    run_sgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_sgit_command(repository_dir.path(), &["commit"])
        .assert()
        .success();

    // Rewrite the working-tree file after the commit; the stored
    // snapshot must not change.
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "y".to_string(),
    ));

    let head = common::head_of(repository_dir.path());
    assert_eq!(
        std::fs::read_to_string(common::snapshot_path_of(
            repository_dir.path(),
            &head,
            "a.txt"
        ))?,
        "x"
    );

    Ok(())
}

#[rstest]
fn snapshot_mirrors_nested_directories(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("deep.txt"),
        "deep content".to_string(),
    ));

    run_sgit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    run_sgit_command(repository_dir.path(), &["commit"])
        .assert()
        .success();

    let head = common::head_of(repository_dir.path());
    assert_eq!(
        std::fs::read_to_string(common::snapshot_path_of(
            repository_dir.path(),
            &head,
            "a/b/deep.txt"
        ))?,
        "deep content"
    );

    Ok(())
}
