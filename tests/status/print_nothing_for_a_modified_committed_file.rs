use crate::common::command::{committed_repository_dir, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

// Classification is by path membership only: a committed file that was
// modified on disk afterwards still reports as committed, with no
// indication of the modification. There is no notion of "modified since
// last commit".
#[rstest]
fn print_nothing_for_a_modified_committed_file(
    committed_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = committed_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "rewritten after commit".to_string(),
    ));

    let expected_output = "".to_string();
    let actual_output = stdout_of(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}
