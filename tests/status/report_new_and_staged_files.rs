use crate::common::command::{init_repository_dir, run_sgit_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_new_and_staged_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "x".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "b".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("c.txt"),
        "c".to_string(),
    ));

    run_sgit_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();
    run_sgit_command(repository_dir.path(), &["commit"])
        .assert()
        .success();
    run_sgit_command(repository_dir.path(), &["add", "b.txt"])
        .assert()
        .success();

    // a.txt is committed (no output), b.txt is staged, c.txt was never
    // added.
    let expected_output = "b.txt (added and waiting to commit)\nc.txt (new file)\n".to_string();
    let actual_output = stdout_of(repository_dir.path(), &["status"]);

    assert_eq!(actual_output, expected_output);

    Ok(())
}
