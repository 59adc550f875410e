use crate::common;
use crate::common::command::{init_repository_dir, run_sgit_command};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use fake::Fake;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;

#[rstest]
fn stage_a_generated_batch_of_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    let files_count = (1..=5).fake::<usize>();
    let specs = write_generated_files(repository_dir.path(), files_count);

    run_sgit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    // Generated names may collide, so compare de-duplicated sets.
    let expected = specs
        .iter()
        .map(|spec| {
            spec.path
                .file_name()
                .expect("Generated file has no name")
                .to_string_lossy()
                .to_string()
        })
        .collect::<BTreeSet<_>>();
    let staged = common::staging_list_of(repository_dir.path())
        .into_iter()
        .collect::<BTreeSet<_>>();

    assert_eq!(staged, expected);

    Ok(())
}
