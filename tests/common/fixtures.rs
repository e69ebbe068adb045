//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use git2::Oid;
use gitbrowser::core::error::Result;

pub const README_TEXT: &str = "# Demo\n\nA small repository.\n";
pub const DEEP_TEXT: &str = "deep down\n";
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0x0d];

/// Scenario: `main` → { README, src/ { main.rs } }
pub fn create_readme_repo() -> Result<TestRepo> {
    create_repo_with_tree(vec![
        file("README", README_TEXT),
        dir("src", vec![file("main.rs", "fn main() {}\n")]),
    ])
}

/// Scenario: nested trees three levels deep plus a binary file and an empty tree
///
/// ```text
/// README
/// a/ { 0.txt, b/ { 0.txt, c/ { deep.txt } } }
/// hollow/
/// logo.png
/// ```
pub fn create_nested_repo() -> Result<TestRepo> {
    create_repo_with_tree(vec![
        file("README", README_TEXT),
        dir(
            "a",
            vec![
                file("0.txt", "a\n"),
                dir(
                    "b",
                    vec![
                        file("0.txt", "b\n"),
                        dir("c", vec![file("deep.txt", DEEP_TEXT)]),
                    ],
                ),
            ],
        ),
        dir("hollow", vec![]),
        binary("logo.png", PNG_BYTES),
    ])
}

/// Scenario: `count` text files named file00, file01, ...
pub fn create_many_files_repo(count: usize) -> Result<TestRepo> {
    let files = (0..count)
        .map(|i| file(&format!("file{i:02}"), &format!("content {i}\n")))
        .collect();
    create_repo_with_tree(files)
}

/// Scenario: `main` → { README, missing.bin } where missing.bin's blob is absent
pub fn create_dangling_blob_repo() -> Result<TestRepo> {
    let test_repo = setup_test_repo()?;
    {
        let repo = test_repo.repository()?;
        let readme = repo.blob(README_TEXT.as_bytes())?;
        let missing = Oid::from_str("1111111111111111111111111111111111111111")?;
        let tree = write_raw_tree(&repo, &[("README", readme), ("missing.bin", missing)])?;
        commit_tree(&repo, "refs/heads/main", tree, "Partial clone")?;
    }
    Ok(test_repo)
}
