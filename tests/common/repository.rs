//! Git repository construction utilities
//!
//! Provides a small tree description language and helpers to write it as commits in
//! a throwaway repository.

#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use gitbrowser::core::error::Result;
use gitbrowser::core::git::GitRepo;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository(&self) -> Result<Repository> {
        Ok(Repository::open(&self.path)?)
    }

    /// Open the repository the way gitbrowser does.
    pub fn store(&self) -> Result<GitRepo> {
        GitRepo::open(&self.path)
    }
}

/// One node of a tree to write.
pub enum Node {
    Blob(Vec<u8>),
    Tree(Vec<(String, Node)>),
}

pub fn file(name: &str, content: &str) -> (String, Node) {
    (name.to_string(), Node::Blob(content.as_bytes().to_vec()))
}

pub fn binary(name: &str, content: &[u8]) -> (String, Node) {
    (name.to_string(), Node::Blob(content.to_vec()))
}

pub fn dir(name: &str, children: Vec<(String, Node)>) -> (String, Node) {
    (name.to_string(), Node::Tree(children))
}

/// Initializes an empty repository in a fresh temporary directory
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Repository::init(&path)?;
    Ok(TestRepo { temp_dir, path })
}

/// Writes `children` as a tree and returns its id
pub fn write_tree(repo: &Repository, children: &[(String, Node)]) -> Result<Oid> {
    let mut builder = repo.treebuilder(None)?;
    for (name, node) in children {
        match node {
            Node::Blob(content) => {
                let blob = repo.blob(content)?;
                builder.insert(name.as_str(), blob, 0o100644)?;
            }
            Node::Tree(grandchildren) => {
                let tree = write_tree(repo, grandchildren)?;
                builder.insert(name.as_str(), tree, 0o040000)?;
            }
        }
    }
    Ok(builder.write()?)
}

/// Writes a tree object byte by byte, so its entries may name objects that don't exist
pub fn write_raw_tree(repo: &Repository, entries: &[(&str, Oid)]) -> Result<Oid> {
    let mut raw = Vec::new();
    for (name, id) in entries {
        raw.extend_from_slice(format!("100644 {name}\0").as_bytes());
        raw.extend_from_slice(id.as_bytes());
    }
    Ok(repo.odb()?.write(git2::ObjectType::Tree, &raw)?)
}

/// Commits `tree` onto `refname` and returns the commit id
pub fn commit_tree(repo: &Repository, refname: &str, tree: Oid, message: &str) -> Result<Oid> {
    let tree = repo.find_tree(tree)?;
    let sig = Signature::now("Test User", "test@example.com")?;
    Ok(repo.commit(Some(refname), &sig, &sig, message, &tree, &[])?)
}

/// Creates a repository whose `main` branch holds `children`
pub fn create_repo_with_tree(children: Vec<(String, Node)>) -> Result<TestRepo> {
    let test_repo = setup_test_repo()?;
    {
        let repo = test_repo.repository()?;
        let tree = write_tree(&repo, &children)?;
        commit_tree(&repo, "refs/heads/main", tree, "Initial commit")?;
    }
    Ok(test_repo)
}

/// Points another reference at the commit `main` points at
pub fn add_reference(test_repo: &TestRepo, refname: &str) -> Result<()> {
    let repo = test_repo.repository()?;
    let target = repo.refname_to_id("refs/heads/main")?;
    repo.reference(refname, target, false, "test reference")?;
    Ok(())
}
