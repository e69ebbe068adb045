//! Common assertion helpers for CLI output validation

#![allow(dead_code)]

use predicates::prelude::*;

pub fn not_a_repository() -> impl Predicate<str> {
    predicates::str::contains("Not a git repository")
}

pub fn needs_terminal() -> impl Predicate<str> {
    predicates::str::contains("requires an interactive terminal")
}

pub fn has_usage() -> impl Predicate<str> {
    predicates::str::contains("Usage:").and(predicates::str::contains("--commit-id"))
}

pub fn unknown_revision(revision: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Revision '{revision}' does not name a commit"))
}
