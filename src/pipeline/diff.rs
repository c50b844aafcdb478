// src/pipeline/diff.rs

//! Diff calculation between scrape cycles.
//!
//! Computes which postings in the current scrape are absent from the cached
//! snapshot, keyed by the posting signature rather than full-record
//! equality, so in-place edits to links or dates do not resurface a posting
//! as new.

use std::collections::HashSet;

use crate::models::JobPosting;

/// Return the subset of `current` not present in `cached`, preserving the
/// order of `current` (oldest-new-first after extraction).
///
/// Pure set difference over posting signatures; neither input is mutated.
pub fn find_new(current: &[JobPosting], cached: &[JobPosting]) -> Vec<JobPosting> {
    let seen: HashSet<_> = cached.iter().map(JobPosting::signature).collect();

    current
        .iter()
        .filter(|job| !seen.contains(&job.signature()))
        .cloned()
        .collect()
}
