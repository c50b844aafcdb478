//! Job posting data structure.

use serde::{Deserialize, Serialize};

/// Placeholder stored when the application cell carries no hyperlink.
pub const NO_LINK: &str = "No link available";

/// Placeholder stored when the source table has no date column for a row.
pub const NOT_SPECIFIED: &str = "Not specified";

/// A single job posting extracted from the board.
///
/// All fields are free text taken verbatim from the source cells, trimmed of
/// surrounding whitespace. `apply_link` and `date_posted` fall back to the
/// [`NO_LINK`] / [`NOT_SPECIFIED`] placeholders when the source omits them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobPosting {
    /// Hiring company name
    pub company: String,

    /// Role / position title
    pub role: String,

    /// Posting location
    pub location: String,

    /// Application URL, or [`NO_LINK`]
    pub apply_link: String,

    /// Posting date as shown on the board, or [`NOT_SPECIFIED`]
    pub date_posted: String,
}

impl JobPosting {
    /// Identity key used for deduplication across scrape cycles.
    ///
    /// Postings are keyed by who/what/where. `apply_link` and `date_posted`
    /// are excluded on purpose: those are the fields the board edits in
    /// place without the posting itself being new.
    pub fn signature(&self) -> (&str, &str, &str) {
        (&self.company, &self.role, &self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posting() -> JobPosting {
        JobPosting {
            company: "Acme".to_string(),
            role: "SWE Intern".to_string(),
            location: "Remote".to_string(),
            apply_link: "https://example.com/apply/1".to_string(),
            date_posted: "Jan 1".to_string(),
        }
    }

    #[test]
    fn signature_ignores_link_and_date() {
        let a = sample_posting();
        let mut b = sample_posting();
        b.apply_link = "https://example.com/apply/other".to_string();
        b.date_posted = "Feb 9".to_string();
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn signature_differs_on_location() {
        let a = sample_posting();
        let mut b = sample_posting();
        b.location = "NYC".to_string();
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let posting = sample_posting();
        let json = serde_json::to_string(&posting).unwrap();
        let back: JobPosting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, posting);
    }
}
