// src/services/extract.rs

//! Posting table extraction.
//!
//! Parses the board HTML into an ordered sequence of [`JobPosting`]s. The
//! board lists postings newest-first and collapses repeated company names
//! into a continuation mark, so extraction carries a `last_company`
//! accumulator across rows and reverses the result before returning.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{JobPosting, NO_LINK, NOT_SPECIFIED};

/// Glyph the board uses in the company cell to mean "same company as the
/// row above".
pub const CONTINUATION_MARK: &str = "\u{21b3}";

/// Minimum cells a row needs to decompose into a posting.
const MIN_CELLS: usize = 4;

/// How a single row resolved during extraction.
enum RowOutcome {
    Posting(JobPosting),
    /// Fewer than [`MIN_CELLS`] cells; logged and skipped.
    TooFewCells(usize),
    /// Separator row (blank company or role); skipped silently.
    Blank,
}

/// Extract all postings from the board document, oldest first.
///
/// The page carries two tables by convention: a legend table first, then the
/// posting table. Fewer than two tables is a structural failure. Individual
/// rows that cannot be decomposed are skipped, never fatal.
pub fn extract_jobs(html: &str) -> Result<Vec<JobPosting>> {
    let document = Html::parse_document(html);

    let table_sel = parse_selector("table")?;
    let row_sel = parse_selector("tr")?;
    let cell_sel = parse_selector("td, th")?;
    let anchor_sel = parse_selector("a")?;

    let tables: Vec<ElementRef> = document.select(&table_sel).collect();
    if tables.len() < 2 {
        return Err(AppError::NoTableFound {
            tables: tables.len(),
        });
    }
    let table = tables[1];

    let mut jobs = Vec::new();
    let mut last_company = String::new();

    // Skip the header row; row indices in logs are 1-based within the body.
    for (index, row) in table.select(&row_sel).skip(1).enumerate() {
        match parse_row(&row, &cell_sel, &anchor_sel, &mut last_company) {
            RowOutcome::Posting(job) => jobs.push(job),
            RowOutcome::TooFewCells(count) => {
                log::warn!(
                    "Skipping row {}: {} cell(s), need at least {}",
                    index + 1,
                    count,
                    MIN_CELLS
                );
            }
            RowOutcome::Blank => {}
        }
    }

    // The board is newest-first; downstream wants oldest-first so that a
    // batch of new postings is announced in chronological order.
    jobs.reverse();

    log::info!("Parsed {} job postings", jobs.len());
    Ok(jobs)
}

fn parse_row(
    row: &ElementRef,
    cell_sel: &Selector,
    anchor_sel: &Selector,
    last_company: &mut String,
) -> RowOutcome {
    let cells: Vec<ElementRef> = row.select(cell_sel).collect();
    if cells.len() < MIN_CELLS {
        return RowOutcome::TooFewCells(cells.len());
    }

    let raw_company = cell_text(&cells[0]);
    let company = if raw_company == CONTINUATION_MARK {
        last_company.clone()
    } else {
        last_company.clear();
        last_company.push_str(&raw_company);
        raw_company
    };

    let role = cell_text(&cells[1]);
    let location = cell_text(&cells[2]);

    let apply_link = cells[3]
        .select(anchor_sel)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_else(|| NO_LINK.to_string());

    let date_posted = cells
        .get(4)
        .map(cell_text)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    if company.is_empty() || role.is_empty() {
        return RowOutcome::Blank;
    }

    RowOutcome::Posting(JobPosting {
        company,
        role,
        location,
        apply_link,
        date_posted,
    })
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::extract(format!("invalid selector '{s}': {e:?}")))
}
