//! Rendering and JSON serialization for CLI output.

use ndx_highlight::{Annotator, dim, header, subheader};
use ndx_page::{PageItem, PageWindow};
use ndx_record::{CategoryFilter, Field, Record};
use ndx_search::SearchHit;
use serde::Serialize;

/// JSON output for `ndx search`.
#[derive(Serialize)]
pub struct JsonSearchOutput<'s> {
    /// The original query string.
    pub query: String,
    /// The active category filter.
    pub category: CategoryFilter,
    /// Total matches before pagination.
    pub total_matches: usize,
    /// The planned page window.
    pub window: &'s PageWindow,
    /// The hits on the current page.
    pub results: &'s [SearchHit<'s>],
}

/// Decorates text with match highlighting when an annotator is active.
pub fn decorate(text: &str, query: &str, annotator: Option<&Annotator>) -> String {
    match annotator {
        Some(annotator) => annotator.annotate(text, query),
        None => text.to_string(),
    }
}

/// Formats the "Showing M of N diagnoses" result count line.
pub fn results_summary(total_matches: usize, store_total: usize) -> String {
    if total_matches == store_total {
        format!("Showing all {store_total} diagnoses")
    } else {
        format!("Showing {total_matches} of {store_total} diagnoses")
    }
}

/// Formats the per-page summary line, e.g. "13-24 of 57 (page 2 of 5)".
pub fn page_summary(window: &PageWindow, total_matches: usize) -> String {
    format!(
        "{}-{} of {} (page {} of {})",
        window.first_visible,
        window.last_visible,
        total_matches,
        window.current_page,
        window.total_pages
    )
}

/// Formats the page-number bar with the current page emphasized and
/// ellipsis gaps dimmed.
pub fn page_bar(window: &PageWindow) -> String {
    window
        .items
        .iter()
        .map(|item| match item {
            PageItem::Page(number) if *number == window.current_page => {
                subheader(&format!("[{number}]"))
            }
            PageItem::Page(number) => number.to_string(),
            PageItem::Ellipsis => dim("…"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats the dim metadata suffix for a record: category and source page.
fn record_meta(record: &Record) -> String {
    match record.page {
        Some(page) => format!("({}, p. {page})", record.category()),
        None => format!("({})", record.category()),
    }
}

/// Prints one hit as a single listing line.
pub fn print_hit_line(hit: &SearchHit<'_>, annotator: Option<&Annotator>) {
    let query = hit.annotation.as_ref().map_or("", |a| a.query.as_str());
    println!(
        "{} {}",
        decorate(&hit.record.title, query, annotator),
        dim(&record_meta(hit.record))
    );
}

/// Prints one hit as a card: title, definition, and the matched sections.
pub fn print_hit_card(hit: &SearchHit<'_>, annotator: Option<&Annotator>) {
    let record = hit.record;
    let query = hit.annotation.as_ref().map_or("", |a| a.query.as_str());

    println!(
        "{} {}",
        header(&decorate(&record.title, query, annotator)),
        dim(&record_meta(record))
    );

    if let Some(ref definition) = record.definition {
        println!("  {}", decorate(definition, query, annotator));
    }

    if let Some(ref annotation) = hit.annotation {
        for field in &annotation.matched_fields {
            if let Some(text) = matched_list_text(record, *field) {
                println!(
                    "  {} {}",
                    subheader(&format!("{}:", field.label())),
                    decorate(&text, query, annotator)
                );
            }
        }

        let fields: Vec<&str> = annotation.matched_fields.iter().map(|f| f.key()).collect();
        println!(
            "  {}",
            dim(&format!(
                "matched {} · score {:.1}",
                fields.join(", "),
                annotation.score
            ))
        );
    }

    println!();
}

/// Returns the joined text of a matched list field.
///
/// Title and definition are already part of the card; only list fields get
/// their own section line.
fn matched_list_text(record: &Record, field: Field) -> Option<String> {
    if matches!(field, Field::Title | Field::Definition) {
        return None;
    }
    record.field_text(field).map(|text| text.into_owned())
}

/// Prints a complete record with every populated section.
pub fn print_full_record(record: &Record) {
    println!("{}", header(&record.title));
    println!("{}", dim(&record_meta(record)));

    if let Some(ref definition) = record.definition {
        println!();
        println!("{definition}");
    }

    for field in Field::LISTS {
        let entries = record.list(field);
        if entries.is_empty() {
            continue;
        }
        println!();
        println!("{}", subheader(field.label()));
        for entry in entries {
            println!("  - {entry}");
        }
    }
}
