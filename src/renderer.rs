// src/renderer.rs

use crate::model::*;

/// Words used to print one ranking
#[derive(Debug, Clone, Copy)]
pub struct Wording {
    pub singular: &'static str,
    pub plural: &'static str,
    pub header: &'static str,
}

pub const TOTAL_VIEWS: Wording = Wording {
    singular: "visit",
    plural: "visits",
    header: "List of webpages with most page views ordered from most pages views to less page views",
};

pub const UNIQUE_VIEWS: Wording = Wording {
    singular: "unique view",
    plural: "unique views",
    header: "List of webpages with most unique page views ordered from most unique pages views to less unique page views",
};

/// Renders a ranking as a header followed by one `<path> <count> <word>` line
/// per entry. An empty ranking renders as an empty string.
pub fn format_report(metric: &[PathCount], singular: &str, plural: &str, header: &str) -> String {
    if metric.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    for entry in metric {
        let word = if entry.count == 1 { singular } else { plural };
        out.push_str(&format!("{} {} {}\n", entry.path, entry.count, word));
    }
    out
}

pub fn format_with(metric: &[PathCount], wording: &Wording) -> String {
    format_report(metric, wording.singular, wording.plural, wording.header)
}

/// Renders the total-views block then the unique-views block.
///
/// `top` keeps only the first N entries of each ranking; `None` keeps all.
pub fn render_reports(total: &[PathCount], unique: &[PathCount], top: Option<usize>) -> String {
    let limit = |metric: &[PathCount]| -> usize { top.map_or(metric.len(), |n| n.min(metric.len())) };

    let mut out = format_with(&total[..limit(total)], &TOTAL_VIEWS);
    out.push_str(&format_with(&unique[..limit(unique)], &UNIQUE_VIEWS));
    out
}
