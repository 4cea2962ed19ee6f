use regex::Regex;
use std::sync::OnceLock;

pub(crate) const DETAILS_LIMIT: usize = 500;

static LOCATION_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static CLOSING_DATE: OnceLock<Regex> = OnceLock::new();
static EMAIL: OnceLock<Regex> = OnceLock::new();
static PHONE: OnceLock<Regex> = OnceLock::new();

fn location_patterns() -> &'static [Regex] {
    LOCATION_PATTERNS.get_or_init(|| {
        const PATTERNS: &[&str] = &[
            r"(?i)(\w+\s+County)\s+Sheriff",
            r"(?i)(\w+\s+Police\s+Department)",
            r"(?i)(\w+\s+Marshal)",
            r"(?i)(\w+\s+University)",
            r"(?i)(\w+\s+Schools)",
            r"(?i)(\w+\s+Township)",
            r"(?i)(\w+\s+International\s+Airport)",
            r"(?i)(\w+\s+Department\s+Of\s+Natural\s+Resources)",
            r"(?i)(\w+\s+Department\s+Of\s+Correction)",
        ];

        PATTERNS
            .iter()
            .filter_map(|pattern| Regex::new(pattern).ok())
            .collect()
    })
}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> Option<&'static Regex> {
    if let Some(regex) = cell.get() {
        return Some(regex);
    }
    let regex = Regex::new(pattern).ok()?;
    Some(cell.get_or_init(|| regex))
}

/// Derives a location phrase from a department name. The first matching
/// suffix pattern wins; with no match the department itself is returned.
pub fn extract_location(department: &str) -> String {
    location_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(department))
        .and_then(|captures| captures.get(1))
        .map(|found| found.as_str().to_string())
        .unwrap_or_else(|| department.to_string())
}

/// First "UNTIL <MONTH> <d>, <yyyy>" phrase, without the keyword.
pub fn extract_closing_date(description: &str) -> Option<String> {
    compiled(
        &CLOSING_DATE,
        r"(?i)UNTIL\s+([A-Z]+\s+\d{1,2},?\s+\d{4})",
    )?
    .captures(description)
    .and_then(|captures| captures.get(1))
    .map(|found| found.as_str().to_string())
}

/// Emails followed by phone numbers, joined with "; ".
pub fn extract_contact_info(description: &str) -> String {
    let mut contacts: Vec<&str> = Vec::new();

    if let Some(email) = compiled(&EMAIL, r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}") {
        contacts.extend(email.find_iter(description).map(|found| found.as_str()));
    }
    if let Some(phone) = compiled(&PHONE, r"\(\d{3}\)\s*\d{3}-\d{4}") {
        contacts.extend(phone.find_iter(description).map(|found| found.as_str()));
    }

    contacts.join("; ")
}

/// Truncates to `DETAILS_LIMIT` characters, marking the cut with "...".
pub fn summarize_details(description: &str) -> String {
    truncate_with_ellipsis(description, DETAILS_LIMIT)
}

pub(crate) fn truncate_with_ellipsis(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Leading `limit` characters, for previews that always end in "...".
pub(crate) fn preview(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
