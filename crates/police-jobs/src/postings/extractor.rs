use super::domain::JobRecord;
use super::fields::{
    extract_closing_date, extract_contact_info, extract_location, preview, summarize_details,
};
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

const HIRING_PREFIX: &str = "Hiring:";
const EXCLUDED_PREFIX: &str = "Job closing dates";

/// Pulls job records out of one bulletin board page.
#[derive(Debug, Clone)]
pub struct PostingExtractor {
    source_url: String,
    date_posted: String,
}

impl PostingExtractor {
    pub fn new(source_url: impl Into<String>, run_date: NaiveDate) -> Self {
        Self {
            source_url: source_url.into(),
            date_posted: run_date.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn extract(&self, html: &str) -> Vec<JobRecord> {
        let document = Html::parse_document(html);
        let (Some(fragment_links), Some(named_anchors)) =
            (selector("a[href^='#']"), selector("a[name]"))
        else {
            return Vec::new();
        };

        let links: Vec<ElementRef<'_>> = document.select(&fragment_links).collect();
        info!(count = links.len(), "found in-page job links");

        let mut records = Vec::new();
        for link in links {
            let link_text = element_text(link);
            if !link_text.starts_with(HIRING_PREFIX) {
                continue;
            }

            let department = link_text.replace(HIRING_PREFIX, "").trim().to_string();
            if department.is_empty() {
                debug!(%link_text, "skipping hiring link without a department");
                continue;
            }

            let Some(anchor_id) = link
                .value()
                .attr("href")
                .and_then(|href| href.strip_prefix('#'))
            else {
                continue;
            };

            let Some(section) = document
                .select(&named_anchors)
                .find(|anchor| anchor.value().attr("name") == Some(anchor_id))
            else {
                debug!(%department, %anchor_id, "no named anchor for job link");
                continue;
            };

            let description = collect_description(&document, section);
            if description.is_empty() {
                info!(%department, "no description found");
            } else {
                info!(%department, preview = preview(&description, 100), "extracted posting");
            }

            records.push(self.build_record(department, anchor_id, description));
        }

        info!(count = records.len(), "extracted job listings");
        records
    }

    fn build_record(&self, department: String, anchor_id: &str, description: String) -> JobRecord {
        JobRecord {
            location: extract_location(&department),
            details: summarize_details(&description),
            closing_date: extract_closing_date(&description),
            contact_info: extract_contact_info(&description),
            anchor_id: anchor_id.to_string(),
            ilea_link: format!("{}#{}", self.source_url, anchor_id),
            date_posted: self.date_posted.clone(),
            county: None,
            full_description: description,
            department,
        }
    }
}

/// Walks the siblings after a named anchor. When that yields nothing, falls
/// back to the siblings of the next `h3` in document order. Only the anchor
/// walk drops "Job closing dates" boilerplate.
fn collect_description(document: &Html, section: ElementRef<'_>) -> String {
    let mut fragments = sibling_walk(section);

    if fragments.is_empty() {
        if let Some(heading) = next_element_named(document, section, "h3") {
            fragments = heading_walk(heading);
        }
    }

    fragments.join(" ")
}

fn sibling_walk(section: ElementRef<'_>) -> Vec<String> {
    let mut fragments = Vec::new();

    for sibling in section.next_siblings().filter_map(ElementRef::wrap) {
        let element = sibling.value();
        if element.name() == "a" && element.attr("name").is_some_and(|name| !name.is_empty()) {
            break;
        }
        if matches!(element.name(), "p" | "h3" | "h4" | "h5" | "h6") {
            push_fragment(&mut fragments, element_text(sibling));
        }
    }

    fragments
}

fn heading_walk(heading: ElementRef<'_>) -> Vec<String> {
    let mut fragments = Vec::new();

    for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
        match sibling.value().name() {
            "hr" | "h3" => break,
            "p" | "div" => {
                let text = element_text(sibling);
                if !text.is_empty() {
                    fragments.push(text);
                }
            }
            _ => {}
        }
    }

    fragments
}

fn next_element_named<'a>(
    document: &'a Html,
    after: ElementRef<'a>,
    name: &str,
) -> Option<ElementRef<'a>> {
    document
        .tree
        .root()
        .descendants()
        .skip_while(|node| node.id() != after.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().name() == name)
}

fn push_fragment(fragments: &mut Vec<String>, text: String) {
    if !text.is_empty() && !text.starts_with(EXCLUDED_PREFIX) {
        fragments.push(text);
    }
}

/// Text nodes trimmed and joined with single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}
