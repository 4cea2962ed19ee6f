use super::html::escape_html;
use crate::counties::CountyGroups;
use crate::postings::JobRecord;
use std::fmt::{self, Write as _};

pub const TABLE_COLUMNS: [&str; 9] = [
    "Department",
    "Location",
    "Details",
    "Closing Date",
    "Contact Info",
    "Anchor",
    "ILEA Link",
    "County",
    "Posted Date",
];

/// Printable listing: one table per county, counties in name order.
pub fn render_table(groups: &CountyGroups) -> Result<String, fmt::Error> {
    let mut html = String::new();

    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Indiana Police Jobs - Complete Listing</title>
<style>
{TABLE_STYLE}
</style>
</head>
<body>
<h1>Indiana Law Enforcement Job Opportunities</h1>
<p class="total">Total Jobs: {total}</p>
"#,
        total = groups.total_jobs()
    )?;

    for (county, records) in groups.sorted() {
        write_county_table(&mut html, county, records)?;
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn write_county_table(html: &mut String, county: &str, records: &[JobRecord]) -> fmt::Result {
    writeln!(
        html,
        r#"<h2 class="county-header">{} County - {} Job(s)</h2>"#,
        escape_html(county),
        records.len()
    )?;
    html.push_str("<table>\n<thead><tr>");
    for column in TABLE_COLUMNS {
        write!(html, "<th>{column}</th>")?;
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for job in records {
        let closing = match job.closing_date.as_deref() {
            Some(date) => format!(r#"<span class="closing-date">{}</span>"#, escape_html(date)),
            None => "No closing date".to_string(),
        };
        let contact = if job.contact_info.is_empty() {
            "No contact info".to_string()
        } else {
            escape_html(&job.contact_info)
        };
        let link = escape_html(&job.ilea_link);

        writeln!(
            html,
            r#"<tr><td class="department">{department}</td><td>{location}</td><td class="details">{details}</td><td>{closing}</td><td class="contact">{contact}</td><td>{anchor}</td><td><a href="{link}" target="_blank">{link}</a></td><td>{county}</td><td>{posted}</td></tr>"#,
            department = escape_html(&job.department),
            location = escape_html(&job.location),
            details = escape_html(&job.details),
            anchor = escape_html(&job.anchor_id),
            county = escape_html(county),
            posted = escape_html(&job.date_posted),
        )?;
    }

    html.push_str("</tbody>\n</table>\n");
    Ok(())
}

const TABLE_STYLE: &str = r#"body { font-family: Arial, sans-serif; margin: 20px; }
h1 { color: #333; }
.total { font-weight: bold; }
.county-header { background-color: #007bff; color: white; padding: 10px; margin-top: 30px; }
table { border-collapse: collapse; width: 100%; margin-bottom: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; vertical-align: top; }
th { background-color: #f2f2f2; }
tr:nth-child(even) { background-color: #f9f9f9; }
.department { font-weight: bold; color: #007bff; }
.details { max-width: 400px; font-size: 0.9em; }
.contact { font-size: 0.9em; color: #666; }
.closing-date { color: red; font-weight: bold; }
a { color: #007bff; }"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn job(department: &str, closing: Option<&str>, contact: &str) -> JobRecord {
        JobRecord {
            department: department.to_string(),
            location: department.to_string(),
            details: "Details & duties".to_string(),
            full_description: "Details & duties".to_string(),
            closing_date: closing.map(str::to_string),
            contact_info: contact.to_string(),
            anchor_id: "anchor".to_string(),
            ilea_link: "https://board.test/#anchor".to_string(),
            date_posted: "2025-03-03".to_string(),
            county: None,
        }
    }

    #[test]
    fn counties_render_in_name_order_with_counts() {
        let mut groups = CountyGroups::default();
        groups.push("Vigo", job("Vigo County Sheriff", None, ""));
        groups.push("Allen", job("Fort Wayne Police", None, ""));
        groups.push("Allen", job("New Haven Police", None, ""));

        let html = render_table(&groups).expect("renders");
        let allen = html.find("Allen County - 2 Job(s)").expect("allen header");
        let vigo = html.find("Vigo County - 1 Job(s)").expect("vigo header");
        assert!(allen < vigo);
        assert!(html.contains("Total Jobs: 3"));
        assert_eq!(html.matches("<table>").count(), 2);
        assert!(html.contains("<title>Indiana Police Jobs - Complete Listing</title>"));
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let mut groups = CountyGroups::default();
        groups.push("Lake", job("Gary Police Department", None, ""));

        let html = render_table(&groups).expect("renders");
        assert!(html.contains("<td>No closing date</td>"));
        assert!(html.contains(r#"<td class="contact">No contact info</td>"#));
        assert!(html.contains("Details &amp; duties"));
    }

    #[test]
    fn present_fields_are_shown() {
        let mut groups = CountyGroups::default();
        groups.push(
            "Lake",
            job("Gary Police Department", Some("JULY 4, 2025"), "hr@gary.gov"),
        );

        let html = render_table(&groups).expect("renders");
        assert!(html.contains(r#"<span class="closing-date">JULY 4, 2025</span>"#));
        assert!(html.contains("hr@gary.gov"));
        assert!(html.contains(
            r#"<a href="https://board.test/#anchor" target="_blank">https://board.test/#anchor</a>"#
        ));
        assert!(html.contains("<td>Lake</td><td>2025-03-03</td>"));
    }

    #[test]
    fn empty_input_renders_headings_only() {
        let html = render_table(&CountyGroups::default()).expect("renders");
        assert!(html.contains("Total Jobs: 0"));
        assert!(!html.contains("<table>"));
    }
}
