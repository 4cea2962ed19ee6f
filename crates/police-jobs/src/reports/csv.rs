use crate::counties::CountyGroups;
use serde::Serialize;
use std::io::Write;

pub const CSV_COLUMNS: [&str; 10] = [
    "department",
    "location",
    "details",
    "full_description",
    "closing_date",
    "contact_info",
    "anchor_id",
    "ilea_link",
    "county",
    "date_posted",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    department: &'a str,
    location: &'a str,
    details: &'a str,
    full_description: &'a str,
    closing_date: Option<&'a str>,
    contact_info: &'a str,
    anchor_id: &'a str,
    ilea_link: &'a str,
    county: &'a str,
    date_posted: &'a str,
}

/// Header plus one row per grouped record, in grouping order. The county
/// column is the group key the record was filed under.
pub fn write_csv<W: Write>(groups: &CountyGroups, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    if groups.is_empty() {
        csv_writer.write_record(CSV_COLUMNS)?;
    }

    for (county, records) in groups.iter() {
        for record in records {
            csv_writer.serialize(CsvRow {
                department: &record.department,
                location: &record.location,
                details: &record.details,
                full_description: &record.full_description,
                closing_date: record.closing_date.as_deref(),
                contact_info: &record.contact_info,
                anchor_id: &record.anchor_id,
                ilea_link: &record.ilea_link,
                county,
                date_posted: &record.date_posted,
            })?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn render_csv(groups: &CountyGroups) -> Result<String, csv::Error> {
    let mut buffer = Vec::new();
    write_csv(groups, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
