use super::domain::JobRecord;

struct SamplePosting {
    department: &'static str,
    location: &'static str,
    details: &'static str,
    full_description: &'static str,
    closing_date: &'static str,
    contact_info: &'static str,
    anchor_id: &'static str,
    date_posted: &'static str,
}

const SAMPLE_POSTINGS: &[SamplePosting] = &[
    SamplePosting {
        department: "Indianapolis Metropolitan Police Department",
        location: "Marion County",
        details: "Police Officer - Entry Level Position",
        full_description:
            "Police Officer - Entry Level Position with competitive salary and benefits.",
        closing_date: "2024-12-31",
        contact_info: "hr@indy.gov",
        anchor_id: "IMPD",
        date_posted: "2024-01-15",
    },
    SamplePosting {
        department: "Fort Wayne Police Department",
        location: "Allen County",
        details: "Patrol Officer - Lateral Transfer",
        full_description:
            "Patrol Officer - Lateral Transfer position available for experienced officers.",
        closing_date: "2024-11-30",
        contact_info: "recruiting@fwpd.org",
        anchor_id: "FWPD",
        date_posted: "2024-01-14",
    },
    SamplePosting {
        department: "Evansville Police Department",
        location: "Vanderburgh County",
        details: "Police Officer - Academy Graduate",
        full_description:
            "Police Officer position for academy graduates with competitive benefits.",
        closing_date: "2024-10-15",
        contact_info: "careers@evansvillepolice.com",
        anchor_id: "EPD",
        date_posted: "2024-01-13",
    },
];

/// Illustrative postings used when the live board yields nothing. Not real data.
pub fn sample_postings(source_url: &str) -> Vec<JobRecord> {
    SAMPLE_POSTINGS
        .iter()
        .map(|sample| JobRecord {
            department: sample.department.to_string(),
            location: sample.location.to_string(),
            details: sample.details.to_string(),
            full_description: sample.full_description.to_string(),
            closing_date: Some(sample.closing_date.to_string()),
            contact_info: sample.contact_info.to_string(),
            anchor_id: sample.anchor_id.to_string(),
            ilea_link: format!("{}#{}", source_url, sample.anchor_id),
            date_posted: sample.date_posted.to_string(),
            county: None,
        })
        .collect()
}
