use super::classifier::classify;
use crate::postings::JobRecord;
use indexmap::IndexMap;

/// County name to postings, in the order counties were first matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountyGroups {
    groups: IndexMap<String, Vec<JobRecord>>,
}

impl CountyGroups {
    /// Classifies each record by location, then by department, and files it
    /// under the resolved county with `county` populated. Unresolvable
    /// records are left out; their count is returned alongside.
    pub fn classify(records: Vec<JobRecord>) -> (Self, usize) {
        let mut groups = Self::default();
        let mut unclassified = 0;

        for record in records {
            match classify(&record.location).or_else(|| classify(&record.department)) {
                Some(county) => groups.push(county, record),
                None => unclassified += 1,
            }
        }

        (groups, unclassified)
    }

    pub fn push(&mut self, county: &str, mut record: JobRecord) {
        record.county = Some(county.to_string());
        self.groups
            .entry(county.to_string())
            .or_default()
            .push(record);
    }

    pub fn get(&self, county: &str) -> Option<&[JobRecord]> {
        self.groups.get(county).map(Vec::as_slice)
    }

    pub fn county_count(&self) -> usize {
        self.groups.len()
    }

    pub fn total_jobs(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[JobRecord])> {
        self.groups
            .iter()
            .map(|(county, records)| (county.as_str(), records.as_slice()))
    }

    /// Groups ordered by county name.
    pub fn sorted(&self) -> Vec<(&str, &[JobRecord])> {
        let mut sorted: Vec<_> = self.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));
        sorted
    }

    /// Every grouped record, group by group in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &JobRecord> {
        self.groups.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(department: &str, location: &str) -> JobRecord {
        JobRecord {
            department: department.to_string(),
            location: location.to_string(),
            details: String::new(),
            full_description: String::new(),
            closing_date: None,
            contact_info: String::new(),
            anchor_id: department.to_lowercase().replace(' ', "-"),
            ilea_link: String::new(),
            date_posted: "2025-01-01".to_string(),
            county: None,
        }
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let (groups, unclassified) = CountyGroups::classify(vec![
            record("Vigo County Sheriff", "Vigo County"),
            record("Lake County Sheriff", "Lake County"),
            record("Terre Haute Police Department", "Haute Police Department"),
        ]);

        assert_eq!(unclassified, 0);
        let order: Vec<&str> = groups.iter().map(|(county, _)| county).collect();
        assert_eq!(order, ["Vigo", "Lake"]);
        assert_eq!(groups.get("Vigo").map(<[_]>::len), Some(2));
        assert_eq!(groups.total_jobs(), 3);
    }

    #[test]
    fn department_is_tried_when_location_misses() {
        let (groups, _) = CountyGroups::classify(vec![record(
            "Terre Haute Police Department",
            "Haute Police Department",
        )]);

        let vigo = groups.get("Vigo").expect("resolved through department");
        assert_eq!(vigo[0].county.as_deref(), Some("Vigo"));
    }

    #[test]
    fn unresolvable_records_are_dropped_and_counted() {
        let (groups, unclassified) = CountyGroups::classify(vec![
            record("Excise Enforcement", "Excise Enforcement"),
            record("Wells County Sheriff", "Wells County"),
        ]);

        assert_eq!(unclassified, 1);
        assert_eq!(groups.county_count(), 1);
        assert!(groups
            .records()
            .all(|record| record.department != "Excise Enforcement"));
    }

    #[test]
    fn sorted_orders_by_county_name() {
        let (groups, _) = CountyGroups::classify(vec![
            record("Whitley County Sheriff", "Whitley County"),
            record("Adams County Sheriff", "Adams County"),
        ]);

        let names: Vec<&str> = groups.sorted().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Adams", "Whitley"]);
    }
}
