use super::aliases::CITY_ALIASES;
use super::gazetteer::COUNTIES;
use std::sync::OnceLock;

static LOWERCASE_COUNTIES: OnceLock<Vec<(String, &'static str)>> = OnceLock::new();

fn lowercase_counties() -> &'static [(String, &'static str)] {
    LOWERCASE_COUNTIES.get_or_init(|| {
        COUNTIES
            .iter()
            .map(|county| (county.name.to_lowercase(), county.name))
            .collect()
    })
}

/// Resolves free text to a county: any county name contained in the text
/// first, then any city alias. First hit in table order wins.
pub fn classify(text: &str) -> Option<&'static str> {
    let haystack = text.to_lowercase();

    lowercase_counties()
        .iter()
        .find(|(needle, _)| haystack.contains(needle.as_str()))
        .map(|(_, county)| *county)
        .or_else(|| {
            CITY_ALIASES
                .iter()
                .find(|(city, _)| haystack.contains(city))
                .map(|(_, county)| *county)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn county_names_match_case_insensitively() {
        assert_eq!(classify("Marion County"), Some("Marion"));
        assert_eq!(classify("DEKALB COUNTY SHERIFF"), Some("DeKalb"));
        assert_eq!(classify("saint joseph county"), Some("Saint Joseph"));
    }

    #[test]
    fn city_aliases_apply_when_no_county_matches() {
        assert_eq!(classify("Evansville Police Department"), Some("Vanderburgh"));
        assert_eq!(classify("Town of Fishers"), Some("Hamilton"));
        assert_eq!(classify("Terre Haute"), Some("Vigo"));
    }

    #[test]
    fn county_table_wins_over_alias_table() {
        // "Lawrence" is both a county and a Marion County city alias.
        assert_eq!(classify("City of Lawrence"), Some("Lawrence"));
        assert_eq!(classify("Elkhart Police Department"), Some("Elkhart"));
    }

    #[test]
    fn ties_resolve_to_first_county_in_table_order() {
        assert_eq!(classify("Allen and Adams county task force"), Some("Adams"));
        // A county name inside a city name still wins.
        assert_eq!(classify("Fort Wayne Police Department"), Some("Wayne"));
    }

    #[test]
    fn unknown_places_are_unclassified() {
        assert_eq!(classify("Excise Enforcement"), None);
        assert_eq!(classify(""), None);
    }
}
