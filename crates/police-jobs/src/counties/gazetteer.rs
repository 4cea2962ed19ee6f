/// A county centroid used to place map markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct County {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// The 92 Indiana counties in alphabetical order. Classification scans this
/// table front to back, so order decides ties.
pub const COUNTIES: &[County] = &[
    County { name: "Adams", latitude: 40.8372, longitude: -84.9338 },
    County { name: "Allen", latitude: 41.0907, longitude: -85.0667 },
    County { name: "Bartholomew", latitude: 39.2017, longitude: -85.8975 },
    County { name: "Benton", latitude: 40.6064, longitude: -87.3108 },
    County { name: "Blackford", latitude: 40.4736, longitude: -85.3247 },
    County { name: "Boone", latitude: 40.0506, longitude: -86.4686 },
    County { name: "Brown", latitude: 39.1961, longitude: -86.2275 },
    County { name: "Carroll", latitude: 40.5828, longitude: -86.5625 },
    County { name: "Cass", latitude: 40.7614, longitude: -86.3461 },
    County { name: "Clark", latitude: 38.4772, longitude: -85.7072 },
    County { name: "Clay", latitude: 39.4167, longitude: -87.1167 },
    County { name: "Clinton", latitude: 40.3017, longitude: -86.4750 },
    County { name: "Crawford", latitude: 38.2917, longitude: -86.4583 },
    County { name: "Daviess", latitude: 38.7000, longitude: -87.0833 },
    County { name: "Dearborn", latitude: 39.1458, longitude: -84.9722 },
    County { name: "Decatur", latitude: 39.3083, longitude: -85.5000 },
    County { name: "DeKalb", latitude: 41.3972, longitude: -85.0000 },
    County { name: "Delaware", latitude: 40.2278, longitude: -85.3972 },
    County { name: "Dubois", latitude: 38.3625, longitude: -86.8792 },
    County { name: "Elkhart", latitude: 41.5972, longitude: -85.8583 },
    County { name: "Fayette", latitude: 39.6417, longitude: -85.1792 },
    County { name: "Floyd", latitude: 38.3208, longitude: -85.9042 },
    County { name: "Fountain", latitude: 40.1208, longitude: -87.2417 },
    County { name: "Franklin", latitude: 39.4167, longitude: -85.0583 },
    County { name: "Fulton", latitude: 41.0472, longitude: -86.2639 },
    County { name: "Gibson", latitude: 38.3125, longitude: -87.5833 },
    County { name: "Grant", latitude: 40.5153, longitude: -85.6542 },
    County { name: "Greene", latitude: 39.0375, longitude: -86.9625 },
    County { name: "Hamilton", latitude: 40.0736, longitude: -86.0514 },
    County { name: "Hancock", latitude: 39.8236, longitude: -85.7736 },
    County { name: "Harrison", latitude: 38.1958, longitude: -86.1208 },
    County { name: "Hendricks", latitude: 39.7694, longitude: -86.5097 },
    County { name: "Henry", latitude: 39.9306, longitude: -85.3969 },
    County { name: "Howard", latitude: 40.4833, longitude: -86.1167 },
    County { name: "Huntington", latitude: 40.8292, longitude: -85.4972 },
    County { name: "Jackson", latitude: 38.9083, longitude: -86.0375 },
    County { name: "Jasper", latitude: 41.0236, longitude: -87.1167 },
    County { name: "Jay", latitude: 40.4375, longitude: -85.0042 },
    County { name: "Jefferson", latitude: 38.7875, longitude: -85.4375 },
    County { name: "Jennings", latitude: 38.9958, longitude: -85.6292 },
    County { name: "Johnson", latitude: 39.4903, longitude: -86.1014 },
    County { name: "Knox", latitude: 38.6875, longitude: -87.4125 },
    County { name: "Kosciusko", latitude: 41.2444, longitude: -85.8606 },
    County { name: "LaGrange", latitude: 41.6425, longitude: -85.4264 },
    County { name: "Lake", latitude: 41.4167, longitude: -87.3833 },
    County { name: "LaPorte", latitude: 41.5467, longitude: -86.7222 },
    County { name: "Lawrence", latitude: 38.8417, longitude: -86.4833 },
    County { name: "Madison", latitude: 40.1611, longitude: -85.7194 },
    County { name: "Marion", latitude: 39.7817, longitude: -86.1386 },
    County { name: "Marshall", latitude: 41.3247, longitude: -86.2611 },
    County { name: "Martin", latitude: 38.7083, longitude: -86.8042 },
    County { name: "Miami", latitude: 40.7694, longitude: -86.0458 },
    County { name: "Monroe", latitude: 39.1606, longitude: -86.5231 },
    County { name: "Montgomery", latitude: 40.0403, longitude: -86.8931 },
    County { name: "Morgan", latitude: 39.4819, longitude: -86.4469 },
    County { name: "Newton", latitude: 40.9556, longitude: -87.3972 },
    County { name: "Noble", latitude: 41.3986, longitude: -85.4175 },
    County { name: "Ohio", latitude: 38.9500, longitude: -84.9667 },
    County { name: "Orange", latitude: 38.5417, longitude: -86.4958 },
    County { name: "Owen", latitude: 39.3125, longitude: -86.8375 },
    County { name: "Parke", latitude: 39.7736, longitude: -87.2069 },
    County { name: "Perry", latitude: 38.0792, longitude: -86.6375 },
    County { name: "Pike", latitude: 38.4000, longitude: -87.2333 },
    County { name: "Porter", latitude: 41.4606, longitude: -87.0681 },
    County { name: "Posey", latitude: 38.0208, longitude: -87.7833 },
    County { name: "Pulaski", latitude: 41.0417, longitude: -86.6958 },
    County { name: "Putnam", latitude: 39.6667, longitude: -86.8417 },
    County { name: "Randolph", latitude: 40.1575, longitude: -85.0111 },
    County { name: "Ripley", latitude: 39.1042, longitude: -85.2625 },
    County { name: "Rush", latitude: 39.6208, longitude: -85.4667 },
    County { name: "Saint Joseph", latitude: 41.6181, longitude: -86.2903 },
    County { name: "Scott", latitude: 38.6833, longitude: -85.7458 },
    County { name: "Shelby", latitude: 39.5208, longitude: -85.7917 },
    County { name: "Spencer", latitude: 37.9167, longitude: -87.0083 },
    County { name: "Starke", latitude: 41.2786, longitude: -86.6472 },
    County { name: "Steuben", latitude: 41.6431, longitude: -85.0000 },
    County { name: "Sullivan", latitude: 39.0875, longitude: -87.4125 },
    County { name: "Switzerland", latitude: 38.8250, longitude: -85.0375 },
    County { name: "Tippecanoe", latitude: 40.3889, longitude: -86.8931 },
    County { name: "Tipton", latitude: 40.3111, longitude: -86.0514 },
    County { name: "Union", latitude: 39.6250, longitude: -84.9250 },
    County { name: "Vanderburgh", latitude: 38.0250, longitude: -87.5875 },
    County { name: "Vermillion", latitude: 39.8542, longitude: -87.4625 },
    County { name: "Vigo", latitude: 39.4306, longitude: -87.3897 },
    County { name: "Wabash", latitude: 40.8458, longitude: -85.7944 },
    County { name: "Warren", latitude: 40.3472, longitude: -87.3536 },
    County { name: "Warrick", latitude: 38.0917, longitude: -87.2708 },
    County { name: "Washington", latitude: 38.6000, longitude: -86.1042 },
    County { name: "Wayne", latitude: 39.8647, longitude: -85.0097 },
    County { name: "Wells", latitude: 40.7292, longitude: -85.2208 },
    County { name: "White", latitude: 40.7500, longitude: -86.8667 },
    County { name: "Whitley", latitude: 41.1397, longitude: -85.4986 },
];

pub fn county_named(name: &str) -> Option<&'static County> {
    COUNTIES.iter().find(|county| county.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gazetteer_lists_every_county_once() {
        assert_eq!(COUNTIES.len(), 92);
        let mut names: Vec<&str> = COUNTIES.iter().map(|county| county.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 92);
    }

    #[test]
    fn coordinates_fall_inside_indiana() {
        for county in COUNTIES {
            assert!(
                (37.7..=41.8).contains(&county.latitude),
                "{} latitude out of range",
                county.name
            );
            assert!(
                (-88.1..=-84.7).contains(&county.longitude),
                "{} longitude out of range",
                county.name
            );
        }
    }

    #[test]
    fn looks_up_by_exact_name() {
        let marion = county_named("Marion").expect("marion present");
        assert_eq!(marion.latitude, 39.7817);
        assert!(county_named("marion").is_none());
    }
}
