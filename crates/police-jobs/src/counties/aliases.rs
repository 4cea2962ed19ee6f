/// Lowercase city and town names mapped to their county. Consulted only when
/// no county name appears in the text; scanned front to back.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("indianapolis", "Marion"),
    ("fort wayne", "Allen"),
    ("evansville", "Vanderburgh"),
    ("south bend", "Saint Joseph"),
    ("carmel", "Hamilton"),
    ("fishers", "Hamilton"),
    ("bloomington", "Monroe"),
    ("lafayette", "Tippecanoe"),
    ("gary", "Lake"),
    ("hammond", "Lake"),
    ("muncie", "Delaware"),
    ("anderson", "Madison"),
    ("terre haute", "Vigo"),
    ("elkhart", "Elkhart"),
    ("kokomo", "Howard"),
    ("noblesville", "Hamilton"),
    ("greenwood", "Johnson"),
    ("michigan city", "LaPorte"),
    ("merrillville", "Lake"),
    ("lawrence", "Marion"),
    ("greenfield", "Hancock"),
    ("new albany", "Floyd"),
    ("jeffersonville", "Clark"),
    ("richmond", "Wayne"),
    ("columbus", "Bartholomew"),
    ("plainfield", "Hendricks"),
    ("kingsford heights", "LaPorte"),
    ("alexandria", "Madison"),
    ("roseland", "Saint Joseph"),
    ("monrovia", "Morgan"),
    ("eaton", "Delaware"),
    ("frankfort", "Clinton"),
    ("mccordsville", "Hancock"),
    ("shelbyville", "Shelby"),
    ("scottsburg", "Scott"),
    ("sweetser", "Grant"),
    ("lebanon", "Boone"),
    ("rochester", "Fulton"),
    ("waterloo", "DeKalb"),
    ("cumberland", "Marion"),
    ("brazil", "Clay"),
    ("fortville", "Hancock"),
    ("dyer", "Lake"),
    ("dunkirk", "Jay"),
    ("princeton", "Gibson"),
    ("portland", "Jay"),
    ("montpelier", "Blackford"),
    ("homecroft", "Marion"),
    ("jonesboro", "Grant"),
    ("westville", "LaPorte"),
    ("valparaiso", "Porter"),
    ("warsaw", "Kosciusko"),
    ("hartford city", "Blackford"),
    ("logansport", "Cass"),
    ("mount vernon", "Posey"),
    ("boone", "Boone"),
    ("grant", "Grant"),
    ("monroe", "Monroe"),
    ("tippecanoe", "Tippecanoe"),
    ("frankton", "Madison"),
    ("west lafayette", "Tippecanoe"),
    ("gibson", "Gibson"),
    ("wayne", "Wayne"),
    ("starke", "Starke"),
    ("whitley", "Whitley"),
    ("steuben", "Steuben"),
];
