/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of days in the leap-adjusted year. Dec 31 is always day 366.
pub const DAYS_IN_YEAR: u16 = 366;

/// Leap year used to place month/day pairs on the 366-day calendar.
pub const LEAP_REFERENCE_YEAR: i32 = 2000;

/// Sentinel code for "no breeding evidence".
pub const DEFAULT_NO_CODE: &str = "NC";

/// Fly-over code, carved out of the core-breeding rules.
pub const DEFAULT_FLYOVER_CODE: &str = "F";

/// Escalation requires the group maximum to rank strictly above this code.
pub const DEFAULT_ESCALATION_THRESHOLD: &str = "B";

/// Possible-tier codes of the standard ladder, low to high.
pub const STANDARD_POSSIBLE_CODES: &[&str] = &["F", "H", "S"];

/// Probable-tier codes of the standard ladder, low to high.
pub const STANDARD_PROBABLE_CODES: &[&str] = &["S7", "M", "P", "T", "C", "N", "A", "B"];

/// Confirmed-tier codes of the standard ladder, low to high.
pub const STANDARD_CONFIRMED_CODES: &[&str] = &[
    "PE", "CN", "NB", "DD", "UN", "ON", "FL", "CF", "FY", "FS", "NE", "NY",
];

/// Species covered by the early-season vulture carve-out.
pub const VULTURE_SPECIES: &[&str] = &["Black Vulture", "Turkey Vulture"];

/// The probable-tier code the vulture carve-out applies to.
pub const VULTURE_EARLY_SEASON_CODE: &str = "N";
