//! Country-code driven display conventions.
//!
//! Every lookup is a case-insensitive membership test against a fixed set of
//! ISO 3166-1 alpha-2 codes. Unknown or empty codes belong to no set, which
//! makes metric units, Celsius and the 24-hour clock the fallback.

const FAHRENHEIT_COUNTRIES: &[&str] = &[
    "BS", // Bahamas
    "BZ", // Belize
    "KY", // Cayman Islands
    "PW", // Palau
    "US", // United States
    "FM", // Micronesia
    "MH", // Marshall Islands
    "LR", // Liberia
];

const IMPERIAL_COUNTRIES: &[&str] = &[
    "LR", // Liberia
    "MM", // Myanmar
    "US", // United States
];

const AM_PM_COUNTRIES: &[&str] = &[
    "US", // United States
    "PH", // Philippines
    "CA", // Canada
    "GB", // United Kingdom
];

fn contains(set: &[&str], country_code: &str) -> bool {
    let code = country_code.trim();
    set.iter().any(|c| c.eq_ignore_ascii_case(code))
}

/// Whether the country reports temperatures in Fahrenheit.
pub fn uses_fahrenheit(country_code: &str) -> bool {
    contains(FAHRENHEIT_COUNTRIES, country_code)
}

/// Whether the country measures wind speed and precipitation in imperial units.
pub fn uses_imperial(country_code: &str) -> bool {
    contains(IMPERIAL_COUNTRIES, country_code)
}

/// Whether the country writes clock times with an AM/PM suffix.
pub fn uses_am_pm(country_code: &str) -> bool {
    contains(AM_PM_COUNTRIES, country_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn united_states_uses_every_customary_convention() {
        assert!(uses_fahrenheit("US"));
        assert!(uses_imperial("US"));
        assert!(uses_am_pm("US"));
    }

    #[test]
    fn sets_are_independent() {
        // Belize: Fahrenheit, but metric wind and rain.
        assert!(uses_fahrenheit("BZ"));
        assert!(!uses_imperial("BZ"));

        // Myanmar: imperial, but Celsius.
        assert!(uses_imperial("MM"));
        assert!(!uses_fahrenheit("MM"));

        assert!(uses_am_pm("GB"));
        assert!(!uses_fahrenheit("GB"));
    }

    #[test]
    fn unknown_or_empty_code_matches_nothing() {
        for code in ["", "DE", "XX", "USA"] {
            assert!(!uses_fahrenheit(code), "{code}");
            assert!(!uses_imperial(code), "{code}");
            assert!(!uses_am_pm(code), "{code}");
        }
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert!(uses_fahrenheit("us"));
        assert!(uses_am_pm(" ph "));
    }
}
