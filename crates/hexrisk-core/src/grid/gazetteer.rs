//! Known-location table and region-name resolution.
//!
//! Resolution always succeeds: a name that matches no table entry resolves
//! to the default coordinate. First table hit wins, so ordering is part of
//! the contract.

/// (lowercase key, lat, lng) for the fixed set of known locations.
const KNOWN_LOCATIONS: &[(&str, f64, f64)] = &[
    ("jakarta", -6.2088, 106.8456),
    ("singapore", 1.3521, 103.8198),
    ("bangkok", 13.7563, 100.5018),
    ("manila", 14.5995, 120.9842),
    ("ho chi minh", 10.8231, 106.6297),
    ("dhaka", 23.8103, 90.4125),
    ("mumbai", 19.0760, 72.8777),
    ("chennai", 13.0827, 80.2707),
    ("karachi", 24.8607, 67.0011),
    ("lagos", 6.5244, 3.3792),
    ("cairo", 30.0444, 31.2357),
    ("nairobi", -1.2921, 36.8219),
    ("miami", 25.7617, -80.1918),
    ("new orleans", 29.9511, -90.0715),
    ("new york", 40.7128, -74.0060),
    ("rotterdam", 51.9244, 4.4777),
    ("london", 51.5074, -0.1278),
    ("tokyo", 35.6762, 139.6503),
    ("shanghai", 31.2304, 121.4737),
];

/// Fallback center for unresolvable names.
pub const DEFAULT_CENTER: (f64, f64) = (-6.2088, 106.8456);

/// Resolve a free-text region name to a center coordinate.
///
/// Case-insensitive substring match against the table; unmatched or empty
/// names fall back to `DEFAULT_CENTER`.
pub fn resolve_region(name: &str) -> (f64, f64) {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return DEFAULT_CENTER;
    }
    for &(key, lat, lng) in KNOWN_LOCATIONS {
        if query.contains(key) {
            return (lat, lng);
        }
    }
    DEFAULT_CENTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_resolves() {
        let (lat, lng) = resolve_region("Jakarta");
        assert!((lat - -6.2088).abs() < 1e-9);
        assert!((lng - 106.8456).abs() < 1e-9);
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(resolve_region("TOKYO"), resolve_region("tokyo"));
    }

    #[test]
    fn substring_in_longer_name_resolves() {
        assert_eq!(resolve_region("Metro Manila, Philippines"), (14.5995, 120.9842));
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        assert_eq!(resolve_region("Atlantis Prime"), DEFAULT_CENTER);
    }

    #[test]
    fn empty_and_whitespace_fall_back_to_default() {
        assert_eq!(resolve_region(""), DEFAULT_CENTER);
        assert_eq!(resolve_region("   "), DEFAULT_CENTER);
    }
}
