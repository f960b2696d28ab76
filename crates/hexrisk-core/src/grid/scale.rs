//! Granularity tables: scale → grid resolution, ring radius, and the
//! reference radius used for distance normalization.

use serde::{Deserialize, Serialize};

/// Spatial granularity of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridScale {
    Neighborhood,
    City,
    Region,
}

impl GridScale {
    /// Lenient label parsing: unrecognized labels resolve to City.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "neighborhood" => Self::Neighborhood,
            "region" => Self::Region,
            _ => Self::City,
        }
    }

    /// H3 resolution level. Finer granularity, higher level, smaller cells.
    pub fn resolution(self) -> u8 {
        match self {
            Self::Neighborhood => 9,
            Self::City => 7,
            Self::Region => 5,
        }
    }

    /// Ring-expansion radius around the center cell. Larger logical areas
    /// use more rings, so coarse scales still cover a comparable extent per
    /// cell count despite much larger cells.
    pub fn ring_radius(self) -> u32 {
        match self {
            Self::Neighborhood => 6,
            Self::City => 8,
            Self::Region => 10,
        }
    }

    /// Reference radius in degrees for normalizing cell-to-center distance,
    /// sized to the geographic extent of the ring expansion at this scale.
    pub fn reference_radius_deg(self) -> f64 {
        match self {
            Self::Neighborhood => 0.02,
            Self::City => 0.18,
            Self::Region => 1.6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::Region => "region",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for scale in [GridScale::Neighborhood, GridScale::City, GridScale::Region] {
            assert_eq!(GridScale::from_label(scale.label()), scale);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(GridScale::from_label("REGION"), GridScale::Region);
        assert_eq!(GridScale::from_label("  Neighborhood "), GridScale::Neighborhood);
    }

    /// Unknown labels are a policy fallback, not an error.
    #[test]
    fn unknown_labels_default_to_city() {
        assert_eq!(GridScale::from_label("galaxy"), GridScale::City);
        assert_eq!(GridScale::from_label(""), GridScale::City);
    }

    /// Finer scales use higher resolution levels and fewer rings.
    #[test]
    fn tables_are_monotonic() {
        assert!(GridScale::Neighborhood.resolution() > GridScale::City.resolution());
        assert!(GridScale::City.resolution() > GridScale::Region.resolution());
        assert!(GridScale::Neighborhood.ring_radius() < GridScale::Region.ring_radius());
        assert!(
            GridScale::Neighborhood.reference_radius_deg() < GridScale::City.reference_radius_deg()
        );
        assert!(GridScale::City.reference_radius_deg() < GridScale::Region.reference_radius_deg());
    }
}
