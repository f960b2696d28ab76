//! Risk scoring: hazard, exposure, and vulnerability composition.
//!
//! Kept separable from tensor synthesis so stored dimensions can be
//! re-scored without resynthesizing geography. All factors live on a 0-100
//! scale; the composite follows a compound power law over their product.

use serde::Serialize;

use crate::tensor::{Dimensions, LandUse};

/// Fixed hazard baseline before situational bonuses.
const HAZARD_BASELINE: f64 = 30.0;
/// Hazard bonus for open-water cells.
const WATER_HAZARD_BONUS: f64 = 25.0;
/// Hazard bonus for urban cells.
const URBAN_HAZARD_BONUS: f64 = 15.0;
/// Hazard bonus inside the tropical belt.
const TROPICAL_HAZARD_BONUS: f64 = 20.0;
/// Edge of the tropical belt, degrees of absolute latitude.
const TROPIC_LAT_DEG: f64 = 23.5;

/// Normalization for the hazard x exposure x vulnerability product.
/// Calibrated so dense tropical urban cells clear the high-risk cutoffs
/// while the clamp at 100 only engages at the extreme corner of the range.
const RISK_NORM: f64 = 350_000.0;
const RISK_EXPONENT: f64 = 0.7;

/// Fixed score assigned to open-water cells regardless of the raw product.
pub const WATERBODY_RISK: f64 = 5.0;

/// Derived risk scores for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub hazard: f64,
    pub exposure: f64,
    pub vulnerability: f64,
    /// Composite score in [0, 100].
    pub total_risk: f64,
}

/// Qualitative band over a 0-100 risk score, for summary labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            Self::Low
        } else if score < 50.0 {
            Self::Moderate
        } else if score < 75.0 {
            Self::High
        } else {
            Self::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Score a tensor's dimensions.
///
/// `lat_deg` is the cell's latitude, passed separately because the
/// dimensions record carries no coordinate.
pub fn score_dimensions(dims: &Dimensions, lat_deg: f64) -> RiskScores {
    let geo = &dims.geography;

    let mut hazard = HAZARD_BASELINE;
    if geo.is_water_body {
        hazard += WATER_HAZARD_BONUS;
    }
    if geo.land_use == LandUse::Urban {
        hazard += URBAN_HAZARD_BONUS;
    }
    if lat_deg.abs() < TROPIC_LAT_DEG {
        hazard += TROPICAL_HAZARD_BONUS;
    }

    let infrastructure = (dims.infrastructure.road_density + dims.infrastructure.water_access) / 2.0;
    let exposure = (dims.socioeconomic.population_density + infrastructure) / 2.0;
    let vulnerability = (100.0 - 0.8 * infrastructure).max(0.0);

    let raw = ((hazard * exposure * vulnerability) / RISK_NORM).powf(RISK_EXPONENT) * 100.0;
    // Open water overrides the raw product outright.
    let total_risk = if geo.is_water_body {
        WATERBODY_RISK
    } else {
        raw.min(100.0)
    };

    RiskScores {
        hazard,
        exposure,
        vulnerability,
        total_risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tensor::{
        ClimateDims, GeographyDims, InfrastructureDims, SocioeconomicDims, VulnerabilityDims,
    };

    fn dims(
        land_use: LandUse,
        population_density: f64,
        road_density: f64,
        water_access: f64,
    ) -> Dimensions {
        Dimensions {
            climate: ClimateDims {
                temperature: 27.0,
                precipitation: 1500.0,
                extreme_event_index: 50.0,
            },
            geography: GeographyDims {
                elevation: 40.0,
                land_use,
                is_coastal: false,
                is_water_body: land_use == LandUse::Waterbody,
            },
            socioeconomic: SocioeconomicDims {
                population_density,
                economic_index: 50.0,
            },
            infrastructure: InfrastructureDims {
                road_density,
                water_access,
            },
            vulnerability: VulnerabilityDims {
                social_index: 50.0,
                governance_index: 50.0,
            },
        }
    }

    /// Water cells get the override no matter how severe the raw inputs.
    #[test]
    fn waterbody_override_is_fixed() {
        let low = score_dimensions(&dims(LandUse::Waterbody, 0.0, 0.0, 0.0), -6.0);
        let high = score_dimensions(&dims(LandUse::Waterbody, 100.0, 10.0, 10.0), -6.0);
        assert_eq!(low.total_risk, WATERBODY_RISK);
        assert_eq!(high.total_risk, WATERBODY_RISK);
    }

    /// Total risk stays inside [0, 100] across the whole input grid.
    #[test]
    fn total_risk_bounded() {
        for land_use in [LandUse::Urban, LandUse::Suburban, LandUse::Rural, LandUse::Waterbody] {
            for pop in [0.0, 25.0, 50.0, 75.0, 100.0] {
                for infra in [0.0, 25.0, 50.0, 75.0, 100.0] {
                    for lat in [-70.0, -6.2, 0.0, 23.4, 23.6, 51.5] {
                        let s = score_dimensions(&dims(land_use, pop, infra, infra), lat);
                        assert!(
                            (0.0..=100.0).contains(&s.total_risk),
                            "total {} out of range for pop={pop} infra={infra} lat={lat}",
                            s.total_risk
                        );
                    }
                }
            }
        }
    }

    /// Dense tropical urban cells with strained infrastructure cross the
    /// defensive-action cutoff; remote temperate rural cells stay low.
    #[test]
    fn spread_covers_both_sides_of_high_risk_cutoff() {
        let hot = score_dimensions(&dims(LandUse::Urban, 100.0, 58.0, 68.0), -6.2);
        assert!(
            hot.total_risk > 75.0,
            "dense tropical urban cell scored {:.1}",
            hot.total_risk
        );

        let quiet = score_dimensions(&dims(LandUse::Rural, 5.0, 20.0, 30.0), 48.0);
        assert!(
            quiet.total_risk < 30.0,
            "remote temperate rural cell scored {:.1}",
            quiet.total_risk
        );
    }

    #[test]
    fn tropical_bonus_applies_inside_belt_only() {
        let d = dims(LandUse::Suburban, 50.0, 60.0, 70.0);
        let tropical = score_dimensions(&d, 10.0);
        let temperate = score_dimensions(&d, 40.0);
        assert_eq!(tropical.hazard - temperate.hazard, TROPICAL_HAZARD_BONUS);
    }

    #[test]
    fn exposure_is_mean_of_population_and_infrastructure() {
        let s = score_dimensions(&dims(LandUse::Suburban, 40.0, 60.0, 80.0), 40.0);
        // infrastructure quality = (60 + 80) / 2 = 70; exposure = (40 + 70) / 2.
        assert_eq!(s.exposure, 55.0);
        assert_eq!(s.vulnerability, 100.0 - 0.8 * 70.0);
    }

    /// Vulnerability clamps at zero even for out-of-range infrastructure.
    #[test]
    fn vulnerability_never_negative() {
        let s = score_dimensions(&dims(LandUse::Urban, 50.0, 150.0, 150.0), 0.0);
        assert_eq!(s.vulnerability, 0.0);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(RiskBand::from_score(10.0), RiskBand::Low);
        assert_eq!(RiskBand::from_score(25.0), RiskBand::Moderate);
        assert_eq!(RiskBand::from_score(60.0), RiskBand::High);
        assert_eq!(RiskBand::from_score(80.0), RiskBand::Critical);
        assert_eq!(RiskBand::Critical.as_str(), "critical");
    }
}
