//! Region-level aggregation and the caller-facing summary string.

use crate::analysis::{GlobalStats, GridAnalysis, HexCell};
use crate::risk::{RiskBand, WATERBODY_RISK};
use crate::tensor::LandUse;

/// Residents represented by one point of population-density index.
const POPULATION_PER_INDEX_POINT: f64 = 100.0;
/// Currency units of indicative cost per point of total risk.
const COST_PER_RISK_POINT: f64 = 1000.0;
/// Cells above this total risk count as hotspots in the summary.
const HOTSPOT_CUTOFF: f64 = 75.0;

/// Reduce all cells into region-level statistics.
///
/// Water cells are excluded from the risk mean entirely (an all-water grid
/// reports the open-water floor) but still contribute to the population and
/// cost sums.
pub fn global_stats(cells: &[HexCell]) -> GlobalStats {
    let mut land_risk_sum = 0.0;
    let mut land_count = 0usize;
    let mut population = 0.0;
    let mut cost = 0.0;

    for cell in cells {
        let tensor = &cell.tensor;
        if tensor.dimensions.geography.land_use != LandUse::Waterbody {
            land_risk_sum += tensor.scores.total_risk;
            land_count += 1;
        }
        population += tensor.dimensions.socioeconomic.population_density * POPULATION_PER_INDEX_POINT;
        cost += tensor.scores.total_risk * COST_PER_RISK_POINT;
    }

    let avg_risk = if land_count == 0 {
        WATERBODY_RISK
    } else {
        land_risk_sum / land_count as f64
    };

    GlobalStats {
        avg_risk,
        affected_population: population.floor() as u64,
        total_cost: cost,
    }
}

/// Majority land use over non-water cells; Waterbody when no land exists.
/// Ties resolve to the earlier class in Urban, Suburban, Rural order.
pub fn dominant_land_use(cells: &[HexCell]) -> LandUse {
    let order = [LandUse::Urban, LandUse::Suburban, LandUse::Rural];
    let mut counts = [0usize; 3];
    for cell in cells {
        match cell.tensor.dimensions.geography.land_use {
            LandUse::Urban => counts[0] += 1,
            LandUse::Suburban => counts[1] += 1,
            LandUse::Rural => counts[2] += 1,
            LandUse::Waterbody => {}
        }
    }
    if counts.iter().all(|&c| c == 0) {
        return LandUse::Waterbody;
    }
    let mut best = 0;
    for i in 1..counts.len() {
        if counts[i] > counts[best] {
            best = i;
        }
    }
    order[best]
}

/// Compose the caller-facing summary for a finished analysis.
pub fn summarize(analysis: &GridAnalysis, year_offset: i32) -> String {
    let stats = &analysis.global_stats;
    let hotspots = analysis
        .cells
        .iter()
        .filter(|c| c.tensor.scores.total_risk > HOTSPOT_CUTOFF)
        .count();
    let dominant = dominant_land_use(&analysis.cells);
    let band = RiskBand::from_score(stats.avg_risk);

    format!(
        "{region} ({scenario}, +{offset} yr to {year}): {cells} cells at {scale} scale. \
         Mean land risk {avg:.1}/100 ({band}), {hotspots} hotspot cells above {cutoff:.0}. \
         Dominant land use: {dominant}. Affected population approx. {population}, \
         indicative adaptation cost {cost:.0} currency units.",
        region = analysis.region_name,
        scenario = analysis.scenario,
        offset = year_offset,
        year = analysis.target_year,
        cells = analysis.cells.len(),
        scale = analysis.scale.label(),
        avg = stats.avg_risk,
        band = band.as_str(),
        hotspots = hotspots,
        cutoff = HOTSPOT_CUTOFF,
        dominant = dominant.as_str(),
        population = stats.affected_population,
        cost = stats.total_cost,
    )
}
