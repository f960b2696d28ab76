//! Context tensor synthesis: the per-cell procedural model.
//!
//! Pure function of (cell center, grid center, scale). Two independently
//! seeded noise signals drive everything: a terrain field that separates
//! water from land and shapes elevation and precipitation, and a settlement
//! density field that, pulled toward the grid center, drives land-use
//! classification and the socioeconomic baselines. Identical inputs produce
//! bit-identical tensors.
//!
//! When a real upstream data provider is wired in, its per-cell values must
//! be fully resolved before scoring runs for that cell; on absence or
//! failure, the procedural model below is the fallback path.

use serde::Serialize;

use crate::grid::index::GeoCoord;
use crate::grid::scale::GridScale;
use crate::noise::Fbm;
use crate::risk::{self, RiskScores};

// ── Procedural model constants ───────────────────────────────────────────

/// Lattice frequency for both noise signals, cells per degree.
const NOISE_FREQ: f64 = 48.0;
/// Terrain field seed.
const TERRAIN_SEED: u32 = 0x5445_5252;
/// Settlement density field seed.
const DENSITY_SEED: u32 = 0x4445_4E53;
const TERRAIN_OCTAVES: u32 = 4;
const DENSITY_OCTAVES: u32 = 3;

/// Terrain values below this classify as open water.
const WATER_THRESHOLD: f64 = 0.30;
/// Terrain band just above the water threshold counts as coastal.
const COASTAL_BAND: f64 = 0.08;
/// Metres of elevation per unit of terrain value above the water threshold.
const ELEVATION_SCALE_M: f64 = 900.0;

/// Urbanization probability cut points.
const URBAN_CUT: f64 = 0.60;
const SUBURBAN_CUT: f64 = 0.42;

/// Urban heat-island adjustment, degrees C.
const HEAT_ISLAND_C: f64 = 2.5;

// ── Tensor types ─────────────────────────────────────────────────────────

/// Land-use classification of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LandUse {
    Urban,
    Suburban,
    Rural,
    Waterbody,
}

impl LandUse {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Urban => "urban",
            Self::Suburban => "suburban",
            Self::Rural => "rural",
            Self::Waterbody => "waterbody",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateDims {
    /// Near-surface air temperature, degrees C.
    pub temperature: f64,
    /// Mean annual precipitation, mm/yr.
    pub precipitation: f64,
    /// Composite extreme-event index, 0-100.
    pub extreme_event_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographyDims {
    /// Surface elevation, metres; open water sits at 0.
    pub elevation: f64,
    pub land_use: LandUse,
    pub is_coastal: bool,
    pub is_water_body: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocioeconomicDims {
    /// Relative density index, 0-100.
    pub population_density: f64,
    /// Relative economic activity index, 0-100.
    pub economic_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureDims {
    /// Road network coverage index, 0-100.
    pub road_density: f64,
    /// Piped/treated water access index, 0-100.
    pub water_access: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityDims {
    /// Social vulnerability index, 0-100.
    pub social_index: f64,
    /// Governance capacity index, 0-100.
    pub governance_index: f64,
}

/// The five named dimensions of a cell's context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    pub climate: ClimateDims,
    pub geography: GeographyDims,
    pub socioeconomic: SocioeconomicDims,
    pub infrastructure: InfrastructureDims,
    pub vulnerability: VulnerabilityDims,
}

/// Full per-cell context: dimensions plus derived risk scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextTensor {
    pub dimensions: Dimensions,
    pub scores: RiskScores,
}

// ── Procedural signals ───────────────────────────────────────────────────

/// Terrain field value in [0, 1] at a coordinate.
fn terrain_value(lat: f64, lng: f64) -> f64 {
    Fbm::new(TERRAIN_SEED, TERRAIN_OCTAVES).sample(lat * NOISE_FREQ, lng * NOISE_FREQ)
}

/// Settlement density field value in [0, 1] at a coordinate.
fn density_value(lat: f64, lng: f64) -> f64 {
    Fbm::new(DENSITY_SEED, DENSITY_OCTAVES).sample(lat * NOISE_FREQ, lng * NOISE_FREQ)
}

/// Surface elevation in metres at a coordinate; open water sits at 0.
/// Shared by cell geography and boundary-vertex altitudes so both come
/// from one surface.
pub fn surface_elevation_m(lat: f64, lng: f64) -> f64 {
    let terrain = terrain_value(lat, lng);
    if terrain < WATER_THRESHOLD {
        0.0
    } else {
        (terrain - WATER_THRESHOLD) * ELEVATION_SCALE_M
    }
}

/// Euclidean distance from the grid center in degrees, normalized by the
/// scale's reference radius and clamped to [0, 1].
fn normalized_distance(cell: GeoCoord, center: GeoCoord, scale: GridScale) -> f64 {
    let dx = cell.lng - center.lng;
    let dy = cell.lat - center.lat;
    ((dx * dx + dy * dy).sqrt() / scale.reference_radius_deg()).clamp(0.0, 1.0)
}

/// Land-use classification from the two raw signals. Water wins outright;
/// land splits on the urbanization probability at two fixed cut points.
pub(crate) fn classify_land_use(terrain: f64, urban_probability: f64) -> LandUse {
    if terrain < WATER_THRESHOLD {
        LandUse::Waterbody
    } else if urban_probability > URBAN_CUT {
        LandUse::Urban
    } else if urban_probability > SUBURBAN_CUT {
        LandUse::Suburban
    } else {
        LandUse::Rural
    }
}

// ── Synthesis ────────────────────────────────────────────────────────────

/// Synthesize the full context tensor for one cell.
pub fn synthesize_tensor(cell: GeoCoord, grid_center: GeoCoord, scale: GridScale) -> ContextTensor {
    let distance = normalized_distance(cell, grid_center, scale);
    let terrain = terrain_value(cell.lat, cell.lng);
    let density = density_value(cell.lat, cell.lng);

    // Urbanization probability: settlement noise pulled toward the core.
    let urban_probability = 0.45 * density + 0.55 * (1.0 - distance);
    let land_use = classify_land_use(terrain, urban_probability);
    let is_water = land_use == LandUse::Waterbody;
    let is_coastal = !is_water && terrain < WATER_THRESHOLD + COASTAL_BAND;

    let elevation = if is_water {
        0.0
    } else {
        (terrain - WATER_THRESHOLD) * ELEVATION_SCALE_M
    };

    // Latitude-banded climate baseline: tropics near 30 C, poles far below
    // freezing, with the urban heat island on top.
    let lat_abs = cell.lat.abs();
    let mut temperature = 30.0 - lat_abs * 0.55;
    if land_use == LandUse::Urban {
        temperature += HEAT_ISLAND_C;
    }
    let precipitation = 400.0 + terrain * 1600.0;
    let extreme_event_index = ((1.0 - lat_abs / 90.0) * 55.0
        + terrain * 25.0
        + if is_coastal { 20.0 } else { 0.0 })
    .clamp(0.0, 100.0);

    // Per-class baselines perturbed by the density signal. Built-up classes
    // strain per-capita infrastructure as density rises; rural access
    // improves with settlement intensity. Open water carries no population
    // and no infrastructure.
    let (population_density, economic_index, road_density, water_access) = match land_use {
        LandUse::Urban => (
            68.0 + 32.0 * density,
            60.0 + 30.0 * density,
            88.0 - 30.0 * density,
            92.0 - 24.0 * density,
        ),
        LandUse::Suburban => (
            40.0 + 25.0 * density,
            48.0 + 24.0 * density,
            65.0 - 20.0 * density,
            75.0 - 20.0 * density,
        ),
        LandUse::Rural => (
            5.0 + 20.0 * density,
            28.0 + 24.0 * density,
            20.0 + 30.0 * density,
            30.0 + 30.0 * density,
        ),
        LandUse::Waterbody => (0.0, 0.0, 0.0, 0.0),
    };

    let social_index = (90.0 - economic_index * 0.6).clamp(0.0, 100.0);
    let governance_index = (30.0 + economic_index * 0.55).clamp(0.0, 100.0);

    let dimensions = Dimensions {
        climate: ClimateDims {
            temperature,
            precipitation,
            extreme_event_index,
        },
        geography: GeographyDims {
            elevation,
            land_use,
            is_coastal,
            is_water_body: is_water,
        },
        socioeconomic: SocioeconomicDims {
            population_density,
            economic_index,
        },
        infrastructure: InfrastructureDims {
            road_density,
            water_access,
        },
        vulnerability: VulnerabilityDims {
            social_index,
            governance_index,
        },
    };

    let scores = risk::score_dimensions(&dimensions, cell.lat);
    ContextTensor { dimensions, scores }
}
