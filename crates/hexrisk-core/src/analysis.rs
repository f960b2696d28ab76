//! Request-scoped analysis value objects.
//!
//! Everything here is created fresh per invocation, never mutated after
//! creation, and discarded when the request completes. Serialization is
//! camelCase to match the renderer payload contract.

use serde::Serialize;

use crate::actions::ActionItem;
use crate::grid::index::GeoCoord;
use crate::grid::scale::GridScale;
use crate::tensor::ContextTensor;

/// One vertex of a cell boundary ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryPoint {
    pub lat: f64,
    pub lng: f64,
    /// Surface altitude at the vertex, metres.
    pub altitude: f64,
}

/// A single analyzed hexagonal cell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HexCell {
    /// Spatial-index string, unique for (coordinate, resolution).
    pub cell_id: String,
    pub resolution: u8,
    pub center: GeoCoord,
    /// Closed ring: first and last points equal.
    pub boundary: Vec<BoundaryPoint>,
    pub tensor: ContextTensor,
    /// At most three catalog entries, deduplicated by id.
    pub actions: Vec<ActionItem>,
}

/// Region-level reduction over all cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    /// Mean total risk over non-water cells.
    pub avg_risk: f64,
    /// Estimated residents across the grid.
    pub affected_population: u64,
    /// Indicative adaptation cost, currency units.
    pub total_cost: f64,
}

/// The aggregate root for one invocation: fully determined by its inputs,
/// never persisted by this engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridAnalysis {
    pub region_name: String,
    /// Opaque scenario label carried through as metadata.
    pub scenario: String,
    pub target_year: i32,
    pub scale: GridScale,
    pub grid_center: GeoCoord,
    pub cells: Vec<HexCell>,
    pub global_stats: GlobalStats,
}
