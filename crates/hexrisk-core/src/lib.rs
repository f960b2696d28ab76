//! Hexagonal geospatial context-tensor and risk-tessellation engine.
//!
//! Given a region name, a planning horizon, and a spatial granularity, the
//! engine covers the region with a bounded set of H3 hexagons, synthesizes a
//! deterministic context tensor per cell from procedural functions of its
//! coordinates, derives a composite risk score, recommends actions from a
//! static catalog, and reduces everything into a region-level analysis that
//! a host process hands to its renderer.
//!
//! Pipeline:
//!   grid generation → per-cell {boundary, tensor, scores, actions} →
//!   aggregation → {summary to caller, `GridAnalysis` to renderer sink}.
//!
//! Each invocation is synchronous and operates only on request-local data;
//! per-cell work is argument-only pure. Enable the `threading` feature to
//! parallelize the per-cell map with rayon.

pub mod actions;
pub mod aggregate;
pub mod analysis;
pub mod engine;
pub mod grid;
pub mod noise;
pub mod risk;
pub mod tensor;

pub use actions::{ActionCategory, ActionItem, Timeline, CATALOG_VERSION};
pub use analysis::{BoundaryPoint, GlobalStats, GridAnalysis, HexCell};
pub use engine::{AnalyzeRequest, ContextEngine, RenderPayload, RenderSink};
pub use grid::index::{GeoCoord, GridError, H3Grid, SpatialIndex};
pub use grid::scale::GridScale;
pub use tensor::{ContextTensor, LandUse};
