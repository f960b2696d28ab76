//! Invocation interface: typed request in, summary plus renderer dispatch out.
//!
//! The host process registers a `RenderSink`, then calls `analyze` per
//! request. Each invocation is self-contained: nothing is shared or mutated
//! across calls, so aborting mid-computation leaves nothing to clean up.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "threading")]
use rayon::prelude::*;

use crate::actions;
use crate::aggregate;
use crate::analysis::{BoundaryPoint, GridAnalysis, HexCell};
use crate::grid::index::{GeoCoord, GridError, H3Grid, SpatialIndex};
use crate::grid::scale::GridScale;
use crate::grid::{self, CellSeed};
use crate::tensor;

/// Typed parameters for one analysis invocation.
///
/// Every field except the region name has a default, and unknown scale
/// labels resolve to city, so any deserialized request is analyzable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub region_name: String,
    /// Planning horizon in years.
    #[serde(default = "default_year_offset")]
    pub year_offset: i32,
    /// Opaque scenario label, carried through as metadata.
    #[serde(default = "default_scenario")]
    pub scenario: String,
    /// Granularity label: neighborhood, city, or region.
    #[serde(default = "default_scale")]
    pub scale: String,
}

fn default_year_offset() -> i32 {
    5
}

fn default_scenario() -> String {
    "SSP2-4.5".to_owned()
}

fn default_scale() -> String {
    "city".to_owned()
}

impl AnalyzeRequest {
    /// Request for `region_name` with all defaults.
    pub fn new(region_name: impl Into<String>) -> Self {
        Self {
            region_name: region_name.into(),
            year_offset: default_year_offset(),
            scenario: default_scenario(),
            scale: default_scale(),
        }
    }
}

/// Payload handed to the registered renderer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload<'a> {
    pub location: &'a str,
    pub grid_analysis: &'a GridAnalysis,
}

/// Callback boundary for the host-process renderer. The renderer projects
/// boundary rings and tensor-derived styling onto a map; this engine only
/// guarantees the payload shape.
pub trait RenderSink {
    fn render(&mut self, payload: &RenderPayload<'_>);
}

/// The analysis orchestrator.
pub struct ContextEngine {
    index: Box<dyn SpatialIndex>,
    renderer: Option<Box<dyn RenderSink>>,
}

impl ContextEngine {
    pub fn new() -> Self {
        Self {
            index: Box::new(H3Grid::new()),
            renderer: None,
        }
    }

    /// Use a different grid backing behind the `SpatialIndex` seam.
    pub fn with_index(index: Box<dyn SpatialIndex>) -> Self {
        Self {
            index,
            renderer: None,
        }
    }

    /// Register the renderer that receives each structured result.
    pub fn register_renderer(&mut self, sink: Box<dyn RenderSink>) {
        self.renderer = Some(sink);
    }

    /// Run the full pipeline and return the structured analysis.
    ///
    /// Pipeline order:
    ///   1. Resolve region and scale, generate the cell set.
    ///   2. Per cell: boundary, tensor, scores, actions. Argument-only pure,
    ///      so the map parallelizes under the `threading` feature with no
    ///      synchronization.
    ///   3. Aggregate region statistics.
    pub fn run_analysis(&self, request: &AnalyzeRequest) -> Result<GridAnalysis, GridError> {
        let scale = GridScale::from_label(&request.scale);
        let grid = grid::generate_grid(self.index.as_ref(), &request.region_name, scale)?;

        let index = self.index.as_ref();
        let center = grid.center;
        let resolution = grid.resolution;

        #[cfg(feature = "threading")]
        let cells = grid
            .seeds
            .par_iter()
            .map(|seed| build_cell(index, seed, center, resolution, scale))
            .collect::<Result<Vec<HexCell>, GridError>>()?;
        #[cfg(not(feature = "threading"))]
        let cells = grid
            .seeds
            .iter()
            .map(|seed| build_cell(index, seed, center, resolution, scale))
            .collect::<Result<Vec<HexCell>, GridError>>()?;

        let global_stats = aggregate::global_stats(&cells);

        Ok(GridAnalysis {
            region_name: request.region_name.clone(),
            scenario: request.scenario.clone(),
            target_year: Utc::now().year() + request.year_offset,
            scale,
            grid_center: center,
            cells,
            global_stats,
        })
    }

    /// The composite operation: analyze, dispatch the structured result to
    /// the registered renderer, return the textual summary to the caller.
    pub fn analyze(&mut self, request: &AnalyzeRequest) -> Result<String, GridError> {
        let analysis = self.run_analysis(request)?;
        let summary = aggregate::summarize(&analysis, request.year_offset);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&RenderPayload {
                location: &request.region_name,
                grid_analysis: &analysis,
            });
        }
        Ok(summary)
    }
}

impl Default for ContextEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble one cell: boundary with derived altitudes, tensor, actions.
fn build_cell(
    index: &dyn SpatialIndex,
    seed: &CellSeed,
    grid_center: GeoCoord,
    resolution: u8,
    scale: GridScale,
) -> Result<HexCell, GridError> {
    let boundary = index
        .boundary(&seed.cell_id)?
        .into_iter()
        .map(|p| BoundaryPoint {
            lat: p.lat,
            lng: p.lng,
            altitude: tensor::surface_elevation_m(p.lat, p.lng),
        })
        .collect();
    let tensor = tensor::synthesize_tensor(seed.center, grid_center, scale);
    let actions = actions::recommend(&tensor);

    Ok(HexCell {
        cell_id: seed.cell_id.clone(),
        resolution,
        center: seed.center,
        boundary,
        tensor,
        actions,
    })
}
