//! Discrete-global-grid capability interface and its H3 implementation.
//!
//! Grid generation and boundary resolution only talk to `SpatialIndex`, so
//! the backing library can be swapped without touching either.

use std::str::FromStr;

use h3o::{CellIndex, LatLng, Resolution};
use serde::Serialize;
use thiserror::Error;

/// Errors at the spatial-index boundary. All ids produced by the index
/// itself round-trip cleanly; these surface only for caller-supplied input.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("coordinate out of range: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
    #[error("malformed cell id: {0}")]
    InvalidCellId(String),
    #[error("unsupported grid resolution level: {0}")]
    UnsupportedResolution(u8),
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoord {
    pub lat: f64,
    pub lng: f64,
}

/// Capability interface over a discrete global grid system.
pub trait SpatialIndex: Send + Sync {
    /// Id of the cell containing `(lat, lng)` at the given resolution level.
    fn resolve_cell(&self, lat: f64, lng: f64, resolution: u8) -> Result<String, GridError>;

    /// Decoded center coordinate of a cell.
    fn cell_center(&self, cell_id: &str) -> Result<GeoCoord, GridError>;

    /// Closed polygon boundary of a cell: at least 5 distinct vertices, with
    /// the first point repeated at the end.
    fn boundary(&self, cell_id: &str) -> Result<Vec<GeoCoord>, GridError>;

    /// All cell ids within `radius` grid steps of `cell_id`, inclusive.
    fn ring(&self, cell_id: &str, radius: u32) -> Result<Vec<String>, GridError>;
}

/// H3-backed spatial index. Stateless; cell ids are the H3 string form.
#[derive(Debug, Clone, Copy, Default)]
pub struct H3Grid;

impl H3Grid {
    pub fn new() -> Self {
        Self
    }

    fn parse(cell_id: &str) -> Result<CellIndex, GridError> {
        CellIndex::from_str(cell_id).map_err(|_| GridError::InvalidCellId(cell_id.to_owned()))
    }

    fn to_coord(ll: LatLng) -> GeoCoord {
        GeoCoord {
            lat: ll.lat_radians().to_degrees(),
            lng: ll.lng_radians().to_degrees(),
        }
    }
}

impl SpatialIndex for H3Grid {
    fn resolve_cell(&self, lat: f64, lng: f64, resolution: u8) -> Result<String, GridError> {
        let res = Resolution::try_from(resolution)
            .map_err(|_| GridError::UnsupportedResolution(resolution))?;
        let ll = LatLng::new(lat, lng).map_err(|_| GridError::InvalidCoordinate { lat, lng })?;
        Ok(ll.to_cell(res).to_string())
    }

    fn cell_center(&self, cell_id: &str) -> Result<GeoCoord, GridError> {
        let cell = Self::parse(cell_id)?;
        Ok(Self::to_coord(LatLng::from(cell)))
    }

    fn boundary(&self, cell_id: &str) -> Result<Vec<GeoCoord>, GridError> {
        let cell = Self::parse(cell_id)?;
        // H3 returns an open ring of 5-10 vertices; close it here.
        let mut ring: Vec<GeoCoord> = cell.boundary().iter().map(|v| Self::to_coord(*v)).collect();
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        Ok(ring)
    }

    fn ring(&self, cell_id: &str, radius: u32) -> Result<Vec<String>, GridError> {
        let cell = Self::parse(cell_id)?;
        let disk: Vec<CellIndex> = cell.grid_disk(radius);
        Ok(disk.into_iter().map(|c| c.to_string()).collect())
    }
}
