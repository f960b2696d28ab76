//! Spatial grid generation: region name + granularity → bounded hex cell set.
//!
//! Exposes the gazetteer, the scale tables, the `SpatialIndex` capability
//! interface, and the top-level `generate_grid` operation.

pub mod gazetteer;
pub mod index;
pub mod scale;

use gazetteer::resolve_region;
use index::{GeoCoord, GridError, SpatialIndex};
use scale::GridScale;

/// A grid cell before synthesis: identity plus decoded center.
#[derive(Debug, Clone)]
pub struct CellSeed {
    pub cell_id: String,
    pub center: GeoCoord,
}

/// Output of grid generation.
#[derive(Debug, Clone)]
pub struct GeneratedGrid {
    /// Resolved region center (gazetteer hit or the default fallback).
    pub center: GeoCoord,
    /// Grid resolution level shared by all seeds.
    pub resolution: u8,
    pub seeds: Vec<CellSeed>,
}

/// Generate the full cell set covering `region_name` at `scale`.
///
/// Resolves the region center (unknown names fall back to the default
/// coordinate), locates the cell containing it at the scale's resolution,
/// then expands outward by the scale's ring radius. Identical inputs always
/// yield an identical cell set and center.
pub fn generate_grid(
    index: &dyn SpatialIndex,
    region_name: &str,
    scale: GridScale,
) -> Result<GeneratedGrid, GridError> {
    let (lat, lng) = resolve_region(region_name);
    let resolution = scale.resolution();
    let origin = index.resolve_cell(lat, lng, resolution)?;
    let ids = index.ring(&origin, scale.ring_radius())?;

    let mut seeds = Vec::with_capacity(ids.len());
    for cell_id in ids {
        let center = index.cell_center(&cell_id)?;
        seeds.push(CellSeed { cell_id, center });
    }

    Ok(GeneratedGrid {
        center: GeoCoord { lat, lng },
        resolution,
        seeds,
    })
}

#[cfg(test)]
mod tests {
    use super::index::H3Grid;
    use super::*;

    /// Shoelace area of a closed ring, in square degrees. Good enough to
    /// compare cell footprints at the same latitude.
    fn ring_area_deg2(ring: &[GeoCoord]) -> f64 {
        let mut acc = 0.0;
        for w in ring.windows(2) {
            acc += w[0].lng * w[1].lat - w[1].lng * w[0].lat;
        }
        (acc / 2.0).abs()
    }

    #[test]
    fn identical_inputs_identical_cell_set() {
        let grid = H3Grid::new();
        let a = generate_grid(&grid, "Jakarta", GridScale::City).unwrap();
        let b = generate_grid(&grid, "Jakarta", GridScale::City).unwrap();
        let ids_a: Vec<&str> = a.seeds.iter().map(|s| s.cell_id.as_str()).collect();
        let ids_b: Vec<&str> = b.seeds.iter().map(|s| s.cell_id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(a.center, b.center);
    }

    /// Full disk of radius k holds 3k^2 + 3k + 1 cells away from pentagons.
    #[test]
    fn cell_counts_match_ring_radius() {
        let grid = H3Grid::new();
        for (scale, expected) in [
            (GridScale::Neighborhood, 127),
            (GridScale::City, 217),
            (GridScale::Region, 331),
        ] {
            let g = generate_grid(&grid, "Jakarta", scale).unwrap();
            assert_eq!(
                g.seeds.len(),
                expected,
                "{} scale produced {} cells",
                scale.label(),
                g.seeds.len()
            );
        }
    }

    #[test]
    fn seeds_carry_scale_resolution() {
        let grid = H3Grid::new();
        let g = generate_grid(&grid, "Jakarta", GridScale::Region).unwrap();
        assert_eq!(g.resolution, GridScale::Region.resolution());
    }

    /// Finer granularity means smaller cell footprints.
    #[test]
    fn neighborhood_cells_smaller_than_region_cells() {
        let grid = H3Grid::new();
        let mean_area = |scale: GridScale| {
            let g = generate_grid(&grid, "Jakarta", scale).unwrap();
            let total: f64 = g
                .seeds
                .iter()
                .map(|s| ring_area_deg2(&grid.boundary(&s.cell_id).unwrap()))
                .sum();
            total / g.seeds.len() as f64
        };
        let fine = mean_area(GridScale::Neighborhood);
        let coarse = mean_area(GridScale::Region);
        assert!(
            fine < coarse,
            "neighborhood cells ({fine:.8} deg2) should be smaller than region cells ({coarse:.8} deg2)"
        );
    }

    /// Unknown region names resolve to the same grid as the default center.
    #[test]
    fn unknown_region_uses_default_center() {
        let grid = H3Grid::new();
        let unknown = generate_grid(&grid, "Totally Unknown Place", GridScale::City).unwrap();
        let default = generate_grid(&grid, "", GridScale::City).unwrap();
        assert_eq!(unknown.center, default.center);
        let ids_u: Vec<&str> = unknown.seeds.iter().map(|s| s.cell_id.as_str()).collect();
        let ids_d: Vec<&str> = default.seeds.iter().map(|s| s.cell_id.as_str()).collect();
        assert_eq!(ids_u, ids_d);
    }
}
