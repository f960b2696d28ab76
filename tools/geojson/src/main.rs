/// GeoJSON exporter: runs one analysis and writes the tessellation as a
/// FeatureCollection for map tooling.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

use hexrisk_core::{AnalyzeRequest, ContextEngine, GridAnalysis};

#[derive(Parser, Debug)]
#[command(name = "geojson-export", about = "GeoJSON exporter for risk tessellations")]
struct Args {
    /// Region name (free text).
    region: String,

    /// Spatial granularity: neighborhood, city, or region.
    #[arg(long, default_value = "city")]
    scale: String,

    /// Output path.
    #[arg(long, default_value = "grid.geojson")]
    out: PathBuf,
}

fn feature_collection(analysis: &GridAnalysis) -> Value {
    let features: Vec<Value> = analysis
        .cells
        .iter()
        .map(|cell| {
            // GeoJSON positions are [lng, lat]; rings arrive already closed.
            let ring: Vec<Value> = cell.boundary.iter().map(|p| json!([p.lng, p.lat])).collect();
            json!({
                "type": "Feature",
                "geometry": { "type": "Polygon", "coordinates": [ring] },
                "properties": {
                    "cellId": cell.cell_id,
                    "totalRisk": cell.tensor.scores.total_risk,
                    "landUse": cell.tensor.dimensions.geography.land_use,
                    "populationDensity": cell.tensor.dimensions.socioeconomic.population_density,
                    "elevation": cell.tensor.dimensions.geography.elevation,
                },
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut request = AnalyzeRequest::new(args.region);
    request.scale = args.scale;

    let engine = ContextEngine::new();
    let analysis = engine.run_analysis(&request)?;
    let collection = feature_collection(&analysis);

    fs::write(&args.out, serde_json::to_string_pretty(&collection)?)
        .with_context(|| format!("writing {}", args.out.display()))?;
    eprintln!(
        "wrote {} features to {}",
        analysis.cells.len(),
        args.out.display()
    );
    Ok(())
}
