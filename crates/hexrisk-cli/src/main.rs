/// Host-process CLI for the risk tessellation engine: runs one analysis,
/// prints the summary, and optionally plays renderer by writing the
/// structured payload to a JSON file.
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hexrisk_core::{AnalyzeRequest, ContextEngine, RenderPayload, RenderSink};

#[derive(Parser, Debug)]
#[command(name = "hexrisk", about = "Hexagonal context-tensor risk analysis")]
struct Args {
    /// Region name (free text; unknown names fall back to the default center).
    region: String,

    /// Planning horizon in years.
    #[arg(long, default_value_t = 5)]
    year_offset: i32,

    /// Scenario label carried through as metadata.
    #[arg(long, default_value = "SSP2-4.5")]
    scenario: String,

    /// Spatial granularity: neighborhood, city, or region.
    #[arg(long, default_value = "city")]
    scale: String,

    /// Write the renderer payload ({location, gridAnalysis}) to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

/// Renderer sink that writes the payload to a JSON file.
struct JsonFileSink {
    path: PathBuf,
}

impl RenderSink for JsonFileSink {
    fn render(&mut self, payload: &RenderPayload<'_>) {
        match File::create(&self.path) {
            Ok(file) => {
                if let Err(e) = serde_json::to_writer_pretty(BufWriter::new(file), payload) {
                    eprintln!("failed to write renderer payload: {e}");
                } else {
                    eprintln!("wrote renderer payload to {}", self.path.display());
                }
            }
            Err(e) => eprintln!("failed to create {}: {e}", self.path.display()),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let request = AnalyzeRequest {
        region_name: args.region,
        year_offset: args.year_offset,
        scenario: args.scenario,
        scale: args.scale,
    };

    let mut engine = ContextEngine::new();
    if let Some(path) = args.json {
        engine.register_renderer(Box::new(JsonFileSink { path }));
    }

    let summary = engine.analyze(&request)?;
    println!("{summary}");
    Ok(())
}
