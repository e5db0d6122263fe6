//! Generate default analyzer configuration and recommendation files
//!
//! Creates JSON files with all default parameters, ready for editing

use std::{env, path::Path, process};
use undertone_scan::{AnalyzerConfig, RecommendationTable};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json> [output_recommendations.json]", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/analyzer.json config/recommendations.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = AnalyzerConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Skin gate: hue {:.0}-{:.0} deg, saturation {:.2}-{:.2}, value {:.2}-{:.2}",
                config.skin_filter.hue_min,
                config.skin_filter.hue_max,
                config.skin_filter.saturation_min,
                config.skin_filter.saturation_max,
                config.skin_filter.value_min,
                config.skin_filter.value_max
            );
            eprintln!(
                "  Warm ratio: {:.1}-{:.1}, Cool ratio: {:.1}-{:.1}",
                config.undertone_ranges.warm.min,
                config.undertone_ranges.warm.max,
                config.undertone_ranges.cool.min,
                config.undertone_ranges.cool.max
            );
            eprintln!(
                "  Scan: parallel={}, from {} pixels",
                config.scan.parallel, config.scan.min_parallel_pixels
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }

    if let Some(table_path) = args.get(2) {
        match RecommendationTable::builtin().to_json_file(Path::new(table_path)) {
            Ok(()) => eprintln!("Recommendations saved to {}", table_path),
            Err(e) => {
                eprintln!("Error saving recommendations: {}", e);
                process::exit(1);
            }
        }
    }
}
