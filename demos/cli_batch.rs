//! Batch CLI for undertone_scan
//!
//! Classifies every image in a directory and writes one JSON report per image

use std::{env, fs, path::{Path, PathBuf}, process};
use tracing_subscriber::EnvFilter;
use undertone_scan::{
    analyze_image_with_config, image_loader::is_supported_extension, AnalyzerConfig, Undertone,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        print_help(&args[0]);
        process::exit(1);
    }

    let input_path = Path::new(&args[1]);
    let output_path = Path::new(&args[2]);

    let config = match args.get(3) {
        Some(path) => match AnalyzerConfig::from_json_file(Path::new(path)) {
            Ok(cfg) => {
                eprintln!("Loaded configuration from {}", path);
                cfg
            }
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };

    // Create output directory
    if let Err(e) = fs::create_dir_all(output_path) {
        eprintln!("Error creating output directory: {}", e);
        process::exit(1);
    }

    // Find all image files in input directory
    let image_files = match find_image_files(input_path) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error finding image files: {}", e);
            process::exit(1);
        }
    };

    if image_files.is_empty() {
        eprintln!("No image files found in {}", input_path.display());
        process::exit(1);
    }

    eprintln!("Found {} image files to process", image_files.len());
    eprintln!();

    let mut counts = [0usize; 3];
    let mut error_count = 0;

    for (i, image_path) in image_files.iter().enumerate() {
        let filename = image_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");

        eprint!("[{}/{}] Processing {}... ", i + 1, image_files.len(), filename);

        match analyze_image_with_config(image_path, &config) {
            Ok(result) => {
                let base_name = image_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("output");
                let report_path = output_path.join(format!("{}_undertone.json", base_name));

                let written = serde_json::to_string_pretty(&result)
                    .map_err(|e| e.to_string())
                    .and_then(|json| fs::write(&report_path, json).map_err(|e| e.to_string()));
                if let Err(e) = written {
                    eprintln!("Warning saving report: {}", e);
                }

                eprintln!("{}", result.undertone);
                let slot = match result.undertone {
                    Undertone::Warm => 0,
                    Undertone::Cool => 1,
                    Undertone::Neutral => 2,
                };
                counts[slot] += 1;

                if env::var("VERBOSE").is_ok() {
                    eprintln!(
                        "  -> Ratio: {:.3}, Mean: {}, Skin coverage: {:.1}%",
                        result.statistics.red_green_ratio,
                        result.mean_hex,
                        result.statistics.coverage() * 100.0
                    );
                }
            }
            Err(error) => {
                eprintln!("failed: {}", error);
                error_count += 1;
            }
        }
    }

    eprintln!();
    eprintln!("Batch processing complete:");
    eprintln!("  Warm: {}", counts[0]);
    eprintln!("  Cool: {}", counts[1]);
    eprintln!("  Neutral: {}", counts[2]);
    eprintln!("  Errors: {}", error_count);
    eprintln!("  Reports saved to: {}", output_path.display());

    if error_count > 0 {
        process::exit(1);
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <input_dir> <output_dir> [config.json]", program_name);
    eprintln!();
    eprintln!("Batch classify skin undertone for every image in a directory.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  input_dir      Directory (or single file) of photos");
    eprintln!("  output_dir     Directory for per-image JSON reports");
    eprintln!("  config.json    Optional analyzer configuration");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  VERBOSE=1      Print detailed results for each image");
    eprintln!("  RUST_LOG=info  Structured log output");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photos/ reports/", program_name);
    eprintln!("  VERBOSE=1 {} photos/ reports/ config.json", program_name);
}

fn find_image_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();

    if dir.is_file() {
        // Single file provided
        files.push(dir.to_path_buf());
        return Ok(files);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(is_supported_extension);
        if path.is_file() && supported {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
