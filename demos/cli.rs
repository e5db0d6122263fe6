//! Command-line interface for undertone_scan
//!
//! Analyze a single photo and print the undertone with palette advice

use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;
use undertone_scan::{
    analyze_image_with_config, AnalysisResult, AnalyzerConfig, PRO_TIPS,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut json_output = false;
    let mut config_path = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json_output = true,
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    process::exit(1);
                }
                config_path = Some(args[i + 1].clone());
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    let config = match config_path {
        Some(path) => match AnalyzerConfig::from_json_file(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => AnalyzerConfig::default(),
    };

    match analyze_image_with_config(image_path, &config) {
        Ok(result) => {
            if json_output {
                print_json(&result);
            } else {
                print_result(&result);
            }
        }
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            eprintln!("{}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Classify skin undertone from a photo and suggest colors to wear.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json           Print the full result as JSON on stdout");
    eprintln!("  --config FILE    Load thresholds from a JSON config file");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG=debug   Log scan statistics to stderr");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} selfie.jpg", program_name);
    eprintln!("  {} --json --config config.json selfie.png", program_name);
}

fn print_json(result: &AnalysisResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }
}

fn print_result(result: &AnalysisResult) {
    let stats = &result.statistics;

    println!("Undertone: {}", result.undertone);
    println!();
    println!("{}", result.recommendation.explanation);
    println!();
    println!("Colors that look great on you:");
    for color in &result.recommendation.good {
        println!("  {:<14} {}", color.name, color.hex);
    }
    println!();
    println!("Colors to avoid:");
    for color in &result.recommendation.avoid {
        println!("  {:<14} {}", color.name, color.hex);
    }
    println!();
    println!("Pro Tips:");
    for tip in PRO_TIPS {
        println!("  - {}", tip);
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Analysis Summary:");
    eprintln!("  Mean skin color: {}", result.mean_hex);
    eprintln!("  Red/green ratio: {:.3}", stats.red_green_ratio);
    eprintln!(
        "  Skin pixels: {} of {} ({:.1}%)",
        stats.skin_pixels,
        stats.scanned_pixels,
        stats.coverage() * 100.0
    );

    if stats.coverage() < 0.05 {
        eprintln!("  Warning: Very little skin detected. Consider a closer, well-lit photo.");
    }
}
