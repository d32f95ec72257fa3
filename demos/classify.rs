//! Command-line driver for laundry_colors
//!
//! Decodes one photo, runs the analysis pipeline, and prints the report
//! as JSON together with a name per detected color. Decoding happens out
//! here; the library itself only sees the RGB buffer.

use laundry_colors::{analyze_image, color, AnalysisConfig};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut k = None;
    let mut image_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--colors" | "-k" => {
                i += 1;
                match args.get(i).and_then(|value| value.parse::<usize>().ok()) {
                    Some(parsed) => k = Some(parsed),
                    None => {
                        eprintln!("Error: --colors expects a number");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path.is_none() {
                    image_path = Some(arg.to_string());
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

    let Some(path) = image_path else {
        print_help(&args[0]);
        process::exit(1);
    };

    let photo = match image::open(&path) {
        Ok(decoded) => decoded.into_rgb8(),
        Err(err) => {
            eprintln!("Error: could not load '{}': {}", path, err);
            process::exit(1);
        }
    };

    let config = match k {
        Some(k) => AnalysisConfig::with_k(k),
        None => AnalysisConfig::default(),
    };

    match analyze_image(&photo, &config) {
        Ok(report) => {
            for dominant in &report.dominants {
                println!(
                    "{:>6.1}%  {}  {}",
                    dominant.proportion * 100.0,
                    color::hsv_to_hex(dominant.hsv()),
                    color::color_name(dominant.hsv()),
                );
            }
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("Error: could not serialize report: {}", err),
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program: &str) {
    println!("Usage: {} [--colors N] <image>", program);
    println!();
    println!("Classify a laundry photo into a wash group.");
    println!();
    println!("Options:");
    println!("  --colors, -k N   Number of dominant colors to extract (default 3)");
    println!("  --help, -h       Show this help");
}
