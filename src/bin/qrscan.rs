use clap::Parser;
use qrprobe::{SymbolDecoder, tools};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qrscan",
    version,
    about = "Decode a pre-cropped, axis-aligned QR symbol image"
)]
struct Cli {
    /// Path to the symbol image
    image: PathBuf,

    /// Pixels per module in the input image
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    module_size: u32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrscan: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (rgb, width, height) = tools::load_rgb(&cli.image)?;
    let pixels = tools::threshold_rgb(&rgb, width, height);
    let trimmed = tools::trim_quiet_zone(&pixels);
    let modules = tools::sample_modules(&trimmed, cli.module_size as usize);

    let symbol = SymbolDecoder::decode(&modules)?;

    println!("QR Code Size: {}x{}", modules.width(), modules.height());
    println!("QR Code Version: {}", symbol.version.number());
    println!("Error Correction Level: {}", symbol.ec_level.letter());
    println!("Mask Pattern: {:03b}", symbol.mask_pattern.id());
    println!("Mask Equation: {}", symbol.mask_pattern.equation());
    println!("Encoding Mode: {}", symbol.mode.name());
    println!("Payload (hex): {}", symbol.payload_hex());
    println!("Decoded Text: {}", symbol.text);
    Ok(())
}
