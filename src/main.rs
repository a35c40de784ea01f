//! Webcam Simulation CLI
//!
//! Command-line demonstration of the webcam model: powers a camera on
//! and off, captures photos, changes the resolution, and estimates the
//! data usage of a video call.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use webcam_sim::{DemoConfig, Webcam};

#[derive(Debug, Parser)]
#[command(name = "webcam-sim", version, about = "Webcam model demonstration")]
struct Args {
    /// Path to a TOML file with demo parameters.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Initial resolution in "WxH" form.
    #[arg(long)]
    resolution: Option<String>,
    /// Initial frame rate in frames per second.
    #[arg(long)]
    fps: Option<i32>,
    /// Call duration for the data-usage estimate, in seconds.
    #[arg(long)]
    seconds: Option<i32>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match args.config {
        Some(path) => match DemoConfig::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };
    if let Some(resolution) = args.resolution {
        config.resolution = resolution;
    }
    if let Some(fps) = args.fps {
        config.frame_rate = fps;
    }
    if let Some(seconds) = args.seconds {
        config.call_seconds = seconds;
    }

    info!("Webcam Simulator v{}", webcam_sim::VERSION);

    // Validation failures are reported as messages, not exit codes.
    let mut camera = match Webcam::new(&config.resolution, config.frame_rate) {
        Ok(c) => c,
        Err(e) => {
            println!("Could not create webcam: {}", e);
            return;
        }
    };
    println!("1. Webcam: {}", camera.describe_state());

    camera.power_on();
    println!("2. Webcam: {}", camera.describe_state());

    match camera.capture_photo() {
        Ok(photo) => println!("3. {}", photo),
        Err(e) => warn!("Capture failed: {}", e),
    }

    camera.power_off();
    println!("4. Webcam: {}", camera.describe_state());

    match camera.capture_photo() {
        Ok(photo) => println!("5. {}", photo),
        Err(e) => println!("5. Capture rejected: {}", e),
    }

    camera.power_on();
    match camera.change_resolution_and_capture(&config.switch_resolution) {
        Ok(photo) => println!("6. {}", photo),
        Err(e) => println!("6. Capture rejected: {}", e),
    }
    println!("7. Webcam: {}", camera.describe_state());

    println!(
        "8. A {} second call uses {} MB at the current settings.",
        config.call_seconds,
        camera.estimate_data_usage(config.call_seconds)
    );
}
