use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use nalgebra::Vector3;
use tracing::info;
use tracing_subscriber::EnvFilter;

use carm::{Detector, DetectorConfig, read_config_file, utils::parse_triplet};
use units::{mm_, Length};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading detector configuration from {}", path.display());
            read_config_file(path)?
        }
        None => DetectorConfig {
            height: args.height,
            width: args.width,
            delx: args.spacing,
            dely: args.spacing,
            subsample: None,
        },
    };
    config.subsample = args.subsample.or(config.subsample);
    info!(?config, seed = args.seed, "detector");

    let mut detector = Detector::<f64>::from_config(&config, args.seed)?;
    let [bx, by, bz] = args.translation;
    let rays = detector.generate(&[mm_(args.sdr)], &[args.rotation], &[Vector3::new(bx, by, bz)])?;

    let p = rays.source_point(0);
    println!("source        ({:10.3} {:10.3} {:10.3})", p.x, p.y, p.z);
    let pixels = rays.subsample.clone().unwrap_or_else(|| (0..rays.n_rays()).collect());
    for (q, pixel) in rays.targets(0).zip(pixels) {
        let [row, col] = carm::index::index1_to_2(pixel, config.width);
        println!("pixel {row:3},{col:3} ({:10.3} {:10.3} {:10.3})", q.x, q.y, q.z);
    }
    Ok(())
}


#[derive(Parser, Debug, Clone)]
#[clap(name = "showrays", about = "Print the X-ray source and detector targets of one C-arm pose")]
pub struct Cli {

    /// Detector configuration file. Replaces --height, --width and --spacing
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Number of detector pixels along u
    #[clap(long, default_value = "4")]
    height: usize,

    /// Number of detector pixels along v
    #[clap(long, default_value = "4")]
    width: usize,

    /// Pixel spacing (eg '1.4 mm')
    #[clap(short, long, default_value = "1 mm")]
    spacing: Length,

    /// Trace only this many randomly chosen pixels
    #[clap(short = 'k', long)]
    subsample: Option<usize>,

    /// Seed for the subsample draw. Fresh entropy if not supplied
    #[clap(long)]
    seed: Option<u64>,

    /// Source-to-detector radius: half the source-to-detector distance
    #[clap(long, default_value = "200 mm")]
    sdr: Length,

    /// C-arm rotation 'theta,phi,gamma' in radians
    #[clap(short, long, value_parser = parse_triplet::<f64>, default_value = "0,0,0", allow_hyphen_values = true)]
    rotation: [f64; 3],

    /// C-arm translation 'bx,by,bz' in mm
    #[clap(short, long, value_parser = parse_triplet::<f64>, default_value = "0,0,0", allow_hyphen_values = true)]
    translation: [f64; 3],
}
