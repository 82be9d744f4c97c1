use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use pyrite_core::SceneDescription;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "pyrite")]
#[command(about = "Offline Monte Carlo path tracer for sphere scenes")]
pub struct Args {
    /// Scene file (JSON). Renders the built-in reference scene when omitted
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// Output image path (.ppm or .png)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel
    #[arg(long = "samples", short = 'n')]
    pub samples_per_pixel: Option<u32>,

    /// Maximum bounce depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Seed for the random streams
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,

    /// Render on the calling thread with a single random stream
    #[arg(long)]
    pub single_threaded: bool,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Print the effective scene as JSON and exit
    #[arg(long)]
    pub dump_scene: bool,
}

impl Args {
    /// Apply command line overrides on top of the loaded scene.
    pub fn apply_overrides(&self, scene: &mut SceneDescription) {
        if let Some(width) = self.width {
            scene.camera.width = width;
        }
        if let Some(height) = self.height {
            scene.camera.height = height;
        }
        if let Some(samples) = self.samples_per_pixel {
            scene.render.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            scene.render.max_depth = max_depth;
        }
        if let Some(seed) = self.seed {
            scene.render.seed = seed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pyrite"]).unwrap();

        assert_eq!(args.scene, None);
        assert_eq!(args.output, PathBuf::from("output.ppm"));
        assert_eq!(args.threads, 0);
        assert!(!args.single_threaded);
        assert_eq!(args.log_level, LogLevel::Info);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "pyrite", "--width", "320", "--height", "240", "-n", "8", "--max-depth", "3",
            "--seed", "99",
        ])
        .unwrap();

        let mut scene = SceneDescription::reference();
        args.apply_overrides(&mut scene);

        assert_eq!(scene.camera.width, 320);
        assert_eq!(scene.camera.height, 240);
        assert_eq!(scene.render.samples_per_pixel, 8);
        assert_eq!(scene.render.max_depth, 3);
        assert_eq!(scene.render.seed, 99);
    }

    #[test]
    fn test_no_overrides_keeps_scene() {
        let args = Args::try_parse_from(["pyrite", "-o", "out.png"]).unwrap();
        let mut scene = SceneDescription::reference();
        args.apply_overrides(&mut scene);
        assert_eq!(scene, SceneDescription::reference());
    }

    #[test]
    fn test_log_level() {
        let args = Args::try_parse_from(["pyrite", "--log-level", "debug"]).unwrap();
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
        assert!(Args::try_parse_from(["pyrite", "--log-level", "loud"]).is_err());
    }
}
