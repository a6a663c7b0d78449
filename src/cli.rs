// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, SceneConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "sphere-scatter")]
#[command(about = "Rotating sphere with scattered surface points", long_about = None)]
pub struct Cli {
    /// JSON scene configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of scatter points
    #[arg(long)]
    pub points: Option<usize>,

    /// Radius of the focus sphere
    #[arg(long)]
    pub radius: Option<f64>,

    /// Milliseconds per full revolution
    #[arg(long = "duration-ms")]
    pub duration_ms: Option<f64>,

    /// Seed for reproducible scatter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable UI elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// File config (or defaults) with command-line overrides applied, validated
    pub fn scene_config(&self) -> Result<SceneConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::from_file(path)?,
            None => SceneConfig::default(),
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut SceneConfig) {
        if let Some(points) = self.points {
            config.point_count = points;
        }
        if let Some(radius) = self.radius {
            config.sphere_radius = radius;
        }
        if let Some(duration_ms) = self.duration_ms {
            config.cycle_duration_ms = duration_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_ui {
            config.show_fps = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_gives_defaults() {
        let cli = Cli::try_parse_from(["sphere-scatter"]).unwrap();
        assert_eq!(cli.scene_config().unwrap(), SceneConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "sphere-scatter",
            "--points",
            "25",
            "--radius",
            "3.5",
            "--duration-ms",
            "1000",
            "--seed",
            "42",
            "--no-ui",
        ])
        .unwrap();

        let config = cli.scene_config().unwrap();
        assert_eq!(config.point_count, 25);
        assert_eq!(config.sphere_radius, 3.5);
        assert_eq!(config.cycle_duration_ms, 1000.0);
        assert_eq!(config.seed, Some(42));
        assert!(!config.show_fps);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::try_parse_from(["sphere-scatter", "--points", "0"]).unwrap();
        assert!(matches!(cli.scene_config(), Err(ConfigError::NoPoints)));
    }

    #[test]
    fn test_missing_config_file() {
        let cli =
            Cli::try_parse_from(["sphere-scatter", "--config", "/nonexistent/scene.json"]).unwrap();
        assert!(matches!(cli.scene_config(), Err(ConfigError::Read { .. })));
    }
}
