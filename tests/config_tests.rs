use std::fs;
use std::path::PathBuf;

use sphere_scatter::{ConfigError, SceneConfig};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "sphere-scatter-{}-{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let path = temp_config(
            "load",
            r#"{ "sphere_radius": 3.0, "point_count": 50, "cycle_duration_ms": 10000.0 }"#,
        );

        let config = SceneConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.sphere_radius, 3.0);
        assert_eq!(config.point_count, 50);
        assert_eq!(config.cycle_duration_ms, 10_000.0);
        assert_eq!(config.placement_scale, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_file() {
        let path = temp_config("malformed", "{ point_count: ");

        let result = SceneConfig::from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = SceneConfig {
            seed: Some(7),
            show_fps: false,
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SceneConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let config = SceneConfig {
            point_radius: -1.0,
            ..Default::default()
        };

        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("point_radius"));
    }
}
