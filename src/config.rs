// src/config.rs

use crate::types::Config;
use anyhow::Result;
use std::fs;

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use crate::types::Config;

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
detection:
  detection_threshold: 20
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.detection.detection_threshold, 20);
        // Unspecified sections keep their defaults
        assert_eq!(config.speed.output_max, 3.5);
        assert_eq!(config.qualifiers.freq_high, 3);
    }

    #[test]
    fn test_full_yaml_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(
            parsed.detection.detection_threshold,
            config.detection.detection_threshold
        );
        assert_eq!(parsed.speed.input_max, config.speed.input_max);
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}
