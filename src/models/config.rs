use crate::assets::AssetLoader;
use crate::error::ConfigError;
use crate::models::{ScaleLadder, ScalePreset};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Display-size presets, largest first
    #[serde(default)]
    pub scale_ladder: ScaleLadder,

    /// Theme synthesis tuning
    #[serde(default)]
    pub palette: PaletteTuning,
}

/// Thresholds driving theme synthesis.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PaletteTuning {
    /// Minimum APCA `Lc` magnitude for swatch-derived text colors
    pub min_contrast: f32,
    /// Text colors closer than this (CIEDE2000) to an earlier one are dropped
    pub dedupe_distance: f32,
    /// CIELAB lightness shift between background and far background
    pub background_step: f32,
    /// CIELAB lightness step of the text-color contrast search
    pub lightness_step: f32,
    /// Upper bound on `Theme::text_colors`
    pub max_text_colors: usize,
}

impl Default for PaletteTuning {
    fn default() -> Self {
        Self {
            min_contrast: 75.0,
            dedupe_distance: 15.0,
            background_step: 10.0,
            lightness_step: 1.0,
            max_text_colors: 4,
        }
    }
}

/// Smallest accepted step of the text-color contrast search.
const MIN_LIGHTNESS_STEP: f32 = 0.01;

impl PaletteTuning {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("min_contrast", self.min_contrast),
            ("background_step", self.background_step),
            ("lightness_step", self.lightness_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Tuning(format!("{name} must be positive")));
            }
        }
        if self.lightness_step < MIN_LIGHTNESS_STEP {
            return Err(ConfigError::Tuning(format!(
                "lightness_step must be at least {MIN_LIGHTNESS_STEP}"
            )));
        }
        if !(self.dedupe_distance.is_finite() && self.dedupe_distance >= 0.0) {
            return Err(ConfigError::Tuning(
                "dedupe_distance must not be negative".to_string(),
            ));
        }
        if self.max_text_colors == 0 {
            return Err(ConfigError::Tuning(
                "max_text_colors must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.palette.validate()?;
        Ok(config)
    }

    /// Read and validate the config the loader points at.
    pub fn load(loader: &AssetLoader) -> Result<Self, ConfigError> {
        let content = loader.read_config_string()?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from AssetLoader (embedded or external), falling
    /// back to the built-in defaults.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match Self::load(loader) {
            Ok(config) => {
                tracing::info!(
                    presets = config.scale_ladder.len(),
                    min_contrast = config.palette.min_contrast,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Replace the scale ladder, validating the new presets.
    pub fn with_scale_presets(mut self, presets: Vec<ScalePreset>) -> Result<Self, ConfigError> {
        self.scale_ladder = ScaleLadder::new(presets)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.scale_ladder.len(), 5);
        assert_eq!(config.palette.min_contrast, 75.0);
        assert_eq!(config.palette.dedupe_distance, 15.0);
        assert_eq!(config.palette.background_step, 10.0);
        assert_eq!(config.palette.lightness_step, 1.0);
        assert_eq!(config.palette.max_text_colors, 4);
    }

    #[test]
    fn test_partial_yaml_falls_back_per_field() {
        let config = AppConfig::from_yaml_str("palette:\n  min_contrast: 60\n").unwrap();
        assert_eq!(config.palette.min_contrast, 60.0);
        assert_eq!(config.palette.max_text_colors, 4);
        assert_eq!(config.scale_ladder, ScaleLadder::default());
    }

    #[test]
    fn test_custom_ladder() {
        let yaml = r#"
scale_ladder:
  - { name: big, text_size: 30, line_height: 38, image_size: 100, padding: 24 }
  - { name: small, text_size: 18, line_height: 24, image_size: 60, padding: 12 }
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.scale_ladder.len(), 2);
        assert_eq!(config.scale_ladder.preset(1).name, "small");
    }

    #[test]
    fn test_invalid_ladder_is_rejected() {
        let result = AppConfig::from_yaml_str("scale_ladder: []\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let result = AppConfig::from_yaml_str("palette:\n  max_text_colors: 0\n");
        assert!(matches!(result, Err(ConfigError::Tuning(_))));

        let result = AppConfig::from_yaml_str("palette:\n  lightness_step: -1\n");
        assert!(matches!(result, Err(ConfigError::Tuning(_))));
    }

    #[test]
    fn test_tiny_lightness_step_is_rejected() {
        let result = AppConfig::from_yaml_str("palette:\n  lightness_step: 1e-20\n");
        match result {
            Err(ConfigError::Tuning(msg)) => assert!(msg.contains("lightness_step")),
            other => panic!("expected tuning error, got {other:?}"),
        }

        let config = AppConfig::from_yaml_str("palette:\n  lightness_step: 0.01\n").unwrap();
        assert_eq!(config.palette.lightness_step, 0.01);
    }

    #[test]
    fn test_with_scale_presets() {
        let config = AppConfig::default()
            .with_scale_presets(vec![ScalePreset::uniform("one", 12.0)])
            .unwrap();
        assert_eq!(config.scale_ladder.len(), 1);

        let result = AppConfig::default().with_scale_presets(Vec::new());
        assert!(matches!(
            result,
            Err(ConfigError::Ladder(crate::error::LadderError::Empty))
        ));
    }

    #[test]
    fn test_strict_load_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory exists at the path but cannot be read as a file.
        let result = AppConfig::load(&AssetLoader::new(Some(dir.path().to_path_buf())));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let loader = AssetLoader::new(Some("/nonexistent/versecard/config.yaml".into()));
        // Missing external file falls back to the embedded config.
        let config = AppConfig::load_from_assets(&loader);
        assert_eq!(config, AppConfig::default());
    }
}
