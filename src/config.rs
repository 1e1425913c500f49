use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Window and context settings shared by all programs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Left unset, each program names the window itself.
    pub title: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version, major and minor.
    pub gl_version: [u8; 2],
    pub clear_color: [f32; 3],
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: None,
            width: 800,
            height: 600,
            gl_version: [3, 3],
            clear_color: [0.2, 0.3, 0.3],
            vsync: true,
        }
    }
}

impl WindowConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("LearnOpenGL")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(ConfigError::Input)?;

        Self::from_json5(&config_str)
    }

    pub fn from_json5(config_str: &str) -> Result<Self, ConfigError> {
        let config: WindowConfig = json5::from_str(config_str).map_err(ConfigError::Format)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid("window size must not be zero"));
        }

        if self.gl_version < [3, 3] {
            return Err(ConfigError::Invalid("OpenGL 3.3 core or newer is required"));
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Input(std::io::Error),
    #[error("malformed config: {0}")]
    Format(json5::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = WindowConfig::from_json5("{}").unwrap();

        assert_eq!(config, WindowConfig::default());
        assert_eq!(config.title(), "LearnOpenGL");
    }

    #[test]
    fn title_from_file() {
        let config = WindowConfig::from_json5(r#"{ title: "Crates" }"#).unwrap();

        assert_eq!(config.title(), "Crates");
    }

    #[test]
    fn json5_with_comments() {
        let config = WindowConfig::from_json5(
            r#"{
                // smaller window
                width: 640,
                height: 480,
                clear_color: [0.0, 0.0, 0.0],
                vsync: false,
            }"#,
        )
        .unwrap();

        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.clear_color, [0.0, 0.0, 0.0]);
        assert!(!config.vsync);
        assert_eq!(config.gl_version, [3, 3]);
    }

    #[test]
    fn rejects_old_gl() {
        let err = WindowConfig::from_json5("{ gl_version: [2, 1] }").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));

        assert!(WindowConfig::from_json5("{ gl_version: [4, 1] }").is_ok());
    }

    #[test]
    fn rejects_zero_size() {
        let err = WindowConfig::from_json5("{ width: 0 }").unwrap_err();

        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_input() {
        let err = WindowConfig::from_json5("{ width: ").unwrap_err();

        assert!(matches!(err, ConfigError::Format(_)));
    }
}
