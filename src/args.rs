use std::path::PathBuf;

use clap::Args;

use crate::config::{ConfigError, WindowConfig};

/// Options every program accepts.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// json5 file with window settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Window width, overrides the config file
    #[arg(long)]
    pub width: Option<u32>,
    /// Window height, overrides the config file
    #[arg(long)]
    pub height: Option<u32>,
}

impl CommonArgs {
    /// Defaults, then the config file, then command line overrides. `title`
    /// names the window unless the file sets one.
    pub fn window_config(&self, title: &str) -> Result<WindowConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => WindowConfig::load_from_path(path)?,
            None => WindowConfig::default(),
        };

        config.title.get_or_insert_with(|| title.to_owned());

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }

        config.validate()?;

        Ok(config)
    }
}
