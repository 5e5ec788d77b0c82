use icy_bitmap::Color;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

const OPTIONS_FILE: &str = "options.toml";

/// Persistent defaults for new sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Options {
    /// The console starts with 0 which draws nothing until `set line_width` is used.
    #[serde(default)]
    pub line_width: i32,

    #[serde(default)]
    pub draw_color: Color,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            line_width: 0,
            draw_color: Color::BLACK,
        }
    }
}

impl Options {
    pub fn load_options() -> Self {
        let Some(config_dir) = Self::get_config_dir() else {
            return Self::default();
        };
        if !config_dir.exists() && fs::create_dir_all(&config_dir).is_err() {
            log::error!("Can't create configuration directory {:?}", config_dir);
            return Self::default();
        }
        let options_file = config_dir.join(OPTIONS_FILE);
        if options_file.exists() {
            match fs::read_to_string(options_file) {
                Ok(txt) => return Self::from_toml(&txt),
                Err(err) => log::error!("Error reading options file: {}", err),
            }
        }
        Self::default()
    }

    pub fn from_toml(txt: &str) -> Self {
        match toml::from_str(txt) {
            Ok(result) => result,
            Err(err) => {
                log::error!("Error parsing options file: {}", err);
                Self::default()
            }
        }
    }

    pub fn store_options(&self) {
        if let Some(config_dir) = Self::get_config_dir() {
            let file_name = config_dir.join(OPTIONS_FILE);
            match toml::to_string(self) {
                Ok(text) => {
                    if let Err(err) = fs::write(file_name, text) {
                        log::error!("Error writing options file: {}", err);
                    }
                }
                Err(err) => log::error!("Error writing options file: {}", err),
            }
        }
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", "icy_paint").map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Log files live next to the options.
    pub fn get_log_dir() -> Option<PathBuf> {
        let dir = Self::get_config_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir).ok()?;
        }
        Some(dir)
    }
}
