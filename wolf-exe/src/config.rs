//! User configuration options.

use crate::cli::CliOptions;
use dirs::config_dir;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use std::{
    fs::{create_dir, File, OpenOptions},
    io::{Read, Write},
    path::PathBuf,
};

const LOG_TAG: &str = "UserConfig";
const BASE_DIR: &str = "wolfdata/";

fn get_cfg_file() -> PathBuf {
    let mut dir =
        config_dir().unwrap_or_else(|| panic!("{}: Couldn't open user config dir", LOG_TAG));
    dir.push(BASE_DIR);
    if !dir.exists() {
        create_dir(&dir)
            .unwrap_or_else(|e| panic!("{}: Couldn't create {:?}: {}", LOG_TAG, dir, e));
    }
    dir.push("user.toml");
    dir
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Directory the game data files live in.
    pub data_dir: String,
    /// Data file extension, e.g. `wl6` or `wl1`.
    pub extension: String,
    /// Sample rate PC-speaker sounds are rendered at.
    pub sample_rate: u32,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            extension: "wl6".to_string(),
            sample_rate: 44100,
        }
    }
}

impl UserConfig {
    /// `load` will attempt to read the config, and panic if errored
    pub fn load() -> Self {
        let path = get_cfg_file();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path.clone())
            .unwrap_or_else(|e| panic!("Couldn't open {:?}, {}", path, e));
        let mut buf = String::new();
        if let Ok(read_len) = file.read_to_string(&mut buf) {
            if read_len == 0 {
                return UserConfig::create_default(&mut file);
            } else {
                if let Ok(data) = toml::from_str(&buf) {
                    info!(target: LOG_TAG, "Loaded user config file");
                    return data;
                }
                warn!("Could not deserialise {:?} recreating config", path);
            }
        }
        UserConfig::create_default(&mut file)
    }

    fn create_default(file: &mut File) -> Self {
        let config = UserConfig::default();
        info!("Created default user config file");
        // Should be okay to unwrap this as is since it is a Default
        let data = toml::to_string(&config).unwrap();
        file.write_all(data.as_bytes())
            .unwrap_or_else(|_| panic!("Could not write {:?}", get_cfg_file()));
        info!("Saved user config to {:?}", get_cfg_file());
        config
    }

    pub fn write(&self) {
        let mut file = File::create(get_cfg_file()).expect("Couldn't overwrite config");
        let data = toml::to_string_pretty(self).expect("Parse config to TOML failed");
        file.write_all(data.as_bytes())
            .unwrap_or_else(|err| error!("Could not write config: {}", err));
    }

    /// Sync the CLI options and UserConfig with each other
    pub fn sync_cli(&mut self, cli: &mut CliOptions) {
        info!("Checking CLI options");

        if let Some(data_dir) = &cli.data_dir {
            let data_dir = data_dir.to_string_lossy().to_string();
            if data_dir != self.data_dir {
                info!("Data dir changed to: {}", data_dir);
                self.data_dir = data_dir;
            }
        } else if !self.data_dir.is_empty() {
            cli.data_dir = Some(PathBuf::from(&self.data_dir));
        }

        if let Some(extension) = &cli.extension {
            if *extension != self.extension {
                extension.clone_into(&mut self.extension);
            }
        } else {
            cli.extension = Some(self.extension.clone());
        }

        if let Some(rate) = cli.sample_rate {
            if rate != self.sample_rate {
                self.sample_rate = rate;
            }
        } else {
            cli.sample_rate = Some(self.sample_rate);
        }
    }
}
