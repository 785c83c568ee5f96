//! Locating and opening the data files of one game installation.

use std::error::Error;
use std::path::{Path, PathBuf};

use archive::{AudioArchive, GraphicsArchive, MapArchive, VswapArchive};
use assets::wl6;

/// A data directory plus the variant extension (`wl6`, `wl1`, ...).
pub struct DataFiles {
    dir: PathBuf,
    extension: String,
}

impl DataFiles {
    pub fn new<P: Into<PathBuf>>(dir: P, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// DOS installs shout in uppercase, rips are often lowercased;
    /// accept either.
    pub fn find(&self, stem: &str) -> Result<PathBuf, Box<dyn Error>> {
        let upper = format!("{}.{}", stem.to_uppercase(), self.extension.to_uppercase());
        let lower = format!("{}.{}", stem.to_lowercase(), self.extension.to_lowercase());
        for name in [upper, lower] {
            let path = self.dir.join(&name);
            if path.exists() {
                return Ok(path);
            }
        }
        Err(format!(
            "missing {}.{} in {:?}",
            stem.to_uppercase(),
            self.extension.to_uppercase(),
            self.dir
        )
        .into())
    }

    pub fn vswap(&self) -> Result<VswapArchive, Box<dyn Error>> {
        Ok(VswapArchive::from_path(self.find("vswap")?)?)
    }

    pub fn graphics(&self) -> Result<GraphicsArchive, Box<dyn Error>> {
        Ok(GraphicsArchive::from_paths(
            self.find("vgagraph")?,
            self.find("vgahead")?,
            self.find("vgadict")?,
            &wl6::GRAPHICS_PARTITIONS,
        )?)
    }

    pub fn maps(&self) -> Result<MapArchive, Box<dyn Error>> {
        Ok(MapArchive::from_paths(
            self.find("maphead")?,
            self.find("gamemaps")?,
        )?)
    }

    pub fn audio(&self) -> Result<AudioArchive, Box<dyn Error>> {
        Ok(AudioArchive::from_paths(
            self.find("audiohed")?,
            self.find("audiot")?,
        )?)
    }
}
