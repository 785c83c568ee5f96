//! Decoded game assets on top of the `archive` readers: palettes and
//! indexed images, pics, wall textures, sprites, fonts, text screens,
//! PC-speaker and digitized sounds, AdLib/IMF music, and tile maps.
//!
//! The `wl6` module carries the configuration tables (partition layout,
//! palette, chunk names) for the registered six-episode data set, which
//! is what the tools default to.

pub mod font;
pub mod image;
pub mod music;
pub mod palette;
pub mod pic;
pub mod sound;
pub mod sprite;
pub mod text;
pub mod tilemap;
pub mod wav;
pub mod wl6;

pub use image::IndexedImage;
pub use palette::Rgb;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error(transparent)]
    Archive(#[from] archive::ArchiveError),

    #[error("invalid image size: {width}x{height}")]
    BadImageSize { width: usize, height: usize },

    #[error("image width must be divisible by 4: {0}")]
    UnplanarWidth(usize),

    #[error("pixel data too short: actual={actual} < expected={expected}")]
    ShortPixels { actual: usize, expected: usize },

    #[error("chunk too short for {0}")]
    ShortChunk(&'static str),

    #[error("invalid JASC palette: {0}")]
    Palette(String),

    #[error("pixel depth must be 24 or 32 bits: {0}")]
    BadDepth(u8),

    #[error("asset index out of range: {0}")]
    BadIndex(usize),

    #[error("archive has no {0} partition")]
    MissingPartition(&'static str),

    #[error("plane size does not match {width}x{height} map")]
    BadPlaneSize { width: usize, height: usize },

    #[error("shrinking scale factor: {0}")]
    BadScale(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
