//! Picture-type assets: pics and 8x8 tiles from VGAGRAPH, wall
//! textures from VSWAP. Sprites live in [`crate::sprite`]; the decode
//! path differs enough to keep them apart.

use archive::{GraphicsArchive, VswapArchive};

use crate::font::Font;
use crate::image::{column_to_row, planar_to_linear, IndexedImage};
use crate::palette::Rgb;
use crate::text::{decode_text_art, TextScreen};
use crate::AssetError;

pub const TILE8_DIMENSION: usize = 8;
pub const TEXTURE_DIMENSION: usize = 64;

/// A graphics archive paired with the palette to resolve it against,
/// handing out decoded assets by partition-relative index.
pub struct GraphicsSet<'a> {
    archive: &'a GraphicsArchive,
    palette: Vec<Rgb>,
}

impl<'a> GraphicsSet<'a> {
    pub fn new(archive: &'a GraphicsArchive, palette: &[Rgb]) -> Self {
        Self {
            archive,
            palette: palette.to_vec(),
        }
    }

    pub fn archive(&self) -> &GraphicsArchive {
        self.archive
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    fn partition(&self, name: &'static str) -> Result<archive::GraphicsPartition, AssetError> {
        self.archive
            .partition(name)
            .copied()
            .ok_or(AssetError::MissingPartition(name))
    }

    pub fn picture_count(&self) -> usize {
        self.archive.pic_sizes().len()
    }

    /// Decode a pic of the `pics` partition: mode-X planar, size from
    /// the pic table.
    pub fn picture(&self, index: usize) -> Result<IndexedImage, AssetError> {
        let pics = self.partition("pics")?;
        let &(width, height) = self
            .archive
            .pic_sizes()
            .get(index)
            .ok_or(AssetError::BadIndex(index))?;

        let chunk = self.archive.chunk(pics.start + index)?;
        let pixels = planar_to_linear(&chunk, width as usize, height as usize)?;
        IndexedImage::new(
            width as usize,
            height as usize,
            pixels,
            self.palette.clone(),
            None,
        )
    }

    pub fn tile8_count(&self) -> usize {
        self.archive
            .partition("tile8")
            .map(|p| p.count)
            .unwrap_or(0)
    }

    /// One 8x8 tile; the whole partition shares a single chunk.
    pub fn tile8(&self, index: usize) -> Result<IndexedImage, AssetError> {
        let tiles = self.partition("tile8")?;
        if index >= tiles.count {
            return Err(AssetError::BadIndex(index));
        }

        let area = TILE8_DIMENSION * TILE8_DIMENSION;
        let chunk = self.archive.chunk(tiles.start)?;
        let tile = chunk
            .get(index * area..(index + 1) * area)
            .ok_or(AssetError::ShortChunk("tile8"))?;
        let pixels = planar_to_linear(tile, TILE8_DIMENSION, TILE8_DIMENSION)?;
        IndexedImage::new(
            TILE8_DIMENSION,
            TILE8_DIMENSION,
            pixels,
            self.palette.clone(),
            None,
        )
    }

    /// Decode a font chunk of the `font` partition.
    pub fn font(&self, index: usize) -> Result<Font, AssetError> {
        let fonts = self.partition("font")?;
        if index >= fonts.count {
            return Err(AssetError::BadIndex(index));
        }
        Font::from_chunk(&self.archive.chunk(fonts.start + index)?)
    }

    /// Plain-text chunk from a named partition (`helpart`, `endart`).
    pub fn text_art(&self, partition: &'static str, index: usize) -> Result<String, AssetError> {
        let part = self.partition(partition)?;
        if index >= part.count {
            return Err(AssetError::BadIndex(index));
        }
        Ok(decode_text_art(&self.archive.chunk(part.start + index)?))
    }

    /// B800 screen from the `screens` partition.
    pub fn screen(&self, index: usize) -> Result<TextScreen, AssetError> {
        let screens = self.partition("screens")?;
        if index >= screens.count {
            return Err(AssetError::BadIndex(index));
        }
        TextScreen::from_chunk(&self.archive.chunk(screens.start + index)?)
    }
}

/// Decode a VSWAP wall page: 64x64, column-major, opaque.
pub fn load_texture(
    vswap: &VswapArchive,
    page_index: usize,
    palette: &[Rgb],
) -> Result<IndexedImage, AssetError> {
    let chunk = vswap.chunk(page_index)?;
    let pixels = column_to_row(chunk, TEXTURE_DIMENSION, TEXTURE_DIMENSION)?;
    IndexedImage::new(
        TEXTURE_DIMENSION,
        TEXTURE_DIMENSION,
        pixels,
        palette.to_vec(),
        None,
    )
}
