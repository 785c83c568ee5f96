//! Proportional fonts from the VGAGRAPH `font` partition.
//!
//! A font chunk is a header followed by glyph bitmaps, one byte per
//! pixel (0 = background, nonzero = ink):
//!
//! | Field Size | Data Type | Content                        |
//! |------------|-----------|--------------------------------|
//! | 0x00-0x01  | u16       | Glyph height in pixels         |
//! | 0x02..     | u16 * 256 | Glyph data offset per character |
//! | ..         | u8 * 256  | Glyph width per character       |

use crate::image::IndexedImage;
use crate::palette::Rgb;
use crate::text::char_to_cp437;
use crate::AssetError;

pub const GLYPH_COUNT: usize = 256;

#[derive(Debug, Clone)]
pub struct FontHeader {
    pub height: u16,
    pub offsets: Vec<u16>,
    pub widths: Vec<u8>,
}

impl FontHeader {
    pub const SIZE: usize = 2 + GLYPH_COUNT * 2 + GLYPH_COUNT;

    pub fn from_bytes(chunk: &[u8]) -> Result<Self, AssetError> {
        if chunk.len() < Self::SIZE {
            return Err(AssetError::ShortChunk("font header"));
        }
        let height = u16::from_le_bytes([chunk[0], chunk[1]]);
        if height == 0 {
            return Err(AssetError::BadImageSize {
                width: 0,
                height: 0,
            });
        }

        let offsets = chunk[2..2 + GLYPH_COUNT * 2]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let widths = chunk[2 + GLYPH_COUNT * 2..Self::SIZE].to_vec();

        Ok(Self {
            height,
            offsets,
            widths,
        })
    }
}

/// A decoded font: per-glyph widths and raw pixel masks.
#[derive(Debug, Clone)]
pub struct Font {
    pub height: u16,
    pub widths: Vec<u8>,
    glyphs: Vec<Vec<u8>>,
}

impl Font {
    pub fn from_chunk(chunk: &[u8]) -> Result<Self, AssetError> {
        let header = FontHeader::from_bytes(chunk)?;
        let height = header.height as usize;

        let mut glyphs = Vec::with_capacity(GLYPH_COUNT);
        for glyph in 0..GLYPH_COUNT {
            let width = header.widths[glyph] as usize;
            if width == 0 {
                glyphs.push(Vec::new());
                continue;
            }
            let offset = header.offsets[glyph] as usize;
            let pixels = chunk
                .get(offset..offset + width * height)
                .ok_or(AssetError::ShortChunk("font glyph"))?;
            glyphs.push(pixels.to_vec());
        }

        Ok(Self {
            height: header.height,
            widths: header.widths,
            glyphs,
        })
    }

    /// Raw row-major pixel mask for a glyph; empty for zero-width ones.
    pub fn glyph(&self, index: u8) -> &[u8] {
        &self.glyphs[index as usize]
    }

    /// Render a glyph with the given ink color index over a
    /// transparent background.
    pub fn glyph_image(
        &self,
        index: u8,
        palette: &[Rgb],
        ink: u8,
        background: u8,
    ) -> Result<IndexedImage, AssetError> {
        let width = self.widths[index as usize] as usize;
        if width == 0 {
            return Err(AssetError::BadIndex(index as usize));
        }
        let pixels = self.glyphs[index as usize]
            .iter()
            .map(|&mask| if mask != 0 { ink } else { background })
            .collect();
        IndexedImage::new(
            width,
            self.height as usize,
            pixels,
            palette.to_vec(),
            Some(background),
        )
    }

    /// Pixel width of a string, unknown characters counting as zero.
    pub fn measure(&self, text: &str) -> usize {
        text.chars()
            .filter_map(char_to_cp437)
            .map(|index| self.widths[index as usize] as usize)
            .sum()
    }

    /// Greedy wrap to `max_width` pixels; newlines force a break.
    pub fn wrap<'t>(&self, text: &'t str, max_width: usize) -> Vec<&'t str> {
        let mut lines = Vec::new();
        let mut start = 0usize;
        let mut end = 0usize;
        let mut width = 0usize;

        for (position, c) in text.char_indices() {
            let delta = char_to_cp437(c)
                .map(|index| self.widths[index as usize] as usize)
                .unwrap_or(0);
            let hard_break = c == '\n' || c == '\x0B';

            if width + delta <= max_width && !hard_break {
                width += delta;
                end = position + c.len_utf8();
            } else {
                lines.push(&text[start..end]);
                if hard_break {
                    start = position + c.len_utf8();
                    end = start;
                    width = 0;
                } else {
                    start = end;
                    end = position + c.len_utf8();
                    width = delta;
                }
            }
        }
        if start < text.len() {
            lines.push(&text[start..]);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A font where every glyph referenced is 2x2 with width 2, except
    /// 'i' which is 1 pixel wide.
    fn build() -> Vec<u8> {
        let height = 2u16;
        let mut chunk = vec![0u8; FontHeader::SIZE];
        chunk[0..2].copy_from_slice(&height.to_le_bytes());

        let append_glyph = |chunk: &mut Vec<u8>, ch: u8, pixels: &[u8]| {
            let offset = chunk.len() as u16;
            chunk[2 + ch as usize * 2..4 + ch as usize * 2].copy_from_slice(&offset.to_le_bytes());
            chunk[2 + GLYPH_COUNT * 2 + ch as usize] = (pixels.len() / 2) as u8;
            chunk.extend_from_slice(pixels);
        };

        append_glyph(&mut chunk, b'a', &[1, 0, 0, 1]);
        append_glyph(&mut chunk, b'b', &[1, 1, 1, 1]);
        append_glyph(&mut chunk, b'i', &[1, 1]);
        chunk
    }

    #[test]
    fn glyph_extraction() {
        let font = Font::from_chunk(&build()).unwrap();
        assert_eq!(font.height, 2);
        assert_eq!(font.glyph(b'a'), &[1, 0, 0, 1]);
        assert_eq!(font.glyph(b'i'), &[1, 1]);
        assert!(font.glyph(b'z').is_empty());
    }

    #[test]
    fn measure_sums_widths() {
        let font = Font::from_chunk(&build()).unwrap();
        assert_eq!(font.measure("ab"), 4);
        assert_eq!(font.measure("i"), 1);
        assert_eq!(font.measure("aib"), 5);
    }

    #[test]
    fn wrap_breaks_on_width() {
        let font = Font::from_chunk(&build()).unwrap();
        assert_eq!(font.wrap("aaaa", 4), vec!["aa", "aa"]);
        assert_eq!(font.wrap("ab", 10), vec!["ab"]);
    }

    #[test]
    fn wrap_honours_newline() {
        let font = Font::from_chunk(&build()).unwrap();
        assert_eq!(font.wrap("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn glyph_image_uses_ink() {
        let font = Font::from_chunk(&build()).unwrap();
        let palette = vec![Rgb::default(); 256];
        let image = font.glyph_image(b'a', &palette, 4, 0xFF).unwrap();
        assert_eq!(image.pixels(), &[4, 0xFF, 0xFF, 4]);
    }

    #[test]
    fn short_chunk_rejected() {
        assert!(Font::from_chunk(&[0; 10]).is_err());
    }
}
