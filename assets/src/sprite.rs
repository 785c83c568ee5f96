//! VSWAP sprite pages.
//!
//! A sprite page stores only the occupied column range and, per column,
//! a list of vertical posts:
//!
//! | Field Size | Data Type | Content                                  |
//! |------------|-----------|------------------------------------------|
//! | 0x00-0x01  | u16       | First occupied column                    |
//! | 0x02-0x03  | u16       | Last occupied column                     |
//! | then       | u16 * n   | Post list offset per column              |
//!
//! Each post is `end*2, pixel_base, start*2` (u16, i16, u16), with a
//! zero end word terminating the column. Pixels for rows
//! `start..end` of the post live at `pixel_base + row` in the chunk.

use archive::VswapArchive;

use crate::image::{column_to_row, IndexedImage, TRANSPARENT};
use crate::palette::Rgb;
use crate::AssetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteHeader {
    pub left: u16,
    pub right: u16,
    pub post_offsets: Vec<u16>,
}

impl SpriteHeader {
    pub fn from_bytes(chunk: &[u8]) -> Result<Self, AssetError> {
        if chunk.len() < 4 {
            return Err(AssetError::ShortChunk("sprite header"));
        }
        let left = u16::from_le_bytes([chunk[0], chunk[1]]);
        let right = u16::from_le_bytes([chunk[2], chunk[3]]);
        if right < left {
            return Err(AssetError::ShortChunk("sprite column range"));
        }

        let width = (right - left + 1) as usize;
        if chunk.len() < 4 + width * 2 {
            return Err(AssetError::ShortChunk("sprite post offsets"));
        }
        let post_offsets = chunk[4..4 + width * 2]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Ok(Self {
            left,
            right,
            post_offsets,
        })
    }
}

/// Paint the posts onto a `size x size` transparent canvas, still in
/// column-major page order.
pub fn expand(chunk: &[u8], size: usize) -> Result<Vec<u8>, AssetError> {
    if size == 0 {
        return Err(AssetError::BadImageSize {
            width: size,
            height: size,
        });
    }

    let header = SpriteHeader::from_bytes(chunk)?;
    let mut canvas = vec![TRANSPARENT; size * size];

    let read_u16 = |offset: usize| -> Result<u16, AssetError> {
        let bytes = chunk
            .get(offset..offset + 2)
            .ok_or(AssetError::ShortChunk("sprite post"))?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    };

    let mut x = header.left as usize;
    for &post_offset in &header.post_offsets {
        let mut offset = post_offset as usize;
        loop {
            let end = read_u16(offset)? as usize >> 1;
            offset += 2;
            if end == 0 {
                break;
            }
            let base = read_u16(offset)? as i16 as isize;
            let start = read_u16(offset + 2)? as usize >> 1;
            offset += 4;

            for y in start..end {
                let source = base + y as isize;
                let pixel = usize::try_from(source)
                    .ok()
                    .and_then(|source| chunk.get(source))
                    .ok_or(AssetError::ShortChunk("sprite pixels"))?;
                if x < size && y < size {
                    canvas[x * size + y] = *pixel;
                }
            }
        }
        x += 1;
    }

    Ok(canvas)
}

/// Decode a sprite page into a masked row-major image.
pub fn load(
    vswap: &VswapArchive,
    sprite_index: usize,
    palette: &[Rgb],
    size: usize,
) -> Result<IndexedImage, AssetError> {
    let chunk_index = vswap.sprites_start() + sprite_index;
    let chunk = vswap.chunk(chunk_index)?;
    let expanded = expand(chunk, size)?;
    let pixels = column_to_row(&expanded, size, size)?;
    IndexedImage::new(size, size, pixels, palette.to_vec(), Some(TRANSPARENT))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-build a sprite chunk with one post per column.
    /// `columns` maps column x -> (start_row, pixels).
    fn build(size_left: u16, columns: &[(u16, &[u8])]) -> Vec<u8> {
        let width = columns.len();
        let mut chunk = Vec::new();
        chunk.extend(size_left.to_le_bytes());
        chunk.extend((size_left + width as u16 - 1).to_le_bytes());

        // post offset table, patched after layout
        let table_at = chunk.len();
        chunk.resize(chunk.len() + width * 2, 0);

        let mut post_positions = Vec::new();
        for (start, pixels) in columns {
            // pixel data first, posts reference it via base
            let pixels_at = chunk.len();
            chunk.extend_from_slice(pixels);

            let end = *start + pixels.len() as u16;
            let base = pixels_at as i16 - *start as i16;
            let post_at = chunk.len();
            chunk.extend((end * 2).to_le_bytes());
            chunk.extend((base as u16).to_le_bytes());
            chunk.extend((*start * 2).to_le_bytes());
            chunk.extend(0u16.to_le_bytes()); // terminator
            post_positions.push(post_at as u16);
        }

        for (slot, post_at) in post_positions.iter().enumerate() {
            let at = table_at + slot * 2;
            chunk[at..at + 2].copy_from_slice(&post_at.to_le_bytes());
        }
        chunk
    }

    #[test]
    fn header_parses_column_range() {
        let chunk = build(3, &[(0, &[1]), (0, &[2])]);
        let header = SpriteHeader::from_bytes(&chunk).unwrap();
        assert_eq!(header.left, 3);
        assert_eq!(header.right, 4);
        assert_eq!(header.post_offsets.len(), 2);
    }

    #[test]
    fn expand_paints_posts() {
        let chunk = build(1, &[(2, &[7, 8]), (0, &[9])]);
        let canvas = expand(&chunk, 4).unwrap();

        // column 1 rows 2..4
        assert_eq!(canvas[1 * 4 + 2], 7);
        assert_eq!(canvas[1 * 4 + 3], 8);
        // column 2 row 0
        assert_eq!(canvas[2 * 4], 9);
        // everything else transparent
        assert_eq!(canvas[0], TRANSPARENT);
        assert_eq!(canvas[1 * 4 + 1], TRANSPARENT);
        assert_eq!(
            canvas.iter().filter(|&&p| p != TRANSPARENT).count(),
            3
        );
    }

    #[test]
    fn truncated_chunk_rejected() {
        assert!(SpriteHeader::from_bytes(&[1, 0]).is_err());
        let mut chunk = build(0, &[(0, &[5])]);
        chunk.truncate(6);
        assert!(expand(&chunk, 4).is_err());
    }
}
