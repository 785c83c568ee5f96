//! The GAMEMAPS level archive and its MAPHEAD directory.
//!
//! MAPHEAD layout:
//!
//! | Field Size | Data Type | Content                                   |
//! |------------|-----------|-------------------------------------------|
//! | 0x00-0x01  | u16       | RLEW tag word (0xABCD in the stock games) |
//! | then       | u32 * n   | Level chunk offsets; 0 or 0xFFFFFFFF = empty slot |
//!
//! Each level chunk starts with a header:
//!
//! | Field Size | Data Type  | Content                                  |
//! |------------|------------|------------------------------------------|
//! | 0x00..     | u32 * p    | Absolute offset of each plane            |
//! | ..         | u16 * p    | Stored byte size of each plane           |
//! | ..+0x00    | u16        | Map width in tiles                       |
//! | ..+0x02    | u16        | Map height in tiles                      |
//! | ..+0x04    | 16 bytes   | NUL-padded ASCII level name              |
//!
//! A plane decodes as: leading u16 expanded size, Carmack expansion,
//! drop the first expanded word (it is the RLEW length), then RLEW
//! expansion with the MAPHEAD tag.

use log::info;
use std::path::Path;

use crate::{backfill_offsets, chunk_size, read_file, validate_offsets, ArchiveError, Reader};
use codec::rle::rlew;

pub const DEFAULT_PLANE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapHeader {
    pub plane_offsets: Vec<u32>,
    pub plane_sizes: Vec<u16>,
    pub width: u16,
    pub height: u16,
    pub name: String,
}

pub struct MapArchive {
    data: Vec<u8>,
    chunk_offsets: Vec<usize>,
    rlew_tag: u16,
    plane_count: usize,
    carmacized: bool,
}

impl MapArchive {
    /// Open MAPHEAD + GAMEMAPS with the stock three planes, Carmack on.
    pub fn from_paths<P: AsRef<Path>>(maphead: P, gamemaps: P) -> Result<Self, ArchiveError> {
        let maphead = maphead.as_ref();
        let gamemaps = gamemaps.as_ref();
        let archive = Self::from_bytes(
            &read_file(maphead)?,
            read_file(gamemaps)?,
            DEFAULT_PLANE_COUNT,
            true,
        )?;
        info!(
            "Loaded {gamemaps:?}: {} level slots, RLEW tag {:#06X}",
            archive.len(),
            archive.rlew_tag
        );
        Ok(archive)
    }

    pub fn from_bytes(
        header: &[u8],
        data: Vec<u8>,
        plane_count: usize,
        carmacized: bool,
    ) -> Result<Self, ArchiveError> {
        if plane_count == 0 {
            return Err(ArchiveError::BadIndex(0));
        }
        let data_size = data.len();

        let mut reader = Reader::new(header);
        let rlew_tag = reader.u16()?;

        let table_size = header.len() - 2;
        if table_size % 4 != 0 {
            return Err(ArchiveError::Misaligned {
                file: "MAPHEAD",
                align: 4,
                size: header.len(),
            });
        }

        let chunk_count = table_size / 4;
        let mut sparse = Vec::with_capacity(chunk_count);
        for _ in 0..chunk_count {
            let offset = reader.u32()?;
            sparse.push((offset != 0 && offset != 0xFFFF_FFFF).then_some(offset as usize));
        }

        let chunk_offsets = backfill_offsets(sparse, data_size);
        validate_offsets(&chunk_offsets, 0, data_size)?;

        Ok(Self {
            data,
            chunk_offsets,
            rlew_tag,
            plane_count,
            carmacized,
        })
    }

    pub fn len(&self) -> usize {
        self.chunk_offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rlew_tag(&self) -> u16 {
        self.rlew_tag
    }

    pub fn plane_count(&self) -> usize {
        self.plane_count
    }

    /// Whether a level slot actually holds a map.
    pub fn has_map(&self, index: usize) -> bool {
        chunk_size(&self.chunk_offsets, index).is_ok_and(|size| size != 0)
    }

    pub fn map_header(&self, index: usize) -> Result<MapHeader, ArchiveError> {
        let size = chunk_size(&self.chunk_offsets, index)?;
        if size == 0 {
            return Err(ArchiveError::NullChunk(index));
        }

        let mut reader = Reader::new(&self.data);
        reader.seek(self.chunk_offsets[index]);

        let mut plane_offsets = Vec::with_capacity(self.plane_count);
        for _ in 0..self.plane_count {
            plane_offsets.push(reader.u32()?);
        }
        let mut plane_sizes = Vec::with_capacity(self.plane_count);
        for _ in 0..self.plane_count {
            plane_sizes.push(reader.u16()?);
        }
        let width = reader.u16()?;
        let height = reader.u16()?;

        let raw_name = reader.bytes(16)?;
        let end = raw_name.iter().position(|&b| b == 0).unwrap_or(16);
        let name = String::from_utf8_lossy(&raw_name[..end])
            .trim_end_matches([' ', '\t', '\r', '\n'])
            .to_string();

        Ok(MapHeader {
            plane_offsets,
            plane_sizes,
            width,
            height,
            name,
        })
    }

    /// Decode every plane of a level into `width * height` tile words.
    pub fn map(&self, index: usize) -> Result<(MapHeader, Vec<Vec<u16>>), ArchiveError> {
        let header = self.map_header(index)?;
        let mut planes = Vec::with_capacity(self.plane_count);

        for plane in 0..self.plane_count {
            let mut reader = Reader::new(&self.data);
            reader.seek(header.plane_offsets[plane] as usize);

            let expanded_size = reader.u16()? as usize;
            let stored = header.plane_sizes[plane] as usize;
            if stored < 2 {
                return Err(ArchiveError::NullChunk(index));
            }
            let compressed = reader.bytes(stored - 2)?;

            let rlew_data;
            let rlew_source: &[u8] = if self.carmacized {
                rlew_data = codec::carmack::expand(compressed, expanded_size)?;
                // first expanded word is the RLEW length
                rlew_data.get(2..).unwrap_or(&[])
            } else {
                compressed
            };

            let plane_bytes = rlew::expand(rlew_source, self.rlew_tag)?;
            planes.push(
                plane_bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect(),
            );
        }

        Ok((header, planes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codec::{carmack, rle::rlew};

    const TAG: u16 = 0xABCD;

    fn le_words(words: &[u16]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    /// Encode one plane the way the MUSE tools did: RLEW with a length
    /// word in front, then Carmack with its own length word in front.
    fn encode_plane(tiles: &[u16]) -> Vec<u8> {
        let raw = le_words(tiles);
        let mut rlewed = le_words(&[raw.len() as u16]);
        rlewed.extend(rlew::compress(&raw, TAG).unwrap());

        let packed = carmack::compress(&rlewed).unwrap();
        let mut plane = le_words(&[rlewed.len() as u16]);
        plane.extend(packed);
        plane
    }

    /// Slot 0 is left empty, slot 1 holds the level. A single pad byte
    /// keeps the chunk offset non-zero (zero marks a sparse slot).
    fn build_archive(tiles: &[Vec<u16>], width: u16, height: u16, name: &str) -> MapArchive {
        let plane_count = tiles.len();
        let chunk_offset = 1usize;
        let header_size = plane_count * 6 + 4 + 16;

        let mut planes_blob = Vec::new();
        let mut plane_offsets = Vec::new();
        let mut plane_sizes = Vec::new();
        for plane in tiles {
            let encoded = encode_plane(plane);
            plane_offsets.push((chunk_offset + header_size + planes_blob.len()) as u32);
            plane_sizes.push(encoded.len() as u16);
            planes_blob.extend(encoded);
        }

        let mut data = vec![0u8];
        for offset in &plane_offsets {
            data.extend(offset.to_le_bytes());
        }
        for size in &plane_sizes {
            data.extend(size.to_le_bytes());
        }
        data.extend(width.to_le_bytes());
        data.extend(height.to_le_bytes());
        let mut name_field = [0u8; 16];
        name_field[..name.len()].copy_from_slice(name.as_bytes());
        data.extend(name_field);
        data.extend(planes_blob);

        let mut header = TAG.to_le_bytes().to_vec();
        header.extend(u32::MAX.to_le_bytes());
        header.extend((chunk_offset as u32).to_le_bytes());
        MapArchive::from_bytes(&header, data, plane_count, true).unwrap()
    }

    #[test]
    fn sparse_slot_is_empty() {
        let archive = build_archive(&[vec![0; 16]], 4, 4, "TEST");
        assert_eq!(archive.len(), 2);
        assert!(!archive.has_map(0));
        assert!(archive.has_map(1));
        assert!(matches!(
            archive.map_header(0),
            Err(ArchiveError::NullChunk(0))
        ));
    }

    #[test]
    fn header_fields() {
        let archive = build_archive(&[vec![1; 24], vec![2; 24]], 6, 4, "BUNKER");
        let header = archive.map_header(1).unwrap();
        assert_eq!(header.width, 6);
        assert_eq!(header.height, 4);
        assert_eq!(header.name, "BUNKER");
        assert_eq!(header.plane_offsets.len(), 2);
    }

    #[test]
    fn planes_roundtrip() {
        let mut wall_plane = vec![90u16; 64];
        for (i, tile) in wall_plane.iter_mut().enumerate().take(8) {
            *tile = i as u16;
        }
        let object_plane: Vec<u16> = (0..64).map(|i| (i % 5) as u16 * 23).collect();

        let archive = build_archive(&[wall_plane.clone(), object_plane.clone()], 8, 8, "E1M1");
        let (header, planes) = archive.map(1).unwrap();
        assert_eq!(header.name, "E1M1");
        assert_eq!(planes.len(), 2);
        assert_eq!(planes[0], wall_plane);
        assert_eq!(planes[1], object_plane);
    }

    #[test]
    fn rlew_tag_from_header() {
        let archive = build_archive(&[vec![0; 4]], 2, 2, "X");
        assert_eq!(archive.rlew_tag(), TAG);
    }
}
