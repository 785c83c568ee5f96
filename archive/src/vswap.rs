//! The VSWAP page file: wall textures, sprites and digitized sounds.
//!
//! The header is followed directly by the page directory:
//!
//! | Field Size | Data Type | Content                                  |
//! |------------|-----------|------------------------------------------|
//! | 0x00-0x01  | u16       | Page (chunk) count                       |
//! | 0x02-0x03  | u16       | Index of the first sprite page           |
//! | 0x04-0x05  | u16       | Index of the first digitized sound page  |
//! | then       | u32 * n   | Absolute page offsets (0 = unused slot)  |
//!
//! The very last page is a table of `(start_page, length)` u16 pairs:
//! one entry per digitized sound. A sound longer than one page spans
//! consecutive pages, and a length above 64 KiB overflows its u16, so
//! the real byte count is recovered from the page sizes.

use log::info;
use std::path::Path;

use crate::{backfill_offsets, chunk_size, read_file, validate_offsets, ArchiveError, Reader};

/// Location of one digitized sound inside the sound pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundSpan {
    /// First page, relative to `sounds_start`.
    pub start: usize,
    /// Length in bytes, u16 overflow already corrected.
    pub length: u32,
}

pub struct VswapArchive {
    data: Vec<u8>,
    chunk_offsets: Vec<usize>,
    sprites_start: usize,
    sounds_start: usize,
    sound_spans: Vec<SoundSpan>,
}

impl VswapArchive {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let archive = Self::from_bytes(read_file(path)?)?;
        info!(
            "Loaded {path:?}: {} pages, {} sounds",
            archive.len(),
            archive.sound_spans.len()
        );
        Ok(archive)
    }

    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ArchiveError> {
        let data_size = data.len();
        let mut reader = Reader::new(&data);

        let chunk_count = reader.u16()? as usize;
        let sprites_start = reader.u16()? as usize;
        let sounds_start = reader.u16()? as usize;

        let mut sparse = Vec::with_capacity(chunk_count);
        for _ in 0..chunk_count {
            let offset = reader.u32()? as usize;
            sparse.push((offset != 0).then_some(offset));
        }

        let chunk_offsets = backfill_offsets(sparse, data_size);
        let pages_offset = chunk_offsets[0];
        validate_offsets(&chunk_offsets, pages_offset, data_size)?;

        let mut archive = Self {
            data,
            chunk_offsets,
            sprites_start,
            sounds_start,
            sound_spans: Vec::new(),
        };
        archive.sound_spans = archive.read_sound_spans()?;
        Ok(archive)
    }

    pub fn len(&self) -> usize {
        self.chunk_offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sprites_start(&self) -> usize {
        self.sprites_start
    }

    pub fn sounds_start(&self) -> usize {
        self.sounds_start
    }

    pub fn sound_spans(&self) -> &[SoundSpan] {
        &self.sound_spans
    }

    pub fn size_of(&self, index: usize) -> Result<usize, ArchiveError> {
        chunk_size(&self.chunk_offsets, index)
    }

    /// Raw page bytes. Unused slots come back empty.
    pub fn chunk(&self, index: usize) -> Result<&[u8], ArchiveError> {
        let size = self.size_of(index)?;
        let offset = self.chunk_offsets[index];
        Ok(&self.data[offset..offset + size])
    }

    /// Concatenate the pages of a digitized sound, truncated to its
    /// recorded length.
    pub fn sampled_sound(&self, sound_index: usize) -> Result<Vec<u8>, ArchiveError> {
        let span = *self
            .sound_spans
            .get(sound_index)
            .ok_or(ArchiveError::BadIndex(sound_index))?;

        let mut samples = Vec::with_capacity(span.length as usize);
        let mut chunk_index = self.sounds_start + span.start;
        let mut remaining = span.length as usize;

        while remaining > 0 {
            let chunk = self.chunk(chunk_index)?;
            if chunk.len() <= remaining {
                samples.extend_from_slice(chunk);
                remaining -= chunk.len();
            } else {
                samples.extend_from_slice(&chunk[..remaining]);
                break;
            }
            chunk_index += 1;
        }

        Ok(samples)
    }

    fn read_sound_spans(&self) -> Result<Vec<SoundSpan>, ArchiveError> {
        let chunk_count = self.len();
        if chunk_count == 0 {
            return Ok(Vec::new());
        }

        let table = self.chunk(chunk_count - 1)?;
        if table.len() % 4 != 0 {
            return Err(ArchiveError::Misaligned {
                file: "VSWAP sound table",
                align: 4,
                size: table.len(),
            });
        }

        let count = table.len() / 4;
        let mut reader = Reader::new(table);
        let mut bounds = Vec::with_capacity(count + 1);
        for _ in 0..count {
            let start = reader.u16()? as usize;
            let length = reader.u16()? as u32;
            bounds.push((start, length));
        }
        let tail_length = bounds.last().map(|b| b.1).unwrap_or(0);
        bounds.push((chunk_count.saturating_sub(self.sounds_start), tail_length));

        let mut spans = Vec::with_capacity(count);
        for index in 0..count {
            let (start, length) = bounds[index];
            if start >= chunk_count - 1 {
                // table padding past the real pages
                break;
            }

            let mut last = bounds[index + 1].0;
            if last == 0 || last + self.sounds_start > chunk_count - 1 {
                last = chunk_count - 1;
            } else {
                last += self.sounds_start;
            }

            let mut actual: u32 = 0;
            for chunk_index in (self.sounds_start + start)..last {
                actual += self.size_of(chunk_index)? as u32;
            }
            if actual & 0xFFFF_0000 != 0 && (actual & 0xFFFF) < length {
                actual -= 0x1_0000;
            }
            let length = (actual & 0xFFFF_0000) | length;

            spans.push(SoundSpan { start, length });
        }

        Ok(spans)
    }
}
