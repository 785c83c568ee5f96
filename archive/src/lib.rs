//! Readers for the four archive files a Wolfenstein 3D data set is made
//! of. Each reader loads the whole file into memory, parses and
//! validates a chunk directory up front, then decodes chunks on demand.
//!
//! | File      | Directory source     | Contents                         |
//! |-----------|----------------------|----------------------------------|
//! | VSWAP.*   | in-file header       | wall pages, sprites, digitized sound |
//! | GAMEMAPS.*| MAPHEAD.*            | level tile planes (Carmack+RLEW) |
//! | VGAGRAPH.*| VGAHEAD.* + VGADICT.*| pics, fonts, screens (Huffman)   |
//! | AUDIOT.*  | AUDIOHED.*           | PC speaker, AdLib, music         |
//!
//! Every directory gets a sentinel end offset appended so a chunk's size
//! is always `offsets[i + 1] - offsets[i]`. Sparse directory entries
//! (unused slots) are back-filled from the following offset, giving the
//! missing chunk a size of zero.

pub mod audio;
pub mod graphics;
pub mod maps;
pub mod vswap;

pub use audio::AudioArchive;
pub use graphics::{GraphicsArchive, GraphicsPartition};
pub use maps::{MapArchive, MapHeader};
pub use vswap::{SoundSpan, VswapArchive};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unexpected end of data at offset {0}")]
    UnexpectedEof(usize),

    #[error("{file} size must be divisible by {align}: {size}")]
    Misaligned {
        file: &'static str,
        align: usize,
        size: usize,
    },

    #[error("invalid offset value: chunk {0}")]
    OffsetRange(usize),

    #[error("invalid offset ordering: chunk {0}")]
    OffsetOrder(usize),

    #[error("chunk index out of range: {0}")]
    BadIndex(usize),

    #[error("null chunk: {0}")]
    NullChunk(usize),

    #[error("chunk index without partition: {0}")]
    NoPartition(usize),

    #[error(transparent)]
    Codec(#[from] codec::CodecError),
}

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, ArchiveError> {
    std::fs::read(path).map_err(|source| ArchiveError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Bounds-checked little-endian cursor over raw file data.
pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub(crate) fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub(crate) fn bytes(&mut self, count: usize) -> Result<&'a [u8], ArchiveError> {
        let end = self.pos + count;
        if end > self.data.len() {
            return Err(ArchiveError::UnexpectedEof(self.pos));
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub(crate) fn u16(&mut self) -> Result<u16, ArchiveError> {
        let b = self.bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub(crate) fn u32(&mut self) -> Result<u32, ArchiveError> {
        let b = self.bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }
}

/// Replace sparse entries with the next real offset, scanning backward,
/// and append the data size as the sentinel end offset.
pub(crate) fn backfill_offsets(sparse: Vec<Option<usize>>, data_size: usize) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(sparse.len() + 1);
    offsets.resize(sparse.len() + 1, data_size);
    for (index, entry) in sparse.iter().enumerate().rev() {
        offsets[index] = match entry {
            Some(offset) => *offset,
            None => offsets[index + 1],
        };
    }
    offsets
}

/// Every offset must land inside the data and never step backward.
pub(crate) fn validate_offsets(
    offsets: &[usize],
    floor: usize,
    data_size: usize,
) -> Result<(), ArchiveError> {
    for index in 0..offsets.len() - 1 {
        if offsets[index] < floor || offsets[index] > data_size {
            return Err(ArchiveError::OffsetRange(index));
        }
        if offsets[index] > offsets[index + 1] {
            return Err(ArchiveError::OffsetOrder(index));
        }
    }
    Ok(())
}

pub(crate) fn chunk_size(offsets: &[usize], index: usize) -> Result<usize, ArchiveError> {
    if index + 1 >= offsets.len() {
        return Err(ArchiveError::BadIndex(index));
    }
    Ok(offsets[index + 1] - offsets[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backfill_fills_from_next() {
        let sparse = vec![Some(0), None, Some(10), None, None];
        assert_eq!(backfill_offsets(sparse, 20), vec![0, 10, 10, 20, 20, 20]);
    }

    #[test]
    fn validate_rejects_backward_offsets() {
        assert!(validate_offsets(&[0, 8, 4, 16], 0, 16).is_err());
        assert!(validate_offsets(&[0, 4, 8, 16], 0, 16).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(validate_offsets(&[0, 32], 0, 16).is_err());
        assert!(validate_offsets(&[2, 8], 4, 16).is_err());
    }

    #[test]
    fn reader_eof() {
        let mut r = Reader::new(&[1, 2, 3]);
        assert_eq!(r.u16().unwrap(), 0x0201);
        assert!(matches!(r.u32(), Err(ArchiveError::UnexpectedEof(2))));
    }
}
