//! The AUDIOT archive and its AUDIOHED directory: PC speaker sounds,
//! AdLib sounds and IMF music, stored uncompressed. AUDIOHED is a bare
//! run of u32 offsets into AUDIOT; which index range holds what is a
//! per-game convention (see the partition tables in `assets`).

use log::info;
use std::path::Path;

use crate::{chunk_size, read_file, validate_offsets, ArchiveError, Reader};

pub struct AudioArchive {
    data: Vec<u8>,
    chunk_offsets: Vec<usize>,
}

impl AudioArchive {
    pub fn from_paths<P: AsRef<Path>>(audiohed: P, audiot: P) -> Result<Self, ArchiveError> {
        let audiot = audiot.as_ref();
        let archive = Self::from_bytes(&read_file(audiohed.as_ref())?, read_file(audiot)?)?;
        info!("Loaded {audiot:?}: {} chunks", archive.len());
        Ok(archive)
    }

    pub fn from_bytes(header: &[u8], data: Vec<u8>) -> Result<Self, ArchiveError> {
        if header.len() % 4 != 0 {
            return Err(ArchiveError::Misaligned {
                file: "AUDIOHED",
                align: 4,
                size: header.len(),
            });
        }

        let chunk_count = header.len() / 4;
        let mut reader = Reader::new(header);
        let mut chunk_offsets = Vec::with_capacity(chunk_count + 1);
        for _ in 0..chunk_count {
            chunk_offsets.push(reader.u32()? as usize);
        }
        chunk_offsets.push(data.len());
        validate_offsets(&chunk_offsets, 0, data.len())?;

        Ok(Self {
            data,
            chunk_offsets,
        })
    }

    pub fn len(&self) -> usize {
        self.chunk_offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn size_of(&self, index: usize) -> Result<usize, ArchiveError> {
        chunk_size(&self.chunk_offsets, index)
    }

    pub fn chunk(&self, index: usize) -> Result<&[u8], ArchiveError> {
        let size = self.size_of(index)?;
        let offset = self.chunk_offsets[index];
        Ok(&self.data[offset..offset + size])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(chunks: &[&[u8]]) -> AudioArchive {
        let mut header = Vec::new();
        let mut data = Vec::new();
        for chunk in chunks {
            header.extend((data.len() as u32).to_le_bytes());
            data.extend_from_slice(chunk);
        }
        AudioArchive::from_bytes(&header, data).unwrap()
    }

    #[test]
    fn chunks_round_trip() {
        let archive = build(&[b"buzzer", b"", b"adlib data", b"music"]);
        assert_eq!(archive.len(), 4);
        assert_eq!(archive.chunk(0).unwrap(), b"buzzer");
        assert_eq!(archive.chunk(1).unwrap(), b"");
        assert_eq!(archive.chunk(2).unwrap(), b"adlib data");
        assert_eq!(archive.chunk(3).unwrap(), b"music");
        assert!(archive.chunk(4).is_err());
    }

    #[test]
    fn misaligned_header_rejected() {
        assert!(matches!(
            AudioArchive::from_bytes(&[0, 0, 0], Vec::new()),
            Err(ArchiveError::Misaligned { .. })
        ));
    }

    #[test]
    fn offsets_validated() {
        let mut header = Vec::new();
        header.extend(9u32.to_le_bytes());
        assert!(AudioArchive::from_bytes(&header, vec![0; 4]).is_err());
    }
}
