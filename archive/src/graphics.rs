//! The VGAGRAPH graphics archive, split across three files:
//!
//! - VGAHEAD: one 3-byte little-endian offset per chunk, `0xFFFFFF`
//!   marking an unused slot.
//! - VGADICT: the 256-node Huffman dictionary, four bytes per node.
//! - VGAGRAPH: the Huffman-compressed chunks themselves.
//!
//! Chunk indices are carved into named partitions (fonts, pics, 8x8
//! tiles, screens, text art...) by a per-game table. Most chunks carry
//! their expanded size as a leading u32; the 8x8 tile partitions do
//! not, their sizes being implied by the tile counts. Chunk 0 of the
//! `struct` partition is the pic table: a `(width, height)` u16 pair
//! for every chunk of the `pics` partition.

use log::info;
use std::path::Path;

use crate::{backfill_offsets, chunk_size, read_file, validate_offsets, ArchiveError, Reader};
use codec::huffman;

const TILE_BLOCK: usize = 8 * 8;
const TILE_MASKBLOCK: usize = 8 * 8 * 2;

/// A named span of chunk indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsPartition {
    pub name: &'static str,
    pub start: usize,
    pub count: usize,
}

impl GraphicsPartition {
    pub const fn new(name: &'static str, start: usize, count: usize) -> Self {
        Self { name, start, count }
    }

    /// All `tile8*` chunks of a partition share a single archive chunk.
    fn chunk_span(&self) -> usize {
        if self.count != 0 && self.name.starts_with("tile8") {
            1
        } else {
            self.count
        }
    }

    fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.start + self.chunk_span()
    }
}

pub struct GraphicsArchive {
    data: Vec<u8>,
    chunk_offsets: Vec<usize>,
    nodes: huffman::Nodes,
    partitions: Vec<GraphicsPartition>,
    pic_sizes: Vec<(u16, u16)>,
}

impl GraphicsArchive {
    pub fn from_paths<P: AsRef<Path>>(
        vgagraph: P,
        vgahead: P,
        vgadict: P,
        partitions: &[GraphicsPartition],
    ) -> Result<Self, ArchiveError> {
        let vgagraph = vgagraph.as_ref();
        let archive = Self::from_bytes(
            read_file(vgagraph)?,
            &read_file(vgahead.as_ref())?,
            &read_file(vgadict.as_ref())?,
            partitions,
            0,
        )?;
        info!("Loaded {vgagraph:?}: {} chunks", archive.len());
        Ok(archive)
    }

    pub fn from_bytes(
        data: Vec<u8>,
        header: &[u8],
        dictionary: &[u8],
        partitions: &[GraphicsPartition],
        pic_table_index: usize,
    ) -> Result<Self, ArchiveError> {
        let data_size = data.len();

        if header.len() % 3 != 0 {
            return Err(ArchiveError::Misaligned {
                file: "VGAHEAD",
                align: 3,
                size: header.len(),
            });
        }
        if dictionary.len() < 4 * huffman::NODE_COUNT {
            return Err(ArchiveError::UnexpectedEof(dictionary.len()));
        }

        let chunk_count = header.len() / 3;
        let mut sparse = Vec::with_capacity(chunk_count);
        for entry in header.chunks_exact(3) {
            let offset = entry[0] as usize | (entry[1] as usize) << 8 | (entry[2] as usize) << 16;
            sparse.push((offset < 0xFF_FFFF).then_some(offset));
        }

        let chunk_offsets = backfill_offsets(sparse, data_size);
        validate_offsets(&chunk_offsets, 0, data_size)?;

        let mut nodes = [(0u16, 0u16); huffman::NODE_COUNT];
        let mut reader = Reader::new(dictionary);
        for node in nodes.iter_mut() {
            node.0 = reader.u16()?;
            node.1 = reader.u16()?;
        }

        let mut archive = Self {
            data,
            chunk_offsets,
            nodes,
            partitions: partitions.to_vec(),
            pic_sizes: Vec::new(),
        };
        archive.pic_sizes = archive.read_pic_table(pic_table_index)?;
        Ok(archive)
    }

    pub fn len(&self) -> usize {
        self.chunk_offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn partitions(&self) -> &[GraphicsPartition] {
        &self.partitions
    }

    pub fn partition(&self, name: &str) -> Option<&GraphicsPartition> {
        self.partitions.iter().find(|p| p.name == name)
    }

    /// The partition a chunk index falls in.
    pub fn find_partition(&self, index: usize) -> Result<&GraphicsPartition, ArchiveError> {
        self.partitions
            .iter()
            .find(|p| p.contains(index))
            .ok_or(ArchiveError::NoPartition(index))
    }

    /// `(width, height)` of every pic in the `pics` partition.
    pub fn pic_sizes(&self) -> &[(u16, u16)] {
        &self.pic_sizes
    }

    pub fn size_of(&self, index: usize) -> Result<usize, ArchiveError> {
        chunk_size(&self.chunk_offsets, index)
    }

    /// Huffman-expand a chunk. Unused slots come back empty.
    pub fn chunk(&self, index: usize) -> Result<Vec<u8>, ArchiveError> {
        let stored = self.size_of(index)?;
        if stored == 0 {
            return Ok(Vec::new());
        }

        let offset = self.chunk_offsets[index];
        let partition = self.find_partition(index)?;
        let (skip, expanded) = match partition.name {
            "tile8" => (0, TILE_BLOCK * partition.count),
            "tile8m" => (0, TILE_MASKBLOCK * partition.count),
            "tile16" => (0, TILE_BLOCK * 4),
            "tile16m" => (0, TILE_MASKBLOCK * 4),
            "tile32" => (0, TILE_BLOCK * 16),
            "tile32m" => (0, TILE_MASKBLOCK * 16),
            _ => {
                let mut reader = Reader::new(&self.data);
                reader.seek(offset);
                (4, reader.u32()? as usize)
            }
        };

        if offset + skip > self.data.len() || stored < skip {
            return Err(ArchiveError::UnexpectedEof(offset));
        }
        let compressed = &self.data[offset + skip..offset + stored];
        Ok(huffman::expand(compressed, expanded, &self.nodes))
    }

    fn read_pic_table(&self, index: usize) -> Result<Vec<(u16, u16)>, ArchiveError> {
        let Some(pics) = self.partition("pics") else {
            return Ok(Vec::new());
        };
        let count = pics.count;
        let table = self.chunk(index)?;

        let mut reader = Reader::new(&table);
        let mut sizes = Vec::with_capacity(count);
        for _ in 0..count {
            let width = reader.u16()?;
            let height = reader.u16()?;
            sizes.push((width, height));
        }
        Ok(sizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partitions() -> Vec<GraphicsPartition> {
        vec![
            GraphicsPartition::new("struct", 0, 1),
            GraphicsPartition::new("pics", 1, 2),
            GraphicsPartition::new("tile8", 3, 4),
            GraphicsPartition::new("endart", 4, 1),
        ]
    }

    /// Compress `chunks` with a shared dictionary and assemble the
    /// three archive files. `sized` chunks get the explicit u32 prefix.
    fn build(chunks: &[(&[u8], bool)]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
        let mut all = Vec::new();
        for (payload, _) in chunks {
            all.extend_from_slice(payload);
        }
        let counts = huffman::count_frequencies(&all);
        let nodes = huffman::build_nodes(&counts).unwrap();
        let (shifts, masks) = huffman::build_masks(&counts, &nodes).unwrap();

        let mut dictionary = Vec::with_capacity(4 * huffman::NODE_COUNT);
        for (zero, one) in nodes.iter() {
            dictionary.extend(zero.to_le_bytes());
            dictionary.extend(one.to_le_bytes());
        }

        let mut data = Vec::new();
        let mut header = Vec::new();
        for (payload, sized) in chunks {
            header.extend_from_slice(&(data.len() as u32).to_le_bytes()[..3]);
            if *sized {
                data.extend((payload.len() as u32).to_le_bytes());
            }
            data.extend(huffman::compress(payload, &shifts, &masks));
        }

        (data, header, dictionary)
    }

    fn pic_table(sizes: &[(u16, u16)]) -> Vec<u8> {
        sizes
            .iter()
            .flat_map(|(w, h)| {
                let mut b = w.to_le_bytes().to_vec();
                b.extend(h.to_le_bytes());
                b
            })
            .collect()
    }

    #[test]
    fn pic_table_and_chunks() {
        let table = pic_table(&[(8, 4), (4, 4)]);
        let pic_a = vec![0xAAu8; 32];
        let pic_b: Vec<u8> = (0..16).collect();
        let tiles = vec![0x17u8; TILE_BLOCK * 4];
        let screen = b"floor13".repeat(11);

        let (data, header, dictionary) = build(&[
            (&table, true),
            (&pic_a, true),
            (&pic_b, true),
            (&tiles, false),
            (&screen, true),
        ]);
        let archive =
            GraphicsArchive::from_bytes(data, &header, &dictionary, &partitions(), 0).unwrap();

        assert_eq!(archive.len(), 5);
        assert_eq!(archive.pic_sizes(), &[(8, 4), (4, 4)]);
        assert_eq!(archive.chunk(1).unwrap(), pic_a);
        assert_eq!(archive.chunk(2).unwrap(), pic_b);
        assert_eq!(archive.chunk(3).unwrap(), tiles);
        assert_eq!(archive.chunk(4).unwrap(), screen);
    }

    #[test]
    fn partition_lookup() {
        let archive = {
            let table = pic_table(&[(4, 4), (4, 4)]);
            let (data, header, dictionary) =
                build(&[(&table, true), (&[1u8; 16], true), (&[2u8; 16], true)]);
            GraphicsArchive::from_bytes(data, &header, &dictionary, &partitions(), 0).unwrap()
        };

        assert_eq!(archive.find_partition(0).unwrap().name, "struct");
        assert_eq!(archive.find_partition(2).unwrap().name, "pics");
        // the tile8 partition owns exactly one chunk despite count 4
        assert_eq!(archive.find_partition(3).unwrap().name, "tile8");
        assert_eq!(archive.find_partition(4).unwrap().name, "endart");
        assert!(matches!(
            archive.find_partition(40),
            Err(ArchiveError::NoPartition(40))
        ));
    }

    #[test]
    fn sparse_chunk_is_empty() {
        let table = pic_table(&[(4, 4), (4, 4)]);
        let (data, mut header, dictionary) = build(&[(&table, true), (&[9u8; 16], true)]);
        // append an unused slot
        header.extend([0xFF, 0xFF, 0xFF]);
        let archive =
            GraphicsArchive::from_bytes(data, &header, &dictionary, &partitions(), 0).unwrap();
        assert_eq!(archive.len(), 3);
        assert!(archive.chunk(2).unwrap().is_empty());
    }

    #[test]
    fn misaligned_header_rejected() {
        assert!(matches!(
            GraphicsArchive::from_bytes(Vec::new(), &[0, 0], &[0; 1024], &partitions(), 0),
            Err(ArchiveError::Misaligned { .. })
        ));
    }

    #[test]
    fn short_dictionary_rejected() {
        assert!(matches!(
            GraphicsArchive::from_bytes(Vec::new(), &[], &[0; 100], &partitions(), 0),
            Err(ArchiveError::UnexpectedEof(100))
        ));
    }
}
