//! The compression schemes used by the id Software / MUSE data files:
//!
//! - Huffman coding (VGAGRAPH chunks, dictionary in VGADICT)
//! - Carmack word-copy compression (GAMEMAPS planes, outer layer)
//! - RLEW word run-length coding (GAMEMAPS planes, inner layer)
//! - RLEB byte run-length coding (used by some derived games)
//!
//! Everything here is pure: slices in, `Vec` out, no I/O. The archive
//! readers in the `archive` crate drive these with sizes taken from the
//! file directories.

pub mod carmack;
pub mod huffman;
pub mod rle;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("not enough data to compress")]
    NotEnoughData,

    #[error("data size must be divisible by 2: {0}")]
    OddSize(usize),

    #[error("expanded size must be positive and divisible by 2: {0}")]
    BadExpandedSize(usize),

    #[error("huffman mask too long")]
    MaskTooLong,

    #[error("huffman last code was not a node")]
    LeafTerminated,

    #[error("huffman head node out of place")]
    WrongHeadNode,
}
