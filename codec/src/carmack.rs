//! Carmack compression, the outer layer of GAMEMAPS level planes.
//!
//! The stream is a sequence of little-endian words. A word whose high
//! byte is one of the two tags is an instruction:
//!
//! | Bytes          | Meaning                                             |
//! |----------------|-----------------------------------------------------|
//! | `count, 0xA7, dist`        | copy `count` words from `out - dist` words back |
//! | `count, 0xA8, lo, hi`      | copy `count` words from absolute word `hi:lo`   |
//! | `0, tag, low`              | literal word `low` with high byte `tag`         |
//!
//! Anything else is a literal word. `count` never exceeds 255.

use crate::CodecError;

pub const NEAR_TAG: u8 = 0xA7;
pub const FAR_TAG: u8 = 0xA8;

/// Expand to `expanded_size` bytes. A truncated stream stops early and
/// returns what was produced; the map reader decides what to do with a
/// short plane.
pub fn expand(data: &[u8], expanded_size: usize) -> Result<Vec<u8>, CodecError> {
    if expanded_size < 2 || expanded_size % 2 != 0 {
        return Err(CodecError::BadExpandedSize(expanded_size));
    }

    let mut output: Vec<u8> = Vec::with_capacity(expanded_size);
    let mut it = data.iter().copied();
    let mut ahead = expanded_size >> 1;

    while ahead > 0 {
        let (Some(count), Some(tag)) = (it.next(), it.next()) else {
            break;
        };

        if tag == NEAR_TAG || tag == FAR_TAG {
            if count != 0 {
                if ahead < count as usize {
                    break;
                }
                let offset = if tag == NEAR_TAG {
                    let Some(dist) = it.next() else { break };
                    match output.len().checked_sub((dist as usize) << 1) {
                        Some(offset) => offset,
                        None => break,
                    }
                } else {
                    let (Some(lo), Some(hi)) = (it.next(), it.next()) else {
                        break;
                    };
                    (lo as usize | (hi as usize) << 8) << 1
                };
                if offset >= output.len() {
                    break;
                }
                // byte-wise forward copy so a run may overlap its source
                for i in 0..((count as usize) << 1) {
                    let byte = output[offset + i];
                    output.push(byte);
                }
                ahead -= count as usize;
            } else {
                // escaped literal whose high byte collides with a tag
                let Some(low) = it.next() else { break };
                output.push(low);
                output.push(tag);
                ahead -= 1;
            }
        } else {
            output.push(count);
            output.push(tag);
            ahead -= 1;
        }
    }

    Ok(output)
}

/// Greedy single-pass compressor matching the original tool's output
/// closely enough to round-trip: longest earlier match wins, near form
/// preferred while the distance fits a byte.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    if data.len() < 2 {
        return Err(CodecError::NotEnoughData);
    }
    if data.len() % 2 != 0 {
        return Err(CodecError::OddSize(data.len()));
    }

    let source: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    let mut output: Vec<u8> = Vec::new();
    let mut ahead = source.len();
    let mut index = 0usize;

    while ahead > 0 {
        let word = source[index];
        let mut count = 0usize;
        let mut matched = 0usize;

        for scan in 0..index {
            if source[scan] != word {
                continue;
            }
            let limit = (index - scan).min(ahead).min(255);
            let length = if limit > 1 {
                let mut length = limit - 1;
                for step in 1..limit {
                    if source[scan + step] != source[index + step] {
                        length = step;
                        break;
                    }
                }
                length
            } else {
                1
            };

            if count <= length {
                count = length;
                matched = scan;
            }
        }

        if count > 1 && index - matched <= 255 {
            output.push(count as u8);
            output.push(NEAR_TAG);
            output.push((index - matched) as u8);
        } else if count > 2 {
            output.push(count as u8);
            output.push(FAR_TAG);
            output.push((matched & 0xFF) as u8);
            output.push((matched >> 8) as u8);
        } else {
            let tag = (word >> 8) as u8;
            if tag == NEAR_TAG || tag == FAR_TAG {
                output.push(0);
                output.push(tag);
                output.push((word & 0xFF) as u8);
            } else {
                output.push((word & 0xFF) as u8);
                output.push(tag);
            }
            count = 1;
        }

        index += count;
        ahead -= count;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(words: &[u16]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn literal_words_pass_through() {
        let plain = words(&[0x0001, 0x0203, 0x1234]);
        let out = expand(&plain, 6).unwrap();
        assert_eq!(out, plain);
    }

    #[test]
    fn near_copy() {
        // two literals then copy 2 words from 2 words back
        let stream = [0x01, 0x00, 0x02, 0x00, 2, NEAR_TAG, 2];
        let out = expand(&stream, 8).unwrap();
        assert_eq!(out, words(&[1, 2, 1, 2]));
    }

    #[test]
    fn far_copy() {
        let stream = [0x0A, 0x00, 0x0B, 0x00, 2, FAR_TAG, 0, 0];
        let out = expand(&stream, 8).unwrap();
        assert_eq!(out, words(&[0x0A, 0x0B, 0x0A, 0x0B]));
    }

    #[test]
    fn overlapping_near_copy_repeats() {
        // one literal, then copy 3 words from 1 word back: run-length fill
        let stream = [0x07, 0x00, 3, NEAR_TAG, 1];
        let out = expand(&stream, 8).unwrap();
        assert_eq!(out, words(&[7, 7, 7, 7]));
    }

    #[test]
    fn escaped_tag_word() {
        let stream = [0, NEAR_TAG, 0x55];
        let out = expand(&stream, 2).unwrap();
        assert_eq!(out, words(&[(NEAR_TAG as u16) << 8 | 0x55]));
    }

    #[test]
    fn truncated_input_stops_short() {
        let stream = [0x01, 0x00];
        let out = expand(&stream, 8).unwrap();
        assert_eq!(out, words(&[1]));
    }

    #[test]
    fn odd_sizes_rejected() {
        assert_eq!(
            expand(&[0, 0], 3).unwrap_err(),
            CodecError::BadExpandedSize(3)
        );
        assert_eq!(compress(&[0, 0, 0]).unwrap_err(), CodecError::OddSize(3));
        assert_eq!(compress(&[0]).unwrap_err(), CodecError::NotEnoughData);
    }

    #[test]
    fn compress_roundtrip() {
        let plain = words(&[
            5, 5, 5, 5, 9, 8, 7, 9, 8, 7, 9, 8, 7, 1, 0xA700, 0xA855, 2, 2, 2, 2, 2, 2,
        ]);
        let packed = compress(&plain).unwrap();
        let out = expand(&packed, plain.len()).unwrap();
        assert_eq!(out, plain);
    }

    #[test]
    fn compress_shrinks_repetition() {
        let plain = words(&[3; 300]);
        let packed = compress(&plain).unwrap();
        assert!(packed.len() < plain.len());
        assert_eq!(expand(&packed, plain.len()).unwrap(), plain);
    }
}
