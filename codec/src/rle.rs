//! Run-length coding, word (`rlew`) and byte (`rleb`) flavoured.
//!
//! A run is stored as `tag, count, value`; anything else is literal.
//! Runs shorter than four are only tag-encoded when the value itself
//! equals the tag, which doubles as the escape.

use crate::CodecError;

/// Word-oriented RLE over little-endian u16 data. This is the inner
/// layer of GAMEMAPS planes; the tag word comes from the MAPHEAD file
/// (0xABCD for every stock game).
pub mod rlew {
    use super::*;

    pub fn compress(data: &[u8], tag: u16) -> Result<Vec<u8>, CodecError> {
        if data.len() % 2 != 0 {
            return Err(CodecError::OddSize(data.len()));
        }
        let source: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        let mut output: Vec<u16> = Vec::new();
        run_compress(&source, tag, 0xFFFF, &mut output);
        Ok(output.iter().flat_map(|w| w.to_le_bytes()).collect())
    }

    pub fn expand(data: &[u8], tag: u16) -> Result<Vec<u8>, CodecError> {
        if data.len() % 2 != 0 {
            return Err(CodecError::OddSize(data.len()));
        }
        let source: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        let mut output: Vec<u16> = Vec::new();
        run_expand(&source, tag, &mut output);
        Ok(output.iter().flat_map(|w| w.to_le_bytes()).collect())
    }
}

/// Byte-oriented RLE with the same scheme, max run 255.
pub mod rleb {
    use super::*;

    pub fn compress(data: &[u8], tag: u8) -> Vec<u8> {
        let mut output = Vec::new();
        run_compress(data, tag, 0xFF, &mut output);
        output
    }

    pub fn expand(data: &[u8], tag: u8) -> Vec<u8> {
        let mut output = Vec::new();
        run_expand(data, tag, &mut output);
        output
    }
}

fn run_compress<T>(source: &[T], tag: T, max_count: usize, output: &mut Vec<T>)
where
    T: Copy + PartialEq + TryFrom<usize>,
    <T as TryFrom<usize>>::Error: std::fmt::Debug,
{
    let mut count = 0usize;
    let mut old: Option<T> = None;

    for &datum in source {
        if old == Some(datum) && count < max_count {
            count += 1;
        } else {
            flush(output, tag, count, old);
            count = 1;
            old = Some(datum);
        }
    }
    flush(output, tag, count, old);
}

fn flush<T>(output: &mut Vec<T>, tag: T, count: usize, old: Option<T>)
where
    T: Copy + PartialEq + TryFrom<usize>,
    <T as TryFrom<usize>>::Error: std::fmt::Debug,
{
    let Some(old) = old else { return };
    if count > 3 || old == tag {
        output.push(tag);
        // count <= max_count which fits T by construction
        output.push(T::try_from(count).unwrap());
        output.push(old);
    } else {
        output.extend(std::iter::repeat_n(old, count));
    }
}

fn run_expand<T>(source: &[T], tag: T, output: &mut Vec<T>)
where
    T: Copy + PartialEq + Into<usize>,
{
    let mut it = source.iter().copied();
    while let Some(datum) = it.next() {
        if datum == tag {
            let (Some(count), Some(value)) = (it.next(), it.next()) else {
                break;
            };
            output.extend(std::iter::repeat_n(value, count.into()));
        } else {
            output.push(datum);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAG: u16 = 0xABCD;

    fn words(words: &[u16]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    #[test]
    fn short_runs_stay_literal() {
        let plain = words(&[1, 1, 1, 2]);
        let packed = rlew::compress(&plain, TAG).unwrap();
        assert_eq!(packed, plain);
    }

    #[test]
    fn long_runs_collapse() {
        let plain = words(&[9; 40]);
        let packed = rlew::compress(&plain, TAG).unwrap();
        assert_eq!(packed, words(&[TAG, 40, 9]));
        assert_eq!(rlew::expand(&packed, TAG).unwrap(), plain);
    }

    #[test]
    fn tag_value_is_escaped() {
        let plain = words(&[TAG]);
        let packed = rlew::compress(&plain, TAG).unwrap();
        assert_eq!(packed, words(&[TAG, 1, TAG]));
        assert_eq!(rlew::expand(&packed, TAG).unwrap(), plain);
    }

    #[test]
    fn empty_input() {
        assert!(rlew::compress(&[], TAG).unwrap().is_empty());
        assert!(rlew::expand(&[], TAG).unwrap().is_empty());
    }

    #[test]
    fn odd_input_rejected() {
        assert_eq!(
            rlew::compress(&[1, 2, 3], TAG).unwrap_err(),
            CodecError::OddSize(3)
        );
    }

    #[test]
    fn mixed_plane_roundtrip() {
        let mut plain: Vec<u16> = Vec::new();
        plain.extend([107; 64]);
        plain.extend([0, 1, 2, 3]);
        plain.extend([90; 5]);
        plain.push(TAG);
        let bytes = words(&plain);
        let packed = rlew::compress(&bytes, TAG).unwrap();
        assert!(packed.len() < bytes.len());
        assert_eq!(rlew::expand(&packed, TAG).unwrap(), bytes);
    }

    #[test]
    fn byte_runs() {
        let plain = [0u8, 0, 0, 0, 0, 7, 7, 7];
        let packed = rleb::compress(&plain, 0xFE);
        assert_eq!(packed, [0xFE, 5, 0, 7, 7, 7]);
        assert_eq!(rleb::expand(&packed, 0xFE), plain);
    }

    #[test]
    fn byte_run_clamps_at_255() {
        let plain = [4u8; 300];
        let packed = rleb::compress(&plain, 0xFE);
        assert_eq!(packed, [0xFE, 255, 4, 0xFE, 45, 4]);
        assert_eq!(rleb::expand(&packed, 0xFE), plain);
    }
}
