//! Minimal RIFF/WAVE writer: PCM, mono, unsigned 8-bit, which is the
//! native format of every sound this crate decodes.

use std::io::Write;

use crate::AssetError;

pub fn write_wav<W: Write>(
    writer: &mut W,
    sample_rate: u32,
    samples: &[u8],
) -> Result<(), AssetError> {
    let data_len = samples.len() as u32;

    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_len).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?;
    writer.write_all(&1u16.to_le_bytes())?; // PCM
    writer.write_all(&1u16.to_le_bytes())?; // mono
    writer.write_all(&sample_rate.to_le_bytes())?;
    writer.write_all(&sample_rate.to_le_bytes())?; // byte rate, 1 byte/frame
    writer.write_all(&1u16.to_le_bytes())?; // block align
    writer.write_all(&8u16.to_le_bytes())?; // bits per sample

    writer.write_all(b"data")?;
    writer.write_all(&data_len.to_le_bytes())?;
    writer.write_all(samples)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_layout() {
        let mut out = Vec::new();
        write_wav(&mut out, 7042, &[0x80, 0x81, 0x7F]).unwrap();

        assert_eq!(&out[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes(out[4..8].try_into().unwrap()), 39);
        assert_eq!(&out[8..12], b"WAVE");
        assert_eq!(&out[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes(out[24..28].try_into().unwrap()), 7042);
        assert_eq!(&out[36..40], b"data");
        assert_eq!(u32::from_le_bytes(out[40..44].try_into().unwrap()), 3);
        assert_eq!(&out[44..], &[0x80, 0x81, 0x7F]);
        assert_eq!(out.len(), 47);
    }
}
