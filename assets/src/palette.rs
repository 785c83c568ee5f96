//! Palette handling, including the JASC-PAL text format that the
//! classic editors exchange palettes in:
//!
//! ```text,ignore
//! JASC-PAL
//! 0100
//! 256
//! 0 0 0
//! 0 0 168
//! ...
//! ```

use std::io::{BufRead, Write};

use crate::AssetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Flatten to the 768-byte `r g b r g b ...` layout used by palette
/// lump consumers.
pub fn flatten(colors: &[Rgb]) -> Vec<u8> {
    let mut flat = Vec::with_capacity(colors.len() * 3);
    for color in colors {
        flat.push(color.r);
        flat.push(color.g);
        flat.push(color.b);
    }
    flat
}

/// Rebuild colors from a flat table. The length must divide by 3.
pub fn split(flat: &[u8]) -> Result<Vec<Rgb>, AssetError> {
    if flat.len() % 3 != 0 {
        return Err(AssetError::Palette(format!(
            "flat palette length must be divisible by 3: {}",
            flat.len()
        )));
    }
    Ok(flat
        .chunks_exact(3)
        .map(|c| Rgb::new(c[0], c[1], c[2]))
        .collect())
}

pub fn jasc_read<R: BufRead>(mut reader: R) -> Result<Vec<Rgb>, AssetError> {
    let mut line = String::new();

    let mut read_line = |reader: &mut R| -> Result<String, AssetError> {
        line.clear();
        reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    };

    if read_line(&mut reader)? != "JASC-PAL" {
        return Err(AssetError::Palette("expected \"JASC-PAL\"".into()));
    }
    if read_line(&mut reader)? != "0100" {
        return Err(AssetError::Palette("expected \"0100\"".into()));
    }

    let count: usize = read_line(&mut reader)?
        .parse()
        .map_err(|_| AssetError::Palette("invalid color count".into()))?;
    if count == 0 {
        return Err(AssetError::Palette("count not positive".into()));
    }

    let mut palette = Vec::with_capacity(count);
    for _ in 0..count {
        let entry = read_line(&mut reader)?;
        let mut parts = entry.split_whitespace().map(|p| p.parse::<u8>());
        let (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AssetError::Palette(format!("invalid RGB color: {entry:?}")));
        };
        palette.push(Rgb::new(r, g, b));
    }
    Ok(palette)
}

pub fn jasc_write<W: Write>(mut writer: W, palette: &[Rgb]) -> Result<(), AssetError> {
    writeln!(writer, "JASC-PAL")?;
    writeln!(writer, "0100")?;
    writeln!(writer, "{}", palette.len())?;
    for color in palette {
        writeln!(writer, "{} {} {}", color.r, color.g, color.b)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jasc_roundtrip() {
        let palette = vec![Rgb::new(0, 0, 0), Rgb::new(255, 16, 8), Rgb::new(1, 2, 3)];
        let mut buffer = Vec::new();
        jasc_write(&mut buffer, &palette).unwrap();
        assert_eq!(jasc_read(buffer.as_slice()).unwrap(), palette);
    }

    #[test]
    fn jasc_rejects_bad_magic() {
        let text = b"RIFF-PAL\n0100\n1\n0 0 0\n";
        assert!(jasc_read(&text[..]).is_err());
    }

    #[test]
    fn jasc_rejects_out_of_range_component() {
        let text = b"JASC-PAL\n0100\n1\n0 999 0\n";
        assert!(jasc_read(&text[..]).is_err());
    }

    #[test]
    fn flat_roundtrip() {
        let palette = vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        assert_eq!(split(&flatten(&palette)).unwrap(), palette);
        assert!(split(&[1, 2]).is_err());
    }
}
