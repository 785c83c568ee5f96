//! Paletted images and the pixel reordering the VGA formats need.
//!
//! Pics from VGAGRAPH are stored planar for VGA mode X: four planes of
//! every fourth pixel. VSWAP pages (walls, expanded sprites) are stored
//! column-major. Both come out of here row-major, top-left origin.

use std::io::Write;

use crate::palette::Rgb;
use crate::AssetError;

/// The color index treated as transparent in masked graphics.
pub const TRANSPARENT: u8 = 0xFF;

/// De-plane a mode-X pic into linear row-major order.
pub fn planar_to_linear(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, AssetError> {
    if width == 0 || height == 0 {
        return Err(AssetError::BadImageSize { width, height });
    }
    if width % 4 != 0 {
        return Err(AssetError::UnplanarWidth(width));
    }
    let area = width * height;
    if pixels.len() < area {
        return Err(AssetError::ShortPixels {
            actual: pixels.len(),
            expected: area,
        });
    }

    let width_4 = width >> 2;
    let area_4 = width_4 * height;
    let mut linear = Vec::with_capacity(area);
    for y in 0..height {
        for x in 0..width {
            linear.push(pixels[y * width_4 + (x >> 2) + (x & 3) * area_4]);
        }
    }
    Ok(linear)
}

/// Transpose a column-major page (walls, expanded sprites) into
/// row-major order.
pub fn column_to_row(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, AssetError> {
    if width == 0 || height == 0 {
        return Err(AssetError::BadImageSize { width, height });
    }
    let area = width * height;
    if pixels.len() < area {
        return Err(AssetError::ShortPixels {
            actual: pixels.len(),
            expected: area,
        });
    }

    let mut linear = Vec::with_capacity(area);
    for y in 0..height {
        for x in 0..width {
            linear.push(pixels[x * height + y]);
        }
    }
    Ok(linear)
}

/// An 8-bit indexed image with its palette attached.
#[derive(Debug, Clone)]
pub struct IndexedImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    palette: Vec<Rgb>,
    transparent: Option<u8>,
}

impl IndexedImage {
    pub fn new(
        width: usize,
        height: usize,
        pixels: Vec<u8>,
        palette: Vec<Rgb>,
        transparent: Option<u8>,
    ) -> Result<Self, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::BadImageSize { width, height });
        }
        if pixels.len() < width * height {
            return Err(AssetError::ShortPixels {
                actual: pixels.len(),
                expected: width * height,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            palette,
            transparent,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.palette
    }

    pub fn transparent(&self) -> Option<u8> {
        self.transparent
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Resolve the palette into BGR(A) rows, bottom-up so the result
    /// can go straight into a default-origin TGA. Depth 32 carries
    /// alpha 0 for the transparent index.
    pub fn to_bgrx(&self, depth_bits: u8) -> Result<Vec<u8>, AssetError> {
        let bytes_per_pixel = match depth_bits {
            24 => 3,
            32 => 4,
            _ => return Err(AssetError::BadDepth(depth_bits)),
        };

        let mut out = Vec::with_capacity(self.width * self.height * bytes_per_pixel);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let index = self.pixels[y * self.width + x];
                let color = self
                    .palette
                    .get(index as usize)
                    .copied()
                    .unwrap_or_default();
                out.push(color.b);
                out.push(color.g);
                out.push(color.r);
                if bytes_per_pixel == 4 {
                    out.push(if self.transparent == Some(index) { 0x00 } else { 0xFF });
                }
            }
        }
        Ok(out)
    }

    /// Write as a Truevision TGA; masked images get a 32-bit alpha
    /// channel, opaque ones stay 24-bit.
    pub fn write_tga<W: Write>(&self, writer: &mut W) -> Result<(), AssetError> {
        let depth_bits = if self.transparent.is_some() { 32 } else { 24 };
        let pixels = self.to_bgrx(depth_bits)?;
        write_tga_bgrx(writer, self.width, self.height, depth_bits, &pixels)
    }
}

/// Raw TGA writer: type 2 (uncompressed BGR/BGRA), bottom-left origin.
///
/// | Field Size | Content                         |
/// |------------|---------------------------------|
/// | 3 bytes    | id length, colormap type, image type (2) |
/// | 5 bytes    | colormap spec (all zero)        |
/// | 4 bytes    | x/y origin                      |
/// | 2+2 bytes  | width, height                   |
/// | 2 bytes    | pixel depth, attributes         |
pub fn write_tga_bgrx<W: Write>(
    writer: &mut W,
    width: usize,
    height: usize,
    depth_bits: u8,
    pixels_bgrx: &[u8],
) -> Result<(), AssetError> {
    if depth_bits != 24 && depth_bits != 32 {
        return Err(AssetError::BadDepth(depth_bits));
    }
    let expected = width * height * (depth_bits as usize / 8);
    if pixels_bgrx.len() < expected {
        return Err(AssetError::ShortPixels {
            actual: pixels_bgrx.len(),
            expected,
        });
    }

    let mut header = [0u8; 18];
    header[2] = 2; // uncompressed BGR(A)
    header[12..14].copy_from_slice(&(width as u16).to_le_bytes());
    header[14..16].copy_from_slice(&(height as u16).to_le_bytes());
    header[16] = depth_bits;
    writer.write_all(&header)?;
    writer.write_all(&pixels_bgrx[..expected])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deplane_four_by_two() {
        // plane 0 holds x = 0,4,..., here width 4 so planes are columns
        let planar = [
            0, 10, // plane 0: rows 0,1 of x=0
            1, 11, // plane 1
            2, 12, // plane 2
            3, 13, // plane 3
        ];
        let linear = planar_to_linear(&planar, 4, 2).unwrap();
        assert_eq!(linear, vec![0, 1, 2, 3, 10, 11, 12, 13]);
    }

    #[test]
    fn deplane_rejects_odd_width() {
        assert!(matches!(
            planar_to_linear(&[0; 18], 6, 3),
            Err(AssetError::UnplanarWidth(6))
        ));
    }

    #[test]
    fn transpose_columns() {
        // 2 wide, 3 tall, column-major
        let pixels = [1, 2, 3, 4, 5, 6];
        let linear = column_to_row(&pixels, 2, 3).unwrap();
        assert_eq!(linear, vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn short_pixels_rejected() {
        assert!(matches!(
            column_to_row(&[0; 3], 2, 3),
            Err(AssetError::ShortPixels { .. })
        ));
    }

    #[test]
    fn tga_header_fields() {
        let palette = vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)];
        let image = IndexedImage::new(2, 1, vec![0, 1], palette, None).unwrap();
        let mut out = Vec::new();
        image.write_tga(&mut out).unwrap();

        assert_eq!(out[2], 2);
        assert_eq!(u16::from_le_bytes([out[12], out[13]]), 2);
        assert_eq!(u16::from_le_bytes([out[14], out[15]]), 1);
        assert_eq!(out[16], 24);
        // BGR of color 0 then color 1
        assert_eq!(&out[18..], &[0, 0, 255, 0, 255, 0]);
    }

    #[test]
    fn tga_alpha_for_transparent_index() {
        let palette = vec![Rgb::new(9, 9, 9); 256];
        let image =
            IndexedImage::new(1, 2, vec![TRANSPARENT, 0], palette, Some(TRANSPARENT)).unwrap();
        let mut out = Vec::new();
        image.write_tga(&mut out).unwrap();

        assert_eq!(out[16], 32);
        // bottom row first: opaque pixel, then the transparent one
        assert_eq!(&out[18..22], &[9, 9, 9, 0xFF]);
        assert_eq!(&out[22..26], &[9, 9, 9, 0x00]);
    }

    #[test]
    fn bottom_up_rows() {
        let palette = vec![Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)];
        let image = IndexedImage::new(1, 2, vec![0, 1], palette, None).unwrap();
        let bgr = image.to_bgrx(24).unwrap();
        // row y=1 (color 1) comes first
        assert_eq!(bgr, vec![2, 2, 2, 1, 1, 1]);
    }
}
