//! Decoded level maps: the tile planes of a GAMEMAPS chunk addressed
//! by coordinate. Plane 0 holds walls and floors, plane 1 objects and
//! spawn points, plane 2 the logic extras some editors write.

use archive::MapArchive;

use crate::AssetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    name: String,
    planes: Vec<Vec<u16>>,
}

impl TileMap {
    pub fn new(
        width: usize,
        height: usize,
        planes: Vec<Vec<u16>>,
        name: String,
    ) -> Result<Self, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::BadImageSize { width, height });
        }
        if planes.iter().any(|plane| plane.len() != width * height) {
            return Err(AssetError::BadPlaneSize { width, height });
        }
        Ok(Self {
            width,
            height,
            name,
            planes,
        })
    }

    /// Decode a level straight out of a map archive.
    pub fn from_archive(archive: &MapArchive, index: usize) -> Result<Self, AssetError> {
        let (header, planes) = archive.map(index)?;
        Self::new(
            header.width as usize,
            header.height as usize,
            planes,
            header.name,
        )
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    pub fn plane(&self, index: usize) -> Option<&[u16]> {
        self.planes.get(index).map(Vec::as_slice)
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The tile of one plane at `(x, y)`.
    pub fn tile(&self, plane: usize, x: usize, y: usize) -> Option<u16> {
        if !self.contains(x, y) {
            return None;
        }
        self.planes.get(plane).map(|p| p[y * self.width + x])
    }

    /// The tile of every plane at `(x, y)`.
    pub fn tiles(&self, x: usize, y: usize) -> Option<Vec<u16>> {
        if !self.contains(x, y) {
            return None;
        }
        Some(
            self.planes
                .iter()
                .map(|p| p[y * self.width + x])
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TileMap {
        let walls: Vec<u16> = (0..12).collect();
        let objects = vec![0u16; 12];
        TileMap::new(4, 3, vec![walls, objects], "E1M1".into()).unwrap()
    }

    #[test]
    fn tile_addressing_is_row_major() {
        let map = sample();
        assert_eq!(map.tile(0, 0, 0), Some(0));
        assert_eq!(map.tile(0, 3, 0), Some(3));
        assert_eq!(map.tile(0, 0, 1), Some(4));
        assert_eq!(map.tile(0, 3, 2), Some(11));
    }

    #[test]
    fn out_of_bounds_is_none() {
        let map = sample();
        assert_eq!(map.tile(0, 4, 0), None);
        assert_eq!(map.tile(0, 0, 3), None);
        assert_eq!(map.tile(5, 0, 0), None);
        assert!(!map.contains(4, 0));
    }

    #[test]
    fn tiles_collects_planes() {
        let map = sample();
        assert_eq!(map.tiles(1, 0), Some(vec![1, 0]));
    }

    #[test]
    fn plane_size_checked() {
        assert!(TileMap::new(4, 3, vec![vec![0; 11]], "BAD".into()).is_err());
    }
}
