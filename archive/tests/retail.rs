//! Checks against a retail data set. Point `WOLF3D_DATA` at a
//! directory holding the `.WL6` files and run with `--ignored`.

use std::path::PathBuf;

use archive::{GraphicsPartition, MapArchive, VswapArchive};

fn data_dir() -> PathBuf {
    std::env::var_os("WOLF3D_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../data"))
}

#[test]
#[ignore = "retail .WL6 data files can't be included in git"]
fn vswap_wl6_layout() {
    let vswap = VswapArchive::from_path(data_dir().join("VSWAP.WL6")).unwrap();
    assert_eq!(vswap.sprites_start(), 106);
    assert_eq!(vswap.sounds_start(), 543);
    assert_eq!(vswap.sound_spans().len(), 46);
    // every wall page is a full 64x64 texture
    for page in 0..vswap.sprites_start() {
        assert_eq!(vswap.size_of(page).unwrap(), 64 * 64);
    }
}

#[test]
#[ignore = "retail .WL6 data files can't be included in git"]
fn gamemaps_wl6_levels() {
    let maps = MapArchive::from_paths(
        data_dir().join("MAPHEAD.WL6"),
        data_dir().join("GAMEMAPS.WL6"),
    )
    .unwrap();
    assert_eq!(maps.rlew_tag(), 0xABCD);
    assert_eq!(maps.len(), 100);

    let present = (0..maps.len()).filter(|&i| maps.has_map(i)).count();
    assert_eq!(present, 60);

    let (header, planes) = maps.map(0).unwrap();
    assert_eq!(header.width, 64);
    assert_eq!(header.height, 64);
    assert_eq!(planes.len(), 3);
    assert_eq!(planes[0].len(), 64 * 64);
}

#[test]
#[ignore = "retail .WL6 data files can't be included in git"]
fn vgagraph_wl6_pics() {
    let partitions = [
        GraphicsPartition::new("struct", 0, 1),
        GraphicsPartition::new("font", 1, 2),
        GraphicsPartition::new("pics", 3, 132),
        GraphicsPartition::new("tile8", 135, 72),
        GraphicsPartition::new("screens", 136, 2),
        GraphicsPartition::new("helpart", 138, 1),
        GraphicsPartition::new("demos", 139, 4),
        GraphicsPartition::new("endart", 143, 6),
    ];
    let graphics = archive::GraphicsArchive::from_paths(
        data_dir().join("VGAGRAPH.WL6"),
        data_dir().join("VGAHEAD.WL6"),
        data_dir().join("VGADICT.WL6"),
        &partitions,
    )
    .unwrap();

    assert_eq!(graphics.pic_sizes().len(), 132);
    // the title screen pic is full width
    let sizes = graphics.pic_sizes();
    assert!(sizes.iter().any(|&(w, h)| w == 320 && h == 200));
}
