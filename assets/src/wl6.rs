//! Configuration tables for the registered six-episode data set
//! (the `.WL6` files). Partition layouts and chunk names are fixed per
//! game release; these are what the export tool uses to address chunks
//! symbolically.

use archive::GraphicsPartition;

use crate::palette::Rgb;

/// Chunk index layout of VGAGRAPH.WL6.
pub const GRAPHICS_PARTITIONS: [GraphicsPartition; 16] = [
    GraphicsPartition::new("struct", 0, 1),
    GraphicsPartition::new("font", 1, 2),
    GraphicsPartition::new("fontm", 3, 0),
    GraphicsPartition::new("pics", 3, 132),
    GraphicsPartition::new("picm", 135, 0),
    GraphicsPartition::new("sprites", 135, 0),
    GraphicsPartition::new("tile8", 135, 72),
    GraphicsPartition::new("tile8m", 136, 0),
    GraphicsPartition::new("tile16", 136, 0),
    GraphicsPartition::new("tile16m", 136, 0),
    GraphicsPartition::new("tile32", 136, 0),
    GraphicsPartition::new("tile32m", 136, 0),
    GraphicsPartition::new("screens", 136, 2),
    GraphicsPartition::new("helpart", 138, 1),
    GraphicsPartition::new("demos", 139, 4),
    GraphicsPartition::new("endart", 143, 6),
];

/// Chunk index layout of AUDIOT.WL6.
pub struct AudioPartition {
    pub name: &'static str,
    pub start: usize,
    pub count: usize,
}

pub const AUDIO_PARTITIONS: [AudioPartition; 4] = [
    AudioPartition { name: "buzzer", start: 0, count: 87 },
    AudioPartition { name: "adlib", start: 87, count: 87 },
    AudioPartition { name: "digital", start: 174, count: 87 },
    AudioPartition { name: "music", start: 261, count: 27 },
];

/// The VGA palette shared by every graphic in the set.
pub const GRAPHICS_PALETTE: [Rgb; 256] = [
    Rgb::new(0x00, 0x00, 0x00), Rgb::new(0x00, 0x00, 0xA8), Rgb::new(0x00, 0xA8, 0x00), Rgb::new(0x00, 0xA8, 0xA8),
    Rgb::new(0xA8, 0x00, 0x00), Rgb::new(0xA8, 0x00, 0xA8), Rgb::new(0xA8, 0x54, 0x00), Rgb::new(0xA8, 0xA8, 0xA8),
    Rgb::new(0x54, 0x54, 0x54), Rgb::new(0x54, 0x54, 0xFC), Rgb::new(0x54, 0xFC, 0x54), Rgb::new(0x54, 0xFC, 0xFC),
    Rgb::new(0xFC, 0x54, 0x54), Rgb::new(0xFC, 0x54, 0xFC), Rgb::new(0xFC, 0xFC, 0x54), Rgb::new(0xFC, 0xFC, 0xFC),
    Rgb::new(0xEC, 0xEC, 0xEC), Rgb::new(0xDC, 0xDC, 0xDC), Rgb::new(0xD0, 0xD0, 0xD0), Rgb::new(0xC0, 0xC0, 0xC0),
    Rgb::new(0xB4, 0xB4, 0xB4), Rgb::new(0xA8, 0xA8, 0xA8), Rgb::new(0x98, 0x98, 0x98), Rgb::new(0x8C, 0x8C, 0x8C),
    Rgb::new(0x7C, 0x7C, 0x7C), Rgb::new(0x70, 0x70, 0x70), Rgb::new(0x64, 0x64, 0x64), Rgb::new(0x54, 0x54, 0x54),
    Rgb::new(0x48, 0x48, 0x48), Rgb::new(0x38, 0x38, 0x38), Rgb::new(0x2C, 0x2C, 0x2C), Rgb::new(0x20, 0x20, 0x20),
    Rgb::new(0xFC, 0x00, 0x00), Rgb::new(0xEC, 0x00, 0x00), Rgb::new(0xE0, 0x00, 0x00), Rgb::new(0xD4, 0x00, 0x00),
    Rgb::new(0xC8, 0x00, 0x00), Rgb::new(0xBC, 0x00, 0x00), Rgb::new(0xB0, 0x00, 0x00), Rgb::new(0xA4, 0x00, 0x00),
    Rgb::new(0x98, 0x00, 0x00), Rgb::new(0x88, 0x00, 0x00), Rgb::new(0x7C, 0x00, 0x00), Rgb::new(0x70, 0x00, 0x00),
    Rgb::new(0x64, 0x00, 0x00), Rgb::new(0x58, 0x00, 0x00), Rgb::new(0x4C, 0x00, 0x00), Rgb::new(0x40, 0x00, 0x00),
    Rgb::new(0xFC, 0xD8, 0xD8), Rgb::new(0xFC, 0xB8, 0xB8), Rgb::new(0xFC, 0x9C, 0x9C), Rgb::new(0xFC, 0x7C, 0x7C),
    Rgb::new(0xFC, 0x5C, 0x5C), Rgb::new(0xFC, 0x40, 0x40), Rgb::new(0xFC, 0x20, 0x20), Rgb::new(0xFC, 0x00, 0x00),
    Rgb::new(0xFC, 0xA8, 0x5C), Rgb::new(0xFC, 0x98, 0x40), Rgb::new(0xFC, 0x88, 0x20), Rgb::new(0xFC, 0x78, 0x00),
    Rgb::new(0xE4, 0x6C, 0x00), Rgb::new(0xCC, 0x60, 0x00), Rgb::new(0xB4, 0x54, 0x00), Rgb::new(0x9C, 0x4C, 0x00),
    Rgb::new(0xFC, 0xFC, 0xD8), Rgb::new(0xFC, 0xFC, 0xB8), Rgb::new(0xFC, 0xFC, 0x9C), Rgb::new(0xFC, 0xFC, 0x7C),
    Rgb::new(0xFC, 0xF8, 0x5C), Rgb::new(0xFC, 0xF4, 0x40), Rgb::new(0xFC, 0xF4, 0x20), Rgb::new(0xFC, 0xF4, 0x00),
    Rgb::new(0xE4, 0xD8, 0x00), Rgb::new(0xCC, 0xC4, 0x00), Rgb::new(0xB4, 0xAC, 0x00), Rgb::new(0x9C, 0x9C, 0x00),
    Rgb::new(0x84, 0x84, 0x00), Rgb::new(0x70, 0x6C, 0x00), Rgb::new(0x58, 0x54, 0x00), Rgb::new(0x40, 0x40, 0x00),
    Rgb::new(0xD0, 0xFC, 0x5C), Rgb::new(0xC4, 0xFC, 0x40), Rgb::new(0xB4, 0xFC, 0x20), Rgb::new(0xA0, 0xFC, 0x00),
    Rgb::new(0x90, 0xE4, 0x00), Rgb::new(0x80, 0xCC, 0x00), Rgb::new(0x74, 0xB4, 0x00), Rgb::new(0x60, 0x9C, 0x00),
    Rgb::new(0xD8, 0xFC, 0xD8), Rgb::new(0xBC, 0xFC, 0xB8), Rgb::new(0x9C, 0xFC, 0x9C), Rgb::new(0x80, 0xFC, 0x7C),
    Rgb::new(0x60, 0xFC, 0x5C), Rgb::new(0x40, 0xFC, 0x40), Rgb::new(0x20, 0xFC, 0x20), Rgb::new(0x00, 0xFC, 0x00),
    Rgb::new(0x00, 0xFC, 0x00), Rgb::new(0x00, 0xEC, 0x00), Rgb::new(0x00, 0xE0, 0x00), Rgb::new(0x00, 0xD4, 0x00),
    Rgb::new(0x04, 0xC8, 0x00), Rgb::new(0x04, 0xBC, 0x00), Rgb::new(0x04, 0xB0, 0x00), Rgb::new(0x04, 0xA4, 0x00),
    Rgb::new(0x04, 0x98, 0x00), Rgb::new(0x04, 0x88, 0x00), Rgb::new(0x04, 0x7C, 0x00), Rgb::new(0x04, 0x70, 0x00),
    Rgb::new(0x04, 0x64, 0x00), Rgb::new(0x04, 0x58, 0x00), Rgb::new(0x04, 0x4C, 0x00), Rgb::new(0x04, 0x40, 0x00),
    Rgb::new(0xD8, 0xFC, 0xFC), Rgb::new(0xB8, 0xFC, 0xFC), Rgb::new(0x9C, 0xFC, 0xFC), Rgb::new(0x7C, 0xFC, 0xF8),
    Rgb::new(0x5C, 0xFC, 0xFC), Rgb::new(0x40, 0xFC, 0xFC), Rgb::new(0x20, 0xFC, 0xFC), Rgb::new(0x00, 0xFC, 0xFC),
    Rgb::new(0x00, 0xE4, 0xE4), Rgb::new(0x00, 0xCC, 0xCC), Rgb::new(0x00, 0xB4, 0xB4), Rgb::new(0x00, 0x9C, 0x9C),
    Rgb::new(0x00, 0x84, 0x84), Rgb::new(0x00, 0x70, 0x70), Rgb::new(0x00, 0x58, 0x58), Rgb::new(0x00, 0x40, 0x40),
    Rgb::new(0x5C, 0xBC, 0xFC), Rgb::new(0x40, 0xB0, 0xFC), Rgb::new(0x20, 0xA8, 0xFC), Rgb::new(0x00, 0x9C, 0xFC),
    Rgb::new(0x00, 0x8C, 0xE4), Rgb::new(0x00, 0x7C, 0xCC), Rgb::new(0x00, 0x6C, 0xB4), Rgb::new(0x00, 0x5C, 0x9C),
    Rgb::new(0xD8, 0xD8, 0xFC), Rgb::new(0xB8, 0xBC, 0xFC), Rgb::new(0x9C, 0x9C, 0xFC), Rgb::new(0x7C, 0x80, 0xFC),
    Rgb::new(0x5C, 0x60, 0xFC), Rgb::new(0x40, 0x40, 0xFC), Rgb::new(0x20, 0x24, 0xFC), Rgb::new(0x00, 0x04, 0xFC),
    Rgb::new(0x00, 0x00, 0xFC), Rgb::new(0x00, 0x00, 0xEC), Rgb::new(0x00, 0x00, 0xE0), Rgb::new(0x00, 0x00, 0xD4),
    Rgb::new(0x00, 0x00, 0xC8), Rgb::new(0x00, 0x00, 0xBC), Rgb::new(0x00, 0x00, 0xB0), Rgb::new(0x00, 0x00, 0xA4),
    Rgb::new(0x00, 0x00, 0x98), Rgb::new(0x00, 0x00, 0x88), Rgb::new(0x00, 0x00, 0x7C), Rgb::new(0x00, 0x00, 0x70),
    Rgb::new(0x00, 0x00, 0x64), Rgb::new(0x00, 0x00, 0x58), Rgb::new(0x00, 0x00, 0x4C), Rgb::new(0x00, 0x00, 0x40),
    Rgb::new(0x28, 0x28, 0x28), Rgb::new(0xFC, 0xE0, 0x34), Rgb::new(0xFC, 0xD4, 0x24), Rgb::new(0xFC, 0xCC, 0x18),
    Rgb::new(0xFC, 0xC0, 0x08), Rgb::new(0xFC, 0xB4, 0x00), Rgb::new(0xB4, 0x20, 0xFC), Rgb::new(0xA8, 0x00, 0xFC),
    Rgb::new(0x98, 0x00, 0xE4), Rgb::new(0x80, 0x00, 0xCC), Rgb::new(0x74, 0x00, 0xB4), Rgb::new(0x60, 0x00, 0x9C),
    Rgb::new(0x50, 0x00, 0x84), Rgb::new(0x44, 0x00, 0x70), Rgb::new(0x34, 0x00, 0x58), Rgb::new(0x28, 0x00, 0x40),
    Rgb::new(0xFC, 0xD8, 0xFC), Rgb::new(0xFC, 0xB8, 0xFC), Rgb::new(0xFC, 0x9C, 0xFC), Rgb::new(0xFC, 0x7C, 0xFC),
    Rgb::new(0xFC, 0x5C, 0xFC), Rgb::new(0xFC, 0x40, 0xFC), Rgb::new(0xFC, 0x20, 0xFC), Rgb::new(0xFC, 0x00, 0xFC),
    Rgb::new(0xE0, 0x00, 0xE4), Rgb::new(0xC8, 0x00, 0xCC), Rgb::new(0xB4, 0x00, 0xB4), Rgb::new(0x9C, 0x00, 0x9C),
    Rgb::new(0x84, 0x00, 0x84), Rgb::new(0x6C, 0x00, 0x70), Rgb::new(0x58, 0x00, 0x58), Rgb::new(0x40, 0x00, 0x40),
    Rgb::new(0xFC, 0xE8, 0xDC), Rgb::new(0xFC, 0xE0, 0xD0), Rgb::new(0xFC, 0xD8, 0xC4), Rgb::new(0xFC, 0xD4, 0xBC),
    Rgb::new(0xFC, 0xCC, 0xB0), Rgb::new(0xFC, 0xC4, 0xA4), Rgb::new(0xFC, 0xBC, 0x9C), Rgb::new(0xFC, 0xB8, 0x90),
    Rgb::new(0xFC, 0xB0, 0x80), Rgb::new(0xFC, 0xA4, 0x70), Rgb::new(0xFC, 0x9C, 0x60), Rgb::new(0xF0, 0x94, 0x5C),
    Rgb::new(0xE8, 0x8C, 0x58), Rgb::new(0xDC, 0x88, 0x54), Rgb::new(0xD0, 0x80, 0x50), Rgb::new(0xC8, 0x7C, 0x4C),
    Rgb::new(0xBC, 0x78, 0x48), Rgb::new(0xB4, 0x70, 0x44), Rgb::new(0xA8, 0x68, 0x40), Rgb::new(0xA0, 0x64, 0x3C),
    Rgb::new(0x9C, 0x60, 0x38), Rgb::new(0x90, 0x5C, 0x34), Rgb::new(0x88, 0x58, 0x30), Rgb::new(0x80, 0x50, 0x2C),
    Rgb::new(0x74, 0x4C, 0x28), Rgb::new(0x6C, 0x48, 0x24), Rgb::new(0x5C, 0x40, 0x20), Rgb::new(0x54, 0x3C, 0x1C),
    Rgb::new(0x48, 0x38, 0x18), Rgb::new(0x40, 0x30, 0x18), Rgb::new(0x38, 0x2C, 0x14), Rgb::new(0x28, 0x20, 0x0C),
    Rgb::new(0x60, 0x00, 0x64), Rgb::new(0x00, 0x64, 0x64), Rgb::new(0x00, 0x60, 0x60), Rgb::new(0x00, 0x00, 0x1C),
    Rgb::new(0x00, 0x00, 0x2C), Rgb::new(0x30, 0x24, 0x10), Rgb::new(0x48, 0x00, 0x48), Rgb::new(0x50, 0x00, 0x50),
    Rgb::new(0x00, 0x00, 0x34), Rgb::new(0x1C, 0x1C, 0x1C), Rgb::new(0x4C, 0x4C, 0x4C), Rgb::new(0x5C, 0x5C, 0x5C),
    Rgb::new(0x40, 0x40, 0x40), Rgb::new(0x30, 0x30, 0x30), Rgb::new(0x34, 0x34, 0x34), Rgb::new(0xD8, 0xF4, 0xF4),
    Rgb::new(0xB8, 0xE8, 0xE8), Rgb::new(0x9C, 0xDC, 0xDC), Rgb::new(0x74, 0xC8, 0xC8), Rgb::new(0x48, 0xC0, 0xC0),
    Rgb::new(0x20, 0xB4, 0xB4), Rgb::new(0x20, 0xB0, 0xB0), Rgb::new(0x00, 0xA4, 0xA4), Rgb::new(0x00, 0x98, 0x98),
    Rgb::new(0x00, 0x8C, 0x8C), Rgb::new(0x00, 0x84, 0x84), Rgb::new(0x00, 0x7C, 0x7C), Rgb::new(0x00, 0x78, 0x78),
    Rgb::new(0x00, 0x74, 0x74), Rgb::new(0x00, 0x70, 0x70), Rgb::new(0x00, 0x6C, 0x6C), Rgb::new(0x98, 0x00, 0x88),
];

/// Pics of the `pics` partition, by canonical label.
pub const PICTURE_NAMES: [&str; 132] = [
    "H_BJPIC", "H_CASTLEPIC",
    "H_BLAZEPIC", "H_TOPWINDOWPIC",
    "H_LEFTWINDOWPIC", "H_RIGHTWINDOWPIC",
    "H_BOTTOMINFOPIC", "C_OPTIONSPIC",
    "C_CURSOR1PIC", "C_CURSOR2PIC",
    "C_NOTSELECTEDPIC", "C_SELECTEDPIC",
    "C_FXTITLEPIC", "C_DIGITITLEPIC",
    "C_MUSICTITLEPIC", "C_MOUSELBACKPIC",
    "C_BABYMODEPIC", "C_EASYPIC",
    "C_NORMALPIC", "C_HARDPIC",
    "C_LOADSAVEDISKPIC", "C_DISKLOADING1PIC",
    "C_DISKLOADING2PIC", "C_CONTROLPIC",
    "C_CUSTOMIZEPIC", "C_LOADGAMEPIC",
    "C_SAVEGAMEPIC", "C_EPISODE1PIC",
    "C_EPISODE2PIC", "C_EPISODE3PIC",
    "C_EPISODE4PIC", "C_EPISODE5PIC",
    "C_EPISODE6PIC", "C_CODEPIC",
    "C_TIMECODEPIC", "C_LEVELPIC",
    "C_NAMEPIC", "C_SCOREPIC",
    "C_JOY1PIC", "C_JOY2PIC",
    "L_GUYPIC", "L_COLONPIC",
    "L_NUM0PIC", "L_NUM1PIC",
    "L_NUM2PIC", "L_NUM3PIC",
    "L_NUM4PIC", "L_NUM5PIC",
    "L_NUM6PIC", "L_NUM7PIC",
    "L_NUM8PIC", "L_NUM9PIC",
    "L_PERCENTPIC", "L_APIC",
    "L_BPIC", "L_CPIC",
    "L_DPIC", "L_EPIC",
    "L_FPIC", "L_GPIC",
    "L_HPIC", "L_IPIC",
    "L_JPIC", "L_KPIC",
    "L_LPIC", "L_MPIC",
    "L_NPIC", "L_OPIC",
    "L_PPIC", "L_QPIC",
    "L_RPIC", "L_SPIC",
    "L_TPIC", "L_UPIC",
    "L_VPIC", "L_WPIC",
    "L_XPIC", "L_YPIC",
    "L_ZPIC", "L_EXPOINTPIC",
    "L_APOSTROPHEPIC", "L_GUY2PIC",
    "L_BJWINSPIC", "STATUSBARPIC",
    "TITLEPIC", "PG13PIC",
    "CREDITSPIC", "HIGHSCORESPIC",
    "KNIFEPIC", "GUNPIC",
    "MACHINEGUNPIC", "GATLINGGUNPIC",
    "NOKEYPIC", "GOLDKEYPIC",
    "SILVERKEYPIC", "N_BLANKPIC",
    "N_0PIC", "N_1PIC",
    "N_2PIC", "N_3PIC",
    "N_4PIC", "N_5PIC",
    "N_6PIC", "N_7PIC",
    "N_8PIC", "N_9PIC",
    "FACE1APIC", "FACE1BPIC",
    "FACE1CPIC", "FACE2APIC",
    "FACE2BPIC", "FACE2CPIC",
    "FACE3APIC", "FACE3BPIC",
    "FACE3CPIC", "FACE4APIC",
    "FACE4BPIC", "FACE4CPIC",
    "FACE5APIC", "FACE5BPIC",
    "FACE5CPIC", "FACE6APIC",
    "FACE6BPIC", "FACE6CPIC",
    "FACE7APIC", "FACE7BPIC",
    "FACE7CPIC", "FACE8APIC",
    "GOTGATLINGPIC", "MUTANTBJPIC",
    "PAUSEDPIC", "GETPSYCHEDPIC",
];

/// Wall textures; a VSWAP page pair (lit/shadowed) per name.
pub const TEXTURE_NAMES: [&str; 61] = [
    "grey_brick_1", "grey_brick_2",
    "grey_brick__flag", "grey_brick__hitler",
    "cell", "grey_brick__eagle",
    "cell__skeleton", "blue_brick_1",
    "blue_brick_2", "wood__eagle",
    "wood__hitler", "wood",
    "entrance_to_level", "steel__sign",
    "steel", "landscape",
    "red_brick", "red_brick__swastika",
    "purple", "red_brick__flag",
    "elevator", "fake_elevator",
    "wood__iron_cross", "dirty_brick_1",
    "purple__blood", "dirty_brick_2",
    "grey_brick_3", "grey_brick__sign",
    "brown_weave", "brown_weave__blood_2",
    "brown_weave__blood_3", "brown_weave__blood_1",
    "stained_glass", "blue_wall__skull",
    "grey_wall_1", "blue_wall__swastika",
    "grey_wall__vent", "multicolor_brick",
    "grey_wall_2", "blue_wall",
    "blue_brick__sign", "brown_marble_1",
    "grey_wall__map", "brown_stone_1",
    "brown_stone_2", "brown_marble_2",
    "brown_marble__flag", "wood_panel",
    "grey_wall__hitler", "fake_door",
    "door_excavation__side_of_door", "fake_locked_door",
    "elevator_wall", "door_vertical",
    "door_horizontal", "door_vertical__gold_key",
    "door_horizontal__gold_key", "door_vertical__silver_key",
    "door_horizontal__silver_key", "elevator_door__normal",
    "elevator_door__horizontal",
];

/// VSWAP sprite pages.
pub const SPRITE_NAMES: [&str; 436] = [
    "demo", "death_cam",
    "water_pool", "oil_drum",
    "table__chairs", "lamp",
    "chandelier", "hanging_skeleton",
    "dog_food", "pillar",
    "green_plant", "skeleton",
    "sink", "brown_plant",
    "vase", "table",
    "ceiling_light", "utensils_brown",
    "armor", "cage",
    "cage__skeleton", "bones",
    "gold_key", "silver_key",
    "bed", "basket",
    "food", "medkit",
    "ammo", "machinegun",
    "chaingun", "cross",
    "chalace", "jewels",
    "crown", "extra_life",
    "bones__blood", "barrel",
    "well__water", "well",
    "blood_pool", "flag",
    "bones_1", "bones_2",
    "bones_3", "bones_4",
    "utensils_blue", "stove",
    "rack", "vines",
    "guard__stand_d0", "guard__stand_d1",
    "guard__stand_d2", "guard__stand_d3",
    "guard__stand_d4", "guard__stand_d5",
    "guard__stand_d6", "guard__stand_d7",
    "guard__walk_a0_d0", "guard__walk_a0_d1",
    "guard__walk_a0_d2", "guard__walk_a0_d3",
    "guard__walk_a0_d4", "guard__walk_a0_d5",
    "guard__walk_a0_d6", "guard__walk_a0_d7",
    "guard__walk_a1_d0", "guard__walk_a1_d1",
    "guard__walk_a1_d2", "guard__walk_a1_d3",
    "guard__walk_a1_d4", "guard__walk_a1_d5",
    "guard__walk_a1_d6", "guard__walk_a1_d7",
    "guard__walk_a2_d0", "guard__walk_a2_d1",
    "guard__walk_a2_d2", "guard__walk_a2_d3",
    "guard__walk_a2_d4", "guard__walk_a2_d5",
    "guard__walk_a2_d6", "guard__walk_a2_d7",
    "guard__walk_a3_d0", "guard__walk_a3_d1",
    "guard__walk_a3_d2", "guard__walk_a3_d3",
    "guard__walk_a3_d4", "guard__walk_a3_d5",
    "guard__walk_a3_d6", "guard__walk_a3_d7",
    "guard__pain_c1", "guard__death_a0",
    "guard__death_a1", "guard__death_a2",
    "guard__pain_c2", "guard__dead",
    "guard__attack_a0", "guard__attack_a1",
    "guard__attack_a2", "dog__walk_a0_d0",
    "dog__walk_a0_d1", "dog__walk_a0_d2",
    "dog__walk_a0_d3", "dog__walk_a0_d4",
    "dog__walk_a0_d5", "dog__walk_a0_d6",
    "dog__walk_a0_d7", "dog__walk_a1_d0",
    "dog__walk_a1_d1", "dog__walk_a1_d2",
    "dog__walk_a1_d3", "dog__walk_a1_d4",
    "dog__walk_a1_d5", "dog__walk_a1_d6",
    "dog__walk_a1_d7", "dog__walk_a2_d0",
    "dog__walk_a2_d1", "dog__walk_a2_d2",
    "dog__walk_a2_d3", "dog__walk_a2_d4",
    "dog__walk_a2_d5", "dog__walk_a2_d6",
    "dog__walk_a2_d7", "dog__walk_a3_d0",
    "dog__walk_a3_d1", "dog__walk_a3_d2",
    "dog__walk_a3_d3", "dog__walk_a3_d4",
    "dog__walk_a3_d5", "dog__walk_a3_d6",
    "dog__walk_a3_d7", "dog__death_a0",
    "dog__death_a1", "dog__death_a2",
    "dog__dead", "dog__attack_a0",
    "dog__attack_a1", "dog__attack_a2",
    "ss__stand_d0", "ss__stand_d1",
    "ss__stand_d2", "ss__stand_d3",
    "ss__stand_d4", "ss__stand_d5",
    "ss__stand_d6", "ss__stand_d7",
    "ss__walk_a0_d0", "ss__walk_a0_d1",
    "ss__walk_a0_d2", "ss__walk_a0_d3",
    "ss__walk_a0_d4", "ss__walk_a0_d5",
    "ss__walk_a0_d6", "ss__walk_a0_d7",
    "ss__walk_a1_d0", "ss__walk_a1_d1",
    "ss__walk_a1_d2", "ss__walk_a1_d3",
    "ss__walk_a1_d4", "ss__walk_a1_d5",
    "ss__walk_a1_d6", "ss__walk_a1_d7",
    "ss__walk_a2_d0", "ss__walk_a2_d1",
    "ss__walk_a2_d2", "ss__walk_a2_d3",
    "ss__walk_a2_d4", "ss__walk_a2_d5",
    "ss__walk_a2_d6", "ss__walk_a2_d7",
    "ss__walk_a3_d0", "ss__walk_a3_d1",
    "ss__walk_a3_d2", "ss__walk_a3_d3",
    "ss__walk_a3_d4", "ss__walk_a3_d5",
    "ss__walk_a3_d6", "ss__walk_a3_d7",
    "ss__pain_c1", "ss__death_a0",
    "ss__death_a1", "ss__death_a2",
    "ss__pain_c2", "ss__dead",
    "ss__attack_a0", "ss__attack_a1",
    "ss__attack_a2", "mutant__stand_d0",
    "mutant__stand_d1", "mutant__stand_d2",
    "mutant__stand_d3", "mutant__stand_d4",
    "mutant__stand_d5", "mutant__stand_d6",
    "mutant__stand_d7", "mutant__walk_a0_d0",
    "mutant__walk_a0_d1", "mutant__walk_a0_d2",
    "mutant__walk_a0_d3", "mutant__walk_a0_d4",
    "mutant__walk_a0_d5", "mutant__walk_a0_d6",
    "mutant__walk_a0_d7", "mutant__walk_a1_d0",
    "mutant__walk_a1_d1", "mutant__walk_a1_d2",
    "mutant__walk_a1_d3", "mutant__walk_a1_d4",
    "mutant__walk_a1_d5", "mutant__walk_a1_d6",
    "mutant__walk_a1_d7", "mutant__walk_a2_d0",
    "mutant__walk_a2_d1", "mutant__walk_a2_d2",
    "mutant__walk_a2_d3", "mutant__walk_a2_d4",
    "mutant__walk_a2_d5", "mutant__walk_a2_d6",
    "mutant__walk_a2_d7", "mutant__walk_a3_d0",
    "mutant__walk_a3_d1", "mutant__walk_a3_d2",
    "mutant__walk_a3_d3", "mutant__walk_a3_d4",
    "mutant__walk_a3_d5", "mutant__walk_a3_d6",
    "mutant__walk_a3_d7", "mutant__pain_c1",
    "mutant__death_a0", "mutant__death_a1",
    "mutant__death_a2", "mutant__pain_c2",
    "mutant__death_3", "mutant__dead",
    "mutant__attack_a0", "mutant__attack_a1",
    "mutant__attack_a2", "mutant__attack_a3",
    "officer__stand_d0", "officer__stand_d1",
    "officer__stand_d2", "officer__stand_d3",
    "officer__stand_d4", "officer__stand_d5",
    "officer__stand_d6", "officer__stand_d7",
    "officer__walk_a0_d0", "officer__walk_a0_d1",
    "officer__walk_a0_d2", "officer__walk_a0_d3",
    "officer__walk_a0_d4", "officer__walk_a0_d5",
    "officer__walk_a0_d6", "officer__walk_a0_d7",
    "officer__walk_a1_d0", "officer__walk_a1_d1",
    "officer__walk_a1_d2", "officer__walk_a1_d3",
    "officer__walk_a1_d4", "officer__walk_a1_d5",
    "officer__walk_a1_d6", "officer__walk_a1_d7",
    "officer__walk_a2_d0", "officer__walk_a2_d1",
    "officer__walk_a2_d2", "officer__walk_a2_d3",
    "officer__walk_a2_d4", "officer__walk_a2_d5",
    "officer__walk_a2_d6", "officer__walk_a2_d7",
    "officer__walk_a3_d0", "officer__walk_a3_d1",
    "officer__walk_a3_d2", "officer__walk_a3_d3",
    "officer__walk_a3_d4", "officer__walk_a3_d5",
    "officer__walk_a3_d6", "officer__walk_a3_d7",
    "officer__pain_c1", "officer__death_a0",
    "officer__death_a1", "officer__death_a2",
    "officer__pain_c2", "officer__death_a3",
    "officer__dead", "officer__attack_a0",
    "officer__attack_a1", "officer__attack_a2",
    "ghost_blinky__walk_a0", "ghost_blinky__walk_a1",
    "ghost_pinky__walk_a0", "ghost_pinky__walk_a1",
    "ghost_clyde__walk_a0", "ghost_clyde__walk_a1",
    "ghost_inky__walk_a0", "ghost_inky__walk_a1",
    "hans__walk_a0", "hans__walk_a1",
    "hans__walk_a2", "hans__walk_a3",
    "hans__attack_a0", "hans__attack_a1",
    "hans__attack_a2", "hans__dead",
    "hans__death_a0", "hans__death_a1",
    "hans__death_a2", "schabbs__walk_a0",
    "schabbs__walk_a1", "schabbs__walk_a2",
    "schabbs__walk_a3", "schabbs__attack_a0",
    "schabbs__attack_a1", "schabbs__death_a0",
    "schabbs__death_a1", "schabbs__death_a2",
    "schabbs__dead", "needle__fly_a0",
    "needle__fly_a1", "needle__fly_a2",
    "needle__fly_a3", "robed_fake__walk_a0",
    "robed_fake__walk_a1", "robed_fake__walk_a2",
    "robed_fake__walk_a3", "robed_fake__attack_a0",
    "fire__fly_a0", "fire__fly_a1",
    "robed_fake__death_a0", "robed_fake__death_a1",
    "robed_fake__death_a2", "robed_fake__death_a3",
    "robed_fake__death_a4", "robed_fake__dead",
    "mecha_hitler__walk_a0", "mecha_hitler__walk_a1",
    "mecha_hitler__walk_a2", "mecha_hitler__walk_a3",
    "mecha_hitler__attack_a0", "mecha_hitler__attack_a1",
    "mecha_hitler__attack_a2", "mecha_hitler__dead",
    "mecha_hitler__death_a0", "mecha_hitler__death_a1",
    "mecha_hitler__death_a2", "hitler__walk_a0",
    "hitler__walk_a1", "hitler__walk_a2",
    "hitler__walk_a3", "hitler__attack_a0",
    "hitler__attack_a1", "hitler__attack_a2",
    "hitler__dead", "hitler__death_a0",
    "hitler__death_a1", "hitler__death_a2",
    "hitler__death_a3", "hitler__death_a4",
    "hitler__death_a5", "hitler__death_a6",
    "otto__walk_a0", "otto__walk_a1",
    "otto__walk_a2", "otto__walk_a3",
    "otto__attack_a0", "otto__attack_a1",
    "otto__death_a0", "otto__death_a1",
    "otto__death_a2", "otto__dead",
    "rocket__fly_d0", "rocket__fly_d1",
    "rocket__fly_d2", "rocket__fly_d3",
    "rocket__fly_d7", "rocket__fly_d6",
    "rocket__fly_d5", "rocket__fly_d4",
    "smoke__fly_a0", "smoke__fly_a1",
    "smoke__fly_a2", "smoke__fly_a3",
    "boom__fly_a0", "boom__fly_a1",
    "boom__fly_a2", "gretel__walk_a0",
    "gretel__walk_a1", "gretel__walk_a2",
    "gretel__walk_a3", "gretel__attack_a0",
    "gretel__attack_a1", "gretel__attack_a2",
    "gretel__dead", "gretel__death_a0",
    "gretel__death_a1", "gretel__death_a2",
    "fettgesicht__walk_a0", "fettgesicht__walk_a1",
    "fettgesicht__walk_a2", "fettgesicht__walk_a3",
    "fettgesicht__attack_a0", "fettgesicht__attack_a1",
    "fettgesicht__attack_a2", "fettgesicht__attack_a3",
    "fettgesicht__death_a0", "fettgesicht__death_a1",
    "fettgesicht__death_a2", "fettgesicht__dead",
    "bj__walk_a0", "bj__walk_a1",
    "bj__walk_a2", "bj__walk_a3",
    "bj__jump_a0", "bj__jump_a1",
    "bj__jump_a2", "bj__jump_a3",
    "knife__ready", "knife__attack_a0",
    "knife__attack_a1", "knife__attack_a2",
    "knife__attack_a3", "pistol__ready",
    "pistol__attack_a0", "pistol__attack_a1",
    "pistol__attack_a2", "pistol__attack_a3",
    "machinegun__ready", "machinegun__attack_a0",
    "machinegun__attack_a1", "machinegun__attack_a2",
    "machinegun__attack_a3", "chaingun__ready",
    "chaingun__attack_a0", "chaingun__attack_a1",
    "chaingun__attack_a2", "chaingun__attack_a3",
];

/// Digitized sounds addressed through the VSWAP sound table.
pub const SAMPLED_SOUND_NAMES: [&str; 46] = [
    "guard__wake", "dog__wake",
    "door__close", "door__open",
    "machinegun__attack", "pistol__attack",
    "chaingun__attack", "ss__wake",
    "hans__wake", "hans__death",
    "boss_gun__attack", "ss__attack",
    "guard__death_1", "guard__death_2",
    "guard__death_3", "pushwall__move",
    "dog__death", "mutant__death",
    "hitler__wake", "hitler__death",
    "ss__death", "guard__attack",
    "blood__slurpie", "robed_fake__wake",
    "schabbs__death", "schabbs__wake",
    "robed_fake__death", "officer__wake",
    "officer__death", "dog__attack",
    "elevator__use", "mecha_hitler__step",
    "bj__yeah", "mecha_hitler__death",
    "guard__death_4", "guard__death_5",
    "otto__death", "otto__wake",
    "fettgesicht__wake", "secret__death",
    "guard__death_6", "guard__death_7",
    "guard__death_8", "gretel__wake",
    "gretel__death", "fettgesicht__death",
];

/// PC-speaker (and matching AdLib) sound effects.
pub const BUZZER_SOUND_NAMES: [&str; 87] = [
    "HITWALLSND", "SELECTWPNSND",
    "SELECTITEMSND", "HEARTBEATSND",
    "MOVEGUN2SND", "MOVEGUN1SND",
    "NOWAYSND", "NAZIHITPLAYERSND",
    "SCHABBSTHROWSND", "PLAYERDEATHSND",
    "DOGDEATHSND", "ATKGATLINGSND",
    "GETKEYSND", "NOITEMSND",
    "WALK1SND", "WALK2SND",
    "TAKEDAMAGESND", "GAMEOVERSND",
    "OPENDOORSND", "CLOSEDOORSND",
    "DONOTHINGSND", "HALTSND",
    "DEATHSCREAM2SND", "ATKKNIFESND",
    "ATKPISTOLSND", "DEATHSCREAM3SND",
    "ATKMACHINEGUNSND", "HITENEMYSND",
    "SHOOTDOORSND", "DEATHSCREAM1SND",
    "GETMACHINESND", "GETAMMOSND",
    "SHOOTSND", "HEALTH1SND",
    "HEALTH2SND", "BONUS1SND",
    "BONUS2SND", "BONUS3SND",
    "GETGATLINGSND", "ESCPRESSEDSND",
    "LEVELDONESND", "DOGBARKSND",
    "ENDBONUS1SND", "ENDBONUS2SND",
    "BONUS1UPSND", "BONUS4SND",
    "PUSHWALLSND", "NOBONUSSND",
    "PERCENT100SND", "BOSSACTIVESND",
    "MUTTISND", "SCHUTZADSND",
    "AHHHGSND", "DIESND",
    "EVASND", "GUTENTAGSND",
    "LEBENSND", "SCHEISTSND",
    "NAZIFIRESND", "BOSSFIRESND",
    "SSFIRESND", "SLURPIESND",
    "TOT_HUNDSND", "MEINGOTTSND",
    "SCHABBSHASND", "HITLERHASND",
    "SPIONSND", "NEINSOVASSND",
    "DOGATTACKSND", "FLAMETHROWERSND",
    "MECHSTEPSND", "GOOBSSND",
    "YEAHSND", "DEATHSCREAM4SND",
    "DEATHSCREAM5SND", "DEATHSCREAM6SND",
    "DEATHSCREAM7SND", "DEATHSCREAM8SND",
    "DEATHSCREAM9SND", "DONNERSND",
    "EINESND", "ERLAUBENSND",
    "KEINSND", "MEINSND",
    "ROSESND", "MISSILEFIRESND",
    "MISSILEHITSND",
];

/// IMF music chunk labels.
pub const MUSIC_NAMES: [&str; 27] = [
    "CORNER_MUS", "DUNGEON_MUS",
    "WARMARCH_MUS", "GETTHEM_MUS",
    "HEADACHE_MUS", "HITLWLTZ_MUS",
    "INTROCW3_MUS", "NAZI_NOR_MUS",
    "NAZI_OMI_MUS", "POW_MUS",
    "SALUTE_MUS", "SEARCHN_MUS",
    "SUSPENSE_MUS", "VICTORS_MUS",
    "WONDERIN_MUS", "FUNKYOU_MUS",
    "ENDLEVEL_MUS", "GOINGAFT_MUS",
    "PREGNANT_MUS", "ULTIMATE_MUS",
    "NAZI_RAP_MUS", "ZEROHOUR_MUS",
    "TWELFTH_MUS", "ROSTER_MUS",
    "URAHERO_MUS", "VICMARCH_MUS",
    "PACMAN_MUS",
];

/// Human-readable titles for the music tracks.
pub const MUSIC_TITLES: [&str; 27] = [
    "Enemy Around the Corner",
    "Into the Dungeons",
    "The March to War",
    "Get Them Before They Get You",
    "Pounding Headache",
    "Hitler Waltz",
    "Kill the S.O.B.",
    "Horst-Wessel-Lied",
    "Nazi Anthem",
    "P.O.W.",
    "Salute",
    "Searching For the Enemy",
    "Suspense",
    "Victors",
    "Wondering About My Loved Ones",
    "Funk You!",
    "End of Level",
    "Going After Hitler",
    "Lurking...",
    "The Ultimate Challenge",
    "The Nazi Rap",
    "Zero Hour",
    "Twelfth Hour",
    "Roster",
    "U R A Hero",
    "Victory March",
    "Wolf Pac",
];

/// Side length of wall texture and sprite pages.
pub const PAGE_DIMENSION: usize = 64;

pub fn graphics_partition(name: &str) -> Option<&'static GraphicsPartition> {
    GRAPHICS_PARTITIONS.iter().find(|p| p.name == name)
}

pub fn audio_partition(name: &str) -> Option<&'static AudioPartition> {
    AUDIO_PARTITIONS.iter().find(|p| p.name == name)
}

pub fn picture_index(name: &str) -> Option<usize> {
    PICTURE_NAMES.iter().position(|&n| n == name)
}

pub fn sprite_index(name: &str) -> Option<usize> {
    SPRITE_NAMES.iter().position(|&n| n == name)
}

pub fn music_index(name: &str) -> Option<usize> {
    MUSIC_NAMES.iter().position(|&n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_tile_contiguously() {
        // ordered spans; the tile8 block collapses to one chunk
        let pics = graphics_partition("pics").unwrap();
        assert_eq!(pics.start, 3);
        assert_eq!(pics.count, PICTURE_NAMES.len());

        let tile8 = graphics_partition("tile8").unwrap();
        assert_eq!(tile8.start, pics.start + pics.count);

        let screens = graphics_partition("screens").unwrap();
        assert_eq!(screens.start, tile8.start + 1);
    }

    #[test]
    fn audio_layout_matches_names() {
        assert_eq!(audio_partition("buzzer").unwrap().count, BUZZER_SOUND_NAMES.len());
        assert_eq!(audio_partition("music").unwrap().count, MUSIC_NAMES.len());
        assert_eq!(audio_partition("music").unwrap().start, 261);
        assert_eq!(MUSIC_TITLES.len(), MUSIC_NAMES.len());
        assert_eq!(SAMPLED_SOUND_NAMES.len(), 46);
    }

    #[test]
    fn palette_spot_checks() {
        assert_eq!(GRAPHICS_PALETTE[0], Rgb::new(0x00, 0x00, 0x00));
        assert_eq!(GRAPHICS_PALETTE[0x0F], Rgb::new(0xFC, 0xFC, 0xFC));
        // the magenta the engine keys sprites on
        assert_eq!(GRAPHICS_PALETTE[0xFF], Rgb::new(0x98, 0x00, 0x88));
    }

    #[test]
    fn name_lookups() {
        assert_eq!(picture_index("H_BJPIC"), Some(0));
        assert_eq!(sprite_index("demo"), Some(0));
        assert_eq!(music_index("PACMAN_MUS"), Some(26));
        assert_eq!(picture_index("NO_SUCH"), None);
    }
}
