//! Asset export pipelines: decode through the `assets` crate and write
//! TGA / WAV / IMF / text files into a directory tree.

use std::error::Error;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{info, warn};

use archive::{AudioArchive, MapArchive, VswapArchive};
use assets::music::{AdLibSound, Music};
use assets::pic::{load_texture, GraphicsSet};
use assets::sound::{BuzzerSound, SampledSound};
use assets::sprite;
use assets::tilemap::TileMap;
use assets::wav::write_wav;
use assets::wl6;
use assets::Rgb;

fn target(names: &[&str], index: usize) -> String {
    match names.get(index) {
        Some(name) => name.to_lowercase(),
        None => format!("chunk_{index:03}"),
    }
}

fn create<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>, Box<dyn Error>> {
    Ok(BufWriter::new(File::create(path)?))
}

pub fn export_pics(set: &GraphicsSet, out: &Path) -> Result<(), Box<dyn Error>> {
    let dir = out.join("pics");
    create_dir_all(&dir)?;
    for index in 0..set.picture_count() {
        let pic = set.picture(index)?;
        let name = target(&wl6::PICTURE_NAMES, index);
        pic.write_tga(&mut create(dir.join(format!("{name}.tga")))?)?;
    }
    info!("Exported {} pics", set.picture_count());

    let dir = out.join("tile8");
    create_dir_all(&dir)?;
    for index in 0..set.tile8_count() {
        let tile = set.tile8(index)?;
        tile.write_tga(&mut create(dir.join(format!("tile_{index:02}.tga")))?)?;
    }
    info!("Exported {} 8x8 tiles", set.tile8_count());
    Ok(())
}

pub fn export_textures(
    vswap: &VswapArchive,
    palette: &[Rgb],
    out: &Path,
) -> Result<(), Box<dyn Error>> {
    let dir = out.join("walls");
    create_dir_all(&dir)?;

    let mut exported = 0usize;
    for page in 0..vswap.sprites_start() {
        if vswap.size_of(page)? == 0 {
            continue;
        }
        let texture = load_texture(vswap, page, palette)?;
        // a lit/shadowed page pair per wall
        let name = target(&wl6::TEXTURE_NAMES, page / 2);
        let shade = page & 1;
        texture.write_tga(&mut create(dir.join(format!("{name}__{shade}.tga")))?)?;
        exported += 1;
    }
    info!("Exported {exported} wall textures");
    Ok(())
}

pub fn export_sprites(
    vswap: &VswapArchive,
    palette: &[Rgb],
    out: &Path,
) -> Result<(), Box<dyn Error>> {
    let dir = out.join("sprites");
    create_dir_all(&dir)?;

    let count = vswap.sounds_start().saturating_sub(vswap.sprites_start());
    let mut exported = 0usize;
    for index in 0..count {
        if vswap.size_of(vswap.sprites_start() + index)? == 0 {
            warn!("Sprite {index} has no data, skipped");
            continue;
        }
        let image = sprite::load(vswap, index, palette, wl6::PAGE_DIMENSION)?;
        let name = target(&wl6::SPRITE_NAMES, index);
        image.write_tga(&mut create(dir.join(format!("{name}.tga")))?)?;
        exported += 1;
    }
    info!("Exported {exported} sprites");
    Ok(())
}

pub fn export_sampled_sounds(vswap: &VswapArchive, out: &Path) -> Result<(), Box<dyn Error>> {
    let dir = out.join("sounds");
    create_dir_all(&dir)?;

    for index in 0..vswap.sound_spans().len() {
        let sound = SampledSound::from_vswap(vswap, index)?;
        let name = target(&wl6::SAMPLED_SOUND_NAMES, index);
        write_wav(
            &mut create(dir.join(format!("{name}.wav")))?,
            sound.rate,
            &sound.samples,
        )?;
    }
    info!("Exported {} digitized sounds", vswap.sound_spans().len());
    Ok(())
}

pub fn export_buzzer_sounds(
    audio: &AudioArchive,
    sample_rate: u32,
    out: &Path,
) -> Result<(), Box<dyn Error>> {
    let partition = wl6::audio_partition("buzzer").ok_or("no buzzer partition")?;
    let dir = out.join("buzzer");
    create_dir_all(&dir)?;

    for index in 0..partition.count {
        let chunk = audio.chunk(partition.start + index)?;
        if chunk.is_empty() {
            warn!("Buzzer sound {index} has no data, skipped");
            continue;
        }
        let sound = BuzzerSound::new(chunk.to_vec());
        let name = target(&wl6::BUZZER_SOUND_NAMES, index);
        write_wav(
            &mut create(dir.join(format!("{name}.wav")))?,
            sample_rate,
            &sound.to_samples(sample_rate),
        )?;
    }
    info!("Exported {} PC-speaker sounds", partition.count);
    Ok(())
}

pub fn export_adlib_sounds(audio: &AudioArchive, out: &Path) -> Result<(), Box<dyn Error>> {
    let partition = wl6::audio_partition("adlib").ok_or("no adlib partition")?;
    let dir = out.join("adlib");
    create_dir_all(&dir)?;

    for index in 0..partition.count {
        let chunk = audio.chunk(partition.start + index)?;
        if chunk.is_empty() {
            warn!("AdLib sound {index} has no data, skipped");
            continue;
        }
        let sound = AdLibSound::from_bytes(chunk)?;
        let name = target(&wl6::BUZZER_SOUND_NAMES, index);
        let mut file = create(dir.join(format!("{name}.imf")))?;
        file.write_all(&sound.to_imf_chunk(5, 0, false))?;
    }
    info!("Exported {} AdLib sounds", partition.count);
    Ok(())
}

pub fn export_music(audio: &AudioArchive, out: &Path) -> Result<(), Box<dyn Error>> {
    let partition = wl6::audio_partition("music").ok_or("no music partition")?;
    let dir = out.join("music");
    create_dir_all(&dir)?;

    for index in 0..partition.count {
        let chunk = audio.chunk(partition.start + index)?;
        if chunk.is_empty() {
            warn!("Music track {index} has no data, skipped");
            continue;
        }
        let track = Music::from_bytes(chunk)?;
        let name = target(&wl6::MUSIC_NAMES, index);
        let mut file = create(dir.join(format!("{name}.imf")))?;
        file.write_all(&track.to_imf_chunk())?;
    }
    info!("Exported {} music tracks", partition.count);
    Ok(())
}

pub fn export_maps(maps: &MapArchive, out: &Path) -> Result<(), Box<dyn Error>> {
    let dir = out.join("maps");
    create_dir_all(&dir)?;

    let mut exported = 0usize;
    for index in 0..maps.len() {
        if !maps.has_map(index) {
            continue;
        }
        let map = TileMap::from_archive(maps, index)?;
        let path = dir.join(format!("{index:02}_{}.txt", map.name().to_lowercase()));
        let mut file = create(path)?;
        write_map_dump(&mut file, &map)?;
        exported += 1;
    }
    info!("Exported {exported} maps");
    Ok(())
}

fn write_map_dump<W: Write>(writer: &mut W, map: &TileMap) -> Result<(), Box<dyn Error>> {
    writeln!(writer, "; {} {}x{}", map.name(), map.width(), map.height())?;
    for plane_index in 0..map.plane_count() {
        writeln!(writer, "plane {plane_index}:")?;
        for y in 0..map.height() {
            let mut row = String::with_capacity(map.width() * 5);
            for x in 0..map.width() {
                let tile = map.tile(plane_index, x, y).unwrap_or(0);
                if x > 0 {
                    row.push(' ');
                }
                row.push_str(&format!("{tile:04X}"));
            }
            writeln!(writer, "{row}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_prefers_known_names() {
        assert_eq!(target(&wl6::MUSIC_NAMES, 0), "corner_mus");
        assert_eq!(target(&wl6::MUSIC_NAMES, 500), "chunk_500");
    }

    #[test]
    fn map_dump_format() {
        let map = TileMap::new(2, 2, vec![vec![1, 2, 3, 0xABCD]], "TST".into()).unwrap();
        let mut out = Vec::new();
        write_map_dump(&mut out, &map).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "; TST 2x2\nplane 0:\n0001 0002\n0003 ABCD\n");
    }
}
