//! `wolfdata` — inspect and export the data files of Wolfenstein 3D
//! and its variants: VSWAP pages, GAMEMAPS levels, VGAGRAPH graphics
//! and AUDIOT sounds.

mod cli;
mod config;
mod export;
mod files;

use std::error::Error;

use cli::{CliOptions, Command, ExportCommand, ListCommand};
use config::UserConfig;
use files::DataFiles;
use log::info;
use mimalloc::MiMalloc;
use simplelog::TermLogger;

use assets::pic::GraphicsSet;
use assets::wl6;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), Box<dyn Error>> {
    let mut options: CliOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut user_config = UserConfig::load();
    user_config.sync_cli(&mut options);
    user_config.write();

    let data_dir = options
        .data_dir
        .clone()
        .ok_or("no data directory configured, pass --data-dir")?;
    let extension = options.extension.clone().unwrap_or_else(|| "wl6".into());
    let files = DataFiles::new(data_dir, &extension);
    info!("Using data files {:?} (*.{})", files.dir(), extension);

    match &options.command {
        Command::Info(_) => run_info(&files),
        Command::List(command) => run_list(&files, command),
        Command::Export(command) => {
            run_export(&files, command, options.sample_rate.unwrap_or(44100))
        }
    }
}

fn run_info(files: &DataFiles) -> Result<(), Box<dyn Error>> {
    let vswap = files.vswap()?;
    println!(
        "VSWAP:    {} pages ({} walls, {} sprites, {} sound pages, {} sounds)",
        vswap.len(),
        vswap.sprites_start(),
        vswap.sounds_start().saturating_sub(vswap.sprites_start()),
        vswap.len().saturating_sub(vswap.sounds_start()),
        vswap.sound_spans().len(),
    );

    let maps = files.maps()?;
    let present = (0..maps.len()).filter(|&i| maps.has_map(i)).count();
    println!(
        "GAMEMAPS: {} slots, {} maps, RLEW tag {:#06X}",
        maps.len(),
        present,
        maps.rlew_tag()
    );

    let graphics = files.graphics()?;
    println!(
        "VGAGRAPH: {} chunks, {} pics",
        graphics.len(),
        graphics.pic_sizes().len()
    );

    let audio = files.audio()?;
    println!("AUDIOT:   {} chunks", audio.len());
    Ok(())
}

fn run_list(files: &DataFiles, command: &ListCommand) -> Result<(), Box<dyn Error>> {
    match command.archive.as_str() {
        "graphics" => {
            let graphics = files.graphics()?;
            for partition in graphics.partitions() {
                println!(
                    "{:8} {:3} chunks at {}",
                    partition.name, partition.count, partition.start
                );
            }
            for (index, (width, height)) in graphics.pic_sizes().iter().enumerate() {
                let name = wl6::PICTURE_NAMES.get(index).copied().unwrap_or("?");
                println!("pic {index:3}  {width:3}x{height:<3} {name}");
            }
        }
        "maps" => {
            let maps = files.maps()?;
            for index in 0..maps.len() {
                if !maps.has_map(index) {
                    continue;
                }
                let header = maps.map_header(index)?;
                println!(
                    "map {index:2}  {:2}x{:<2} {}",
                    header.width, header.height, header.name
                );
            }
        }
        "vswap" => {
            let vswap = files.vswap()?;
            println!("walls:   pages 0..{}", vswap.sprites_start());
            println!(
                "sprites: pages {}..{}",
                vswap.sprites_start(),
                vswap.sounds_start()
            );
            println!("sounds:  pages {}..{}", vswap.sounds_start(), vswap.len());
            for (index, span) in vswap.sound_spans().iter().enumerate() {
                let name = wl6::SAMPLED_SOUND_NAMES.get(index).copied().unwrap_or("?");
                println!(
                    "sound {index:2}  page {:3}  {:6} bytes  {name}",
                    vswap.sounds_start() + span.start,
                    span.length
                );
            }
        }
        "audio" => {
            files.audio()?;
            for partition in &wl6::AUDIO_PARTITIONS {
                println!(
                    "{:8} {:3} chunks at {}",
                    partition.name, partition.count, partition.start
                );
            }
            for (index, name) in wl6::MUSIC_NAMES.iter().enumerate() {
                println!("music {index:2}  {name:12} {}", wl6::MUSIC_TITLES[index]);
            }
        }
        other => return Err(format!("unknown archive {other:?}").into()),
    }
    Ok(())
}

fn run_export(
    files: &DataFiles,
    command: &ExportCommand,
    sample_rate: u32,
) -> Result<(), Box<dyn Error>> {
    let out = command.output.as_path();
    let palette = &wl6::GRAPHICS_PALETTE;
    info!("Exporting into {out:?}");

    if command.wants_graphics() {
        let graphics = files.graphics()?;
        let set = GraphicsSet::new(&graphics, palette);
        export::export_pics(&set, out)?;
    }

    if command.wants_vswap() {
        let vswap = files.vswap()?;
        if command.all || command.textures {
            export::export_textures(&vswap, palette, out)?;
        }
        if command.all || command.sprites {
            export::export_sprites(&vswap, palette, out)?;
        }
        if command.all || command.sounds {
            export::export_sampled_sounds(&vswap, out)?;
        }
    }

    if command.wants_audio() {
        let audio = files.audio()?;
        if command.all || command.buzzer {
            export::export_buzzer_sounds(&audio, sample_rate, out)?;
        }
        if command.all || command.adlib {
            export::export_adlib_sounds(&audio, out)?;
        }
        if command.all || command.music {
            export::export_music(&audio, out)?;
        }
    }

    if command.wants_maps() {
        let maps = files.maps()?;
        export::export_maps(&maps, out)?;
    }

    info!("Export done");
    Ok(())
}
