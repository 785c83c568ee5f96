use argh::FromArgs;
use std::path::PathBuf;

/// CLI options for the data toolkit
#[derive(Debug, Clone, FromArgs)]
pub struct CliOptions {
    /// verbose level: off, error, warn, info, debug
    #[argh(option)]
    pub verbose: Option<log::LevelFilter>,
    /// directory holding the game data files
    #[argh(option)]
    pub data_dir: Option<PathBuf>,
    /// data file extension <wl6, wl1, sod>
    #[argh(option)]
    pub extension: Option<String>,
    /// sample rate PC-speaker sounds are rendered at
    #[argh(option)]
    pub sample_rate: Option<u32>,
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Info(InfoCommand),
    List(ListCommand),
    Export(ExportCommand),
}

/// Print archive statistics
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "info")]
pub struct InfoCommand {}

/// List the chunks of one archive symbolically
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "list")]
pub struct ListCommand {
    /// archive to list <graphics, audio, maps, vswap>
    #[argh(positional)]
    pub archive: String,
}

/// Decode assets into an output directory
#[derive(Debug, Clone, FromArgs)]
#[argh(subcommand, name = "export")]
pub struct ExportCommand {
    /// output directory
    #[argh(option, default = "PathBuf::from(\"export\")")]
    pub output: PathBuf,
    /// export pics and 8x8 tiles as TGA
    #[argh(switch)]
    pub pics: bool,
    /// export wall textures as TGA
    #[argh(switch)]
    pub textures: bool,
    /// export sprites as TGA
    #[argh(switch)]
    pub sprites: bool,
    /// export digitized sounds as WAV
    #[argh(switch)]
    pub sounds: bool,
    /// export PC-speaker sounds as WAV
    #[argh(switch)]
    pub buzzer: bool,
    /// export AdLib sound effects as IMF
    #[argh(switch)]
    pub adlib: bool,
    /// export music tracks as IMF
    #[argh(switch)]
    pub music: bool,
    /// export level tile planes as text dumps
    #[argh(switch)]
    pub maps: bool,
    /// export everything
    #[argh(switch)]
    pub all: bool,
}

impl ExportCommand {
    pub fn wants_graphics(&self) -> bool {
        self.all || self.pics
    }

    pub fn wants_vswap(&self) -> bool {
        self.all || self.textures || self.sprites || self.sounds
    }

    pub fn wants_audio(&self) -> bool {
        self.all || self.buzzer || self.adlib || self.music
    }

    pub fn wants_maps(&self) -> bool {
        self.all || self.maps
    }
}
