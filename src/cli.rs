use std::path::PathBuf;

use level_generator::{LevelConfig, DEFAULT_ITERATIONS};
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

fn load_config(s: &str) -> Result<LevelConfig, String> {
    LevelConfig::from_path(&PathBuf::from(s)).map_err(|e| format!("Failed to load config file: {}", e))
}

#[derive(Debug)]
pub struct AppConfig {
    pub level: LevelConfig,
    pub textures: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub iterations: usize,
    pub count: usize,
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Level Generator",
    about = "Carve random room mazes and render them from texture images"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(from_os_str),
        help = "Room texture images",
        required_unless = "completions"
    )]
    textures: Vec<PathBuf>,

    #[structopt(
        parse(from_os_str),
        short,
        long,
        default_value = "level.png",
        help = "Output image"
    )]
    output: PathBuf,

    #[structopt(parse(try_from_str = load_config), long, help = "JSON level config")]
    config: Option<LevelConfig>,

    #[structopt(long, help = "Use the 32x32 corridors of the original layout")]
    legacy: bool,

    #[structopt(short, long, help = "Rooms per side")]
    grid_size: Option<usize>,

    #[structopt(short, long, help = "Room edge in pixels")]
    room_size: Option<u32>,

    #[structopt(long, help = "Corridor width in pixels")]
    corridor_width: Option<u32>,

    #[structopt(long, help = "Corridor length in pixels")]
    corridor_length: Option<u32>,

    #[structopt(short, long, default_value = "10", help = "Random walk steps")]
    iterations: usize,

    #[structopt(short, long, default_value = "1", help = "Number of levels to generate")]
    count: usize,

    #[structopt(parse(try_from_str), short, long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, String> {
        let mut level = match (self.config, self.legacy) {
            (Some(config), _) => config,
            (None, true) => LevelConfig::legacy(),
            (None, false) => LevelConfig::default(),
        };

        if let Some(grid_size) = self.grid_size {
            level.grid_size = grid_size;
        }
        if let Some(room_size) = self.room_size {
            level.room_size = room_size;
        }
        if let Some(corridor_width) = self.corridor_width {
            level.corridor_width = corridor_width;
        }
        if let Some(corridor_length) = self.corridor_length {
            level.corridor_length = corridor_length;
        }

        level.validate().map_err(|e| e.to_string())?;

        if self.textures.is_empty() {
            Err("At least one texture is required")?
        }

        if self.count == 0 {
            Err("Count must be at least 1")?
        }

        Ok(AppConfig {
            level,
            textures: self.textures,
            output_path: self.output,
            iterations: self.iterations,
            count: self.count,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, String> {
        let mut argv = vec!["level-generator"];
        argv.extend_from_slice(args);

        Opt::from_iter_safe(argv).map_err(|e| e.to_string())?.to_app_config()
    }

    #[test]
    fn defaults_match_the_library() {
        let config = parse(&["wall.png"]).unwrap();

        assert_eq!(config.level, LevelConfig::default());
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.output_path, PathBuf::from("level.png"));
        assert_eq!(config.count, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn flags_override_the_base_config() {
        let config = parse(&["--legacy", "-g", "7", "--corridor-width", "20", "-s", "42", "a.png", "b.png"]).unwrap();

        assert_eq!(config.level, LevelConfig::new(7, 128, 20, 32));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.textures.len(), 2);
    }

    #[test]
    fn zero_grid_is_refused() {
        assert!(parse(&["-g", "0", "wall.png"]).is_err());
    }

    #[test]
    fn oversized_level_is_refused() {
        assert!(parse(&["-g", "2", "-r", "4294967295", "wall.png"]).is_err());
    }
}
