use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use level_generator::LevelGenerator;
use log::{debug, info};

use crate::cli::AppConfig;

pub struct LevelApp {
    config: AppConfig,
}

impl LevelApp {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut generator = LevelGenerator::new(self.config.level, self.config.seed);

        generator.load_textures(&self.config.textures).await?;

        let progress = if self.config.count > 1 {
            let progress = ProgressBar::new(self.config.count as u64);
            progress.enable_steady_tick(Duration::from_millis(200));
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5}/{len}")?
                    .progress_chars("#>-"),
            );
            Some(progress)
        } else {
            None
        };

        for index in 0..self.config.count {
            let maze = generator.create_maze(self.config.iterations);
            debug!("terminus at {:?}", maze.cursor());

            let level = generator.render()?;
            let path = output_path(&self.config.output_path, index, self.config.count);

            level.save(&path)?;
            info!("Saved {}", path.display());

            if let Some(progress) = &progress {
                progress.inc(1);
            }
        }

        if let Some(progress) = progress {
            progress.finish();
        }

        info!("Generation completed");
        Ok(())
    }
}

/// `level.png` for a single level, `level_0.png`, `level_1.png`, ... otherwise.
fn output_path(base: &Path, index: usize, count: usize) -> PathBuf {
    if count <= 1 {
        return base.to_path_buf();
    }

    let stem = base.file_stem().and_then(|s| s.to_str()).unwrap_or("level");
    let name = match base.extension().and_then(|e| e.to_str()) {
        Some(extension) => format!("{}_{}.{}", stem, index, extension),
        None => format!("{}_{}", stem, index),
    };

    base.with_file_name(name)
}
