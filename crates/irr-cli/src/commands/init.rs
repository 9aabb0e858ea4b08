//! irr init command

use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::Args;
use irr_adapter::{IrrConfig, CONFIG_FILE_NAME};

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to initialize
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing irr.yaml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        println!("Initializing IRR project in {:?}", self.directory);

        let config_path = self.directory.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                config_path.display()
            );
        }

        // Paths in irr.yaml stay relative to the project directory
        let config = IrrConfig::default_layout(Path::new(""));

        std::fs::create_dir_all(self.directory.join(&config.rater_a.directory))?;
        std::fs::create_dir_all(self.directory.join(&config.rater_b.directory))?;
        std::fs::write(&config_path, config.to_yaml()?)?;

        let vocabulary = self.directory.join(&config.vocabulary);
        if !vocabulary.exists() {
            std::fs::write(&vocabulary, "")?;
        }

        println!("✓ IRR project initialized");
        println!("  Add labels to {}", vocabulary.display());
        println!(
            "  Put each rater's CSV files under {} and {}",
            self.directory.join(&config.rater_a.directory).display(),
            self.directory.join(&config.rater_b.directory).display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = InitCommand {
            directory: dir.path().to_path_buf(),
            force: false,
        };
        cmd.run().unwrap();

        assert!(dir.path().join("rater1").is_dir());
        assert!(dir.path().join("rater2").is_dir());
        assert!(dir.path().join("labels.txt").is_file());

        let config = IrrConfig::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, IrrConfig::default_layout(dir.path()));

        // Second run without --force refuses
        assert!(cmd.run().is_err());

        let forced = InitCommand {
            directory: dir.path().to_path_buf(),
            force: true,
        };
        forced.run().unwrap();
    }
}
