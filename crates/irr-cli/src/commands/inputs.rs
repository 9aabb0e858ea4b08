//! Shared input options and loading for `compute` and `check`

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use irr_adapter::{read_vocabulary, IrrConfig, RaterFolderReader, CONFIG_FILE_NAME};
use irr_domain::{AnnotationSet, Vocabulary};
use tracing::debug;

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Config file (irr.yaml)
    #[arg(short, long, conflicts_with = "dir")]
    pub config: Option<PathBuf>,

    /// Project directory; uses its irr.yaml, or labels.txt + rater1/ + rater2/
    #[arg(short, long)]
    pub dir: Option<PathBuf>,
}

impl InputArgs {
    /// Work out which configuration to use
    pub fn resolve_config(&self) -> anyhow::Result<IrrConfig> {
        if let Some(path) = &self.config {
            return IrrConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()));
        }

        let root = self.dir.clone().unwrap_or_else(|| PathBuf::from("."));
        config_for_directory(&root)
    }
}

fn config_for_directory(root: &Path) -> anyhow::Result<IrrConfig> {
    let candidate = root.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        debug!(path = %candidate.display(), "using project config");
        IrrConfig::from_file(&candidate)
            .with_context(|| format!("loading config {}", candidate.display()))
    } else {
        debug!(root = %root.display(), "no config file; using default layout");
        Ok(IrrConfig::default_layout(root))
    }
}

/// Everything the use case needs, fully loaded
#[derive(Debug)]
pub struct Inputs {
    pub config: IrrConfig,
    pub vocabulary: Vocabulary,
    pub rater_a: AnnotationSet,
    pub rater_b: AnnotationSet,
}

impl Inputs {
    /// Load the vocabulary, then both raters concurrently
    pub async fn load(config: IrrConfig) -> anyhow::Result<Self> {
        let vocabulary = read_vocabulary(&config.vocabulary)
            .with_context(|| format!("loading vocabulary {}", config.vocabulary.display()))?;

        let reader_a = RaterFolderReader::new(config.rater_a.clone(), &config.label_delimiter)?;
        let reader_b = RaterFolderReader::new(config.rater_b.clone(), &config.label_delimiter)?;

        let (rater_a, rater_b) = tokio::try_join!(load_rater(reader_a), load_rater(reader_b))?;

        Ok(Self {
            config,
            vocabulary,
            rater_a,
            rater_b,
        })
    }
}

async fn load_rater(reader: RaterFolderReader) -> anyhow::Result<AnnotationSet> {
    let name = reader.source().name.clone();

    tokio::task::spawn_blocking(move || reader.load())
        .await
        .context("rater loading task failed")?
        .with_context(|| format!("loading rater '{}'", name))
}
