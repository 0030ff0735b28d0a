use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tato_runtime::{Config, FileStore, Storefront};

pub struct ExecutionContext {
    data_dir: PathBuf,
    config: Config,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let config_path = Config::path_in(&data_dir);
        let config = Config::load_from(&config_path)
            .with_context(|| format!("failed to load {}", config_path.display()))?;

        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    /// Storefront state restored from this data directory.
    pub fn open_storefront(&self) -> Result<Storefront<FileStore>> {
        let store = FileStore::open(&self.data_dir)
            .with_context(|| format!("failed to open storage in {}", self.data_dir.display()))?;
        Ok(Storefront::open(
            tato_engine::catalog(),
            store,
            &self.config,
        ))
    }
}
