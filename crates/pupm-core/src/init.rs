use std::path::Path;

use pupm_error::{ModuleManagerError, Result};
use pupm_logger;
use pupm_manifest::Puppetfile;

pub struct InitManager;

impl InitManager {
    pub fn new() -> Self {
        InitManager
    }

    pub fn init_manifest(&self, repo_dir: &str) -> Result<()> {
        let manifest = Puppetfile::new(Path::new(repo_dir));

        if manifest.path().exists() {
            return Err(ModuleManagerError::ManifestExists(
                manifest.path().to_string_lossy().into_owned(),
            ));
        }

        manifest.save()?;

        pupm_logger::info(&format!(
            "Initialized empty Puppetfile at {}",
            manifest.path().display()
        ));
        Ok(())
    }
}
