use std::path::PathBuf;

use pupm_error::Result;
use pupm_logger;
use pupm_manifest::read_puppetfile;

pub struct FmtManager;

impl FmtManager {
    pub fn format_manifest(&self, repo_dir: &str) -> Result<()> {
        let path = PathBuf::from(repo_dir);
        let manifest = read_puppetfile(&path)?;
        manifest.save()?;

        pupm_logger::finish(&format!(
            "Formatted Puppetfile ({} module(s))",
            manifest.len()
        ));
        Ok(())
    }
}
