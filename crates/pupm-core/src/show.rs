use std::path::PathBuf;

use pupm_error::{ModuleManagerError, Result};
use pupm_logger;
use pupm_manifest::read_puppetfile;

pub struct ShowManager;

impl ShowManager {
    pub fn show_module(&self, repo_dir: &str, name: &str, json: bool) -> Result<()> {
        let path = PathBuf::from(repo_dir);
        let manifest = read_puppetfile(&path)?;
        let record = manifest.get(name)?;

        if json {
            let rendered = serde_json::to_string_pretty(record)
                .map_err(|e| ModuleManagerError::IoError(e.to_string()))?;
            println!("{rendered}");
            return Ok(());
        }

        println!("{name}");
        if record.is_empty() {
            pupm_logger::info("Module has no attributes.");
            return Ok(());
        }
        for (key, value) in record {
            println!("  :{key} => '{value}'");
        }
        Ok(())
    }
}
