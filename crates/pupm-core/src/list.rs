use std::path::PathBuf;

use indexmap::IndexMap;

use pupm_error::{ModuleManagerError, Result};
use pupm_logger;
use pupm_manifest::{read_puppetfile, ModuleRecord, Puppetfile};

pub struct ListManager;

impl ListManager {
    pub fn list_modules(&self, repo_dir: &str, json: bool) -> Result<()> {
        let path = PathBuf::from(repo_dir);
        let manifest = read_puppetfile(&path)?;

        if json {
            self.show_json(&manifest)
        } else {
            self.show_flat_list(&manifest)
        }
    }

    fn show_json(&self, manifest: &Puppetfile) -> Result<()> {
        println!("{}", self.render_json(manifest)?);
        Ok(())
    }

    fn render_json(&self, manifest: &Puppetfile) -> Result<String> {
        let entries: IndexMap<&String, &ModuleRecord> = manifest.items().collect();
        serde_json::to_string_pretty(&entries)
            .map_err(|e| ModuleManagerError::IoError(e.to_string()))
    }

    fn show_flat_list(&self, manifest: &Puppetfile) -> Result<()> {
        if manifest.is_empty() {
            pupm_logger::info("No modules declared in the Puppetfile.");
            return Ok(());
        }

        for (name, record) in manifest.items() {
            println!("  {name}");
            for (key, value) in record {
                println!("    :{key} => '{value}'");
            }
        }
        Ok(())
    }
}
