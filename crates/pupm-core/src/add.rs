use std::path::Path;

use pupm_error::Result;
use pupm_logger;
use pupm_manifest::{ModuleRecord, Puppetfile};

pub struct AddManager;

impl AddManager {
    pub fn new() -> Self {
        AddManager
    }

    pub fn add_module(
        &self,
        repo_dir: &str,
        name: &str,
        attributes: &[(String, String)],
        debug: bool,
    ) -> Result<()> {
        let mut manifest = Puppetfile::new(Path::new(repo_dir));
        if manifest.path().exists() {
            manifest.load()?;
        }

        let mut record = if manifest.contains(name) {
            pupm_logger::debug(&format!("Updating existing module {name}"), debug);
            manifest.get(name)?.clone()
        } else {
            pupm_logger::debug(&format!("Declaring new module {name}"), debug);
            ModuleRecord::new()
        };

        for (key, value) in attributes {
            pupm_logger::debug(&format!("Setting :{key} => '{value}'"), debug);
            record.insert(key.clone(), value.clone());
        }

        let attr_count = record.len();
        manifest.set(name, record);
        manifest.save()?;

        pupm_logger::success(&format!(
            "Saved module {name} with {attr_count} attribute(s)"
        ));
        Ok(())
    }
}
