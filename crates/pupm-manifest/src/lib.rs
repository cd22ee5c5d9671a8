pub mod parse;
pub mod puppetfile;

pub use puppetfile::{ModuleRecord, Puppetfile};

use std::path::Path;

use pupm_error::Result;

/// Reads the Puppetfile of a module repository into a fresh store.
pub fn read_puppetfile(repo_dir: &Path) -> Result<Puppetfile> {
    let mut manifest = Puppetfile::new(repo_dir);
    manifest.load()?;
    Ok(manifest)
}
