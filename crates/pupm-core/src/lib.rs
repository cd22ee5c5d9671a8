pub mod add;
pub mod fmt;
pub mod init;
pub mod list;
pub mod show;
pub mod status;

pub use add::AddManager;
pub use fmt::FmtManager;
pub use init::InitManager;
pub use list::ListManager;
pub use show::ShowManager;
pub use status::StatusManager;

use pupm_error::Result;

pub fn init_manifest(repo_dir: &str) -> Result<()> {
    let manager = InitManager::new();
    manager.init_manifest(repo_dir)
}

pub fn list_modules(repo_dir: &str, json: bool) -> anyhow::Result<()> {
    let manager = ListManager;
    manager
        .list_modules(repo_dir, json)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn show_module(repo_dir: &str, name: &str, json: bool) -> anyhow::Result<()> {
    let manager = ShowManager;
    manager
        .show_module(repo_dir, name, json)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn add_module(
    repo_dir: &str,
    name: &str,
    attributes: &[(String, String)], // (key, value) pairs
    debug: bool,
) -> anyhow::Result<()> {
    let manager = AddManager::new();
    manager
        .add_module(repo_dir, name, attributes, debug)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn format_manifest(repo_dir: &str) -> anyhow::Result<()> {
    let manager = FmtManager;
    manager
        .format_manifest(repo_dir)
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn repo_status(repo_dir: &str, debug: bool) -> anyhow::Result<()> {
    let manager = StatusManager;
    manager
        .repo_status(repo_dir, debug)
        .map_err(|e| anyhow::anyhow!(e))
}
