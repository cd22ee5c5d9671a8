use anyhow::Result;

use pupm_core;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list_modules(json: bool) -> Result<()> {
        pupm_core::list_modules(".", json)
    }
}
