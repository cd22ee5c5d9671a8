use anyhow::Result;

use pupm_core;

pub struct ShowHandler;

impl ShowHandler {
    pub fn handle_show_module(module: &str, json: bool) -> Result<()> {
        pupm_core::show_module(".", module, json)
    }
}
