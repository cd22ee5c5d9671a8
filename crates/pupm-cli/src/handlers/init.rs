use anyhow::Result;
use owo_colors::OwoColorize;

use pupm_core;

pub struct InitHandler;

impl InitHandler {
    pub fn handle_init() -> Result<()> {
        Self::print_init_header();
        pupm_core::init_manifest(".")?;
        Ok(())
    }

    fn print_init_header() {
        println!("{} {}", "pupm".bright_cyan().bold(), "init".bright_white());
        println!();
    }
}
