use anyhow::Result;
use owo_colors::OwoColorize;

use pupm_core;

pub struct StatusHandler;

impl StatusHandler {
    pub fn handle_status(debug: bool) -> Result<()> {
        Self::print_status_header();
        pupm_core::repo_status(".", debug)
    }

    fn print_status_header() {
        println!(
            "{} {}",
            "pupm".bright_cyan().bold(),
            "status".bright_white()
        );
        println!();
    }
}
