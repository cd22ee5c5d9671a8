use anyhow::Result;
use owo_colors::OwoColorize;

use pupm_core;

pub struct FmtHandler;

impl FmtHandler {
    pub fn handle_fmt() -> Result<()> {
        Self::print_fmt_header();
        pupm_core::format_manifest(".")
    }

    fn print_fmt_header() {
        println!("{} {}", "pupm".bright_cyan().bold(), "fmt".bright_white());
        println!();
    }
}
