use anyhow::Result;
use clap::CommandFactory;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use pupm_constants::{BIN_NAME, COMMANDS, DESCRIPTION, EXAMPLES, REPOSITORY_URL, VERSION};

pub struct HelpHandler;

impl HelpHandler {
    pub fn handle_help(command: Option<&str>) -> Result<()> {
        match command {
            Some(cmd) => Self::show_command_help(cmd),
            None => {
                Self::show_general_help();
                Ok(())
            }
        }
    }

    fn show_command_help(command: &str) -> Result<()> {
        let mut cmd = Cli::command();

        if let Some(subcommand) = cmd.find_subcommand_mut(command) {
            subcommand.print_help()?;
        } else {
            println!(
                "{}: Unknown command '{}'",
                "Error".bright_red().bold(),
                command
            );
            println!();
            Self::show_general_help();
        }

        println!();
        Ok(())
    }

    fn show_general_help() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "<COMMAND>".bright_white(),
            "[OPTIONS]".bright_black().bold()
        );
        println!();

        println!("{}", "Commands:".bright_magenta().bold());
        let width = COMMANDS
            .iter()
            .map(|(cmd, _, aliases)| Self::label_len(cmd, aliases))
            .max()
            .unwrap_or(0);

        for (cmd, desc, aliases) in COMMANDS {
            let padding = " ".repeat(width - Self::label_len(cmd, aliases));
            let alias_str = if aliases.is_empty() {
                String::new()
            } else {
                format!(" [{}]", aliases.join(", "))
            };
            println!(
                "  {}{}{}  # {}",
                cmd.bright_cyan().bold(),
                alias_str.bright_black().bold(),
                padding,
                desc.bright_black().bold()
            );
        }
        println!();

        Self::show_examples();
    }

    fn label_len(cmd: &str, aliases: &[&str]) -> usize {
        if aliases.is_empty() {
            cmd.len()
        } else {
            // command plus " [alias, alias]"
            cmd.len() + aliases.join(", ").len() + 3
        }
    }

    fn show_examples() {
        println!("{}", "Examples:".bright_magenta().bold());
        let width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);

        for (cmd, desc) in EXAMPLES {
            let padding = " ".repeat(width - cmd.len());
            println!(
                "  {}{}  # {}",
                cmd.bright_cyan(),
                padding,
                desc.bright_black().bold()
            );
        }

        println!();
        println!(
            "Visit {} for more information",
            REPOSITORY_URL.bright_cyan().underline()
        );
    }
}
