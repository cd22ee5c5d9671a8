use anyhow::Result;
use owo_colors::OwoColorize;

use pupm_core;
use pupm_error::ModuleManagerError;
use pupm_utils::parse_attribute_spec;

pub struct AddHandler;

impl AddHandler {
    pub fn handle_add_module(
        module: &str,
        git: Option<&str>,
        git_ref: Option<&str>,
        set: &[String],
        debug: bool,
    ) -> Result<()> {
        let mut attributes: Vec<(String, String)> = Vec::new();
        if let Some(url) = git {
            attributes.push(("git".to_string(), url.to_string()));
        }
        if let Some(reference) = git_ref {
            attributes.push(("ref".to_string(), reference.to_string()));
        }
        for spec in set {
            let (key, value) = parse_attribute_spec(spec)
                .ok_or_else(|| ModuleManagerError::InvalidAttribute(spec.clone()))?;
            attributes.push((key, value));
        }

        Self::print_add_header(module);
        pupm_core::add_module(".", module, &attributes, debug)
    }

    fn print_add_header(module: &str) {
        println!(
            "{} {} {}",
            "pupm".bright_cyan().bold(),
            "add".bright_white(),
            module.bright_white()
        );
        println!();
    }
}
