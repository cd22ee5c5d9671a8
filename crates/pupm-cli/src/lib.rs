pub mod commands;
pub mod handlers;

use clap::Parser;

use commands::{Cli, Commands};
use handlers::{
    AddHandler, FmtHandler, HelpHandler, InitHandler, ListHandler, ShowHandler, StatusHandler,
};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pupm_logger::init_logger(cli.quiet);

    match &cli.command {
        Commands::Init => InitHandler::handle_init(),
        Commands::List { json } => ListHandler::handle_list_modules(*json),
        Commands::Show { module, json } => ShowHandler::handle_show_module(module, *json),
        Commands::Add {
            module,
            git,
            git_ref,
            set,
            debug,
        } => AddHandler::handle_add_module(module, git.as_deref(), git_ref.as_deref(), set, *debug),
        Commands::Fmt => FmtHandler::handle_fmt(),
        Commands::Status { debug } => StatusHandler::handle_status(*debug),
        Commands::Help { command } => HelpHandler::handle_help(command.as_deref()),
    }
}
