use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pupm")]
#[command(version = "0.1.0")]
#[command(propagate_version = true)]
#[command(about = "A lightweight Puppetfile-driven module manager for Puppet environments", long_about = None)]
#[command(disable_help_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Suppress informational output (errors are still shown)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Creates an empty Puppetfile in the current directory
    #[command(alias = "new")]
    Init,
    /// Lists modules declared in the Puppetfile
    #[command(alias = "ls")]
    List {
        /// Print the modules as JSON
        #[arg(long)]
        json: bool,
    },
    /// Shows the attributes of a single module
    #[command(alias = "info")]
    Show {
        /// The module to show
        module: String,
        /// Print the module as JSON
        #[arg(long)]
        json: bool,
    },
    /// Adds or updates a module entry in the Puppetfile
    Add {
        /// The module name
        module: String,
        /// Track the module from a git repository URL
        #[arg(long)]
        git: Option<String>,
        /// Pin the module to a git ref (branch, tag, or commit)
        #[arg(long = "ref")]
        git_ref: Option<String>,
        /// Record an arbitrary attribute (may be repeated)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Rewrites the Puppetfile in normalized form
    #[command(alias = "format")]
    Fmt,
    /// Shows the git working-tree status of the module repo
    Status {
        /// Enable debug mode for verbose output
        #[arg(long)]
        debug: bool,
    },
    /// Shows help information for pupm or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
}
