pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "A lightweight Puppetfile-driven module manager for Puppet environments";
pub const REPOSITORY_URL: &str = "https://github.com/pupm-dev/pupm";
pub const BIN_NAME: &str = "pupm";
pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    (
        "init",
        "Creates an empty Puppetfile in the current directory",
        &["new"],
    ),
    ("list", "Lists modules declared in the Puppetfile", &["ls"]),
    (
        "show",
        "Shows the attributes of a single module",
        &["info"],
    ),
    (
        "add",
        "Adds or updates a module entry in the Puppetfile",
        &[],
    ),
    (
        "fmt",
        "Rewrites the Puppetfile in normalized form",
        &["format"],
    ),
    (
        "status",
        "Shows the git working-tree status of the module repo",
        &[],
    ),
    (
        "help",
        "Shows help information for pupm or a specific command",
        &[],
    ),
];
pub const EXAMPLES: &[(&str, &str)] = &[
    ("pupm init", "Create an empty Puppetfile"),
    (
        "pupm add stdlib --git https://github.com/puppetlabs/puppetlabs-stdlib",
        "Track a module by git source",
    ),
    ("pupm add stdlib --ref 4.24.0", "Pin a module to a ref"),
    (
        "pupm add apache --set owner=puppetlabs",
        "Record an arbitrary attribute",
    ),
    ("pupm list --json", "List modules as JSON"),
    ("pupm fmt", "Normalize Puppetfile formatting"),
    ("pupm status", "Check the repo for uncommitted changes"),
];

pub const MANIFEST_FILENAME: &str = "Puppetfile";

pub const GIT_STATUS_RETRIES: u32 = 3;
pub const GIT_STATUS_RETRY_DELAY_MS: u64 = 250;
