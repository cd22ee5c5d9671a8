pub mod add;
pub mod fmt;
pub mod help;
pub mod init;
pub mod list;
pub mod show;
pub mod status;

pub use add::AddHandler;
pub use fmt::FmtHandler;
pub use help::HelpHandler;
pub use init::InitHandler;
pub use list::ListHandler;
pub use show::ShowHandler;
pub use status::StatusHandler;
