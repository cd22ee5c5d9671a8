pub mod attribute_spec;
pub mod path_utils;
pub mod retry;

pub use attribute_spec::parse_attribute_spec;
pub use path_utils::absolute_path;
pub use retry::retry;
