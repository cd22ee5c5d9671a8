use std::fmt;

#[derive(Debug)]
pub enum ModuleManagerError {
    ManifestRead(String, String),
    ManifestWrite(String, String),
    ManifestExists(String),
    ModuleNotFound(String),
    OrphanAttribute(usize, String),
    InvalidAttribute(String),
    CommandFailed(String),
    IoError(String),
}

impl fmt::Display for ModuleManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestRead(path, cause) => {
                write!(f, "Failed to read Puppetfile at {path}: {cause}")
            }
            Self::ManifestWrite(path, cause) => {
                write!(f, "Failed to write Puppetfile at {path}: {cause}")
            }
            Self::ManifestExists(path) => {
                write!(f, "Puppetfile already exists at {path}")
            }
            Self::ModuleNotFound(name) => {
                write!(f, "Module '{name}' not found in Puppetfile")
            }
            Self::OrphanAttribute(line, key) => {
                write!(
                    f,
                    "Attribute ':{key}' on line {line} has no preceding mod declaration"
                )
            }
            Self::InvalidAttribute(spec) => {
                write!(f, "Invalid attribute specification: {spec}")
            }
            Self::CommandFailed(msg) => {
                write!(f, "Command failed: {msg}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for ModuleManagerError {}

impl From<anyhow::Error> for ModuleManagerError {
    fn from(err: anyhow::Error) -> Self {
        Self::CommandFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModuleManagerError>;
