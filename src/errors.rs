use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimplyError>;

#[derive(Debug, Error)]
pub enum SimplyError {
    #[error("Dynamic workspaces are not supported")]
    DynamicWorkspaces,
    #[error("Parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
}
