use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no PR description provided")]
    MissingArgument,

    #[error("Error: Mode must be \"normal\" or \"tech\" (like your PR quality)")]
    InvalidMode(String),
}
