use thiserror::Error;

/// Errors raised by schedule building, season setup and player actions.
#[derive(Debug, Error)]
pub enum PennantError {
    /// The league or season cannot be set up as requested.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A team name that is not part of the league.
    #[error("unknown team: {0}")]
    UnknownTeam(String),

    /// Training was requested for something other than batting or pitching.
    #[error("focus must be batting or pitching, got `{0}`")]
    InvalidFocus(String),

    #[error("failed to parse season config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PennantError>;

#[cfg(feature = "python")]
impl From<PennantError> for pyo3::PyErr {
    fn from(err: PennantError) -> Self {
        match err {
            PennantError::UnknownTeam(_) => pyo3::exceptions::PyKeyError::new_err(err.to_string()),
            _ => pyo3::exceptions::PyValueError::new_err(err.to_string()),
        }
    }
}
