use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkybeamError {
    #[error("unknown length unit `{0}`")]
    UnknownLengthUnit(String),
    #[error("unknown mass unit `{0}`")]
    UnknownMassUnit(String),
    #[error("unknown force unit `{0}`")]
    UnknownForceUnit(String),
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

pub type Result<T> = std::result::Result<T, SkybeamError>;
