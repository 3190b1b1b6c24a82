use thiserror::Error;

pub type ShotMapResult<T> = Result<T, ShotMapError>;

#[derive(Debug, Error)]
pub enum ShotMapError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unsupported selection: {0}")]
    UnsupportedSelection(String),

    #[error("unknown player `{0}`")]
    UnknownPlayer(String),

    #[error("data source failure: {0}")]
    DataSource(String),
}
