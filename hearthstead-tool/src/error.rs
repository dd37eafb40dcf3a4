use thiserror::Error;

use hearthstead_core::{CatalogError, PieceError};

#[derive(Debug, Error)]
pub enum HearthError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Furniture error: {0}")]
    Piece(#[from] PieceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Input closed before planning finished")]
    InputClosed,

    #[error("No room catalog entry backs the location `{0}`")]
    UnknownLocationRoom(&'static str),
}
