//! Error types for the generation core.

use thiserror::Error;

/// Errors produced while deriving a world from its seed.
#[derive(Debug, Error, PartialEq)]
pub enum WorldGenError {
    /// A selection helper was handed an empty candidate list.
    #[error("cannot pick from an empty candidate list")]
    EmptySelection,

    /// Tile or grid dimensions that cannot describe a terrain.
    #[error("invalid world parameters: tile_size={tile_size}, grid_size={grid_size}")]
    InvalidWorldParameters {
        /// The rejected tile edge length.
        tile_size: f64,
        /// The rejected grid subdivision count.
        grid_size: u32,
    },
}
