// Asset management system
//
// Locates sprite sheet files, decodes them, and slices them into grid cells.

mod atlas;
mod loader;

pub use atlas::{placeholder_sheet, CellRegion, SheetGrid, SheetImage};
pub use loader::{AssetLoader, SHEET_DIRECTORY, SHEET_EXTENSIONS};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to load asset: {0}")]
    LoadError(String),

    #[error("Failed to decode sheet {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
