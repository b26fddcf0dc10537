// Sprite sheet file loading

use super::AssetError;
use anyhow::Result;
use image::{GenericImageView, RgbaImage};
use log::info;
use std::path::{Path, PathBuf};

/// Directory under the asset root that holds sprite sheets
pub const SHEET_DIRECTORY: &str = "sheets";

/// File extensions recognised as sprite sheets
pub const SHEET_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg"];

/// Asset loader responsible for finding and decoding sheet files
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a sheet
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(SHEET_DIRECTORY).join(name)
    }

    /// Load sheet bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        std::fs::read(&path)
            .map_err(|e| AssetError::LoadError(format!("Failed to read {}: {}", name, e)).into())
    }

    /// Load and decode a sheet into RGBA pixels
    pub fn load_sheet(&self, name: &str) -> Result<RgbaImage> {
        let bytes = self.load_bytes(name)?;
        let sheet = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            name: name.to_string(),
            source,
        })?;

        let (width, height) = sheet.dimensions();
        info!("Loaded sheet {} ({}x{})", name, width, height);
        Ok(sheet.to_rgba8())
    }

    /// Check if a sheet exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).exists()
    }

    /// List all sheets in the sheet directory
    pub fn list_sheets(&self) -> Result<Vec<String>> {
        let dir = self.base_path.join(SHEET_DIRECTORY);

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut sheets = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    let ext = ext.to_string_lossy().to_ascii_lowercase();
                    if SHEET_EXTENSIONS.contains(&ext.as_str()) {
                        if let Some(name) = path.file_name() {
                            sheets.push(name.to_string_lossy().to_string());
                        }
                    }
                }
            }
        }

        sheets.sort();
        Ok(sheets)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::placeholder_sheet;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "sprite-reel-{}-{}",
            tag,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join(SHEET_DIRECTORY)).unwrap();
        dir
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("walk.png");

        assert_eq!(path, PathBuf::from("/game/assets/sheets/walk.png"));
    }

    #[test]
    fn test_missing_sheet_is_not_found() {
        let loader = AssetLoader::new("/definitely/not/here");
        let err = loader.load_sheet("ghost.png").unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::NotFound(_))
        ));
        assert!(loader.list_sheets().unwrap().is_empty());
    }

    #[test]
    fn test_load_png_roundtrip_dimensions() {
        let dir = scratch_dir("png");
        placeholder_sheet(2, 3, 30, 30)
            .save(dir.join(SHEET_DIRECTORY).join("move.png"))
            .unwrap();

        let loader = AssetLoader::new(&dir);
        assert!(loader.exists("move.png"));

        let sheet = loader.load_sheet("move.png").unwrap();
        assert_eq!((sheet.width(), sheet.height()), (90, 60));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_undecodable_sheet() {
        let dir = scratch_dir("garbage");
        std::fs::write(dir.join(SHEET_DIRECTORY).join("broken.png"), b"not a png").unwrap();

        let loader = AssetLoader::new(&dir);
        let err = loader.load_sheet("broken.png").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::Decode { .. })
        ));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_list_sheets_filters_extensions() {
        let dir = scratch_dir("list");
        let sheets = dir.join(SHEET_DIRECTORY);
        std::fs::write(sheets.join("b.PNG"), b"").unwrap();
        std::fs::write(sheets.join("a.gif"), b"").unwrap();
        std::fs::write(sheets.join("notes.txt"), b"").unwrap();

        let loader = AssetLoader::new(&dir);
        assert_eq!(loader.list_sheets().unwrap(), vec!["a.gif", "b.PNG"]);

        std::fs::remove_dir_all(dir).unwrap();
    }
}
