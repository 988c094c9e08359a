//! Asset manifest and verification
//!
//! Every image and sound the game needs is listed here. `verify_assets` runs
//! before SDL loads anything so a missing file is reported by name instead of
//! surfacing as an opaque SDL_image/SDL_mixer error halfway through startup.

use std::fs;
use std::path::{Path, PathBuf};

pub const PLAYER_TEXTURE: &str = "mario.png";
pub const BACKGROUND_TEXTURE: &str = "background.png";
pub const BLOCK_TEXTURE: &str = "block.png";
pub const RED_ENEMY_TEXTURE: &str = "enemy1.png";
pub const BLUE_ENEMY_TEXTURE: &str = "enemy2.png";
pub const LOGO_TEXTURE: &str = "logo.png";
pub const BACKGROUND_MUSIC: &str = "background.mp3";
pub const JUMP_SOUND: &str = "jump.wav";

/// All files that must exist under the asset directory
pub const REQUIRED_ASSETS: [&str; 8] = [
    PLAYER_TEXTURE,
    BACKGROUND_TEXTURE,
    BLOCK_TEXTURE,
    RED_ENEMY_TEXTURE,
    BLUE_ENEMY_TEXTURE,
    LOGO_TEXTURE,
    BACKGROUND_MUSIC,
    JUMP_SOUND,
];

#[derive(Debug)]
pub enum AssetError {
    IoError(std::io::Error),
    /// Asset directory itself is missing or not a directory
    MissingDirectory(PathBuf),
    MissingAsset(PathBuf),
    /// Present but zero bytes
    EmptyAsset(PathBuf),
    /// SDL failed to decode a file that passed verification
    LoadFailed { path: PathBuf, reason: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::IoError(e) => write!(f, "IO error: {}", e),
            AssetError::MissingDirectory(p) => write!(f, "Asset directory not found: {}", p.display()),
            AssetError::MissingAsset(p) => write!(f, "Missing asset: {}", p.display()),
            AssetError::EmptyAsset(p) => write!(f, "Asset file is empty: {}", p.display()),
            AssetError::LoadFailed { path, reason } => {
                write!(f, "Failed to load {}: {}", path.display(), reason)
            }
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::IoError(err)
    }
}

/// Resolved locations of every asset
#[derive(Debug, Clone)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        AssetPaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Check that every required asset exists and is non-empty.
///
/// Reports the first problem found, in manifest order.
pub fn verify_assets(dir: impl AsRef<Path>) -> Result<AssetPaths, AssetError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(AssetError::MissingDirectory(dir.to_path_buf()));
    }

    let paths = AssetPaths::new(dir);
    for name in REQUIRED_ASSETS {
        let path = paths.path(name);
        if !path.is_file() {
            return Err(AssetError::MissingAsset(path));
        }
        if fs::metadata(&path)?.len() == 0 {
            return Err(AssetError::EmptyAsset(path));
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_asset_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in REQUIRED_ASSETS {
            fs::write(dir.path().join(name), b"data").unwrap();
        }
        dir
    }

    #[test]
    fn test_complete_directory_passes() {
        let dir = full_asset_dir();
        let paths = verify_assets(dir.path()).unwrap();
        assert_eq!(paths.path(JUMP_SOUND), dir.path().join("jump.wav"));
    }

    #[test]
    fn test_missing_asset_is_named() {
        let dir = full_asset_dir();
        fs::remove_file(dir.path().join(BLOCK_TEXTURE)).unwrap();

        match verify_assets(dir.path()) {
            Err(AssetError::MissingAsset(path)) => assert!(path.ends_with("block.png")),
            other => panic!("expected MissingAsset, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_asset_rejected() {
        let dir = full_asset_dir();
        fs::write(dir.path().join(JUMP_SOUND), b"").unwrap();

        assert!(matches!(verify_assets(dir.path()), Err(AssetError::EmptyAsset(_))));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = verify_assets(&missing).unwrap_err();
        assert!(matches!(err, AssetError::MissingDirectory(_)));
        assert!(err.to_string().contains("nope"));
    }
}
