//! Asset lookup: locating the asset directory and decoding images.
//!
//! The renderer consumes decoded pixels, never raw file paths. Every failure
//! here happens at startup and is fatal to the caller.

use std::path::{Path, PathBuf};

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("no asset directory found (tried {tried:?})")]
    RootNotFound { tried: Vec<PathBuf> },
    #[error("asset {0:?} not found on disk")]
    NotFound(PathBuf),
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Directory that asset names are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoot {
    dir: PathBuf,
}

impl AssetRoot {
    /// Use `dir` directly, failing if it is not an existing directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AssetError> {
        let dir = dir.into();
        if dir.is_dir() {
            Ok(Self { dir })
        } else {
            Err(AssetError::RootNotFound { tried: vec![dir] })
        }
    }

    /// Pick the first candidate that is an existing directory.
    pub fn discover<I, P>(candidates: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut tried = Vec::new();
        for candidate in candidates {
            let dir = candidate.into();
            if dir.is_dir() {
                tracing::debug!("asset root: {}", dir.display());
                return Ok(Self { dir });
            }
            tried.push(dir);
        }
        Err(AssetError::RootNotFound { tried })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a named asset, which must exist.
    pub fn resolve(&self, name: impl AsRef<Path>) -> Result<PathBuf, AssetError> {
        let path = self.dir.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::NotFound(path))
        }
    }

    /// Resolve and decode a named image.
    pub fn load_image(&self, name: impl AsRef<Path>) -> Result<DecodedImage, AssetError> {
        let path = self.resolve(name)?;
        DecodedImage::open(&path)
    }
}

/// Tightly packed RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }
        let img = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!("decoded {} ({width}x{height})", path.display());
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// Bytes per row of pixel data.
    pub fn stride(&self) -> u32 {
        4 * self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
        let img = RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn new_rejects_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(
            AssetRoot::new(&missing),
            Err(AssetError::RootNotFound { .. })
        ));
        assert!(AssetRoot::new(tmp.path()).is_ok());
    }

    #[test]
    fn discover_picks_first_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        std::fs::create_dir(&b).unwrap();
        let root = AssetRoot::discover([a.clone(), b.clone()]).unwrap();
        assert_eq!(root.dir(), b.as_path());

        match AssetRoot::discover([a.clone()]) {
            Err(AssetError::RootNotFound { tried }) => assert_eq!(tried, vec![a]),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn resolve_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let root = AssetRoot::new(tmp.path()).unwrap();
        let err = root.resolve("square.png").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
        assert!(err.to_string().contains("square.png"));
    }

    #[test]
    fn load_png() {
        let tmp = tempfile::tempdir().unwrap();
        write_png(tmp.path(), "square.png", 4, 2);
        let root = AssetRoot::new(tmp.path()).unwrap();
        let img = root.load_image("square.png").unwrap();
        assert_eq!((img.width, img.height), (4, 2));
        assert_eq!(img.stride(), 16);
        assert_eq!(img.pixels.len(), 4 * 2 * 4);
        // Pixel (3, 1) is the last one.
        assert_eq!(&img.pixels[28..32], &[3, 1, 0, 255]);
    }

    #[test]
    fn garbage_is_decode_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            DecodedImage::open(&path),
            Err(AssetError::Decode { .. })
        ));
    }
}
