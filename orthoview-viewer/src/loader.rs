use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an image file could not be turned into pixels.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{path} is not a file")]
    NotAFile { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{path} has no pixels ({width}x{height})")]
    EmptyImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// Decodes the file at `path` into an RGBA buffer.
pub fn decode(path: &Path) -> Result<image::RgbaImage, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::load_from_memory(&bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(LoadError::EmptyImage {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    tracing::debug!(path = %path.display(), width, height, "decoded image");
    Ok(decoded.to_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_png(width: u32, height: u32) -> NamedTempFile {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let pixels = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        pixels.save(file.path()).unwrap();
        file
    }

    #[test]
    fn decodes_png() {
        let file = write_png(4, 3);
        let decoded = decode(file.path()).unwrap();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn rejects_directories() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotAFile { .. }));
    }

    #[test]
    fn rejects_garbage() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an image").unwrap();

        let err = decode(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().starts_with("failed to decode"));
    }
}
