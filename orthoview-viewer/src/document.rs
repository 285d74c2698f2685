use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use orthoview_core::{ImageResource, Size};

use crate::loader;

/// A decoded image ready to hand to the renderer.
#[derive(Debug, Clone)]
pub struct ImageDocument {
    path: PathBuf,
    handle: Handle,
    width: u32,
    height: u32,
}

impl ImageDocument {
    /// Load an image from a file path
    pub async fn load(path: PathBuf) -> Result<Self, String> {
        Self::open(&path).map_err(|e| format!("{e:#}"))
    }

    pub fn open(path: &Path) -> Result<Self> {
        let pixels = loader::decode(path)
            .with_context(|| format!("Failed to open image {}", path.display()))?;

        let (width, height) = pixels.dimensions();
        let handle = Handle::from_rgba(width, height, pixels.into_raw());

        Ok(Self {
            path: path.to_path_buf(),
            handle,
            width,
            height,
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled")
            .to_string()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl ImageResource for ImageDocument {
    fn intrinsic_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}
