use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::core::data::image::Image;

/// Shared handle through which the host application and the save workflow
/// both reach the same dataset.
pub type DatasetHandle = Arc<Mutex<Dataset>>;

/// An in-memory image together with its persistence metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    image: Image,
    source_path: Option<PathBuf>,
    dirty: bool,
    name: String,
}

impl Dataset {
    /// A dataset with no backing file yet. New datasets start dirty.
    #[must_use]
    pub fn new(name: impl Into<String>, image: Image) -> Self {
        Self {
            image,
            source_path: None,
            dirty: true,
            name: name.into(),
        }
    }

    /// A dataset freshly loaded from `source_path`.
    #[must_use]
    pub fn opened_from(source_path: impl Into<PathBuf>, name: impl Into<String>, image: Image) -> Self {
        Self {
            image,
            source_path: Some(source_path.into()),
            dirty: false,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn into_handle(self) -> DatasetHandle {
        Arc::new(Mutex::new(self))
    }

    #[must_use]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Replaces the pixels and marks the dataset as modified.
    pub fn set_image(&mut self, image: Image) {
        self.image = image;
        self.dirty = true;
    }

    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn set_source_path(&mut self, source_path: Option<PathBuf>) {
        self.source_path = source_path;
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::image::PixelType;

    #[test]
    fn test_new_dataset_is_dirty_without_source() {
        let dataset = Dataset::new("untitled", Image::new(1, 1, PixelType::Gray8));

        assert!(dataset.is_dirty());
        assert_eq!(dataset.source_path(), None);
        assert_eq!(dataset.name(), "untitled");
    }

    #[test]
    fn test_opened_dataset_is_clean() {
        let dataset = Dataset::opened_from(
            "/data/cells.pgm",
            "cells.pgm",
            Image::new(1, 1, PixelType::Gray8),
        );

        assert!(!dataset.is_dirty());
        assert_eq!(dataset.source_path(), Some(Path::new("/data/cells.pgm")));
    }

    #[test]
    fn test_set_image_marks_dirty() {
        let mut dataset = Dataset::opened_from(
            "/data/cells.pgm",
            "cells.pgm",
            Image::new(1, 1, PixelType::Gray8),
        );

        dataset.set_image(Image::new(2, 2, PixelType::Gray8));

        assert!(dataset.is_dirty());
        assert_eq!(dataset.image().width(), 2);
    }
}
