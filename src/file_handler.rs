use crate::background::LoadedImage;
use crate::error::{EditorError, EditorResult};
use crate::event::EditorEvent;

/// Decode an encoded image (PNG, JPEG, ...) into a background bitmap.
pub fn decode_image(bytes: &[u8]) -> EditorResult<LoadedImage> {
    let image = image::load_from_memory(bytes).map_err(|err| {
        log::error!("Failed to decode image: {}", err);
        EditorError::ImageDecodeFailure(err.to_string())
    })?;
    log::debug!("Successfully decoded image: {}x{}", image.width(), image.height());

    if image.width() == 0 || image.height() == 0 {
        return Err(EditorError::ImageDecodeFailure("image has no pixels".to_owned()));
    }
    Ok(LoadedImage::new(image.to_rgba8()))
}

/// Picks up files dropped on the window and turns them into image events.
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if new files were dropped this frame
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if i.raw.dropped_files.is_empty() {
                false
            } else {
                self.dropped_files = i.raw.dropped_files.clone();
                true
            }
        })
    }

    /// One event per dropped file: loaded or failed.
    pub fn process_dropped_files(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.dropped_files)
            .iter()
            .map(Self::load_file)
            .collect()
    }

    fn load_file(file: &egui::DroppedFile) -> EditorEvent {
        let file_name = if let Some(path) = &file.path {
            path.display().to_string()
        } else if !file.name.is_empty() {
            file.name.clone()
        } else {
            "unknown".to_owned()
        };

        if !Self::is_image_file(file) {
            log::warn!("Dropped file is not a supported type: {}", file_name);
            return EditorEvent::ImageLoadFailed(format!("{file_name} is not an image"));
        }

        let loaded = if let Some(bytes) = &file.bytes {
            log::info!("Processing image from memory: {} ({} bytes)", file_name, bytes.len());
            decode_image(bytes)
        } else if let Some(path) = &file.path {
            log::info!("Processing image from path: {}", path.display());
            std::fs::read(path)
                .map_err(|err| {
                    log::error!("Failed to read image file: {}: {}", path.display(), err);
                    EditorError::ImageDecodeFailure(err.to_string())
                })
                .and_then(|bytes| decode_image(&bytes))
        } else {
            log::warn!("Dropped file has no accessible data: {}", file_name);
            Err(EditorError::ImageDecodeFailure(format!("{file_name} has no data")))
        };

        match loaded {
            Ok(image) => EditorEvent::ImageLoaded(image),
            Err(EditorError::ImageDecodeFailure(reason)) => EditorEvent::ImageLoadFailed(reason),
            Err(other) => EditorEvent::ImageLoadFailed(other.to_string()),
        }
    }

    /// Check if a file is an image based on MIME type or extension
    fn is_image_file(file: &egui::DroppedFile) -> bool {
        if !file.mime.is_empty() {
            file.mime.starts_with("image/")
        } else if let Some(ext) = file.path.as_ref().and_then(|path| path.extension()) {
            let ext = ext.to_string_lossy().to_lowercase();
            matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
        } else {
            // bytes without a name or mime: let the decoder decide
            file.bytes.is_some()
        }
    }
}
