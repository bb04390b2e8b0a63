use crate::error::ValidationError;
use image::ImageFormat;

/// Upload size limit: 10 MB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A validated upload, ready to hand to an image-placement flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// Validate an uploaded file by content, not extension: size limit first,
/// then format sniffing (PNG, JPEG or GIF), then a decode of the header
/// for the pixel dimensions.
pub fn validate_upload(bytes: &[u8]) -> Result<UploadedImage, ValidationError> {
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::ImageTooLarge {
            size: bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let format = image::guess_format(bytes).map_err(|_| ValidationError::UnsupportedImageFormat)?;
    if !matches!(
        format,
        ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif
    ) {
        log::warn!("Rejected upload with format {format:?}");
        return Err(ValidationError::UnsupportedImageFormat);
    }

    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|err| ValidationError::ImageDecode(err.to_string()))?;

    log::debug!(
        "Accepted {format:?} upload, {}x{} px, {} bytes",
        img.width(),
        img.height(),
        bytes.len()
    );

    Ok(UploadedImage {
        format,
        width: img.width(),
        height: img.height(),
    })
}

/// Result of processing one dropped file, for display in the tools panel.
pub fn describe_drop(name: &str, bytes: &[u8]) -> String {
    match validate_upload(bytes) {
        Ok(img) => format!("{name}: {}\u{d7}{} px, accepted", img.width, img.height),
        Err(err) => format!("{name}: {err}"),
    }
}

/// Watches the egui context for files dropped onto the window and turns
/// each into a user-visible validation notice.
#[derive(Debug, Default)]
pub struct UploadWatcher {
    notices: Vec<String>,
}

impl UploadWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    /// Validate any newly dropped files. Returns true if new notices
    /// were produced.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return false;
        }

        for file in &dropped {
            let name = if !file.name.is_empty() {
                file.name.clone()
            } else if let Some(path) = &file.path {
                path.display().to_string()
            } else {
                "unknown".to_owned()
            };

            if let Some(bytes) = &file.bytes {
                self.notices.push(describe_drop(&name, bytes));
                continue;
            }

            #[cfg(not(target_arch = "wasm32"))]
            if let Some(path) = &file.path {
                match std::fs::read(path) {
                    Ok(bytes) => self.notices.push(describe_drop(&name, &bytes)),
                    Err(err) => {
                        log::error!("Failed to read dropped file {}: {err}", path.display());
                        self.notices.push(format!("{name}: could not read file"));
                    }
                }
                continue;
            }

            log::warn!("Dropped file has no accessible data: {name}");
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn accepts_small_png() {
        let bytes = png_bytes(4, 3);
        let uploaded = validate_upload(&bytes).unwrap();
        assert_eq!(uploaded.format, ImageFormat::Png);
        assert_eq!((uploaded.width, uploaded.height), (4, 3));
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = validate_upload(b"definitely not an image").unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedImageFormat);
    }

    #[test]
    fn rejects_oversized_payload_before_decoding() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES + 1];
        match validate_upload(&bytes).unwrap_err() {
            ValidationError::ImageTooLarge { size, limit } => {
                assert_eq!(size, MAX_UPLOAD_BYTES + 1);
                assert_eq!(limit, MAX_UPLOAD_BYTES);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
