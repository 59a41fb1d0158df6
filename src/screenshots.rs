//! Screenshot loading and encoding.
//!
//! Reads every screenshot in parallel and reassembles the results in
//! submission order - the model sees the pages of a question in the order
//! the caller captured them.

use crate::ai::mime::detect_image_mime;
use crate::{Error, Result};
use base64::Engine as _;
use std::path::PathBuf;
use tracing::debug;

/// A screenshot encoded for transport as a Gemini inline part.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub mime_type: &'static str,
    /// Base64 (standard alphabet) of the raw file bytes.
    pub data: String,
}

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            mime_type: detect_image_mime(bytes),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }
}

async fn read_one(path: PathBuf) -> Result<EncodedImage> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| Error::ImageRead { path, source })?;
    Ok(EncodedImage::from_bytes(&bytes))
}

/// Load and encode every screenshot, all-or-nothing.
///
/// Reads run concurrently on spawned tasks; joining the handles in input
/// order keeps the output sequence aligned with `paths` regardless of which
/// read finishes first. Any single failure aborts the batch with the
/// offending path.
pub async fn load_screenshots(paths: &[PathBuf]) -> Result<Vec<EncodedImage>> {
    debug!("Loading {} screenshot(s)", paths.len());

    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(read_one(path)))
        .collect();

    let mut images = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(paths) {
        let image = handle.await.map_err(|e| Error::ImageRead {
            path: path.clone(),
            source: std::io::Error::other(e),
        })??;
        images.push(image);
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use std::io::Write;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn write_fixture(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_preserves_submission_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        let mut expected = Vec::new();

        // Files of very different sizes so reads complete out of order.
        for (i, size) in [1024 * 512, 16, 1024 * 64, 8].iter().enumerate() {
            let mut bytes = PNG_MAGIC.to_vec();
            bytes.extend(std::iter::repeat(i as u8).take(*size));
            paths.push(write_fixture(&dir, &format!("shot_{}.png", i), &bytes));
            expected.push(base64::engine::general_purpose::STANDARD.encode(&bytes));
        }

        let images = load_screenshots(&paths).await.unwrap();
        assert_eq!(images.len(), 4);
        for (image, expected) in images.iter().zip(&expected) {
            assert_eq!(&image.data, expected);
            assert_eq!(image.mime_type, "image/png");
        }
    }

    #[tokio::test]
    async fn test_missing_file_fails_whole_batch_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_fixture(&dir, "a.png", PNG_MAGIC);
        let missing = dir.path().join("b.png");
        let third = write_fixture(&dir, "c.png", PNG_MAGIC);

        let err = load_screenshots(&[first, missing.clone(), third])
            .await
            .unwrap_err();
        assert_eq!(err.failed_path(), Some(missing.as_path()));
    }

    #[tokio::test]
    async fn test_encoded_image_detects_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "shot.jpg", &[0xFF, 0xD8, 0xFF, 0xE0, 0x00]);

        let images = load_screenshots(&[path]).await.unwrap();
        assert_eq!(images[0].mime_type, "image/jpeg");
    }
}
