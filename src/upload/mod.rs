//! Image upload validation and storage.
//!
//! The transport layer spools a submitted file into a temporary location and
//! hands the pipeline a [`FileUpload`] descriptor. The pipeline applies the
//! size policy and the extension allow-list, then relocates the temporary
//! file into public storage under a generated name. The client-declared
//! filename is only ever consulted for its extension; it never becomes part
//! of the target path.

use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::config::{ALLOWED_IMAGE_EXTENSIONS, MAX_IMAGE_BYTES, UPLOAD_URL_PREFIX};
use crate::errors::PostError;

/// Transport-level outcome of receiving a file part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    /// File received completely
    Ok,
    /// The form was submitted without a file
    NoFile,
    /// The transfer was cut off at the server-wide size cap
    ExceededServerLimit,
    /// The transfer failed for another reason
    OtherError,
}

/// A file submitted with a request, as described by the transport layer.
#[derive(Debug)]
pub struct FileUpload {
    pub status: UploadStatus,
    /// Filename declared by the client; trusted only for its extension
    pub original_name: String,
    /// Spooled size in bytes
    pub size: u64,
    /// Temporary spool file; present only when `status` is `Ok`
    pub temp: Option<NamedTempFile>,
}

impl FileUpload {
    /// A completely received file
    pub fn received(temp: NamedTempFile, original_name: String, size: u64) -> Self {
        Self {
            status: UploadStatus::Ok,
            original_name,
            size,
            temp: Some(temp),
        }
    }

    /// No file was submitted
    pub fn no_file() -> Self {
        Self {
            status: UploadStatus::NoFile,
            original_name: String::new(),
            size: 0,
            temp: None,
        }
    }

    /// The transfer crossed the server-wide cap
    pub fn exceeded_server_limit(original_name: String) -> Self {
        Self {
            status: UploadStatus::ExceededServerLimit,
            original_name,
            size: 0,
            temp: None,
        }
    }

    /// The transfer failed mid-way
    pub fn other_error(original_name: String) -> Self {
        Self {
            status: UploadStatus::OtherError,
            original_name,
            size: 0,
            temp: None,
        }
    }
}

/// Validates accepted uploads and relocates them into public storage.
pub struct UploadPipeline {
    target_dir: PathBuf,
}

impl UploadPipeline {
    /// Create a pipeline storing files under `target_dir`
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// Validate `upload` and move it into the target directory.
    ///
    /// Returns the relative reference to store with the post, e.g.
    /// `uploads/<token>.png`.
    ///
    /// # Errors
    /// - `ImageTooLarge` when the spooled size exceeds the 5 MiB policy
    ///   (exactly 5 MiB still passes)
    /// - `ImageTypeNotAllowed` when the declared extension is not in the
    ///   allow-list
    /// - `ImageSaveFailed` when the directory cannot be created or the
    ///   relocation fails
    pub fn store(&self, upload: FileUpload) -> Result<String, PostError> {
        if upload.size > MAX_IMAGE_BYTES {
            return Err(PostError::ImageTooLarge);
        }

        let ext = allowed_extension(&upload.original_name).ok_or(PostError::ImageTypeNotAllowed)?;

        // Random token, never the client-declared name
        let file_name = format!("{}.{}", Uuid::new_v4().simple(), ext);

        std::fs::create_dir_all(&self.target_dir).map_err(|e| {
            tracing::error!("Failed to create upload directory: {}", e);
            PostError::ImageSaveFailed
        })?;

        let temp = upload.temp.ok_or(PostError::ImageSaveFailed)?;
        let target = self.target_dir.join(&file_name);

        temp.persist(&target).map_err(|e| {
            tracing::error!("Failed to store uploaded image: {}", e.error);
            PostError::ImageSaveFailed
        })?;

        Ok(format!("{}/{}", UPLOAD_URL_PREFIX, file_name))
    }
}

/// Extract the lowercased extension if it is in the allow-list.
fn allowed_extension(original_name: &str) -> Option<String> {
    let ext = Path::new(original_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();

    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::tempdir;

    use super::*;

    fn spooled(name: &str, size: u64) -> FileUpload {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"test bytes").unwrap();
        // The descriptor carries the spooled size; tests do not need to
        // write the full payload to exercise the policy boundary
        FileUpload::received(temp, name.to_string(), size)
    }

    #[test]
    fn test_store_accepts_exactly_five_mib() {
        let dir = tempdir().unwrap();
        let pipeline = UploadPipeline::new(dir.path());

        let result = pipeline.store(spooled("photo.png", 5 * 1024 * 1024));
        assert!(result.is_ok());
    }

    #[test]
    fn test_store_rejects_one_byte_over_five_mib() {
        let dir = tempdir().unwrap();
        let pipeline = UploadPipeline::new(dir.path());

        let result = pipeline.store(spooled("photo.png", 5 * 1024 * 1024 + 1));
        assert_eq!(result.unwrap_err(), PostError::ImageTooLarge);
    }

    #[test]
    fn test_store_extension_allow_list() {
        let dir = tempdir().unwrap();
        let pipeline = UploadPipeline::new(dir.path());

        for name in ["a.jpg", "b.jpeg", "c.png", "d.gif", "e.webp", "f.JPG"] {
            assert!(pipeline.store(spooled(name, 100)).is_ok(), "{name}");
        }
        for name in ["evil.exe", "vector.svg", "shell.php", "noextension"] {
            assert_eq!(
                pipeline.store(spooled(name, 100)).unwrap_err(),
                PostError::ImageTypeNotAllowed,
                "{name}"
            );
        }
    }

    #[test]
    fn test_store_size_policy_checked_before_extension() {
        let dir = tempdir().unwrap();
        let pipeline = UploadPipeline::new(dir.path());

        let result = pipeline.store(spooled("evil.exe", 6 * 1024 * 1024));
        assert_eq!(result.unwrap_err(), PostError::ImageTooLarge);
    }

    #[test]
    fn test_store_generates_fresh_names() {
        let dir = tempdir().unwrap();
        let pipeline = UploadPipeline::new(dir.path());

        let first = pipeline.store(spooled("same.png", 10)).unwrap();
        let second = pipeline.store(spooled("same.png", 10)).unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("uploads/"));
        assert!(first.ends_with(".png"));
        assert!(!first.contains("same"));
    }

    #[test]
    fn test_store_ignores_path_components_in_original_name() {
        let dir = tempdir().unwrap();
        let pipeline = UploadPipeline::new(dir.path());

        let reference = pipeline.store(spooled("../../escape.png", 10)).unwrap();
        let file_name = reference.strip_prefix("uploads/").unwrap();

        // The stored file sits inside the target directory
        assert!(dir.path().join(file_name).exists());
    }

    #[test]
    fn test_store_writes_file_to_target_dir() {
        let dir = tempdir().unwrap();
        let pipeline = UploadPipeline::new(dir.path());

        let reference = pipeline.store(spooled("pic.webp", 10)).unwrap();
        let file_name = reference.strip_prefix("uploads/").unwrap();

        let stored = std::fs::read(dir.path().join(file_name)).unwrap();
        assert_eq!(stored, b"test bytes");
    }
}
