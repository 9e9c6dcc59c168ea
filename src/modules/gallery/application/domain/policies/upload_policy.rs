use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("Invalid file name")]
    InvalidFileName,

    #[error("Invalid file extension: {0}")]
    InvalidExtension(String),

    #[error("File is empty")]
    EmptyFile,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: usize, actual_bytes: usize },
}

/// Constraints an image must satisfy before it is sent to the media host.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
    pub allowed_extensions: &'static [&'static str],
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
        }
    }
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024; // 10MB
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["jpg", "jpeg", "png", "webp"];

    /// Returns the sanitized base name on success.
    pub fn validate(&self, file_name: &str, size_bytes: usize) -> Result<String, UploadPolicyError> {
        let base = self.sanitize_basename(file_name)?;

        let ext = Path::new(&base)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        if !self.allowed_extensions.contains(&ext.as_str()) {
            return Err(UploadPolicyError::InvalidExtension(ext));
        }

        if size_bytes == 0 {
            return Err(UploadPolicyError::EmptyFile);
        }

        if size_bytes > self.max_file_size_bytes {
            return Err(UploadPolicyError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: size_bytes,
            });
        }

        Ok(base)
    }

    fn sanitize_basename(&self, file_name: &str) -> Result<String, UploadPolicyError> {
        let trimmed = file_name.trim();

        let base = Path::new(trimmed)
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or(UploadPolicyError::InvalidFileName)?;

        if base.is_empty() || base.len() > self.max_file_name_len {
            return Err(UploadPolicyError::InvalidFileName);
        }

        // path-like input
        if base != trimmed {
            return Err(UploadPolicyError::InvalidFileName);
        }

        if base.chars().any(|c| c.is_control()) {
            return Err(UploadPolicyError::InvalidFileName);
        }

        Ok(base.to_string())
    }
}
