use std::path::PathBuf;

/// A multipart upload written to local disk, pending transfer to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
}

impl StagedUpload {
    pub fn new(path: PathBuf, file_name: String, size_bytes: u64) -> Self {
        Self {
            path,
            file_name,
            size_bytes,
        }
    }
}
