mod local_upload_staging;

pub use local_upload_staging::LocalUploadStaging;
