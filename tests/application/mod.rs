mod job_submitter_test;
mod query_service_test;
mod transcription_service_test;
