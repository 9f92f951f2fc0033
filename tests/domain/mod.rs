mod transcript_status_test;
