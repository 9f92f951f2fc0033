use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::application::ports::{TranscriptSnapshot, TranscriptionProvider};
use crate::domain::{TranscriptStatus, TranscriptionJob};

use super::transcription_service::TranscriptionServiceError;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);
const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(900);
const DEFAULT_MAX_FETCH_RETRIES: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingPolicy {
    pub interval: Duration,
    /// `None` polls until the provider reaches a terminal state.
    pub max_wait: Option<Duration>,
    /// Consecutive transient fetch failures tolerated before giving up.
    pub max_fetch_retries: u32,
}

impl Default for PollingPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: Some(DEFAULT_MAX_WAIT),
            max_fetch_retries: DEFAULT_MAX_FETCH_RETRIES,
        }
    }
}

pub struct TranscriptPoller<P>
where
    P: TranscriptionProvider,
{
    provider: Arc<P>,
    policy: PollingPolicy,
}

impl<P> TranscriptPoller<P>
where
    P: TranscriptionProvider,
{
    pub fn new(provider: Arc<P>, policy: PollingPolicy) -> Self {
        Self { provider, policy }
    }

    /// Polls until the job is `completed`. A provider `error` status, the
    /// time budget or cancellation end polling with an error.
    pub async fn poll(
        &self,
        job: TranscriptionJob,
        cancel: &CancellationToken,
    ) -> Result<TranscriptionJob, TranscriptionServiceError> {
        let polling = self.poll_until_terminal(job, cancel);
        match self.policy.max_wait {
            Some(limit) => tokio::time::timeout(limit, polling)
                .await
                .map_err(|_| TranscriptionServiceError::Timeout(limit))?,
            None => polling.await,
        }
    }

    async fn poll_until_terminal(
        &self,
        mut job: TranscriptionJob,
        cancel: &CancellationToken,
    ) -> Result<TranscriptionJob, TranscriptionServiceError> {
        let mut attempt: u32 = 0;
        let mut failures: u32 = 0;

        loop {
            attempt += 1;
            let fetched = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(TranscriptionServiceError::Cancelled),
                fetched = self.provider.fetch_transcript(&job.id) => fetched,
            };

            let delay = match fetched {
                Ok(snapshot) => {
                    failures = 0;
                    tracing::debug!(attempt, status = %snapshot.status, "Transcript status polled");
                    observe(&mut job, snapshot);

                    match job.status {
                        TranscriptStatus::Completed => return Ok(job),
                        TranscriptStatus::Error => {
                            let message = job
                                .error
                                .unwrap_or_else(|| "provider reported an error".to_string());
                            return Err(TranscriptionServiceError::TranscriptionFailure(message));
                        }
                        _ => self.policy.interval,
                    }
                }
                Err(e) if e.is_transient() && failures < self.policy.max_fetch_retries => {
                    failures += 1;
                    tracing::warn!(
                        attempt,
                        failures,
                        error = %e,
                        "Transient failure fetching transcript status"
                    );
                    self.policy
                        .interval
                        .checked_mul(failures)
                        .unwrap_or(Duration::MAX)
                }
                Err(e) => {
                    tracing::error!(attempt, error = %e, "Fetching transcript status failed");
                    return Err(TranscriptionServiceError::StatusFetch(e.to_string()));
                }
            };

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(TranscriptionServiceError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

fn observe(job: &mut TranscriptionJob, snapshot: TranscriptSnapshot) {
    job.status = snapshot.status;
    job.text = snapshot.text;
    job.sentiment_analysis_results = snapshot.sentiment_analysis_results;
    job.summary = snapshot.summary;
    job.error = snapshot.error;
}
