//! Delivery engine - bounded retry loop around the contact gateway

use std::sync::Arc;

use contactsync_domain::{DeliveryOutcome, SyncPayload};
use tracing::{error, info, warn};

use super::policy::{RetryPolicy, StatusClass};
use super::ports::{ContactGateway, GatewayResponse};

const NO_STATUS: &str = "No Status";

/// Pushes payloads to NusaContact, retrying per [`RetryPolicy`].
///
/// Transport failures end the loop at once without a retry. Nothing cancels
/// a running loop; each attempt is bounded only by the gateway's timeout.
pub struct DeliveryEngine {
    gateway: Arc<dyn ContactGateway>,
    policy: RetryPolicy,
}

impl DeliveryEngine {
    /// Engine posting through `gateway` under `policy`.
    pub fn new(gateway: Arc<dyn ContactGateway>, policy: RetryPolicy) -> Self {
        Self { gateway, policy }
    }

    /// Run the delivery loop to a terminal outcome.
    pub async fn deliver(&self, payload: &SyncPayload) -> DeliveryOutcome {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            let response = match self.gateway.post_contact(payload).await {
                Ok(response) => response,
                Err(err) => {
                    let message = err.to_string();
                    log_failed_attempt(attempt, max_attempts, NO_STATUS, &message);
                    error!(attempt, error = %message, "[SYNC ERROR] Unexpected error, giving up");
                    return DeliveryOutcome::UnexpectedError { attempts: attempt, message };
                }
            };

            let status = response.status;
            match self.policy.classify(status) {
                StatusClass::Success => {
                    info!(
                        attempt,
                        status,
                        response_message = %success_message(&response),
                        "[SYNC SUCCESS] Contact delivered"
                    );
                    return DeliveryOutcome::Success { attempts: attempt, status };
                }
                StatusClass::Terminal => {
                    log_failed_attempt(attempt, max_attempts, &status.to_string(), &response.body);
                    error!(attempt, status, "[SYNC STOPPED] Non-retryable 4xx error");
                    return DeliveryOutcome::StoppedNonRetryable { attempts: attempt, status };
                }
                StatusClass::Retryable => {
                    log_failed_attempt(attempt, max_attempts, &status.to_string(), &response.body);
                }
            }

            if !self.policy.has_attempts_left(attempt) {
                error!(attempt, status, "[SYNC FAILED] Max retries reached");
                return DeliveryOutcome::ExhaustedRetries { attempts: attempt, last_status: status };
            }

            let delay = self.policy.delay_for(attempt);
            let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
            info!(attempt, delay_ms, "[SYNC RETRY] Waiting {}ms before retry", delay_ms);
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

fn log_failed_attempt(attempt: u32, max_attempts: u32, status: &str, detail: &str) {
    warn!(
        attempt,
        max_attempts,
        status,
        detail,
        "[SYNC ERROR] Attempt {}/{} - {}: {}",
        attempt,
        max_attempts,
        status,
        detail
    );
}

/// The API's `message` field when the body is JSON, otherwise the raw body.
fn success_message(response: &GatewayResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| response.body.clone())
}
