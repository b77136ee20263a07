//! Delivery outcome types

use serde::{Deserialize, Serialize};

/// Terminal state of one delivery loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeliveryOutcome {
    /// The API answered with a status in `[200, 400)`.
    Success { attempts: u32, status: u16 },
    /// A 4xx outside the retryable set; no further attempts were made.
    StoppedNonRetryable { attempts: u32, status: u16 },
    /// Every attempt in the budget failed with a retryable status.
    ExhaustedRetries { attempts: u32, last_status: u16 },
    /// A transport or other non-HTTP failure; never retried.
    UnexpectedError { attempts: u32, message: String },
}

impl DeliveryOutcome {
    /// Whether the contact reached NusaContact.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Number of POSTs issued before reaching this state.
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Success { attempts, .. }
            | Self::StoppedNonRetryable { attempts, .. }
            | Self::ExhaustedRetries { attempts, .. }
            | Self::UnexpectedError { attempts, .. } => *attempts,
        }
    }

    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::StoppedNonRetryable { .. } => "stopped_non_retryable",
            Self::ExhaustedRetries { .. } => "exhausted_retries",
            Self::UnexpectedError { .. } => "unexpected_error",
        }
    }
}
