//! Invocation records capturing execution metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::CoreResult;

/// Lifecycle of one invocation: `Dispatching` until the outcome is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationStatus {
    Dispatching,
    Succeeded,
    Failed,
}

/// Record of a single invocation, capturing timing, status, and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRecord {
    /// Correlation id for log lines of the same invocation.
    pub id: Uuid,
    pub tool_name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_ms: u64,
    pub status: InvocationStatus,
    /// Error message if the invocation failed.
    pub error: Option<String>,
    /// Model the request was sent to, once known.
    pub model: Option<String>,
}

impl InvocationRecord {
    pub fn start(tool_name: &str) -> Self {
        let record = Self {
            id: Uuid::now_v7(),
            tool_name: tool_name.to_string(),
            started_at: Utc::now(),
            ended_at: None,
            duration_ms: 0,
            status: InvocationStatus::Dispatching,
            error: None,
            model: None,
        };
        debug!(
            invocation_id = %record.id,
            tool = %record.tool_name,
            "tool invocation dispatching"
        );
        record
    }

    /// Moves the record to its terminal state and logs the outcome.
    pub fn finish(&mut self, outcome: &CoreResult<String>) {
        self.finish_at(Utc::now(), outcome);
        self.log_outcome();
    }

    fn finish_at(&mut self, ended_at: DateTime<Utc>, outcome: &CoreResult<String>) {
        self.duration_ms = (ended_at - self.started_at)
            .num_milliseconds()
            .max(0) as u64;
        self.ended_at = Some(ended_at);
        match outcome {
            Ok(_) => {
                self.status = InvocationStatus::Succeeded;
                self.error = None;
            }
            Err(error) => {
                self.status = InvocationStatus::Failed;
                self.error = Some(error.to_string());
            }
        }
    }

    fn log_outcome(&self) {
        let model = self.model.as_deref().unwrap_or("-");
        match &self.error {
            None => info!(
                invocation_id = %self.id,
                tool = %self.tool_name,
                model,
                duration_ms = self.duration_ms,
                "tool invocation succeeded"
            ),
            Some(error) => warn!(
                invocation_id = %self.id,
                tool = %self.tool_name,
                model,
                duration_ms = self.duration_ms,
                error = %error,
                "tool invocation failed"
            ),
        }
    }
}
