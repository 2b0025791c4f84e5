use chrono::{DateTime, Utc};

use crate::dispatch::{DispatchError, DispatchEvent, DispatchStatus, Dispatcher};

use super::{SubmissionRequest, SubmissionResult};

/// Forward one signup to the dispatch trigger. Makes exactly one outbound
/// call and keeps nothing once it returns.
pub async fn run(
    dispatcher: &dyn Dispatcher,
    request: &SubmissionRequest,
    captured_at: DateTime<Utc>,
) -> Result<SubmissionResult, DispatchError> {
    let event = DispatchEvent::add_to_waitlist(&request.email, captured_at);

    tracing::debug!(
        "Dispatching {} for {} via {}",
        event.event_type,
        request.email,
        dispatcher.name()
    );

    let outcome = dispatcher.dispatch(&event).await?;

    match outcome.status {
        DispatchStatus::Accepted => {
            tracing::info!(
                "Waitlist signup dispatched via {} ({})",
                dispatcher.name(),
                outcome.status_code
            );
            Ok(SubmissionResult::accepted())
        }
        DispatchStatus::Rejected => Err(DispatchError::Rejected {
            status_code: outcome.status_code,
            body: outcome.body,
        }),
    }
}
