use tracing::{info, warn};

use super::provider::SpecificationService;
use crate::form::FormAction;
use crate::generator::generate;
use crate::models::SpecificationRequest;

/// Sends `request` to `service` and turns the outcome into the form action
/// that completes the submission.
///
/// On failure the error text becomes the displayed message. With
/// `fallback_on_error` the locally generated strings are shown alongside it.
/// The returned action quotes `submission` so the form can drop it if the
/// submission was abandoned in the meantime.
pub async fn submit(
    service: &dyn SpecificationService,
    request: &SpecificationRequest,
    fallback_on_error: bool,
    submission: u64,
) -> FormAction {
    match service.generate(request).await {
        Ok(response) => {
            info!(backend = service.backend_name(), "specification generated");
            FormAction::SubmitSucceeded {
                submission,
                output: response.into_output(request),
            }
        }
        Err(error) => {
            warn!(backend = service.backend_name(), %error, "generation request failed");
            FormAction::SubmitFailed {
                submission,
                message: error.to_string(),
                fallback: fallback_on_error.then(|| generate(request)),
            }
        }
    }
}
