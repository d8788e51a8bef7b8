//! Background submission of the contact form.

use std::fmt;

use crate::core::form::ContactForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The request never produced a response.
    Transport(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Transport(reason) => write!(f, "request failed: {reason}"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Any response counts as delivered, whatever its status. Only a request
/// that never completed is a failure.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn settle<E: fmt::Display>(sent: Result<u16, E>) -> Result<(), SubmitError> {
    match sent {
        Ok(status) => {
            tracing::debug!(status, "contact endpoint answered");
            Ok(())
        }
        Err(err) => Err(SubmitError::Transport(err.to_string())),
    }
}

/// POST the form as multipart fields with `Accept: application/json`.
/// The response body is ignored. Exactly one attempt.
#[cfg(target_arch = "wasm32")]
pub async fn submit_contact(endpoint: &str, form: &ContactForm) -> Result<(), SubmitError> {
    use gloo_net::http::Request;

    let body = web_sys::FormData::new()
        .map_err(|err| SubmitError::Transport(format!("{err:?}")))?;
    for (name, value) in form.fields() {
        body.append_with_str(name, value)
            .map_err(|err| SubmitError::Transport(format!("{err:?}")))?;
    }

    let sent = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(body)
        .send()
        .await
        .map(|response| response.status());
    settle(sent)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn submit_contact(endpoint: &str, form: &ContactForm) -> Result<(), SubmitError> {
    tracing::debug!(endpoint, fields = form.fields().len(), "contact submit outside the browser");
    Err(SubmitError::Transport(
        "form submission is only available in the browser".to_string(),
    ))
}
