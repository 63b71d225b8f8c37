use gloo_net::http::Request;
use thiserror::Error;
use web_sys::{FormData, HtmlFormElement};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not read form fields: {0}")]
    Fields(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint answered with status {0}")]
    Rejected(u16),
}

/// Snapshot of every field in `form`, taken before the request is awaited.
pub fn collect_fields(form: &HtmlFormElement) -> Result<FormData, SubmitError> {
    FormData::new_with_form(form).map_err(|e| SubmitError::Fields(format!("{:?}", e)))
}

/// Posts the form fields to `endpoint`. Only the status is looked at, the
/// body is never parsed.
pub async fn send_fields(endpoint: &str, fields: FormData) -> Result<(), SubmitError> {
    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(fields)
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_their_cause() {
        assert_eq!(
            SubmitError::Rejected(422).to_string(),
            "endpoint answered with status 422"
        );
        assert!(SubmitError::Network("offline".to_string())
            .to_string()
            .contains("offline"));
    }
}
