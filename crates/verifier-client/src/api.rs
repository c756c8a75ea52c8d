use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    types::{StatusResponse, VerificationId, VerificationRequest},
    VerifierApiError, VerifierResult,
};

/// How much of an error body gets quoted in logs and error values.
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around the explorer's contract-verification endpoint.
///
/// `verify_url` is the full submission URL (`.../contract_verification`);
/// status reads append `/{id}` to it. One `reqwest::Client` is shared across
/// all calls.
#[derive(Clone, Debug)]
pub struct VerifierApi {
    client: reqwest::Client,
    verify_url: String,
}

impl VerifierApi {
    pub fn try_new(verify_url: impl Into<String>) -> VerifierResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            verify_url: verify_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Submit a verification request. A 2xx response carries a bare integer
    /// verification id in the body; anything else is returned as
    /// [`VerifierApiError::Http`] with a truncated body preview.
    pub async fn submit(&self, request: &VerificationRequest) -> VerifierResult<VerificationId> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let body = preview(&body);
            warn!(%status, %body, "Verification submission rejected");
            return Err(VerifierApiError::Http { status, body });
        }

        let id = body
            .trim()
            .parse::<u64>()
            .map(VerificationId)
            .map_err(|_| VerifierApiError::MalformedId {
                body: preview(&body),
            })?;
        debug!(%id, contract = %request.contract_name, "Verification request accepted");
        Ok(id)
    }

    /// Read the current state of a submitted request.
    pub async fn status(&self, id: VerificationId) -> VerifierResult<StatusResponse> {
        let response = self
            .client
            .get(format!("{}/{id}", self.verify_url))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(VerifierApiError::Http {
                status,
                body: preview(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| VerifierApiError::MalformedStatus {
            body: preview(&body),
            source,
        })
    }
}

fn preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect()
}
