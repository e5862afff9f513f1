//! Posting a validated form to the validation server.
//!
//! A submission resolves exactly once, either to the HTML fragment the
//! server rendered or to a [`SubmitFailure`] describing what the user should
//! see instead. Rendering either outcome is left to the caller.

use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::config::{Config, ServerConfig};
use crate::core::validator::{InputReport, InputValidator};
use crate::SeqcheckError;

pub const UNIDENTIFIED_MESSAGE: &str = "There seems to be an unidentified Error.";

/// Form fields as the server expects them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub seq: String,
    pub validations: Vec<String>,
    /// Advanced parameters, passed through unchanged
    pub params: Vec<(String, String)>,
}

impl SubmissionForm {
    pub fn new(seq: impl Into<String>) -> Self {
        Self {
            seq: seq.into(),
            ..Self::default()
        }
    }

    pub fn with_validation(mut self, name: impl Into<String>) -> Self {
        self.validations.push(name.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Key/value pairs in submission order; `validations[]` repeats per method.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(1 + self.validations.len() + self.params.len());
        pairs.push(("seq".to_string(), self.seq.clone()));
        for validation in &self.validations {
            pairs.push(("validations[]".to_string(), validation.clone()));
        }
        pairs.extend(self.params.iter().cloned());
        pairs
    }
}

/// HTML fragment returned by a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsFragment {
    pub html: String,
}

#[derive(Error, Debug)]
pub enum SubmitFailure {
    /// The form failed validation and was never sent
    #[error("input rejected with {} issue(s)", .0.issues.len())]
    Invalid(InputReport),

    /// HTTP 500; the body is a server-rendered error page
    #[error("server error (HTTP 500)")]
    Server { html: String },

    #[error("{} ({})", UNIDENTIFIED_MESSAGE, .detail)]
    Unidentified { status: Option<u16>, detail: String },
}

impl SubmitFailure {
    /// What the results area should show for this failure.
    pub fn display_html(&self) -> String {
        match self {
            Self::Invalid(report) => report
                .issues
                .iter()
                .map(|issue| issue.to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Server { html } => html.clone(),
            Self::Unidentified { .. } => UNIDENTIFIED_MESSAGE.to_string(),
        }
    }
}

pub struct SubmitClient {
    client: Client,
    url: String,
    validator: InputValidator,
}

impl SubmitClient {
    pub fn new(url: impl Into<String>, server: &ServerConfig) -> Result<Self, SeqcheckError> {
        let client = Client::builder()
            .user_agent(concat!("seqcheck/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(server.timeout_secs))
            .connect_timeout(Duration::from_secs(server.connect_timeout_secs))
            .build()
            .map_err(|e| SeqcheckError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
            validator: InputValidator::default(),
        })
    }

    /// Client for the configured server URL, validating with the configured rules.
    pub fn from_config(config: &Config) -> Result<Self, SeqcheckError> {
        let url = config
            .server
            .url
            .clone()
            .ok_or_else(|| SeqcheckError::Config("server.url is not set".to_string()))?;
        Ok(Self::new(url, &config.server)?.with_validator(InputValidator::from_config(config)))
    }

    pub fn with_validator(mut self, validator: InputValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Validate the form and, if it passes, post it.
    pub async fn submit(&self, form: &SubmissionForm) -> Result<ResultsFragment, SubmitFailure> {
        let report = self.validator.validate(&form.seq, &form.validations);
        if !report.is_valid() {
            return Err(SubmitFailure::Invalid(report));
        }
        self.post(form).await
    }

    /// Post the form without local validation.
    pub async fn post(&self, form: &SubmissionForm) -> Result<ResultsFragment, SubmitFailure> {
        debug!("Posting {} bytes of sequence to {}", form.seq.len(), self.url);

        let response = self
            .client
            .post(&self.url)
            .form(&form.pairs())
            .send()
            .await
            .map_err(|e| {
                warn!("Submission to {} failed: {}", self.url, e);
                SubmitFailure::Unidentified {
                    status: None,
                    detail: e.to_string(),
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| SubmitFailure::Unidentified {
            status: Some(status.as_u16()),
            detail: format!("failed to read response body: {}", e),
        })?;

        if status.is_success() {
            info!("Received {} bytes of results", body.len());
            Ok(ResultsFragment { html: body })
        } else if status == StatusCode::INTERNAL_SERVER_ERROR {
            warn!("Server reported an error for this input");
            Err(SubmitFailure::Server { html: body })
        } else {
            warn!("Unexpected response status {}", status);
            Err(SubmitFailure::Unidentified {
                status: Some(status.as_u16()),
                detail: format!("HTTP {}", status),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_repeat_validations() {
        let form = SubmissionForm::new("ACGT")
            .with_validation("length_cluster")
            .with_validation("duplication")
            .with_param("min_blast_hits", "5");

        assert_eq!(
            form.pairs(),
            vec![
                ("seq".to_string(), "ACGT".to_string()),
                ("validations[]".to_string(), "length_cluster".to_string()),
                ("validations[]".to_string(), "duplication".to_string()),
                ("min_blast_hits".to_string(), "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_failure_display() {
        let server = SubmitFailure::Server {
            html: "<p>BLAST failed</p>".to_string(),
        };
        assert_eq!(server.display_html(), "<p>BLAST failed</p>");

        let other = SubmitFailure::Unidentified {
            status: Some(404),
            detail: "HTTP 404 Not Found".to_string(),
        };
        assert_eq!(other.display_html(), UNIDENTIFIED_MESSAGE);
    }

    #[test]
    fn test_from_config_requires_url() {
        let config = Config::default();
        assert!(matches!(
            SubmitClient::from_config(&config),
            Err(SeqcheckError::Config(_))
        ));
    }
}
