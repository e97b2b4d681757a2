use crate::libs::attendance::{AttendanceData, LookupResponse};
use crate::libs::config::UpstreamConfig;
use crate::libs::lookup::LookupQuery;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

const ACTION: &str = "getAttendanceDataByMobile";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Missing required parameters")]
    MissingParameters,
    #[error("Failed to fetch data from external service: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("HTTP error! Status: {0}")]
    Status(StatusCode),
    #[error("Unexpected response from external service: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("{0}")]
    Upstream(String),
}

/// Client for the spreadsheet script that serves attendance rows.
pub struct AttendanceApi {
    client: Client,
    config: UpstreamConfig,
}

impl AttendanceApi {
    pub fn new(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
        })
    }

    /// `{api_url}/macros/s/{script_id}/exec`
    pub fn exec_url(&self) -> String {
        format!("{}/macros/s/{}/exec", self.config.api_url.trim_end_matches('/'), self.config.script_id)
    }

    /// Query pairs sent along with the exec URL.
    ///
    /// Absent ip/device values are sent as the literal `null`, which is what
    /// the script has always received from the web form.
    pub fn query_pairs(query: &LookupQuery) -> Vec<(&'static str, String)> {
        vec![
            ("action", ACTION.to_string()),
            ("mobile", query.mobile.clone()),
            ("startISO", query.start_iso.clone()),
            ("endISO", query.end_iso.clone()),
            ("deviceDetails", query.device_details.clone().unwrap_or_else(|| "null".to_string())),
            ("ipAddress", query.ip_address.clone().unwrap_or_else(|| "null".to_string())),
        ]
    }

    /// Fetches the attendance data for one worker and date range.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when parameters are missing, the script is
    /// unreachable or answers with a non-success status, the body cannot be
    /// decoded, or the script reports an error of its own.
    pub async fn fetch(&self, query: &LookupQuery) -> Result<AttendanceData, LookupError> {
        if query.mobile.is_empty() || query.start_iso.is_empty() || query.end_iso.is_empty() {
            return Err(LookupError::MissingParameters);
        }

        tracing::debug!(start = %query.start_iso, end = %query.end_iso, "fetching attendance");
        let res = self
            .client
            .get(self.exec_url())
            .query(&Self::query_pairs(query))
            .send()
            .await
            .map_err(LookupError::Unreachable)?;

        if !res.status().is_success() {
            tracing::error!(status = %res.status(), "attendance script returned an error status");
            return Err(LookupError::Status(res.status()));
        }

        match res.json::<LookupResponse>().await.map_err(LookupError::Decode)? {
            LookupResponse::Data(data) => {
                tracing::debug!(rows = data.rows.len(), "attendance received");
                Ok(data)
            }
            LookupResponse::Failure { error } => Err(LookupError::Upstream(error)),
        }
    }
}
