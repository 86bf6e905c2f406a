use async_trait::async_trait;
use titans_content::{ContentError, strip_envelope};

use super::SheetSource;
use crate::error::{Result, RuntimeError};

/// Queries a published spreadsheet through its gviz endpoint.
///
/// Each fetch requests `{base_url}/{spreadsheet_id}/gviz/tq?tqx=out:json&sheet={sheet}`
/// and strips the fixed response envelope before returning the payload.
#[derive(Clone, Debug)]
pub struct RemoteSource {
    base_url: String,
    spreadsheet_id: String,
    http_client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>, spreadsheet_id: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, spreadsheet_id)
    }

    /// Uses a preconfigured HTTP client (timeouts, proxies).
    pub fn with_client(
        http_client: reqwest::Client,
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            spreadsheet_id: spreadsheet_id.into(),
            http_client,
        }
    }

    /// Request for one sheet; the sheet name is query-encoded.
    pub fn request(&self, sheet: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/{}/gviz/tq",
            self.base_url.trim_end_matches('/'),
            self.spreadsheet_id
        );
        self.http_client
            .get(url)
            .query(&[("tqx", "out:json"), ("sheet", sheet)])
    }
}

#[async_trait]
impl SheetSource for RemoteSource {
    #[tracing::instrument(skip(self), fields(spreadsheet = %self.spreadsheet_id))]
    async fn fetch(&self, sheet: &str) -> Result<String> {
        let fetch_error = |source| RuntimeError::Fetch {
            sheet: sheet.to_string(),
            source,
        };

        let response = self.request(sheet).send().await.map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RuntimeError::Status {
                sheet: sheet.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(fetch_error)?;
        let payload = strip_envelope(&body).map_err(|e| ContentError::from(e).in_sheet(sheet))?;
        tracing::debug!(bytes = payload.len(), "sheet downloaded");
        Ok(payload.to_string())
    }
}
