use reqwest::{Client, Url};
use tracing::debug;

use crate::models::TransactionPage;
use crate::source::{FetchError, RecordsSource};
use crate::types::{PageNumber, UserId};

const TRANSACTIONS_PATH: &str = "api/transactions";

/// Records source backed by the paginated `GET /api/transactions` endpoint.
pub struct HttpRecordsSource {
    client: Client,
    endpoint: Url
}

impl HttpRecordsSource {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(FetchError::Client)?;

        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        let invalid = |reason: String| FetchError::InvalidBaseUrl { url: base_url.to_string(), reason };

        //NOTE: Url::join drops the last path segment unless it ends with a slash
        let base = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))
            .map_err(|error| invalid(error.to_string()))?;

        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(invalid("expected an http or https url".to_string()));
        }

        let endpoint = base.join(TRANSACTIONS_PATH)
            .map_err(|error| invalid(error.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RecordsSource for HttpRecordsSource {
    async fn fetch_page(&self, user_id: UserId, page: PageNumber) -> Result<TransactionPage, FetchError> {
        let transport = |source| FetchError::Transport { user_id, page, source };

        let response = self.client
            .get(self.endpoint.clone())
            .query(&[("userId", user_id), ("page", page)])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status { user_id, page, status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(transport)?;

        debug!("Received page [{page}] of user [{user_id}] from [{}] ({} bytes)", self.endpoint(), body.len());

        serde_json::from_slice(&body)
            .map_err(|source| FetchError::Decode { user_id, page, source })
    }
}
