//! A client for the Uniswap v3 subgraph.

pub mod queries;
pub mod types;

use crate::errors::AppError;
use metrics::counter;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, warn};
use types::{AssetData, BlockData, Token, Transaction};

#[derive(Error, Debug)]
pub enum SubgraphError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("subgraph did not answer in time")]
    Timeout,

    #[error("subgraph replied with HTTP {0}")]
    Status(u16),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("invalid GraphQL response")]
    InvalidResponse,

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid query variable: {0}")]
    InvalidVariable(String),
}

/// A GraphQL request. The query text is constant, everything coming from
/// the caller travels in `variables`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRequest {
    #[serde(skip)]
    pub name: &'static str,
    pub query: &'static str,
    pub variables: Map<String, Value>,
}

/// A GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    #[serde(default = "empty_data")]
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<QueryError>>,
}

#[derive(Debug, Deserialize)]
struct QueryError {
    message: String,
}

/// `#[serde(default)]` on an `Option<T>` would require `T: Default`.
fn empty_data<T>() -> Option<T> {
    None
}

impl<T> QueryResponse<T> {
    fn into_result(self) -> Result<T, SubgraphError> {
        // an empty `errors` list is the same as none
        let errors = self.errors.filter(|errors| !errors.is_empty());

        match (self.data, errors) {
            (Some(data), None) => Ok(data),
            (None, Some(errors)) => {
                for error in &errors[1..] {
                    warn!("additional GraphQL error: {}", error.message);
                }
                Err(SubgraphError::GraphQl(errors[0].message.clone()))
            },
            _ => Err(SubgraphError::InvalidResponse),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubgraphClient {
    client: Client,
    url: Url,
}

impl SubgraphClient {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Subgraph(format!("failed to build client: {e}")))?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Looks a token up by its contract address. `Ok(None)` means the
    /// subgraph does not know the token.
    pub async fn token(&self, id: &str) -> Result<Option<Token>, SubgraphError> {
        let data: AssetData = self.query(&queries::asset_query(id)).await?;

        Ok(data.token)
    }

    /// All transactions, with their swaps, indexed at the given block height.
    pub async fn block_transactions(
        &self,
        block_number: &str,
    ) -> Result<Vec<Transaction>, SubgraphError> {
        let data: BlockData = self.query(&queries::block_query(block_number)?).await?;

        Ok(data.transactions)
    }

    /// Performs a single GraphQL query against the subgraph.
    pub async fn query<T>(&self, request: &QueryRequest) -> Result<T, SubgraphError>
    where
        T: DeserializeOwned,
    {
        debug!(query = request.name, variables = ?request.variables, "Subgraph query");

        let result = self.send(request).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(SubgraphError::Timeout) => "timeout",
            Err(_) => "failure",
        };
        counter!("subgraph_queries_total", "query" => request.name, "outcome" => outcome)
            .increment(1);

        result
    }

    async fn send<T>(&self, request: &QueryRequest) -> Result<T, SubgraphError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubgraphError::Status(status.as_u16()));
        }

        let body_text = response.text().await.map_err(map_reqwest_error)?;

        let body: QueryResponse<T> = serde_json::from_str(&body_text).map_err(|e| {
            error!(
                query = request.name,
                url = %self.url,
                response_body = %body_text,
                error = %e,
                "SubgraphClient failed to parse response"
            );
            e
        })?;

        body.into_result()
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubgraphError {
    if err.is_timeout() {
        SubgraphError::Timeout
    } else {
        SubgraphError::Http(err)
    }
}
