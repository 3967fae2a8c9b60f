/// Product catalog fetcher
///
/// One GET against the configured endpoint, no parameters, no auth.
/// The body must be a JSON array of products; a record with a missing
/// field fails the whole load.
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::FetchError;
use crate::state::data::Product;

/// Fetch and decode the catalog
#[instrument(name = "fetch_catalog", skip(client))]
pub async fn fetch_products(
    client: reqwest::Client,
    endpoint: String,
) -> Result<Arc<Vec<Product>>, FetchError> {
    let response = client.get(&endpoint).send().await?.error_for_status()?;
    let body = response.bytes().await?;
    let products = decode_products(&body)?;

    info!(count = products.len(), "catalog loaded");
    Ok(Arc::new(products))
}

/// Decode a catalog response body
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    Ok(serde_json::from_slice(body)?)
}
