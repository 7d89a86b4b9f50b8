//! Hosted-data REST client.
//!
//! Records live in a table exposed as:
//! - `GET    {base}/tables/{table}/records`       → `{"records": [...]}`
//! - `GET    {base}/tables/{table}/records/{id}`  → `{"record": {...}}`
//! - `PATCH  {base}/tables/{table}/records/{id}`  with `{"is_favorite": bool}`
//!
//! The service has no aggregate endpoints, so slider bounds and the type list
//! are derived from a full fetch.

use std::time::Duration;

use hearth_core::decode::{decode_batch, decode_value};
use hearth_core::{PriceRange, Property, PropertyId};
use serde::Deserialize;

use crate::PropertyBackend;
use crate::error::BackendError;
use crate::http::check_response;

#[derive(Deserialize)]
struct RecordsEnvelope {
    #[serde(default)]
    records: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct RecordEnvelope {
    record: serde_json::Value,
}

/// HTTP client for a hosted-data listing table.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    table: String,
    api_key: Option<String>,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns [`BackendError::Http`] if the underlying client fails to build.
    pub fn new(
        base_url: &str,
        table: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .user_agent("hearth/0.1")
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            table: table.to_string(),
            api_key: api_key.map(String::from),
        })
    }

    fn records_url(&self) -> String {
        format!(
            "{}/tables/{}/records",
            self.base_url,
            urlencoding::encode(&self.table)
        )
    }

    fn record_url(&self, id: PropertyId) -> String {
        format!("{}/{id}", self.records_url())
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

/// Decode a records envelope, skipping records that do not decode.
fn decode_records_envelope(body: &str) -> Result<Vec<Property>, BackendError> {
    let envelope: RecordsEnvelope = serde_json::from_str(body)?;
    let batch = decode_batch(envelope.records);
    for (index, error) in &batch.rejected {
        tracing::warn!(index, %error, "skipping undecodable listing record");
    }
    Ok(batch.properties)
}

/// Decode a single-record envelope. A bad record is an error here.
fn decode_record_envelope(body: &str) -> Result<Property, BackendError> {
    let envelope: RecordEnvelope = serde_json::from_str(body)?;
    Ok(decode_value(envelope.record)?)
}

impl PropertyBackend for HttpBackend {
    async fn fetch_all(&self) -> Result<Vec<Property>, BackendError> {
        let url = self.records_url();
        tracing::debug!(%url, "fetching listings");
        let resp = check_response(self.authorize(self.http.get(&url)).send().await?).await?;
        decode_records_envelope(&resp.text().await?)
    }

    async fn fetch_by_id(&self, id: PropertyId) -> Result<Property, BackendError> {
        let resp = self
            .authorize(self.http.get(self.record_url(id)))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound { id });
        }
        let resp = check_response(resp).await?;
        decode_record_envelope(&resp.text().await?)
    }

    async fn persist_favorite(&self, id: PropertyId, value: bool) -> Result<(), BackendError> {
        let resp = self
            .authorize(self.http.patch(self.record_url(id)))
            .json(&serde_json::json!({ "is_favorite": value }))
            .send()
            .await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound { id });
        }
        check_response(resp).await?;
        tracing::debug!(%id, favorite = value, "favorite persisted");
        Ok(())
    }

    async fn fetch_price_range(&self) -> Result<PriceRange, BackendError> {
        let all = self.fetch_all().await?;
        Ok(hearth_search::facets::price_range(&all).unwrap_or_default())
    }

    async fn fetch_property_types(&self) -> Result<Vec<String>, BackendError> {
        let all = self.fetch_all().await?;
        Ok(hearth_search::facets::property_types(&all))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RECORDS_FIXTURE: &str = r#"{
        "records": [
            {
                "id": 11,
                "title": "Canal House",
                "price": "715000",
                "address": "3 Canal St, New Orleans, LA",
                "bedrooms": 3,
                "bathrooms": 2,
                "square_feet": 2100,
                "property_type": "House",
                "images": "https://img.example.com/11a.jpg, https://img.example.com/11b.jpg",
                "features": ["Courtyard"],
                "latitude": 29.95,
                "longitude": -90.07,
                "year_built": 1925,
                "is_favorite": false
            },
            { "id": 12, "title": "broken record" },
            {
                "id": 13,
                "price": 340000,
                "property_type": "Condo",
                "coordinates": { "lat": 29.9, "lng": -90.1 },
                "year_built": 2004
            }
        ]
    }"#;

    fn backend(base: &str, key: Option<&str>) -> HttpBackend {
        HttpBackend::new(base, "listing data", key, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn records_envelope_skips_undecodable_rows() {
        let properties = decode_records_envelope(RECORDS_FIXTURE).unwrap();
        let ids: Vec<u64> = properties.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![11, 13]);
        assert_eq!(properties[0].price, 715_000);
        assert_eq!(properties[0].images.len(), 2);
        assert_eq!(properties[1].title, hearth_core::decode::DEFAULT_TITLE);
    }

    #[test]
    fn missing_records_key_is_an_empty_table() {
        assert!(decode_records_envelope("{}").unwrap().is_empty());
    }

    #[test]
    fn single_record_decode_failure_is_an_error() {
        let err = decode_record_envelope(r#"{"record": {"id": 1}}"#).unwrap_err();
        assert!(matches!(err, BackendError::Decode(_)));
    }

    #[test]
    fn urls_trim_slashes_and_encode_table() {
        let client = backend("https://data.example.com/api/", None);
        assert_eq!(
            client.records_url(),
            "https://data.example.com/api/tables/listing%20data/records"
        );
        assert_eq!(
            client.record_url(PropertyId(4)),
            "https://data.example.com/api/tables/listing%20data/records/4"
        );
    }

    #[test]
    fn api_key_becomes_bearer_header() {
        let client = backend("https://data.example.com", Some("s3cret"));
        let request = client
            .authorize(client.http.get(client.records_url()))
            .build()
            .unwrap();
        let header = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        assert_eq!(header.as_deref(), Some("Bearer s3cret"));
    }
}
