//! Remote data client for the upstream port-goods service.
//!
//! Three read-only list endpoints, unauthenticated. Country and port rows
//! are normalized here; goods are passed through in wire shape. Retry
//! policy lives in the query layer, not here.

use contracts::domain::{where_filter, Country, CountryRecord, Good, Port, PortRecord};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const REMOTE_BASE: &str = "http://202.157.176.100:3001";

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the full country list.
pub async fn fetch_countries() -> Result<Vec<Country>, String> {
    let url = format!("{}/negaras", REMOTE_BASE);
    let records: Vec<CountryRecord> = get_json(&url).await?;
    Ok(records.into_iter().map(Country::from).collect())
}

/// Fetch the ports of one country.
pub async fn fetch_ports(country_id: i64) -> Result<Vec<Port>, String> {
    let url = format!(
        "{}/pelabuhans?filter={}",
        REMOTE_BASE,
        urlencoding::encode(&where_filter("id_negara", country_id))
    );
    let records: Vec<PortRecord> = get_json(&url).await?;
    Ok(records.into_iter().map(Port::from).collect())
}

/// Fetch the goods handled at one port.
pub async fn fetch_goods(port_id: i64) -> Result<Vec<Good>, String> {
    let url = format!(
        "{}/barangs?filter={}",
        REMOTE_BASE,
        urlencoding::encode(&where_filter("id_pelabuhan", port_id))
    );
    get_json(&url).await
}
