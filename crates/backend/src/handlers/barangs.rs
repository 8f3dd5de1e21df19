use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::shared::config;
use crate::shared::error::ApiError;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

#[derive(Debug, Deserialize)]
pub struct GoodsQuery {
    pub filter: Option<String>,
}

/// GET /api/barangs
///
/// Pass-through to the upstream goods endpoint: the optional `filter`
/// parameter is forwarded verbatim (URL-encoded), the upstream body and
/// status are relayed unchanged. Upstream HTTP errors therefore arrive at
/// the caller untouched; only transport failures become [`ApiError`].
pub async fn list(Query(query): Query<GoodsQuery>) -> Result<Response, ApiError> {
    let url = upstream_url(&config::get().upstream.base_url, query.filter.as_deref());
    let upstream = CLIENT.get(&url).send().await?;

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = relayed_content_type(upstream.headers());
    let body = upstream.bytes().await?;

    Ok((status, [(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// Upstream content-type, relayed when present. The upstream service only
/// ever answers JSON, so that is the fallback.
fn relayed_content_type(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/json")
        .to_string()
}

fn upstream_url(base: &str, filter: Option<&str>) -> String {
    match filter {
        Some(f) => format!("{}/barangs?filter={}", base, urlencoding::encode(f)),
        None => format!("{}/barangs", base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://202.157.176.100:3001";

    #[test]
    fn test_upstream_url_without_filter() {
        assert_eq!(
            upstream_url(BASE, None),
            "http://202.157.176.100:3001/barangs"
        );
    }

    #[test]
    fn test_relays_upstream_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert_eq!(
            relayed_content_type(&headers),
            "application/json; charset=utf-8"
        );
    }

    #[test]
    fn test_missing_content_type_defaults_to_json() {
        assert_eq!(relayed_content_type(&HeaderMap::new()), "application/json");
    }

    #[test]
    fn test_upstream_url_encodes_filter() {
        let url = upstream_url(BASE, Some(r#"{"where":{"id_pelabuhan":7}}"#));
        assert_eq!(
            url,
            "http://202.157.176.100:3001/barangs?filter=%7B%22where%22%3A%7B%22id_pelabuhan%22%3A7%7D%7D"
        );
    }
}
