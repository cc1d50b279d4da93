use serde::Deserialize;

/// Listing parameters. `_page` and `_limit` are part of the wire contract;
/// non-numeric values fall back to the service defaults rather than failing
/// the request.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "_page", default, deserialize_with = "super::lenient_index")]
    pub page: Option<i64>,
    #[serde(rename = "_limit", default, deserialize_with = "super::lenient_index")]
    pub limit: Option<i64>,
    pub q: Option<String>,
}
