use serde::Serialize;
use std::collections::BTreeMap;

/// The request sub-document, assembled from the request-family context keys.
///
/// Always present on the wire, even when no request keys were supplied; `headers` is always
/// emitted, possibly empty. The parameter map is only emitted when the method is GET or POST,
/// duplicated under that key.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Request {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) query_string: Option<String>,
    pub(crate) headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) method: Option<String>,
    #[serde(rename = "GET", skip_serializing_if = "Option::is_none")]
    pub(crate) get: Option<BTreeMap<String, String>>,
    #[serde(rename = "POST", skip_serializing_if = "Option::is_none")]
    pub(crate) post: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) user_ip: Option<String>,
}
