use serde::Serialize;

/// The client sub-document. The nested `javascript` object is always present; its `browser`
/// field carries the user agent when one was supplied.
#[derive(Debug, Default, Serialize)]
pub(crate) struct Client {
    pub(crate) javascript: Javascript,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct Javascript {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) browser: Option<String>,
}
