use crate::models::Trace;
use serde::Serialize;

/// Either a trace chain (an exception was captured) or a plain message, never both.
#[derive(Debug, Serialize)]
pub(crate) struct Body {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) trace_chain: Option<Vec<Trace>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<MessageBody>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MessageBody {
    pub(crate) body: String,
}
