use serde::Serialize;

/// One serialized throwable in a trace chain.
#[derive(Debug, Serialize)]
pub(crate) struct Trace {
    /// Ordered outermost caller first, throw site last (the reverse of the captured stack).
    pub(crate) frames: Vec<Frame>,
    pub(crate) exception: ExceptionInfo,
}

#[derive(Debug, Serialize)]
pub(crate) struct Frame {
    pub(crate) class_name: String,
    pub(crate) filename: String,
    pub(crate) method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) lineno: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExceptionInfo {
    pub(crate) class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
}
