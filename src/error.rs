/// Errors that can occur while producing a payload.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The payload failed to serialize to JSON.
    ///
    /// Note: This is an error in this crate. If you spot this, please open an issue.
    #[error("serializing payload failed with {0}")]
    Serialize(serde_json::Error),
}
