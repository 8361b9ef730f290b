use crate::{models::Data, Error};
use serde::Serialize;

/// A complete Rollbar API item, ready for delivery.
///
/// The root object carries exactly two keys: the access token and the event data. Hand the
/// serialized form to whatever transport posts items to the aggregator.
#[derive(Debug, Serialize)]
pub struct Payload {
    pub(crate) access_token: String,
    pub(crate) data: Data,
}

impl Payload {
    /// Serialize the payload to a JSON string.
    pub fn to_json_string(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::Serialize)
    }
}
