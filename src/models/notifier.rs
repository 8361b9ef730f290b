use serde::Serialize;

/// Self-identification of the client library, emitted with every payload. The name and version
/// are part of the wire contract and identify this crate as the rollbar-java notifier to the
/// aggregator.
#[derive(Debug, Serialize)]
pub(crate) struct Notifier {
    name: &'static str,
    version: &'static str,
}

impl Notifier {
    pub(crate) const fn new() -> Self {
        Self {
            name: "rollbar-java",
            version: "1.0",
        }
    }
}
