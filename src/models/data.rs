use crate::models::{Body, Client, Notifier, Person, Request, Server};
use serde::Serialize;
use std::collections::BTreeMap;

/// The event body of a payload. Field order is serialization order.
#[derive(Debug, Serialize)]
pub(crate) struct Data {
    pub(crate) environment: String,
    pub(crate) level: String,
    pub(crate) platform: String,
    pub(crate) framework: String,
    /// Always `"java"`. The wire contract with the aggregator, kept across rewrites.
    pub(crate) language: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) context: Option<String>,
    /// Whole seconds since the Unix epoch.
    pub(crate) timestamp: i64,
    pub(crate) body: Body,
    pub(crate) request: Request,
    pub(crate) title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) person: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) uuid: Option<String>,
    pub(crate) fingerprint: String,
    pub(crate) custom: BTreeMap<String, String>,
    pub(crate) client: Client,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) server: Option<Server>,
    pub(crate) notifier: Notifier,
}
