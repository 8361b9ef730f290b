//! Reserved context keys.
//!
//! The context map handed to [`NotifyBuilder::build`](crate::NotifyBuilder::build) is a flat
//! string-keyed bag. The keys below form the integration contract with whatever layer captures
//! request and user data; everything else is passed through as a custom property.

/// Overrides the `platform` field of the payload. Defaults to `"java"`.
pub const PLATFORM: &str = "platform";

/// Overrides the `framework` field of the payload. Defaults to `"java"`.
pub const FRAMEWORK: &str = "framework";

/// Sets the `uuid` field of the payload.
pub const UUID: &str = "uuid";

/// Sets `person.id`.
pub const PERSON_ID: &str = "person.id";

/// Sets `person.username`.
pub const PERSON_USERNAME: &str = "person.username";

/// Sets `person.email`.
pub const PERSON_EMAIL: &str = "person.email";

/// Prefix shared by all request-family keys. Keys under this prefix never appear in `custom`.
pub const REQUEST_PREFIX: &str = "request.";

/// Sets `request.url`.
pub const REQUEST_URL: &str = "request.url";

/// Sets `request.query_string`.
pub const REQUEST_QS: &str = "request.qs";

/// Sets `request.method`. If the value is `GET` or `POST`, the collected request parameters are
/// additionally emitted under that key.
pub const REQUEST_METHOD: &str = "request.method";

/// Sets `request.user_ip`.
pub const REQUEST_REMOTE_ADDR: &str = "request.remote_addr";

/// Sets `client.javascript.browser`.
pub const REQUEST_USER_AGENT: &str = "request.user_agent";

/// Keys starting with this prefix are collected into `request.headers`, keyed by the remainder.
pub const REQUEST_HEADER_PREFIX: &str = "request.header.";

/// Keys starting with this prefix are collected into the request parameter map, keyed by the
/// remainder.
pub const REQUEST_PARAM_PREFIX: &str = "request.param.";

/// The person fields recognized in the context map.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum PersonField {
    Id,
    Username,
    Email,
}

/// A context entry, classified into the bucket it contributes to.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Entry<'a> {
    Header(&'a str, &'a str),
    Param(&'a str, &'a str),
    Url(&'a str),
    QueryString(&'a str),
    Method(&'a str),
    RemoteAddr(&'a str),
    UserAgent(&'a str),
    Person(PersonField, &'a str),
    Custom(&'a str, &'a str),
    /// Unrecognized key under the request prefix. Contributes to no bucket.
    Ignored,
}

pub(crate) fn classify<'a>(key: &'a str, value: &'a str) -> Entry<'a> {
    if let Some(name) = key.strip_prefix(REQUEST_HEADER_PREFIX) {
        return Entry::Header(name, value);
    }
    if let Some(name) = key.strip_prefix(REQUEST_PARAM_PREFIX) {
        return Entry::Param(name, value);
    }
    match key {
        REQUEST_URL => Entry::Url(value),
        REQUEST_QS => Entry::QueryString(value),
        REQUEST_METHOD => Entry::Method(value),
        REQUEST_REMOTE_ADDR => Entry::RemoteAddr(value),
        REQUEST_USER_AGENT => Entry::UserAgent(value),
        PERSON_ID => Entry::Person(PersonField::Id, value),
        PERSON_USERNAME => Entry::Person(PersonField::Username, value),
        PERSON_EMAIL => Entry::Person(PersonField::Email, value),
        _ if key.starts_with(REQUEST_PREFIX) => Entry::Ignored,
        _ => Entry::Custom(key, value),
    }
}
