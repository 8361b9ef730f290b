//! A [Rollbar] payload builder, wire-compatible with the `rollbar-java` notifier.
//!
//! [Rollbar]: https://rollbar.com
//!
//! The builder turns a severity level, a message, an optional captured exception and a
//! string-keyed context map into the JSON item the Rollbar API ingests. Transport is out of
//! scope: serialize the payload and deliver it with the HTTP client of your choice.
//!
//! # Usage
//!
//! ```rust,no_run
//! use rollbar_payload::{CapturedError, NotifyBuilder, StackFrame};
//! use std::collections::BTreeMap;
//!
//! # fn main() -> Result<(), rollbar_payload::Error> {
//! let builder = NotifyBuilder::new("POST_SERVER_ITEM_ACCESS_TOKEN", "production");
//!
//! let mut context = BTreeMap::new();
//! context.insert("request.url".to_string(), "/checkout".to_string());
//! context.insert("person.id".to_string(), "42".to_string());
//!
//! let error = CapturedError::new("java.io.IOException")
//!     .with_message("disk full")
//!     .with_frames(vec![
//!         StackFrame::new("com.example.Checkout", "Checkout.java", "submit").with_lineno(57),
//!     ]);
//!
//! let payload = builder.build("error", "checkout failed", Some(&error), &context);
//! let json = payload.to_json_string()?;
//! // POST json to https://api.rollbar.com/api/1/item/
//! # Ok(())
//! # }
//! ```
//!
//! # Context key mapping
//!
//! Context entries are classified by key. The reserved keys (published as constants in
//! [`context`]) map to dedicated payload fields:
//!
//! | Context key         | Payload field                |
//! | ------------------- | ---------------------------- |
//! | `platform`          | `data.platform`              |
//! | `framework`         | `data.framework`             |
//! | `uuid`              | `data.uuid`                  |
//! | `person.id`         | `data.person.id`             |
//! | `person.username`   | `data.person.username`       |
//! | `person.email`      | `data.person.email`          |
//! | `request.url`       | `data.request.url`           |
//! | `request.qs`        | `data.request.query_string`  |
//! | `request.method`    | `data.request.method`        |
//! | `request.remote_addr` | `data.request.user_ip`     |
//! | `request.user_agent` | `data.client.javascript.browser` |
//! | `request.header.X`  | `data.request.headers.X`     |
//! | `request.param.X`   | `data.request.GET.X` / `data.request.POST.X` |
//!
//! Request parameters are emitted only when `request.method` is `GET` or `POST`, under that
//! key. All other entries are passed through into `data.custom`, except unrecognized
//! `request.`-prefixed keys, which are dropped.
//!
//! # Fingerprinting
//!
//! Every payload carries a fingerprint, the lowercase hex MD5 of the first 99 characters of the
//! message, which the aggregator uses to group occurrences. The same prefix becomes the payload
//! title.
#![doc(html_root_url = "https://docs.rs/rollbar-payload/0.1.0")]
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

mod builder;
pub mod context;
mod convert;
mod error;
mod exception;
mod models;

pub use builder::NotifyBuilder;
pub use error::Error;
pub use exception::{CapturedError, StackFrame};
pub use models::{Payload, Server};
