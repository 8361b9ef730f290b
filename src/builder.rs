use crate::{
    context::{classify, Entry, PersonField, FRAMEWORK, PLATFORM, UUID},
    convert::{fingerprint, time_to_timestamp, truncate_chars, TITLE_MAX_CHARS},
    exception::{CapturedError, StackFrame},
    models::{
        Body, Client, Data, ExceptionInfo, Frame, Javascript, MessageBody, Notifier, Payload,
        Person, Request, Server, Trace,
    },
};
use std::collections::BTreeMap;
use std::time::SystemTime;

const LANGUAGE: &str = "java";

/// Builds Rollbar payloads from captured events.
///
/// The builder is immutable after construction and performs no I/O in [`build`](Self::build); a
/// single instance can be shared across threads. Server identity is detected once in
/// [`new`](Self::new) and a lookup failure only omits the server document, it is never retried
/// or re-raised.
#[derive(Debug)]
pub struct NotifyBuilder {
    access_token: String,
    environment: String,
    context: Option<String>,
    server: Option<Server>,
}

impl NotifyBuilder {
    /// Create a builder for the given project access token and environment name.
    pub fn new(access_token: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            environment: environment.into(),
            context: None,
            server: Server::detect(),
        }
    }

    /// Set the Rollbar context string, e.g. a route or job name. Empty strings are treated as
    /// unset.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Replace the detected server identity.
    pub fn with_server(mut self, server: Server) -> Self {
        self.server = Some(server);
        self
    }

    /// Build a payload stamped with the current time.
    ///
    /// `level` is passed through verbatim. `message` becomes the title (capped at 99
    /// characters) and the fingerprint source; when no error is supplied it also becomes the
    /// message body. `context` entries are classified by key into the request, person and
    /// custom sub-documents; see the [`context`](crate::context) module for the reserved keys.
    pub fn build(
        &self,
        level: &str,
        message: &str,
        error: Option<&CapturedError>,
        context: &BTreeMap<String, String>,
    ) -> Payload {
        self.build_at(level, message, error, context, SystemTime::now())
    }

    /// Build a payload stamped with the given time instead of the current one. Useful when
    /// replaying buffered events with their original capture time.
    pub fn build_at(
        &self,
        level: &str,
        message: &str,
        error: Option<&CapturedError>,
        context: &BTreeMap<String, String>,
        time: SystemTime,
    ) -> Payload {
        let mut request = Request::default();
        let mut params = BTreeMap::new();
        let mut method = None;
        let mut user_agent = None;
        let mut person = Person::default();
        let mut custom = BTreeMap::new();

        for (key, value) in context {
            match classify(key, value) {
                Entry::Header(name, v) => {
                    request.headers.insert(name.to_string(), v.to_string());
                }
                Entry::Param(name, v) => {
                    params.insert(name.to_string(), v.to_string());
                }
                Entry::Url(v) => request.url = Some(v.to_string()),
                Entry::QueryString(v) => request.query_string = Some(v.to_string()),
                Entry::Method(v) => method = Some(v),
                Entry::RemoteAddr(v) => request.user_ip = Some(v.to_string()),
                Entry::UserAgent(v) => user_agent = Some(v.to_string()),
                Entry::Person(PersonField::Id, v) => person.id = Some(v.to_string()),
                Entry::Person(PersonField::Username, v) => person.username = Some(v.to_string()),
                Entry::Person(PersonField::Email, v) => person.email = Some(v.to_string()),
                Entry::Custom(k, v) => {
                    custom.insert(k.to_string(), v.to_string());
                }
                Entry::Ignored => {}
            }
        }

        if let Some(method) = method {
            request.method = Some(method.to_string());
            match method {
                "GET" => request.get = Some(params),
                "POST" => request.post = Some(params),
                _ => {}
            }
        }

        if error.is_some() && !message.is_empty() {
            custom.insert("log".to_string(), message.to_string());
        }

        let body = match error {
            Some(error) => Body {
                trace_chain: Some(trace_chain(error)),
                message: None,
            },
            None if !message.is_empty() => Body {
                trace_chain: None,
                message: Some(MessageBody {
                    body: message.to_string(),
                }),
            },
            None => Body {
                trace_chain: None,
                message: None,
            },
        };

        Payload {
            access_token: self.access_token.clone(),
            data: Data {
                environment: self.environment.clone(),
                level: level.to_string(),
                platform: context_or(context, PLATFORM, LANGUAGE),
                framework: context_or(context, FRAMEWORK, LANGUAGE),
                language: LANGUAGE,
                context: self.context.clone().filter(|c| !c.is_empty()),
                timestamp: time_to_timestamp(time),
                body,
                request,
                title: truncate_chars(message, TITLE_MAX_CHARS).to_string(),
                person: Some(person).filter(|p| !p.is_empty()),
                uuid: context.get(UUID).cloned(),
                fingerprint: fingerprint(message),
                custom,
                client: Client {
                    javascript: Javascript {
                        browser: user_agent,
                    },
                },
                server: self.server.clone(),
                notifier: Notifier::new(),
            },
        }
    }
}

fn context_or(context: &BTreeMap<String, String>, key: &str, default: &str) -> String {
    context
        .get(key)
        .map(String::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Root cause first, the originally captured error last.
fn trace_chain(error: &CapturedError) -> Vec<Trace> {
    let mut chain = Vec::new();
    let mut current = Some(error);
    while let Some(error) = current {
        chain.push(error.into());
        current = error.cause();
    }
    chain.reverse();
    chain
}

impl From<&CapturedError> for Trace {
    fn from(error: &CapturedError) -> Trace {
        Trace {
            // The stack is captured most recent call first; the wire wants the outermost
            // caller first.
            frames: error.frames().iter().rev().map(Frame::from).collect(),
            exception: ExceptionInfo {
                class: error.class().to_string(),
                message: error.message().map(str::to_string),
            },
        }
    }
}

impl From<&StackFrame> for Frame {
    fn from(frame: &StackFrame) -> Frame {
        Frame {
            class_name: frame.class_name().to_string(),
            filename: frame.filename().to_string(),
            method: frame.method().to_string(),
            lineno: frame.lineno().filter(|lineno| *lineno > 0),
        }
    }
}
