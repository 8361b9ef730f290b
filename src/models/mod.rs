mod body;
mod client;
mod data;
mod notifier;
mod payload;
mod person;
mod request;
mod server;
mod trace;

pub(crate) use body::*;
pub(crate) use client::*;
pub(crate) use data::*;
pub(crate) use notifier::*;
pub(crate) use person::*;
pub(crate) use request::*;
pub(crate) use trace::*;

pub use payload::Payload;
pub use server::Server;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn serialization_format() {
        let payload = Payload {
            access_token: "token".into(),
            data: Data {
                environment: "test".into(),
                level: "error".into(),
                platform: "java".into(),
                framework: "java".into(),
                language: "java",
                context: None,
                timestamp: 1_600_000_000,
                body: Body {
                    trace_chain: None,
                    message: Some(MessageBody {
                        body: "hello world".into(),
                    }),
                },
                request: Request::default(),
                title: "hello world".into(),
                person: None,
                uuid: None,
                fingerprint: "5eb63bbbe01eeed093cb22bb8f5acdc3".into(),
                custom: BTreeMap::new(),
                client: Client::default(),
                server: None,
                notifier: Notifier::new(),
            },
        };
        let serialized = serde_json::to_string(&payload).unwrap();
        let expected = "{\"access_token\":\"token\",\"data\":{\"environment\":\"test\",\
                        \"level\":\"error\",\"platform\":\"java\",\"framework\":\"java\",\
                        \"language\":\"java\",\"timestamp\":1600000000,\
                        \"body\":{\"message\":{\"body\":\"hello world\"}},\
                        \"request\":{\"headers\":{}},\"title\":\"hello world\",\
                        \"fingerprint\":\"5eb63bbbe01eeed093cb22bb8f5acdc3\",\"custom\":{},\
                        \"client\":{\"javascript\":{}},\
                        \"notifier\":{\"name\":\"rollbar-java\",\"version\":\"1.0\"}}}";
        assert_eq!(expected, serialized);
    }

    #[test]
    fn absent_fields_are_omitted_not_null() {
        let trace = Trace {
            frames: vec![Frame {
                class_name: "com.example.Native".into(),
                filename: "Native.java".into(),
                method: "call".into(),
                lineno: None,
            }],
            exception: ExceptionInfo {
                class: "java.io.IOException".into(),
                message: None,
            },
        };
        let serialized = serde_json::to_string(&trace).unwrap();
        assert_eq!(
            "{\"frames\":[{\"class_name\":\"com.example.Native\",\
             \"filename\":\"Native.java\",\"method\":\"call\"}],\
             \"exception\":{\"class\":\"java.io.IOException\"}}",
            serialized
        );
    }
}
