use std::error::Error as StdError;

/// A captured exception with its stack and causal chain.
///
/// This is the adapter surface between the capture layer and the payload builder: whatever
/// mechanism caught the error fills one of these in, and the builder only ever formats it. The
/// names mirror the runtime the wire format was designed around, so `class` is a fully qualified
/// type name and frames carry a class name, a file name and a method.
#[derive(Debug, Clone)]
pub struct CapturedError {
    class: String,
    message: Option<String>,
    frames: Vec<StackFrame>,
    cause: Option<Box<CapturedError>>,
}

impl CapturedError {
    /// Create a captured exception with the given class name and no message, frames or cause.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            message: None,
            frames: Vec::new(),
            cause: None,
        }
    }

    /// Set the exception message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the captured stack, most recent call first (runtime order).
    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }

    /// Set the cause of this exception.
    pub fn with_cause(mut self, cause: CapturedError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Capture a standard error and its `source()` chain.
    ///
    /// The outermost link is classed by the concrete error type; source links are trait objects
    /// without a portable type name and are classed as `"error"`. Each link's `Display`
    /// rendering becomes its message. No frames are attached.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: StdError,
    {
        Self::from_parts(std::any::type_name::<E>(), err.to_string(), err.source())
    }

    fn from_parts(
        class: &str,
        message: String,
        source: Option<&(dyn StdError + 'static)>,
    ) -> Self {
        let mut captured = CapturedError::new(class).with_message(message);
        if let Some(source) = source {
            captured =
                captured.with_cause(Self::from_parts("error", source.to_string(), source.source()));
        }
        captured
    }

    pub(crate) fn class(&self) -> &str {
        &self.class
    }

    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    /// The next link in the causal chain, if any.
    pub fn cause(&self) -> Option<&CapturedError> {
        self.cause.as_deref()
    }
}

/// A single captured stack frame in runtime order.
#[derive(Debug, Clone)]
pub struct StackFrame {
    class_name: String,
    filename: String,
    method: String,
    lineno: Option<i64>,
}

impl StackFrame {
    /// Create a frame with no line number.
    pub fn new(
        class_name: impl Into<String>,
        filename: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            filename: filename.into(),
            method: method.into(),
            lineno: None,
        }
    }

    /// Set the line number. Raw runtime values are accepted; non-positive ones (used by runtimes
    /// to mark native or unknown locations) are dropped at serialization.
    pub fn with_lineno(mut self, lineno: i64) -> Self {
        self.lineno = Some(lineno);
        self
    }

    pub(crate) fn class_name(&self) -> &str {
        &self.class_name
    }

    pub(crate) fn filename(&self) -> &str {
        &self.filename
    }

    pub(crate) fn method(&self) -> &str {
        &self.method
    }

    pub(crate) fn lineno(&self) -> Option<i64> {
        self.lineno
    }
}
