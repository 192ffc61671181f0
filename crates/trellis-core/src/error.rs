use crate::Reason;

/// Boxed error type used for wrapped causes
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Structured service error
///
/// Combines a [`Reason`], a human-readable message, and an optional
/// wrapped cause. Immutable after construction; build one with
/// [`Error::new`] or the [`err!`](crate::err) macro.
#[derive(Debug, Default, thiserror::Error)]
#[error("{reason}; {message}")]
pub struct Error {
    reason: Reason,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl Error {
    /// Build an error from an ordered sequence of typed arguments
    ///
    /// Later arguments overwrite earlier ones of the same kind. If the
    /// assembled cause is itself an [`Error`] that is redundant, that
    /// link is spliced out and its own cause wrapped directly. Only the
    /// direct cause is tested, one hop; a deeper run of redundant
    /// wrappers is left as-is.
    ///
    /// # Panics
    ///
    /// Panics when `args` is empty. An error built from nothing is a
    /// bug at the call site, not a runtime condition to recover from.
    #[must_use]
    pub fn new<I>(args: I) -> Self
    where
        I: IntoIterator<Item = Arg>,
    {
        let mut reason = Reason::default();
        let mut message = String::new();
        let mut source: Option<BoxError> = None;
        let mut seen = false;

        for arg in args {
            seen = true;
            match arg {
                Arg::Reason(r) => reason = r,
                Arg::Message(m) => message = m,
                Arg::Cause(c) => source = Some(c),
            }
        }
        assert!(seen, "Error::new called with no arguments");

        // Splice out a redundant direct cause
        let source: Option<BoxError> = match source {
            Some(cause) => match cause.downcast::<Self>() {
                Ok(inner) if inner.is_redundant() => inner.source,
                Ok(inner) => Some(inner),
                Err(other) => Some(other),
            },
            None => None,
        };

        Self { reason, message, source }
    }

    /// Classification of this error
    #[must_use]
    pub const fn reason(&self) -> Reason {
        self.reason
    }

    /// Human-readable message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Directly wrapped cause, if any
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|cause| cause as &(dyn std::error::Error + 'static))
    }

    /// Whether this error carries no information of its own
    ///
    /// A redundant error has an empty message and an unknown reason; it
    /// exists only to hold a wrapped cause.
    #[must_use]
    pub fn is_redundant(&self) -> bool {
        self.message.is_empty() && self.reason == Reason::UNKNOWN
    }
}

/// Typed argument to [`Error::new`]
///
/// Replaces an untyped variadic list: every argument is exactly a
/// classification, a message, or a wrapped cause, checked at compile
/// time.
#[derive(Debug)]
pub enum Arg {
    /// Set the classification
    Reason(Reason),
    /// Set the message
    Message(String),
    /// Wrap an underlying cause
    Cause(BoxError),
}

impl Arg {
    /// Wrap any foreign error value as a cause argument
    #[must_use]
    pub fn cause<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Cause(err.into())
    }
}

impl From<Reason> for Arg {
    fn from(reason: Reason) -> Self {
        Self::Reason(reason)
    }
}

impl From<&str> for Arg {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<String> for Arg {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<Error> for Arg {
    fn from(err: Error) -> Self {
        Self::Cause(Box::new(err))
    }
}

impl From<BoxError> for Arg {
    fn from(err: BoxError) -> Self {
        Self::Cause(err)
    }
}

/// Build an [`Error`] from a variadic list of arguments
///
/// Each argument converts into an [`Arg`]: a [`Reason`], a message
/// (`&str` or `String`), or an [`Error`] to wrap as the cause. Foreign
/// error values go through [`Arg::cause`]. Arguments may appear in any
/// order; the last of each kind wins. There is no zero-argument form.
///
/// ```
/// use trellis_core::{err, Reason};
///
/// let e = err!(Reason::INVALID, "bad field");
/// assert_eq!(e.to_string(), "invalid; bad field");
/// ```
#[macro_export]
macro_rules! err {
    ($($arg:expr),+ $(,)?) => {
        $crate::Error::new([$($crate::Arg::from($arg)),+])
    };
}
