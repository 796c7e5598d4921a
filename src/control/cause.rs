//! The default failure representation carried by `Try`.
//!
//! A [`Cause`] is an opaque description of a raised condition: where it came
//! from ([`Origin`]) and a message. It is deliberately flat; causes are
//! compared, hashed, printed and re-raised, never pattern-matched into a
//! hierarchy.
//!
//! # Round-trip fidelity
//!
//! [`Cause::raise`] panics with the cause itself as the panic payload, and
//! [`Cause::from_panic`] hands such a payload back unchanged. A cause that is
//! re-raised and captured again therefore compares equal to the original.
//!
//! ```rust
//! use slang::control::Cause;
//! use std::panic;
//!
//! let cause = Cause::new("disk full");
//! let payload = panic::catch_unwind(|| -> i32 { cause.clone().raise() }).unwrap_err();
//! assert_eq!(Cause::from_panic(payload), cause);
//! ```

use std::any::Any;
use std::fmt;

/// Where a [`Cause`] was raised.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    /// A panic captured while running a computation.
    Panic,
    /// An error value, identified by its type name.
    Error(String),
    /// A plain message supplied by the caller.
    Message,
}

/// An opaque, comparable, re-raisable failure description.
///
/// # Examples
///
/// ```rust
/// use slang::control::{Cause, Origin};
///
/// let error = "x".parse::<i32>().unwrap_err();
/// let cause = Cause::from_error(&error);
/// assert!(matches!(cause.origin(), Origin::Error(type_name) if type_name.ends_with("ParseIntError")));
/// assert_eq!(cause.message(), "invalid digit found in string");
/// assert_eq!(cause, Cause::from_error(&error));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cause {
    origin: Origin,
    message: String,
}

impl Cause {
    /// Creates a cause from a plain message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            origin: Origin::Message,
            message: message.into(),
        }
    }

    /// Creates a cause describing a panic with the given message.
    ///
    /// ```rust
    /// use slang::control::{Cause, Try};
    ///
    /// let divisor = std::hint::black_box(0);
    /// let outcome = Try::catching(|| 10 / divisor);
    /// assert_eq!(outcome, Try::Failure(Cause::panicked("attempt to divide by zero")));
    /// ```
    #[inline]
    pub fn panicked(message: impl Into<String>) -> Self {
        Self {
            origin: Origin::Panic,
            message: message.into(),
        }
    }

    /// Creates a cause describing an error value.
    ///
    /// The message is the error's `Display` output; the origin records the
    /// error's type name.
    pub fn from_error<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Self {
            origin: Origin::Error(std::any::type_name::<E>().to_string()),
            message: error.to_string(),
        }
    }

    /// Creates a cause from a panic payload as returned by
    /// [`std::panic::catch_unwind`].
    ///
    /// A payload that already is a `Cause` is returned as-is. String payloads
    /// (from `panic!("...")`) become the message of a [`Origin::Panic`] cause.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(cause) => return *cause,
            Err(payload) => payload,
        };
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast_ref::<&'static str>()
                .map_or_else(|| "Box<dyn Any>".to_string(), |message| (*message).to_string()),
        };
        Self::panicked(message)
    }

    /// Returns where this cause was raised.
    #[inline]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Returns the message of this cause.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if this cause was captured from a panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self.origin, Origin::Panic)
    }

    /// Re-raises this cause as a panic whose payload is the cause itself.
    ///
    /// # Panics
    ///
    /// Always.
    pub fn raise(self) -> ! {
        std::panic::panic_any(self)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Cause")
            .field("origin", &self.origin)
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Origin::Panic => write!(formatter, "panic: {}", self.message),
            Origin::Error(type_name) => write!(formatter, "{type_name}: {}", self.message),
            Origin::Message => write!(formatter, "{}", self.message),
        }
    }
}

impl std::error::Error for Cause {}

impl From<&str> for Cause {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Cause {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
