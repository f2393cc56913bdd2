//! The `Failure` trait family and the type-preserving fluent builder.

use std::error::Error as StdError;
use std::fmt;
use tattle_context::{Context, Value};

/// A raised failure carrying its own [`Context`].
///
/// Implemented by [`define_failure!`](crate::define_failure) for every
/// declared failure type. The supertrait bound keeps every failure usable as
/// an ordinary `std::error::Error`, with [`source`](StdError::source)
/// exposing the caused-by predecessor.
pub trait Failure: StdError + Send + Sync + 'static {
    /// The diagnostic context owned by this failure.
    fn context(&self) -> &Context;

    /// Mutable access to the context; the primitive behind [`Fluent`].
    fn context_mut(&mut self) -> &mut Context;

    /// The failure that was active when this one was raised, if any.
    ///
    /// This is a read-only traversal edge; renderers and the chain unwinder
    /// never mutate it.
    fn cause(&self) -> Option<&dyn Failure>;

    /// This failure as a plain `std::error::Error` trait object.
    fn as_error(&self) -> &(dyn StdError + 'static);

    /// Whether this failure's kind is `kind_name` or descends from it.
    ///
    /// The dynamic counterpart of [`FailureKind::is_a`]: matching at an
    /// ancestor kind is how call sites "catch by base class".
    fn is_kind(&self, kind_name: &str) -> bool;

    /// The concrete kind's fixed name.
    fn kind_name(&self) -> &'static str {
        self.context().type_name()
    }
}

impl dyn Failure {
    /// Whether this failure is of kind `K` or a descendant of it.
    pub fn is<K: FailureKind>(&self) -> bool {
        self.is_kind(K::NAME)
    }
}

/// Compile-time identity of a failure kind within the taxonomy.
pub trait FailureKind {
    /// The fixed type name, set once at declaration.
    const NAME: &'static str;

    /// Whether this kind is `kind_name` itself or has it as an ancestor.
    fn is_a(kind_name: &str) -> bool;
}

/// Type-preserving fluent context building.
///
/// Every method takes and returns `Self` by value, so chaining on a concrete
/// failure type yields that same concrete type; the compiler and any
/// downstream matching still see the specific kind, not a generic base.
/// Blanket-implemented for every [`Failure`]; declaring a new failure type
/// needs no extra step to get the full chaining surface.
pub trait Fluent: Failure + Sized {
    /// Stores `value` under `key`, overwriting any prior value for the key.
    fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context_mut().set(key, value);
        self
    }

    /// Stores the payload-less flag marker under `key`.
    fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.context_mut().set_flag(key);
        self
    }

    /// Renders `args` and stores the result under the reserved
    /// `"message"` key.
    ///
    /// Call as `.message(format_args!("value {} exceeds {}", v, max))`.
    fn message(mut self, args: fmt::Arguments<'_>) -> Self {
        self.context_mut().set_message(args);
        self
    }
}

impl<T: Failure> Fluent for T {}

/// Writes the single-line summary `<type>[: <message>] @<file>:<line>`.
///
/// This is the `Display` body shared by all declared failure types and the
/// per-element text used by the cause-chain unwinder.
pub fn write_summary(f: &mut fmt::Formatter<'_>, context: &Context) -> fmt::Result {
    write!(f, "{}", context.type_name())?;
    if let Some(message) = context.get_as::<String>(Context::MESSAGE_KEY) {
        if !message.is_empty() {
            write!(f, ": {message}")?;
        }
    }
    write!(f, " @{}", context.location())
}
