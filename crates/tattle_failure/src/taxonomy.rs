//! The `define_failure!` declaration macro and the provided failure kinds.

/// Declares a new failure type in one line.
///
/// The child form names a parent kind and inherits its ancestry, so an
/// instance of the new type matches (via [`Failure::is_kind`]) at every
/// ancestor up to the taxonomy root, the conventional "catch by base
/// class" contract. The root form (no parent) starts a fresh taxonomy;
/// [`GenericFailure`] is declared with it.
///
/// ```
/// use tattle_failure::{define_failure, Failure, Fluent, GenericFailure};
///
/// define_failure!(
///     /// Raised when the random number generator misbehaves.
///     pub RandomNumberError: GenericFailure
/// );
///
/// let failure = RandomNumberError::new().message(format_args!("the answer is {}", 42));
/// assert!(failure.is_kind("GenericFailure"));
/// ```
///
/// The generated type owns its [`Context`](crate::Context) (created at
/// construction with the caller's source location), carries an optional
/// caused-by predecessor, and implements [`Display`](std::fmt::Display) as
/// the single-line `<type>[: <message>] @<file>:<line>` summary plus
/// `std::error::Error` with `source()` delegating to the cause.
///
/// [`Failure::is_kind`]: crate::Failure::is_kind
#[macro_export]
macro_rules! define_failure {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $crate::define_failure!(@decl $(#[$meta])* $vis $name);

        impl $crate::FailureKind for $name {
            const NAME: &'static str = stringify!($name);

            fn is_a(kind_name: &str) -> bool {
                kind_name == <Self as $crate::FailureKind>::NAME
            }
        }
    };
    ($(#[$meta:meta])* $vis:vis $name:ident : $parent:ty) => {
        $crate::define_failure!(@decl $(#[$meta])* $vis $name);

        impl $crate::FailureKind for $name {
            const NAME: &'static str = stringify!($name);

            fn is_a(kind_name: &str) -> bool {
                kind_name == <Self as $crate::FailureKind>::NAME
                    || <$parent as $crate::FailureKind>::is_a(kind_name)
            }
        }
    };
    (@decl $(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            context: $crate::Context,
            cause: ::std::option::Option<::std::boxed::Box<dyn $crate::Failure>>,
        }

        impl $name {
            /// Creates a new failure, capturing the caller's source location.
            #[track_caller]
            $vis fn new() -> Self {
                Self {
                    context: $crate::Context::new(<Self as $crate::FailureKind>::NAME),
                    cause: ::std::option::Option::None,
                }
            }

            /// Creates a new failure recording `cause` as the failure that
            /// was active when this one was raised.
            #[track_caller]
            $vis fn caused_by(cause: impl $crate::Failure) -> Self {
                Self {
                    context: $crate::Context::new(<Self as $crate::FailureKind>::NAME),
                    cause: ::std::option::Option::Some(::std::boxed::Box::new(cause)),
                }
            }
        }

        impl $crate::Failure for $name {
            fn context(&self) -> &$crate::Context {
                &self.context
            }

            fn context_mut(&mut self) -> &mut $crate::Context {
                &mut self.context
            }

            fn cause(&self) -> ::std::option::Option<&dyn $crate::Failure> {
                self.cause.as_deref()
            }

            fn as_error(&self) -> &(dyn ::std::error::Error + 'static) {
                self
            }

            fn is_kind(&self, kind_name: &str) -> bool {
                <Self as $crate::FailureKind>::is_a(kind_name)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::write_summary(f, &self.context)
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                self.cause.as_deref().map($crate::Failure::as_error)
            }
        }
    };
}

define_failure!(
    /// The root of the failure taxonomy.
    ///
    /// Every provided and application-defined kind ultimately descends from
    /// this one, so matching on it catches everything raised through the
    /// taxonomy.
    pub GenericFailure
);

define_failure!(
    /// Raised by the always-on contract checks: preconditions,
    /// postconditions, and invariants. Carries `condition` and `check_type`
    /// context keys set by the checking macros.
    pub ContractViolation: GenericFailure
);

define_failure!(
    /// Raised by debug assertions and by the raising assert handler.
    ///
    /// Same root cause class as [`ContractViolation`], distinguished by the
    /// `check_type` key (or, for the legacy handler path, by carrying the
    /// pre-formatted message only).
    pub AssertionFailure: ContractViolation
);
