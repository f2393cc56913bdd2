//! Contract-checking and assertion macros.

/// Shared expansion for the three contract forms.
#[macro_export]
#[doc(hidden)]
macro_rules! __contract_check {
    ($cond:expr, $failure:ty, $check_type:expr $(, $key:literal => $value:expr)*) => {
        if !($cond) {
            #[allow(unused_imports)]
            use $crate::Fluent as _;
            return ::std::result::Result::Err(
                <$failure>::new()
                    .with("condition", stringify!($cond))
                    .with("check_type", $check_type)
                    $(.with($key, $value))*
                    .into(),
            );
        }
    };
}

/// Checks a precondition; always active.
///
/// When `cond` is false, raises the named failure kind with `condition` set
/// to the source text of the expression and `check_type` set to
/// `"precondition"`. Optional trailing `key => value` pairs add further
/// context. Propagates via `return Err(..)`, converted with `Into` into the
/// enclosing function's error type.
///
/// ```
/// use tattle_contract::expects;
/// use tattle_failure::ContractViolation;
///
/// fn answer(x: u64) -> Result<u64, ContractViolation> {
///     expects!(x > 0, ContractViolation, "x" => x);
///     Ok(42 / x)
/// }
///
/// assert!(answer(0).is_err());
/// assert_eq!(answer(6).unwrap(), 7);
/// ```
#[macro_export]
macro_rules! expects {
    ($cond:expr, $failure:ty $(, $key:literal => $value:expr)* $(,)?) => {
        $crate::__contract_check!($cond, $failure, "precondition" $(, $key => $value)*)
    };
}

/// Checks a postcondition; always active. Sets `check_type` to
/// `"postcondition"`, otherwise identical to [`expects!`].
#[macro_export]
macro_rules! ensures {
    ($cond:expr, $failure:ty $(, $key:literal => $value:expr)* $(,)?) => {
        $crate::__contract_check!($cond, $failure, "postcondition" $(, $key => $value)*)
    };
}

/// Checks an invariant; always active. Sets `check_type` to
/// `"invariant"`, otherwise identical to [`expects!`].
#[macro_export]
macro_rules! invariant {
    ($cond:expr, $failure:ty $(, $key:literal => $value:expr)* $(,)?) => {
        $crate::__contract_check!($cond, $failure, "invariant" $(, $key => $value)*)
    };
}

/// Debug-only assertion with a formatted message.
///
/// Behaves like the contract forms with `check_type` set to `"assertion"`
/// and the rendered message stored under the `"message"` key. When the
/// build disables debug checks the expansion is empty: the condition is
/// not even evaluated.
#[macro_export]
macro_rules! asserts {
    ($cond:expr, $failure:ty, $fmt:literal $(, $arg:expr)* $(,)?) => {
        #[cfg(debug_assertions)]
        {
            if !($cond) {
                #[allow(unused_imports)]
                use $crate::Fluent as _;
                return ::std::result::Result::Err(
                    <$failure>::new()
                        .with("condition", stringify!($cond))
                        .with("check_type", "assertion")
                        .message(::std::format_args!($fmt $(, $arg)*))
                        .into(),
                );
            }
        }
    };
}

/// Legacy-style debug assertion dispatching to the global handler.
///
/// When `cond` is false, formats
/// `"Assertion '<cond>' failed: <message> @<file>:<line>"` and hands the
/// string to the installed [`AssertHandler`](crate::AssertHandler). The
/// default [`TerminateHandler`](crate::TerminateHandler) never returns; the
/// [`RaiseHandler`](crate::RaiseHandler) yields an
/// [`AssertionFailure`](crate::AssertionFailure) that this macro propagates
/// with `return Err(..)`. Compiled out entirely when debug checks are
/// disabled.
#[macro_export]
macro_rules! soft_assert {
    ($cond:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        #[cfg(debug_assertions)]
        {
            if !($cond) {
                let message = ::std::format!(
                    "Assertion '{}' failed: {} @{}:{}",
                    stringify!($cond),
                    ::std::format_args!($fmt $(, $arg)*),
                    ::std::file!(),
                    ::std::line!()
                );
                if let ::std::result::Result::Err(failure) =
                    $crate::assert_handler().handle(&message)
                {
                    return ::std::result::Result::Err(failure.into());
                }
            }
        }
    };
}
