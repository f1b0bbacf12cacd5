use std::panic;

/// Outcome of an operation that may either succeed with a value or fail
/// with an error.
///
/// Combinators consume the outcome and hand back a new one, which makes
/// fallible steps composable without checking for failure after every step:
///
/// ```
/// use outcome::Outcome;
///
/// fn double(x: i32) -> anyhow::Result<i32> {
///     Ok(x * 2)
/// }
///
/// let outcome: Outcome<i32> = Outcome::success(10).then_try(double).then_try(double);
/// assert_eq!(outcome.unwrap_or(0), 40);
/// ```
///
/// Once an outcome has failed, `then` and `then_try` never call their
/// functions again and the original error is carried along verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = anyhow::Error> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates successful outcome holding `value`.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Creates failed outcome holding `error`.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Lifts a (value, error) pair. Present error wins, the value is then dropped.
    pub fn from_pair(value: T, error: Option<E>) -> Self {
        match error {
            Some(error) => Outcome::Failure(error),
            None => Outcome::Success(value),
        }
    }

    /// Splits outcome back into a (value, error) pair.
    ///
    /// Exactly one half is meaningful: the error is `None` on success and
    /// the value is `T::default()` on failure.
    pub fn unwrap_pair(self) -> (T, Option<E>)
    where
        T: Default,
    {
        match self {
            Outcome::Success(value) => (value, None),
            Outcome::Failure(error) => (T::default(), Some(error)),
        }
    }

    /// Returns copy of the success value, `T::default()` when failed.
    ///
    /// Does not signal failure in any way, check `is_success` first.
    pub fn value(&self) -> T
    where
        T: Clone + Default,
    {
        self.as_success().cloned().unwrap_or_default()
    }

    pub fn as_success(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns stored error, `None` when successful.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the success value.
    ///
    /// Meant only for call sites where failure is already known to be
    /// impossible, never as regular control flow.
    ///
    /// # Panics
    ///
    /// Panics when the outcome has failed. The stored error itself is the
    /// panic payload, so it can be recovered with `catch_unwind` and
    /// `downcast`.
    pub fn unwrap_or_panic(self) -> T
    where
        E: Send + 'static,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic::panic_any(error),
        }
    }

    /// Returns the success value or `fallback` when failed.
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fallback,
        }
    }

    /// Chains function written in the usual `Result` form.
    /// Not called when the outcome has already failed.
    pub fn then_try<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> Result<T, E>,
    {
        match self {
            Outcome::Success(value) => f(value).into(),
            failure => failure,
        }
    }

    /// Chains function that already returns an outcome, its result is
    /// returned as is. Not called when the outcome has already failed.
    pub fn then<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> Outcome<T, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            failure => failure,
        }
    }

    /// Calls `f` with the value if successful. Returns self unchanged.
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the error if failed. Returns self unchanged.
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Calls `f` no matter the state. Returns self unchanged.
    pub fn always<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        f();
        self
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
