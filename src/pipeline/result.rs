//! Extension combinators for `Result`.

/// Pipeline combinators missing from `Result`'s inherent API.
///
/// `Result` already provides `map`, `map_err`, `and_then`, `unwrap_or` and
/// `unwrap_or_else`. This trait adds the monadic `flat_map` spelling and a
/// terminal [`fold`](ResultPipeline::fold) that forces both branches to be
/// handled.
pub trait ResultPipeline<T, E>: Sized {
    /// Chains a step that may itself fail.
    ///
    /// Equivalent to [`Result::and_then`]: on `Ok` the function is invoked and
    /// its result returned, on `Err` the error is propagated untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use task_api::pipeline::ResultPipeline;
    ///
    /// let halve = |value: i32| if value % 2 == 0 { Ok(value / 2) } else { Err("odd") };
    ///
    /// assert_eq!(Ok::<i32, &str>(10).flat_map(halve), Ok(5));
    /// assert_eq!(Ok::<i32, &str>(3).flat_map(halve), Err("odd"));
    /// assert_eq!(Err::<i32, &str>("boom").flat_map(halve), Err("boom"));
    /// ```
    fn flat_map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Eliminates the result by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use task_api::pipeline::ResultPipeline;
    ///
    /// let success: Result<i32, String> = Ok(42);
    /// assert_eq!(success.fold(|value| value.to_string(), |error| error), "42");
    ///
    /// let failure: Result<i32, String> = Err("missing".to_string());
    /// assert_eq!(failure.fold(|value| value.to_string(), |error| error), "missing");
    /// ```
    fn fold<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R;
}

impl<T, E> ResultPipeline<T, E> for Result<T, E> {
    #[inline]
    fn flat_map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(function)
    }

    #[inline]
    fn fold<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn flat_map_chains_success() {
        let result: Result<i32, String> = Ok(4);
        let chained = result.flat_map(|value| Ok::<_, String>(value.to_string()));
        assert_eq!(chained, Ok("4".to_string()));
    }

    #[rstest]
    fn flat_map_propagates_error_without_calling_function() {
        let called = Cell::new(false);
        let result: Result<i32, String> = Err("bad".to_string());

        let chained = result.flat_map(|value| {
            called.set(true);
            Ok::<_, String>(value + 1)
        });

        assert_eq!(chained, Err("bad".to_string()));
        assert!(!called.get());
    }

    #[rstest]
    #[case(Ok(7), "ok:7")]
    #[case(Err("nope"), "err:nope")]
    fn fold_invokes_exactly_one_branch(#[case] input: Result<i32, &str>, #[case] expected: &str) {
        let ok_calls = Cell::new(0);
        let err_calls = Cell::new(0);

        let rendered = input.fold(
            |value| {
                ok_calls.set(ok_calls.get() + 1);
                format!("ok:{value}")
            },
            |error| {
                err_calls.set(err_calls.get() + 1);
                format!("err:{error}")
            },
        );

        assert_eq!(rendered, expected);
        assert_eq!(ok_calls.get() + err_calls.get(), 1);
    }
}
