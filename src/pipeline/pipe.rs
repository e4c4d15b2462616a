//! Fixed-arity pipe helpers.
//!
//! `pipeN(input, step_1, …, finish)` chains `N - 1` fallible steps with
//! `and_then` and applies `finish` with `map`. Each helper is exactly the
//! equivalent chain of method calls; they exist so handlers read top to
//! bottom instead of nesting closures.

/// One fallible step followed by a final transformation.
///
/// `pipe2(input, step, finish)` is `input.and_then(step).map(finish)`.
///
/// # Errors
///
/// Returns the error of `input` or of `step`, whichever occurs first.
///
/// # Examples
///
/// ```rust
/// use task_api::pipeline::pipe2;
///
/// let result = pipe2(Ok::<_, String>("3"), |text| text.parse::<i32>().map_err(|e| e.to_string()), |n| n * 10);
/// assert_eq!(result, Ok(30));
/// ```
#[inline]
pub fn pipe2<A, B, C, E, Step, Finish>(
    input: Result<A, E>,
    step: Step,
    finish: Finish,
) -> Result<C, E>
where
    Step: FnOnce(A) -> Result<B, E>,
    Finish: FnOnce(B) -> C,
{
    input.and_then(step).map(finish)
}

/// Two fallible steps followed by a final transformation.
///
/// # Errors
///
/// Returns the first error produced along the chain.
#[inline]
pub fn pipe3<A, B, C, D, E, First, Second, Finish>(
    input: Result<A, E>,
    first: First,
    second: Second,
    finish: Finish,
) -> Result<D, E>
where
    First: FnOnce(A) -> Result<B, E>,
    Second: FnOnce(B) -> Result<C, E>,
    Finish: FnOnce(C) -> D,
{
    input.and_then(first).and_then(second).map(finish)
}

/// Three fallible steps followed by a final transformation.
///
/// # Errors
///
/// Returns the first error produced along the chain.
#[inline]
#[allow(clippy::many_single_char_names)]
pub fn pipe4<A, B, C, D, F, E, First, Second, Third, Finish>(
    input: Result<A, E>,
    first: First,
    second: Second,
    third: Third,
    finish: Finish,
) -> Result<F, E>
where
    First: FnOnce(A) -> Result<B, E>,
    Second: FnOnce(B) -> Result<C, E>,
    Third: FnOnce(C) -> Result<D, E>,
    Finish: FnOnce(D) -> F,
{
    input
        .and_then(first)
        .and_then(second)
        .and_then(third)
        .map(finish)
}

/// Four fallible steps followed by a final transformation.
///
/// # Errors
///
/// Returns the first error produced along the chain.
#[inline]
#[allow(clippy::many_single_char_names)]
pub fn pipe5<A, B, C, D, F, G, E, First, Second, Third, Fourth, Finish>(
    input: Result<A, E>,
    first: First,
    second: Second,
    third: Third,
    fourth: Fourth,
    finish: Finish,
) -> Result<G, E>
where
    First: FnOnce(A) -> Result<B, E>,
    Second: FnOnce(B) -> Result<C, E>,
    Third: FnOnce(C) -> Result<D, E>,
    Fourth: FnOnce(D) -> Result<F, E>,
    Finish: FnOnce(F) -> G,
{
    input
        .and_then(first)
        .and_then(second)
        .and_then(third)
        .and_then(fourth)
        .map(finish)
}
