//! Sequencing of independent results.

/// Combines results into a single result of all values, in input order.
///
/// Short-circuits: the first `Err` (in input order) is returned as is and
/// the remaining inputs are not consumed. Errors are never accumulated.
///
/// # Errors
///
/// Returns the first error found in `results`.
///
/// # Examples
///
/// ```rust
/// use task_api::pipeline::combine;
///
/// let all_ok: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2), Ok(3)];
/// assert_eq!(combine(all_ok), Ok(vec![1, 2, 3]));
///
/// let mixed: Vec<Result<i32, &str>> = vec![Ok(1), Err("second"), Err("third")];
/// assert_eq!(combine(mixed), Err("second"));
/// ```
pub fn combine<T, E, I>(results: I) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().collect()
}
