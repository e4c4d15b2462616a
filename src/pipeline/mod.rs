//! Composition helpers for `Result`-based request pipelines.
//!
//! Every handler in this crate is a short chain of fallible steps:
//! validate the input, call the repository, shape the response. This module
//! provides the pieces that keep such chains flat:
//!
//! - [`ResultPipeline`]: `flat_map` and a terminal `fold` on top of the
//!   standard `map` / `map_err` / `and_then` / `unwrap_or` combinators
//! - [`combine`]: turns a sequence of results into a result of a sequence,
//!   stopping at the first error
//! - [`pipe2`] to [`pipe5`]: fixed-arity compositions of `and_then` steps
//!   followed by a final `map`
//!
//! # Examples
//!
//! ```rust
//! use task_api::pipeline::{ResultPipeline, pipe2};
//!
//! fn parse(input: &str) -> Result<i32, String> {
//!     input.parse().map_err(|_| format!("not a number: {input}"))
//! }
//!
//! fn non_negative(value: i32) -> Result<i32, String> {
//!     if value < 0 { Err("negative".to_string()) } else { Ok(value) }
//! }
//!
//! let rendered = pipe2(parse("21"), non_negative, |value| value * 2)
//!     .fold(|value| format!("ok: {value}"), |error| format!("error: {error}"));
//! assert_eq!(rendered, "ok: 42");
//! ```

mod combine;
mod pipe;
mod result;

pub use combine::combine;
pub use pipe::{pipe2, pipe3, pipe4, pipe5};
pub use result::ResultPipeline;
