//! Two-armed container for the outcome of a fallible operation, with
//! combinators that short-circuit once a step has failed.
//!
//! ```
//! use outcome::Outcome;
//!
//! let outcome: Outcome<i32, &str> = Outcome::failure("boom")
//!     .then_try(|x| Ok(x * 2))
//!     .on_failure(|e| assert_eq!(*e, "boom"));
//!
//! assert_eq!(outcome.unwrap_or(99), 99);
//! ```

pub mod outcome;

pub use crate::outcome::Outcome;
