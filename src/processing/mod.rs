//! In-memory collection transformations.
//!
//! The processing layer provides single-pass, order-preserving operations over
//! slices of arbitrary elements, plus key projection over [`crate::types::Record`]s.
//! Everything here is synchronous and purely in-memory.
//!
//! Implemented operations:
//!
//! - [`for_each()`]: in-place traversal for side effect
//! - [`filter()`]: selection by predicate into a new collection
//! - [`map()`]: element transformation into a new collection
//! - [`pluck_properties()`] / [`pluck_many()`]: record key projection
//! - [`reduce()`] / [`reduce_from_first()`]: left folds
//!
//! ## Example: filter → map → reduce
//!
//! ```rust
//! use record_processing::processing::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! // Keep even numbers.
//! let evens = filter(&numbers, |n, _idx, _all| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! // Scale by ten.
//! let scaled = map(&evens, |n| n * 10);
//! assert_eq!(scaled, vec![20, 40]);
//!
//! // Sum the result.
//! let total = reduce(&scaled, 0, |acc, n, _idx, _all| acc + n);
//! assert_eq!(total, 60);
//! ```

pub mod filter;
pub mod for_each;
pub mod map;
pub mod pluck;
pub mod reduce;

pub use filter::filter;
pub use for_each::for_each;
pub use map::map;
pub use pluck::{pluck_many, pluck_properties};
pub use reduce::{reduce, reduce_from_first};
