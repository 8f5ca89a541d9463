//! Query engine over the place repository.
//!
//! Every query is a full, stable recompute over the repository: the result is
//! always a subsequence of the input in its original order.

mod filter;
mod query;

pub use filter::{PlaceMatch, annotate_distances, distinct_towns, filter};
pub use query::{PlaceQuery, PlaceQueryBuilder, TownSelection};
