//! Paginated list and search envelopes
//!
//! List responses arrive as one page plus a `has_more` flag. [`List`] keeps
//! the filter parameters that produced it (cursors are only valid against
//! the same filters), computes the boundary cursor for the follow-up
//! request, and exposes the whole collection as a lazy stream that fetches
//! pages on demand in server order. [`SearchList`] does the same with the
//! opaque `page` continuation token search responses carry instead of
//! boundary ids.

mod types;

pub use types::{List, SearchList};

#[cfg(test)]
mod tests;
