//! Paginated list controller
//!
//! A [`ListController`] owns the rows and [`crate::pagination::Pagination`]
//! of one list view. It calls a [`crate::traits::ListFetcher`] with the
//! current page, page size and [`Filter`], replaces the rows with each applied
//! response and publishes every state change through a `watch` channel.
//!
//! Mounting a controller starts a task that fetches once immediately and
//! again after every filter change. Overlapping fetches are not cancelled;
//! [`ResponseOrdering`] decides which response ends up in the state.

pub mod controller;
pub mod filter;

pub use controller::{FetchOutcome, ListController, ListOptions, ListState, MountedList, ResponseOrdering};
pub use filter::Filter;
