//! fetch - remote data access for dashboard pages.
//!
//! - [`RequestFailure`]: what a failed request looks like to the UI layer.
//! - [`poll`]: refetch on an interval until the data says stop.
//! - [`ApiClient`]: typed reqwest client for the roles API (`client` feature).

#[cfg(feature = "client")]
mod client;
mod failure;
mod poll;

#[cfg(feature = "client")]
pub use client::ApiClient;
pub use failure::RequestFailure;
pub use poll::{
    any_processing, poll, PollHandle, HEALTH_POLL_INTERVAL, MIN_POLL_INTERVAL,
    PROCESSING_POLL_INTERVAL,
};
