//! Workout tracker core: entities, durable storage, weekly volume analysis,
//! document import/export, and the rest-interval timer.
//!
//! The crate is the state and persistence engine behind a thin presentation
//! layer. The UI calls [`Tracker`] for every read and mutation; the tracker
//! owns the in-memory collections and mirrors each successful mutation to the
//! [`Store`]. Imported documents pass through [`codec`] so arbitrary bytes
//! survive the text-based store, and [`timer::RestTimer`] provides the one
//! concurrent piece: a cancellable rest countdown.

pub mod analysis;
pub mod codec;
pub mod error;
pub mod models;
pub mod store;
pub mod timer;
pub mod tracker;

#[cfg(test)]
pub mod test_utils;

pub use error::{CoreError, CoreResult};
pub use store::Store;
pub use tracker::Tracker;
