//! Read side of the catalog: reference resolution, text rendering and the
//! query operations that drive output into a [`sink::LineSink`].

pub mod error;
pub mod format;
pub mod query;
pub mod resolve;
pub mod sink;
