//! REST API module for spam-filter
//!
//! Thin HTTP layer over the classifier: input validation, JSON shaping and
//! error mapping live here, scoring does not.

pub mod handlers;
pub mod server;

pub use server::ApiServer;
