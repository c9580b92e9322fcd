//! Shared model and client-side data pipelines of the records dashboard.
//!
//! Everything in this crate is target independent: the Yew frontend compiles it
//! to wasm, the host and the test suite compile it natively. Nothing here
//! performs I/O; time (`now`, the local UTC offset) is always passed in.

pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod import;
pub mod model;
pub mod requests;
pub mod session;
