//! Runs a show command on the devices of a testbed and collects the parsed responses.
//!
//! For an example look at the `main.rs` file.

pub mod cli;
pub mod connection;
pub mod device;
pub mod driver;
pub mod error;
pub mod query;

#[cfg(test)]
mod tests;

pub use connection::{ConnectOptions, Session};
pub use device::{Device, LiveTestbed};
pub use error::QueryError;
pub use query::{device_info, QueryOptions};
