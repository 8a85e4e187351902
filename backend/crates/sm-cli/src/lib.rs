//! sm-cli library
//!
//! Exposes the migration API client for the `smig` binary and its tests.

pub(crate) mod client;


pub use client::{CliClientResult, Client, ClientError};
