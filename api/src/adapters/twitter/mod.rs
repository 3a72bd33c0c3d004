//! Twitter adapter
//!
//! Implementation of the Twitter v2 API client.

pub mod client;

pub use client::TwitterClientImpl;
