//! Bitmix - compose RGB colors from 24 bit switches
//!
//! Color math and harmony rules live in the `hsl-harmony` crate.
//! This library holds the mixer, config, and report layers behind the CLI
//! and is exposed for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;

pub use error::MixError;
