//! Tracing setup.
//!
//! The library only emits `tracing` events and spans; binaries decide where
//! they go. [`init_tracing`] installs a compact formatter on stderr, filtered
//! by:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust
//! use showreel::observability::init_tracing;
//! use showreel::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("showreel started");
//! ```

mod init;

pub use init::init_tracing;
