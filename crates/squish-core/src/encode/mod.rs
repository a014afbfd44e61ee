//! Image encoding for Squish.
//!
//! This module re-encodes a decoded pixel buffer as JPEG at a chosen
//! quality level. It is the lossy half of the compression pipeline; the
//! same routine backs both the live size estimate and the download.
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
