//! Filesystem utilities for sst-report.
//!
//! The report is written atomically so a caller never picks up a
//! half-written document.

pub mod atomic;

pub use atomic::atomic_write_file;
