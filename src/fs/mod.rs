//! Filesystem utilities for envcreate.
//!
//! The generated environment file is written under an exclusive lock on a
//! sidecar lock file, via an atomic temp-file rename, so readers never
//! observe a partially written file.

pub mod atomic;

pub use atomic::locked_atomic_write;
