//! Platform clock implementations
//!
//! Each platform provides a [`Clock`](crate::clock::Clock) backed by whatever
//! time hardware it has. Only the desktop clock exists today.

pub mod system;
