//! # dshow-core
//!
//! DirectShow interop surface: the well-known identifier catalog, merit
//! levels, `#[repr(C)]` layouts of the structures that cross the COM
//! boundary, and typed handles for the pin, media-type enumerator and
//! graph-callback interfaces.
//!
//! Everything except [`windows_interop`] builds on any host, so layouts and
//! contracts can be tested against in-process doubles.

// ============================================================================
// Identifiers
// ============================================================================
pub mod catalog;
pub mod guid;
pub mod merit;

// ============================================================================
// COM boundary
// ============================================================================
pub mod alloc;
pub mod hresult;
pub mod interface;
pub mod layout;

#[cfg(windows)]
pub mod windows_interop;

// ============================================================================
// Ambient
// ============================================================================
pub mod config;
pub mod error;

#[cfg(test)]
mod trace_capture;

pub use catalog::{catalog, Catalog, Category, IdentifierEntry};
pub use error::{Error, Result};
pub use guid::Guid;
pub use hresult::HResult;
pub use interface::ComPtr;
pub use merit::Merit;

// ============================================================================
// Version
// ============================================================================
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
