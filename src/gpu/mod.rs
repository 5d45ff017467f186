//! GPU resource management utilities.
//!
//! Provides wgpu device/queue ownership for embedded and headless use,
//! lookup-table texture format selection, the fixed-size staging buffer,
//! and frame-buffer texture byte accounting.

/// Lookup-table texture format selection.
pub mod formats;
/// wgpu device and queue ownership for embedded/headless use.
pub mod render_context;
/// Fixed-size CPU-to-GPU transfer buffer with scoped write access.
pub mod staging;
/// Frame-buffer texture accounting registry.
pub mod texture_cache;
