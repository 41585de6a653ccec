// File: crates/plot-core/src/types.rs
// Summary: Shared defaults (viewport size) used by hosts and the demo.

/// Default viewport width in pixels.
pub const WIDTH: u32 = 800;
/// Default viewport height in pixels.
pub const HEIGHT: u32 = 600;
