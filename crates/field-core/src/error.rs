//! Host precondition failures.
//!
//! The simulation itself is total over its numeric inputs and never fails.
//! These errors describe a rendering host that is missing or not ready when
//! a frontend tries to start the frame loop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("missing #{0} element")]
    MissingElement(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("2D context unavailable on #{0}")]
    No2dContext(String),
    #[error("no WebGPU adapter")]
    NoAdapter,
    #[error("request_device error: {0}")]
    Device(String),
    #[error("surface creation failed: {0}")]
    Surface(String),
}
