//! Error types for the invocation bridge.

use snafu::Snafu;

/// Result type for bridge operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while driving a compiled function.
///
/// The scalar call paths are infallible; only grid evaluation checks a
/// precondition (the destination must hold one value per cell).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Destination buffer cannot hold one value per grid cell.
    #[snafu(display("destination buffer too small: grid has {needed} cells, buffer holds {len}"))]
    BufferTooSmall { needed: usize, len: usize },
}
