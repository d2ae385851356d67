use crate::domain::{DomainError, ViewportSize};

/// Port for querying the host viewport.
///
/// Implementations read the current rendering-area dimensions from whatever
/// environment hosts the detector (terminal, window system, test double).
pub trait ViewportQuery: Send + Sync {
    /// Current viewport size in device-independent pixels.
    ///
    /// Returns `EnvironmentUnavailable` when the host cannot report
    /// dimensions; the failure propagates to the caller, it is never
    /// replaced with a default size.
    fn size(&self) -> Result<ViewportSize, DomainError>;
}
