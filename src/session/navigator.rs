//! Navigation interface the submission flow drives

/// Route replacement, fire-and-forget.
///
/// Concrete routing belongs to the application shell; the submission
/// controller only needs to point it at the post-login destination.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Replace the current location with `path`.
    fn replace(&self, path: &str);
}
