//! Result alias for provider calls and the error-to-empty coercion.

use tracing::warn;

use super::api::ApiError;

/// Type alias for Results of provider calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Extension trait that turns a failed list fetch into an empty list.
///
/// This is the single place where provider failures are swallowed. The
/// failure is logged with the operation name and the list comes back empty,
/// so the display shows "nothing found" instead of an error state.
///
/// # Example
///
/// ```ignore
/// use gifgrid::error::OrEmpty;
///
/// let results = client.try_search_gifs("cat").await.or_empty("search_gifs");
/// ```
pub trait OrEmpty<T> {
    /// Return the list, or an empty list if the call failed.
    fn or_empty(self, operation: &str) -> Vec<T>;
}

impl<T> OrEmpty<T> for ApiResult<Vec<T>> {
    fn or_empty(self, operation: &str) -> Vec<T> {
        match self {
            Ok(items) => items,
            Err(err) => {
                warn!(
                    operation,
                    code = err.kind().code(),
                    "Provider call failed, showing no results: {}",
                    err
                );
                Vec::new()
            }
        }
    }
}
