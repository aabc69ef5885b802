//! Shared repository error for persistence adapters.

use super::define_port_error;

define_port_error! {
    /// Infrastructure failures raised by repository adapters.
    ///
    /// "No rows" is not an error; repositories express absence through
    /// `Option` so that callers can distinguish it from an empty result set.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "repository query failed: {message}",
    }
}
