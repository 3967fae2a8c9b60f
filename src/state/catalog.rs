use std::sync::Arc;

use super::data::Product;
use crate::error::FetchError;

/// Where the catalog is in its load lifecycle
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    /// Request in flight
    #[default]
    Pending,
    /// Products arrived and decoded
    Loaded(Arc<Vec<Product>>),
    /// The request or decoding failed; the user may retry
    Failed(FetchError),
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_pending() {
        assert!(FetchState::default().is_pending());
        assert!(!FetchState::Failed(FetchError::Status(500)).is_pending());
        assert!(!FetchState::Loaded(Arc::new(Vec::new())).is_pending());
    }
}
