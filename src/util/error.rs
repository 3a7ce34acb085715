use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TupleError {
    #[error("failed to reserve the handle array: {0}")]
    HandleArray(#[from] TryReserveError),
    #[error("failed to allocate {size} bytes for the holder of element {index}")]
    HolderAlloc { index: usize, size: usize },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn holder_alloc_message_names_element() {
        let err = TupleError::HolderAlloc { index: 3, size: 24 };
        assert_eq!(
            err.to_string(),
            "failed to allocate 24 bytes for the holder of element 3"
        );
    }

    #[test]
    fn reserve_failure_converts() {
        let reserve_err = Vec::<u64>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err: TupleError = reserve_err.into();
        assert!(matches!(err, TupleError::HandleArray(_)));
        assert!(err.to_string().starts_with("failed to reserve the handle array"));
    }
}
