use std::fmt;

/// Error type for the keyed operations of a [`HeapDict`](crate::heap_dict::HeapDict)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HeapDictError {
    /// popitem/peekitem on a structure without entries
    EmptyContainer,
    /// get/delete with a key that is not present
    KeyNotFound,
}

impl fmt::Display for HeapDictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapDictError::EmptyContainer => write!(f, "priority queue is empty"),
            HeapDictError::KeyNotFound => write!(f, "key not found"),
        }
    }
}

impl std::error::Error for HeapDictError {}
