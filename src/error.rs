//! Error types for allocating operations.

use core::fmt;

/// Errors arising when a backing store cannot be obtained or grown.
///
/// Whenever one of these is returned, the structure that attempted the
/// allocation is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// The requested number of slots does not fit in the address space.
    CapacityOverflow {
        /// Number of slots that was asked for.
        requested: usize,
    },
    /// The host allocator refused the request.
    OutOfMemory {
        /// Number of slots that was asked for.
        requested: usize,
    },
}

impl AllocError {
    /// Returns the slot count of the failed request.
    pub fn requested(&self) -> usize {
        match *self {
            Self::CapacityOverflow { requested } | Self::OutOfMemory { requested } => requested,
        }
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots exceed the address space")
            }
            Self::OutOfMemory { requested } => {
                write!(f, "failed to allocate {requested} slots")
            }
        }
    }
}

impl core::error::Error for AllocError {}

#[cfg(test)]
mod tests {
    use std::string::ToString;
    use super::*;

    #[test]
    fn display_names_the_request() {
        let e = AllocError::OutOfMemory { requested: 64 };
        assert_eq!(e.to_string(), "failed to allocate 64 slots");
        assert_eq!(e.requested(), 64);

        let e = AllocError::CapacityOverflow { requested: usize::MAX };
        assert!(e.to_string().starts_with("capacity overflow"));
        assert_eq!(e.requested(), usize::MAX);
    }
}
