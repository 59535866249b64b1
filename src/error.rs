/// Errors returned by the list operations of this crate.
///
/// Every failing operation leaves the list exactly as it was before the call.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A front or back access was attempted on a list (or chunk) with no elements.
    #[error("the list is empty")]
    EmptyCollection,

    /// The supplied index is outside the valid range for the operation.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the call.
        len: usize,
    },

    /// A fixed-capacity list is already full.
    #[error("the list is full: its capacity of {capacity} elements is exhausted")]
    CapacityExceeded {
        /// The configured maximum number of elements.
        capacity: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_mentions_the_offending_values() {
        assert_eq!(Error::EmptyCollection.to_string(), "the list is empty");
        assert_eq!(
            Error::IndexOutOfRange { index: 7, len: 3 }.to_string(),
            "index 7 is out of range for a list of length 3"
        );
        assert_eq!(
            Error::CapacityExceeded { capacity: 4 }.to_string(),
            "the list is full: its capacity of 4 elements is exhausted"
        );
    }
}
