#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiftIdError {
    #[error("length fulfillment stalled after {rounds} rounds: produced {produced} of {length} characters")]
    Exhausted {
        length: usize,
        produced: usize,
        rounds: usize,
    },
}

pub type Result<T> = std::result::Result<T, SiftIdError>;
