use thiserror::Error;

/// Errors raised by the oscillator engine.
///
/// Data never fails: flat ranges, single bars and malformed bars all produce
/// numeric output. Only configuration is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid configuration: window length must be at least 1, got {length}")]
    InvalidConfiguration { length: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
