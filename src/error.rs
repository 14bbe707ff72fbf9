use thiserror::Error;

/// Fatal transport faults. Drops are not errors and never show up here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    /// The deframer consumed a length byte but could not read the whole
    /// payload. Unreachable while the producer honours the write rule.
    #[error("short read from transport queue: frame declares {expected} bytes, {available} available")]
    ShortRead { expected: usize, available: usize },
}

/// Failures while setting up or tearing down the MIDI backend.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("jack: {0}")]
    Jack(#[from] jack::Error),
    #[error("jack server shut the client down")]
    ServerShutdown,
}
