//! Error types for the qvb engine

use thiserror::Error;

/// Result type used throughout the engine
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error
#[derive(Error, Debug)]
pub enum Error {
    /// Device name is not in the registry
    #[error("unknown device name '{0}'")]
    UnknownDevice(String),

    /// Differentiation method name is not recognized
    #[error("unknown differentiation method '{0}'")]
    UnknownDiffMethod(String),

    /// Circuit addresses more wires than the device provides
    #[error("circuit uses {circuit} wires but device has {device}")]
    WireMismatch { circuit: usize, device: usize },

    /// Observable addresses a wire outside the register
    #[error("observable acts on wire {wire} of a {wires}-wire register")]
    WireOutOfRange { wire: usize, wires: usize },

    /// Parameter vector length does not match the circuit
    #[error("expected {expected} parameters, got {got}")]
    ParamCountMismatch { expected: usize, got: usize },

    /// Template cannot be constructed from the given sizes
    #[error("invalid template configuration: {0}")]
    InvalidTemplate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownDevice("banana.qubit".into());
        assert_eq!(err.to_string(), "unknown device name 'banana.qubit'");

        let err = Error::WireMismatch {
            circuit: 6,
            device: 4,
        };
        assert!(err.to_string().contains("6 wires"));
    }
}
