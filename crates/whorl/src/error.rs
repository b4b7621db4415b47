//! Error type shared by the whole library.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
//! `Display` and `std::error::Error` impls for us from the `#[error]`
//! attributes, so each variant carries its own message.

use thiserror::Error;

/// Everything that can go wrong while building or drawing a shell.
///
/// All variants are recoverable by the caller: reject the gene set,
/// re-randomize, or pick another pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShellError {
    /// A gene value would make the spiral loop non-terminating or
    /// numerically undefined.
    #[error("invalid gene `{gene}` = {value}: {reason}")]
    InvalidGene {
        gene: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The pattern name is neither `circle` nor a registry key.
    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    /// Generation produced no segments at all.
    #[error("spiral produced no segments")]
    EmptyGeometry,

    /// The target canvas has a zero dimension.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let err = ShellError::InvalidGene { gene: "opening", value: -1.0, reason: "must be positive" };
        assert_eq!(err.to_string(), "invalid gene `opening` = -1: must be positive");

        let err = ShellError::UnknownPattern("nonexistent".into());
        assert!(err.to_string().contains("nonexistent"));
    }
}
