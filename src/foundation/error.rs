use std::fmt;

/// Result alias used throughout the crate.
pub type TaijiResult<T> = Result<T, TaijiError>;

/// Errors surfaced by the engine.
///
/// Only conditions the caller must act on are errors. Parameter corrections that let construction
/// proceed are reported as [`Notice`] values instead.
#[derive(thiserror::Error, Debug)]
pub enum TaijiError {
    /// No usable drawing surface was supplied; nothing was constructed.
    #[error("missing drawing surface: {0}")]
    MissingSurface(String),

    /// The instance was disposed and no longer owns a surface.
    #[error("taiji instance has been disposed")]
    Disposed,

    /// The drawing surface rejected an operation.
    #[error("surface error: {0}")]
    Surface(String),

    /// Scene or argument validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Host-side failure (file IO, encoding) carried through unchanged.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TaijiError {
    /// Build a [`TaijiError::MissingSurface`].
    pub fn missing_surface(msg: impl Into<String>) -> Self {
        Self::MissingSurface(msg.into())
    }

    /// Build a [`TaijiError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Build a [`TaijiError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Coordinate axis named by a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Recoverable validation report produced while constructing an instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notice {
    /// The requested center coordinate lies outside the extended visible region and was replaced
    /// by the surface center on that axis.
    PositionOutOfRange {
        /// Offending axis.
        axis: Axis,
        /// Coordinate the caller asked for.
        requested: f64,
        /// Coordinate actually used.
        reset_to: f64,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::PositionOutOfRange {
                axis,
                requested,
                reset_to,
            } => write!(
                f,
                "{axis} position {requested} is outside the visible range, reset to {reset_to}"
            ),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
