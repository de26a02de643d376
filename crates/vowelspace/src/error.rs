//! Error and sentinel types shared by all measures.
//!
//! Policy
//! - Caller mistakes (unequal lengths, nonsensical configuration) and port
//!   failures (hull, mixture fit) are `Err(VowelSpaceError)`.
//! - Too little data or degenerate geometry is not an error: it is recovered
//!   into `Outcome::NoResult(Shortfall)` (or a NaN area) so batch callers can
//!   skip a sample without aborting.

use std::fmt;

/// Why a measure produced no value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortfall {
    /// Fewer usable points (or corners, or components) than the method needs.
    InsufficientData { needed: usize, got: usize },
    /// Enough input, but filtering left fewer than 3 distinct hull/polygon vertices.
    DegenerateGeometry { vertices: usize },
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::InsufficientData { needed, got } => {
                write!(f, "insufficient data: need {needed}, got {got}")
            }
            Shortfall::DegenerateGeometry { vertices } => write!(
                f,
                "degenerate geometry: {vertices} vertices (needs ≥3 non-collinear)"
            ),
        }
    }
}

/// Errors returned by the public operations.
#[derive(Clone, Debug, PartialEq)]
pub enum VowelSpaceError {
    /// Inputs or configuration the engine refuses to interpret.
    InvalidInput { reason: String },
    /// Escalated `Shortfall::InsufficientData` (see `Outcome::into_result`).
    InsufficientData { needed: usize, got: usize },
    /// Escalated `Shortfall::DegenerateGeometry` (see `Outcome::into_result`).
    DegenerateGeometry { vertices: usize },
    /// The hull or mixture port failed or did not converge.
    ExternalComputation {
        stage: &'static str,
        reason: String,
    },
}

impl VowelSpaceError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn external(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::ExternalComputation {
            stage,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for VowelSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
            Self::InsufficientData { needed, got } => {
                write!(f, "insufficient data: need {needed}, got {got}")
            }
            Self::DegenerateGeometry { vertices } => {
                write!(f, "degenerate geometry: {vertices} vertices")
            }
            Self::ExternalComputation { stage, reason } => {
                write!(f, "{stage} failed: {reason}")
            }
        }
    }
}

impl std::error::Error for VowelSpaceError {}

impl From<Shortfall> for VowelSpaceError {
    fn from(s: Shortfall) -> Self {
        match s {
            Shortfall::InsufficientData { needed, got } => Self::InsufficientData { needed, got },
            Shortfall::DegenerateGeometry { vertices } => Self::DegenerateGeometry { vertices },
        }
    }
}

/// A value, or the explicit no-result sentinel.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    Value(T),
    NoResult(Shortfall),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::NoResult(_) => None,
        }
    }

    #[inline]
    pub fn is_no_result(&self) -> bool {
        matches!(self, Outcome::NoResult(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Value(v) => Outcome::Value(f(v)),
            Outcome::NoResult(s) => Outcome::NoResult(s),
        }
    }

    /// Escalate the sentinel into an error.
    pub fn into_result(self) -> Result<T, VowelSpaceError> {
        match self {
            Outcome::Value(v) => Ok(v),
            Outcome::NoResult(s) => Err(s.into()),
        }
    }
}
