//! Error types for the rustplot library.

use std::fmt;
use std::io;

use crate::axis::AxisFamily;

/// The main error type for rustplot operations.
#[derive(Debug)]
pub enum PlotError {
    /// Error during IO operations (config loading, etc.)
    Io(io::Error),
    /// Invalid configuration or parameters
    InvalidConfig(String),
    /// A property read through an axis proxy whose group does not
    /// have exactly one member axis
    AmbiguousAxisAccess {
        /// Family the read was attempted on
        family: AxisFamily,
        /// Number of axes currently attached to the family
        count: usize,
    },
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::Io(err) => write!(f, "IO error: {}", err),
            PlotError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            PlotError::AmbiguousAxisAccess { family, count: 0 } => write!(
                f,
                "No {} axis attached: reading a single axis property requires exactly one axis",
                family
            ),
            PlotError::AmbiguousAxisAccess { family, count } => write!(
                f,
                "Ambiguous {} axis access: {} axes attached, expected exactly one",
                family, count
            ),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for PlotError {
    fn from(err: io::Error) -> Self {
        PlotError::Io(err)
    }
}

/// Result type alias for rustplot operations.
pub type PlotResult<T> = Result<T, PlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_access_message_empty_group() {
        let err = PlotError::AmbiguousAxisAccess {
            family: AxisFamily::X,
            count: 0,
        };
        assert!(err.to_string().contains("No x axis attached"));
    }

    #[test]
    fn test_ambiguous_access_message_multiple_members() {
        let err = PlotError::AmbiguousAxisAccess {
            family: AxisFamily::Y,
            count: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("Ambiguous y axis access"));
        assert!(msg.contains("3 axes"));
    }
}
