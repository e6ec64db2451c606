use thiserror::Error;

pub type NwResult<T> = Result<T, NwError>;

/// The single error kind raised by network operations.
///
/// Every failure is detected before any state is touched, so an `Err`
/// never leaves a network partially mutated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NwError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: InvalidReason },
}

impl NwError {
    /// Which validation rule was violated.
    pub fn reason(&self) -> InvalidReason {
        match self {
            NwError::InvalidArgument { reason } => *reason,
        }
    }
}

impl From<InvalidReason> for NwError {
    fn from(reason: InvalidReason) -> Self {
        NwError::InvalidArgument { reason }
    }
}

/// Human-readable cause carried by [`NwError::InvalidArgument`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("the number of nodes must be greater than 1 (got {nodes})")]
    TooFewNodes { nodes: i64 },

    #[error("the number of nodes must not exceed {max} for this representation (got {nodes})")]
    TooManyNodes { nodes: i64, max: usize },

    #[error(
        "source and target nodes must be greater than or equal to 1 (source={source_node}, target={target_node})"
    )]
    BelowRange { source_node: i64, target_node: i64 },

    #[error(
        "source and target nodes must be less than or equal to the number of nodes {nodes} (source={source_node}, target={target_node})"
    )]
    AboveRange {
        source_node: i64,
        target_node: i64,
        nodes: usize,
    },

    #[error("source and target are the same node ({node})")]
    SelfLoop { node: i64 },

    #[error("node {node} is outside the range 1..={nodes}")]
    NodeOutOfRange { node: i64, nodes: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_round_trips_through_error() {
        let reason = InvalidReason::SelfLoop { node: 4 };
        let err: NwError = reason.into();
        assert_eq!(err.reason(), reason);
        assert!(matches!(err, NwError::InvalidArgument { .. }));
    }

    #[test]
    fn messages_distinguish_rules() {
        let below = NwError::from(InvalidReason::BelowRange {
            source_node: 0,
            target_node: 2,
        })
        .to_string();
        let above = NwError::from(InvalidReason::AboveRange {
            source_node: 5,
            target_node: 2,
            nodes: 4,
        })
        .to_string();
        let same = NwError::from(InvalidReason::SelfLoop { node: 3 }).to_string();

        assert!(below.starts_with("Invalid argument:"));
        assert!(below.contains("greater than or equal to 1"));
        assert!(above.contains("less than or equal to the number of nodes 4"));
        assert!(same.contains("same node (3)"));

        let single = NwError::from(InvalidReason::NodeOutOfRange { node: 7, nodes: 6 }).to_string();
        assert!(single.contains("node 7 is outside the range 1..=6"));
        assert!(!single.contains("source"));

        let huge = NwError::from(InvalidReason::TooManyNodes {
            nodes: 5_000_000_000,
            max: 65_536,
        })
        .to_string();
        assert!(huge.contains("must not exceed 65536"));
    }
}
