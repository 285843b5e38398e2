//! Input validation limits applied by the loaders

/// Maximum length for node names (256 bytes)
pub const MAX_NODE_NAME_LEN: usize = 256;

/// Validation error type
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyNodeName,
    NodeNameTooLong { len: usize, max: usize },
    NonFiniteWeight(f64),
    NegativeWeight(f64),
    NonFiniteEstimate(f64),
    NegativeEstimate(f64),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNodeName => write!(f, "Node name cannot be empty"),
            Self::NodeNameTooLong { len, max } => {
                write!(f, "Node name too long: {} bytes (max {})", len, max)
            }
            Self::NonFiniteWeight(w) => write!(f, "Edge weight must be finite, got {}", w),
            Self::NegativeWeight(w) => write!(f, "Edge weight cannot be negative, got {}", w),
            Self::NonFiniteEstimate(h) => write!(f, "Estimate must be finite, got {}", h),
            Self::NegativeEstimate(h) => write!(f, "Estimate cannot be negative, got {}", h),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate node name
pub fn validate_node_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyNodeName);
    }
    if name.len() > MAX_NODE_NAME_LEN {
        return Err(ValidationError::NodeNameTooLong {
            len: name.len(),
            max: MAX_NODE_NAME_LEN,
        });
    }
    Ok(())
}

/// Validate edge weight
pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() {
        return Err(ValidationError::NonFiniteWeight(weight));
    }
    if weight < 0.0 {
        return Err(ValidationError::NegativeWeight(weight));
    }
    Ok(())
}

/// Validate heuristic estimate
pub fn validate_estimate(estimate: f64) -> Result<(), ValidationError> {
    if !estimate.is_finite() {
        return Err(ValidationError::NonFiniteEstimate(estimate));
    }
    if estimate < 0.0 {
        return Err(ValidationError::NegativeEstimate(estimate));
    }
    Ok(())
}
