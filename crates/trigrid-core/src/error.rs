use std::fmt;

/// Errors reported when a lattice or a walkability view is built from
/// invalid parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    /// Width or height is zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// Edge length is not a finite positive number.
    InvalidEdgeLength(f32),
    /// A per-cell buffer does not match `width * height`.
    SizeMismatch { expected: usize, got: usize },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "lattice: invalid dimensions {width}x{height}")
            }
            Self::InvalidEdgeLength(edge) => {
                write!(f, "lattice: edge length must be positive and finite, got {edge}")
            }
            Self::SizeMismatch { expected, got } => {
                write!(f, "lattice: expected {expected} cells, got {got}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}

/// Check lattice construction parameters: positive dimensions and a
/// finite positive edge length.
pub fn validate(width: i32, height: i32, edge: f32) -> Result<(), LatticeError> {
    if width <= 0 || height <= 0 {
        return Err(LatticeError::InvalidDimensions { width, height });
    }
    if !edge.is_finite() || edge <= 0.0 {
        return Err(LatticeError::InvalidEdgeLength(edge));
    }
    Ok(())
}
