use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LatticeError {
    EmptyBasis,
    RaggedBasis { row: usize, expected: usize, found: usize },
    NotSquare { rows: usize, cols: usize },
    InvalidDelta(f64),
    UnsupportedMethod(String),
    Interpolation(String),
    InvalidConfig(String),
    Parse(String),
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeError::EmptyBasis => write!(f, "Shape Error: basis must have at least one row and one column"),
            LatticeError::RaggedBasis { row, expected, found } => write!(
                f,
                "Shape Error: row {} has {} components, expected {}",
                row, found, expected
            ),
            LatticeError::NotSquare { rows, cols } => write!(
                f,
                "Shape Error: complementary angles need a square basis, got {}x{}",
                rows, cols
            ),
            LatticeError::InvalidDelta(d) => write!(f, "Invalid Parameter: delta must be in (0.25, 1.0), got {}", d),
            LatticeError::UnsupportedMethod(m) => write!(
                f,
                "Configuration Error: unsupported interpolation method '{}', use 'cubicspline'",
                m
            ),
            LatticeError::Interpolation(msg) => write!(f, "Interpolation Error: {}", msg),
            LatticeError::InvalidConfig(msg) => write!(f, "Configuration Error: {}", msg),
            LatticeError::Parse(msg) => write!(f, "Parse Error: {}", msg),
        }
    }
}

impl std::error::Error for LatticeError {}

impl LatticeError {
    pub fn interpolation(message: &str) -> Self { LatticeError::Interpolation(message.to_string()) }
    pub fn invalid_config(message: &str) -> Self { LatticeError::InvalidConfig(message.to_string()) }
    pub fn parse(message: &str) -> Self { LatticeError::Parse(message.to_string()) }

    /// True for errors caused by a caller-supplied setting rather than by the data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LatticeError::UnsupportedMethod(_) | LatticeError::InvalidConfig(_) | LatticeError::InvalidDelta(_)
        )
    }
}
