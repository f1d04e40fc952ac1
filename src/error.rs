use thiserror::Error;

/// Errors raised while building or parsing geometry values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A polygon needs at least three vertices.
    #[error("A polygon needs at least 3 vertices, got {vertices}.")]
    InvalidPolygon { vertices: usize },
    #[error("Cannot parse {input:?}: {reason}.")]
    Parse { input: String, reason: String },
}

impl GeometryError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
