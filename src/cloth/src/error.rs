use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClothError {
	#[error("grid needs at least 2x2 points, got {columns}x{rows}")]
	InvalidDimensions { columns: usize, rows: usize },
}
