use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PickerError {
    #[error("No rendered cell at position {0}")]
    UnknownCell(usize),

    #[error("No icon selected")]
    NoSelection,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("insert-icon message carries no SVG markup")]
    EmptySvg,

    #[error("Invalid panel size {0}x{1}: dimensions must be positive")]
    InvalidSize(f64, f64),
}
