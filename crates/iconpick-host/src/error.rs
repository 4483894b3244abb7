use thiserror::Error;

use crate::document::NodeId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("Node not found: {0}")]
    UnknownNode(NodeId),
}
