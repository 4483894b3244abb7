use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HostError;

/// Identifier of a node in the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new_v4() -> Self {
        NodeId(Uuid::new_v4())
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A freshly created node and its intrinsic size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeHandle {
    pub id: NodeId,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The narrow slice of the host document API the bridge relies on.
pub trait HostDocument: Send + Sync {
    /// Parse SVG markup into a new node named `name`.
    fn create_node_from_markup(&self, svg: &str, name: &str) -> Result<NodeHandle, HostError>;

    /// Center of the visible viewport in document coordinates.
    fn viewport_center(&self) -> Point;

    /// Move a node's top-left corner.
    fn move_node(&self, id: NodeId, position: Point) -> Result<(), HostError>;

    /// Make `id` the only selected node and scroll/zoom the view to it.
    fn set_viewport_selection(&self, id: NodeId) -> Result<(), HostError>;

    /// Show a non-blocking notification.
    fn notify(&self, message: &str, is_error: bool);

    /// Resize the plugin panel.
    fn resize_panel(&self, width: f64, height: f64);
}
