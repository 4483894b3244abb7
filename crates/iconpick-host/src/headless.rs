use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::document::{HostDocument, NodeHandle, NodeId, Point};
use crate::error::HostError;

/// Panel size the plugin is opened with.
pub const DEFAULT_PANEL_SIZE: (f64, f64) = (360.0, 520.0);

/// A node placed in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SceneNode {
    fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub is_error: bool,
}

/// Serializable view of the whole document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSnapshot {
    pub nodes: Vec<SceneNode>,
    pub selection: Vec<NodeId>,
    pub notifications: Vec<Notification>,
    pub viewport_center: Point,
    pub panel_width: f64,
    pub panel_height: f64,
}

#[derive(Debug)]
struct Scene {
    nodes: Vec<SceneNode>,
    selection: Vec<NodeId>,
    notifications: Vec<Notification>,
    viewport_center: Point,
    panel: (f64, f64),
}

/// In-process document: SVG is parsed with `usvg`, nodes live in memory.
#[derive(Debug)]
pub struct HeadlessDocument {
    scene: RwLock<Scene>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::with_viewport_center(Point::default())
    }

    pub fn with_viewport_center(center: Point) -> Self {
        Self {
            scene: RwLock::new(Scene {
                nodes: Vec::new(),
                selection: Vec::new(),
                notifications: Vec::new(),
                viewport_center: center,
                panel: DEFAULT_PANEL_SIZE,
            }),
        }
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let scene = self.scene.read().unwrap_or_else(PoisonError::into_inner);
        DocumentSnapshot {
            nodes: scene.nodes.clone(),
            selection: scene.selection.clone(),
            notifications: scene.notifications.clone(),
            viewport_center: scene.viewport_center,
            panel_width: scene.panel.0,
            panel_height: scene.panel.1,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<SceneNode> {
        let scene = self.scene.read().unwrap_or_else(PoisonError::into_inner);
        scene.nodes.iter().find(|n| n.id == id).cloned()
    }

    pub fn selection(&self) -> Vec<NodeId> {
        let scene = self.scene.read().unwrap_or_else(PoisonError::into_inner);
        scene.selection.clone()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        let scene = self.scene.read().unwrap_or_else(PoisonError::into_inner);
        scene.notifications.clone()
    }
}

impl HostDocument for HeadlessDocument {
    fn create_node_from_markup(&self, svg: &str, name: &str) -> Result<NodeHandle, HostError> {
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default())
            .map_err(|e| HostError::InvalidSvg(e.to_string()))?;
        let size = tree.size();

        let node = SceneNode {
            id: NodeId::new_v4(),
            name: name.to_string(),
            x: 0.0,
            y: 0.0,
            width: f64::from(size.width()),
            height: f64::from(size.height()),
        };
        let handle = NodeHandle {
            id: node.id,
            width: node.width,
            height: node.height,
        };

        let mut scene = self.scene.write().unwrap_or_else(PoisonError::into_inner);
        scene.nodes.push(node);
        Ok(handle)
    }

    fn viewport_center(&self) -> Point {
        let scene = self.scene.read().unwrap_or_else(PoisonError::into_inner);
        scene.viewport_center
    }

    fn move_node(&self, id: NodeId, position: Point) -> Result<(), HostError> {
        let mut scene = self.scene.write().unwrap_or_else(PoisonError::into_inner);
        let node = scene
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(HostError::UnknownNode(id))?;
        node.x = position.x;
        node.y = position.y;
        Ok(())
    }

    fn set_viewport_selection(&self, id: NodeId) -> Result<(), HostError> {
        let mut scene = self.scene.write().unwrap_or_else(PoisonError::into_inner);
        let center = scene
            .nodes
            .iter()
            .find(|n| n.id == id)
            .map(SceneNode::center)
            .ok_or(HostError::UnknownNode(id))?;
        scene.selection = vec![id];
        scene.viewport_center = center;
        Ok(())
    }

    fn notify(&self, message: &str, is_error: bool) {
        if is_error {
            tracing::warn!("{}", message);
        } else {
            tracing::info!("{}", message);
        }
        let mut scene = self.scene.write().unwrap_or_else(PoisonError::into_inner);
        scene.notifications.push(Notification {
            message: message.to_string(),
            is_error,
        });
    }

    fn resize_panel(&self, width: f64, height: f64) {
        let mut scene = self.scene.write().unwrap_or_else(PoisonError::into_inner);
        scene.panel = (width, height);
    }
}
