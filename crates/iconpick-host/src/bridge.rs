use std::sync::Arc;

use tokio::sync::mpsc;

use iconpick_core::{PluginMessage, ValidationError, Validator};

use crate::document::{HostDocument, NodeHandle, Point};
use crate::error::HostError;

/// Name given to inserted nodes when the request carries none.
pub const DEFAULT_NODE_NAME: &str = "Icon";

/// What the bridge did with a message.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeOutcome {
    Inserted(NodeHandle),
    InsertFailed(HostError),
    Resized { width: f64, height: f64 },
    Notified,
    Rejected(ValidationError),
}

/// Applies plugin messages to the host document.
///
/// Failures are reported to the user through `HostDocument::notify` and
/// never escape the bridge.
pub struct HostBridge<D: HostDocument> {
    document: Arc<D>,
}

impl<D: HostDocument> HostBridge<D> {
    pub fn new(document: Arc<D>) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Arc<D> {
        &self.document
    }

    /// Handle a single message.
    pub fn handle(&self, msg: PluginMessage) -> BridgeOutcome {
        if let Err(e) = Validator::validate_message(&msg) {
            tracing::warn!("Ignoring {} message: {}", msg.kind(), e);
            return BridgeOutcome::Rejected(e);
        }

        match msg {
            PluginMessage::InsertIcon { svg, name } => self.insert_icon(&svg, &name),
            PluginMessage::Resize { width, height } => {
                self.document.resize_panel(width, height);
                BridgeOutcome::Resized { width, height }
            }
            PluginMessage::Notify { message } => {
                self.document.notify(&message, false);
                BridgeOutcome::Notified
            }
        }
    }

    fn insert_icon(&self, svg: &str, name: &str) -> BridgeOutcome {
        match self.place_icon(svg, name) {
            Ok(node) => {
                let label = if name.is_empty() { "icon" } else { name };
                self.document.notify(&format!("Inserted: {}", label), false);
                BridgeOutcome::Inserted(node)
            }
            Err(e) => {
                self.document
                    .notify(&format!("Failed to insert icon: {}", e), true);
                BridgeOutcome::InsertFailed(e)
            }
        }
    }

    /// Create the node, center it in the viewport and select it.
    fn place_icon(&self, svg: &str, name: &str) -> Result<NodeHandle, HostError> {
        let name = if name.is_empty() {
            DEFAULT_NODE_NAME
        } else {
            name
        };
        let node = self.document.create_node_from_markup(svg, name)?;

        let center = self.document.viewport_center();
        let origin = Point::new(center.x - node.width / 2.0, center.y - node.height / 2.0);
        self.document.move_node(node.id, origin)?;
        self.document.set_viewport_selection(node.id)?;
        Ok(node)
    }

    /// Process messages until every sender is dropped.
    pub async fn run(self, mut rx: mpsc::Receiver<PluginMessage>) {
        while let Some(msg) = rx.recv().await {
            let kind = msg.kind();
            let outcome = self.handle(msg);
            tracing::debug!("Handled {} message: {:?}", kind, outcome);
        }
        tracing::info!("Plugin message channel closed, host bridge stopping");
    }
}
