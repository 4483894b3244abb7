//! Iconpick Host - The privileged side that mutates the design document.
//!
//! The picker never touches the document itself; it sends `PluginMessage`s
//! which `HostBridge` applies through the `HostDocument` capability.

pub mod bridge;
pub mod document;
pub mod error;
pub mod headless;

pub use bridge::{BridgeOutcome, HostBridge, DEFAULT_NODE_NAME};
pub use document::{HostDocument, NodeHandle, NodeId, Point};
pub use error::HostError;
pub use headless::{DocumentSnapshot, HeadlessDocument, Notification, SceneNode};
