use serde::{Deserialize, Serialize};

/// Messages passed from the picker UI to the host document.
///
/// Serialized as JSON objects tagged by `type`, e.g.
/// `{"type":"insert-icon","svg":"<svg…>","name":"home"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    InsertIcon { svg: String, name: String },
    Resize { width: f64, height: f64 },
    Notify { message: String },
}

impl PluginMessage {
    pub fn insert_icon(svg: impl Into<String>, name: impl Into<String>) -> Self {
        PluginMessage::InsertIcon {
            svg: svg.into(),
            name: name.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PluginMessage::InsertIcon { .. } => "insert-icon",
            PluginMessage::Resize { .. } => "resize",
            PluginMessage::Notify { .. } => "notify",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_icon_wire_format() {
        let msg = PluginMessage::insert_icon("<svg/>", "home");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["type"], "insert-icon");
        assert_eq!(json["svg"], "<svg/>");
        assert_eq!(json["name"], "home");
    }

    #[test]
    fn test_parse_resize() {
        let msg: PluginMessage =
            serde_json::from_str(r#"{"type":"resize","width":400,"height":600}"#).unwrap();

        assert_eq!(
            msg,
            PluginMessage::Resize {
                width: 400.0,
                height: 600.0
            }
        );
        assert_eq!(msg.kind(), "resize");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = serde_json::from_str::<PluginMessage>(r#"{"type":"delete-node"}"#);
        assert!(result.is_err());
    }
}
