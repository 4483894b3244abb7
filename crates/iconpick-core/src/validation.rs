use crate::error::ValidationError;
use crate::message::PluginMessage;

/// Validator for plugin messages arriving at the host.
pub struct Validator;

impl Validator {
    /// SVG markup must be present. Whether it parses is up to the host.
    pub fn validate_svg(svg: &str) -> Result<(), ValidationError> {
        if svg.is_empty() {
            return Err(ValidationError::EmptySvg);
        }
        Ok(())
    }

    /// Panel dimensions must be finite and positive.
    pub fn validate_size(width: f64, height: f64) -> Result<(), ValidationError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ValidationError::InvalidSize(width, height));
        }
        Ok(())
    }

    /// Validate a complete message.
    pub fn validate_message(msg: &PluginMessage) -> Result<(), ValidationError> {
        match msg {
            PluginMessage::InsertIcon { svg, .. } => Self::validate_svg(svg),
            PluginMessage::Resize { width, height } => Self::validate_size(*width, *height),
            PluginMessage::Notify { .. } => Ok(()),
        }
    }
}
