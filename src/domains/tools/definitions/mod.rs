//! Tool definitions module.
//!
//! Every tool takes a single `message` string and returns a single string.
//! Each tool is defined in its own file and exposes an [`entry`] for the
//! registry table.
//!
//! [`entry`]: EchoTool::entry

pub mod echo;
pub mod family;

use schemars::JsonSchema;
use serde::Deserialize;

pub use echo::EchoTool;
pub use family::FamilyLookupTool;

/// Input shared by all string tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MessageParams {
    /// The text handed to the tool.
    #[schemars(description = "Input message for the tool")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_params_from_json() {
        let params: MessageParams = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(params.message, "hi");
    }

    #[test]
    fn test_message_params_requires_message() {
        assert!(serde_json::from_str::<MessageParams>("{}").is_err());
        assert!(serde_json::from_str::<MessageParams>(r#"{"message": 3}"#).is_err());
    }
}
