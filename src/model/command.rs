use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    model::{ChipType, is_false, null_as_default},
};

/// A single command for the node agent.
///
/// `action` and `observe` carry base64 encoded shell text. The observe
/// script reports success with a zero exit status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeJobCommand {
    /// addon the command belongs to
    pub addon: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub action: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub observe: String,
    /// install the action as a systemd service instead of running it once
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub is_systemd: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "ChipType::is_any")]
    pub chip: ChipType,
}

impl NodeJobCommand {
    pub fn new(addon: impl Into<String>) -> Self {
        Self {
            addon: addon.into(),
            ..Default::default()
        }
    }

    pub fn with_action(
        mut self,
        action: impl Into<String>,
    ) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_observe(
        mut self,
        observe: impl Into<String>,
    ) -> Self {
        self.observe = observe.into();
        self
    }

    pub fn with_systemd(
        mut self,
        is_systemd: bool,
    ) -> Self {
        self.is_systemd = is_systemd;
        self
    }

    pub fn with_chip(
        mut self,
        chip: ChipType,
    ) -> Self {
        self.chip = chip;
        self
    }

    /// Decoded action script, `None` when the command has no action.
    pub fn action_script(&self) -> Result<Option<String>> {
        decode_script(&self.action)
    }

    /// Decoded observe script, `None` when the command has no observe.
    pub fn observe_script(&self) -> Result<Option<String>> {
        decode_script(&self.observe)
    }
}

/// Encodes script text into the form carried by `action` and `observe`.
pub fn encode_script(script: &str) -> String {
    STANDARD.encode(script.as_bytes())
}

fn decode_script(payload: &str) -> Result<Option<String>> {
    if payload.is_empty() {
        return Ok(None);
    }
    let bytes = STANDARD.decode(payload)?;
    Ok(Some(String::from_utf8(bytes)?))
}
