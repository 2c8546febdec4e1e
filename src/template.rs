//! Building a node job batch from addon templates.

use serde::{Deserialize, Serialize};

use crate::{ChipType, NodeJobCommand, NodeJobInput, utils};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AddonTemplateKind {
    #[default]
    Default,
    Systemd,
}

/// An installable addon: the scripts a node agent runs for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonTemplate {
    pub name: String,
    #[serde(default)]
    pub kind: AddonTemplateKind,
    /// base64 encoded action script
    #[serde(default)]
    pub action: String,
    /// base64 encoded observe script
    #[serde(default)]
    pub observe: String,
    #[serde(default)]
    pub chip: ChipType,
}

/// One command per template, in template order.
pub fn build_node_job_input(
    templates: &[AddonTemplate],
    dispatch_time: i64,
) -> NodeJobInput {
    let commands = templates
        .iter()
        .map(|t| NodeJobCommand {
            addon: t.name.clone(),
            action: t.action.clone(),
            observe: t.observe.clone(),
            is_systemd: t.kind == AddonTemplateKind::Systemd,
            chip: t.chip.clone(),
        })
        .collect();
    NodeJobInput {
        commands,
        dispatch_time,
    }
}

pub fn dispatch_time_now() -> i64 {
    utils::time_secs()
}
