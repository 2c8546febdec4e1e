use serde::{Deserialize, Serialize};

use crate::{
    NodeJobError, Result,
    model::{NodeJobCommand, null_as_default},
};

/// A batch of commands dispatched to one node agent.
///
/// Commands run in order. `dispatch_time` is unix seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeJobInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: Vec<NodeJobCommand>,
    #[serde(default)]
    pub dispatch_time: i64,
}

impl NodeJobInput {
    pub fn new(dispatch_time: i64) -> Self {
        Self {
            commands: Vec::new(),
            dispatch_time,
        }
    }

    pub fn with_command(
        mut self,
        command: NodeJobCommand,
    ) -> Self {
        self.commands.push(command);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str::<NodeJobInput>(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| NodeJobError::Encode(e.to_string()))
    }

    /// Commands that apply to a node exposing `gpu_resource`.
    pub fn commands_for_gpu<'a>(
        &'a self,
        gpu_resource: Option<&'a str>,
    ) -> impl Iterator<Item = &'a NodeJobCommand> + 'a {
        self.commands.iter().filter(move |cmd| cmd.chip.matches_gpu_resource(gpu_resource))
    }
}
