//! The node object the controller writes batches onto.
//!
//! Only the parts of a cluster node that node jobs touch are modelled:
//! labels, annotations, the GPU resource name and status conditions.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NODE_JOB_INPUT_ANNOTATION: &str = "primus-safe.node.job.input";
pub const JOB_ID_LABEL: &str = "primus-safe.job.id";
pub const JOB_TYPE_LABEL: &str = "primus-safe.job.type";
/// condition type the node agent reports job results under
pub const NODE_JOB_CONDITION: &str = "NodeJob";

pub const AMD_GPU_RESOURCE: &str = "amd.com/gpu";
pub const NVIDIA_GPU_RESOURCE: &str = "nvidia.com/gpu";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: ConditionStatus,
    /// job id the condition was reported for
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
    pub last_transition_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_resource_name: Option<String>,
    #[serde(default)]
    pub conditions: Vec<NodeCondition>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn label(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn annotation(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Id of the job currently holding the node under the default job id label, empty when idle.
    pub fn job_id(&self) -> &str {
        self.label(JOB_ID_LABEL).unwrap_or_default()
    }

    pub fn find_condition(
        &self,
        type_: &str,
        reason: &str,
    ) -> Option<&NodeCondition> {
        self.conditions.iter().find(|c| c.type_ == type_ && c.reason == reason)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_node_deserialize() {
        let node: Node = serde_json::from_value(json!({
            "name": "node-1",
            "labels": {"primus-safe.job.id": "job-a"},
            "gpuResourceName": "amd.com/gpu",
            "conditions": [{
                "type": "NodeJob",
                "status": "True",
                "reason": "job-a",
                "lastTransitionTime": "2023-11-14T22:13:20Z"
            }]
        }))
        .unwrap();

        assert_eq!(node.job_id(), "job-a");
        assert_eq!(node.gpu_resource_name.as_deref(), Some(AMD_GPU_RESOURCE));
        let cond = node.find_condition(NODE_JOB_CONDITION, "job-a").unwrap();
        assert_eq!(cond.status, ConditionStatus::True);
        assert_eq!(cond.last_transition_time.timestamp(), 1700000000);
        assert!(node.find_condition(NODE_JOB_CONDITION, "job-b").is_none());
    }

    #[test]
    fn test_idle_node() {
        let node = Node::new("node-1");
        assert_eq!(node.job_id(), "");
        assert_eq!(node.annotation(NODE_JOB_INPUT_ANNOTATION), None);
    }
}
