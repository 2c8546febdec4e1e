//! Progress of a dispatched batch on one node.
//!
//! The node agent reports the result of a batch as a `NodeJob` condition
//! whose reason is the job id. A condition older than the batch's dispatch
//! time belongs to an earlier dispatch and is ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    NodeJobInput,
    node::{ConditionStatus, NodeCondition},
    utils,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, strum::AsRefStr, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeJobPhase {
    #[default]
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl NodeJobPhase {
    pub fn is_end(&self) -> bool {
        matches!(self, NodeJobPhase::Succeeded | NodeJobPhase::Failed)
    }
}

/// Derives the phase of `input` from the node's job condition.
pub fn node_job_phase(
    node_name: &str,
    input: Option<&NodeJobInput>,
    condition: Option<&NodeCondition>,
) -> (NodeJobPhase, String) {
    let Some(input) = input.filter(|i| i.dispatch_time != 0) else {
        return (NodeJobPhase::Pending, String::new());
    };
    let Some(cond) = condition.filter(|c| input.dispatch_time <= c.last_transition_time.timestamp()) else {
        debug!(node = node_name, dispatch_time = input.dispatch_time, "node job has not reported yet");
        return (NodeJobPhase::Running, String::new());
    };

    if cond.status == ConditionStatus::True {
        let processed_at = utils::format_rfc3339_short(&cond.last_transition_time);
        info!(node = node_name, time = %processed_at, job = %cond.reason, "the addon job of node is successfully processed");
        (NodeJobPhase::Succeeded, format!("The Addon is processed at {}", processed_at))
    } else {
        (NodeJobPhase::Failed, format!("Failed to process Addon, message: {}", cond.message))
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn condition(
        status: ConditionStatus,
        at: i64,
    ) -> NodeCondition {
        NodeCondition {
            type_: "NodeJob".to_string(),
            status,
            reason: "job-a".to_string(),
            message: "exit status 1".to_string(),
            last_transition_time: Utc.timestamp_opt(at, 0).unwrap(),
        }
    }

    #[test]
    fn test_pending_without_input() {
        assert_eq!(node_job_phase("n", None, None), (NodeJobPhase::Pending, String::new()));
        let undispatched = NodeJobInput::new(0);
        let cond = condition(ConditionStatus::True, 10);
        assert_eq!(node_job_phase("n", Some(&undispatched), Some(&cond)).0, NodeJobPhase::Pending);
    }

    #[test]
    fn test_running() {
        let input = NodeJobInput::new(1700000000);
        assert_eq!(node_job_phase("n", Some(&input), None).0, NodeJobPhase::Running);
        let stale = condition(ConditionStatus::True, 1699999999);
        assert_eq!(node_job_phase("n", Some(&input), Some(&stale)).0, NodeJobPhase::Running);
    }

    #[test]
    fn test_succeeded() {
        let input = NodeJobInput::new(1700000000);
        let cond = condition(ConditionStatus::True, 1700000000);
        let (phase, message) = node_job_phase("n", Some(&input), Some(&cond));
        assert_eq!(phase, NodeJobPhase::Succeeded);
        assert_eq!(message, "The Addon is processed at 2023-11-14T22:13:20Z");
        assert!(phase.is_end());
    }

    #[test]
    fn test_failed() {
        let input = NodeJobInput::new(1700000000);
        let cond = condition(ConditionStatus::False, 1700000100);
        let (phase, message) = node_job_phase("n", Some(&input), Some(&cond));
        assert_eq!(phase, NodeJobPhase::Failed);
        assert_eq!(message, "Failed to process Addon, message: exit status 1");
        assert!(phase.is_end());
        assert!(!NodeJobPhase::Running.is_end());
    }
}
