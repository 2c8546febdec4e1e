//! Writing node job batches onto nodes.
//!
//! A node runs at most one job at a time. The dispatcher owns that rule:
//! the job id label on a node marks it as taken, and a batch for another
//! job is refused until the label is cleared.

use tracing::{info, warn};

use crate::{
    Config, NodeJobError, NodeJobInput, Result,
    extract::{Extraction, extract_node_job_input},
    node::Node,
    phase::{NodeJobPhase, node_job_phase},
    source::KeyedNode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The batch was written to the node.
    Dispatched,
    /// The node already carries this job; nothing was written.
    AlreadyDispatched,
}

#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: Config,
}

impl Dispatcher {
    pub fn new(config: Config) -> Self {
        Self {
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn job_id<'a>(
        &self,
        node: &'a Node,
    ) -> &'a str {
        node.label(&self.config.keys.job_id_label).unwrap_or_default()
    }

    /// Claims `node` for `job_id` and writes the encoded batch.
    pub fn dispatch(
        &self,
        node: &mut Node,
        job_id: &str,
        job_type: &str,
        input: &NodeJobInput,
    ) -> Result<DispatchOutcome> {
        let running = self.job_id(node);
        if running == job_id {
            return Ok(DispatchOutcome::AlreadyDispatched);
        } else if !running.is_empty() {
            warn!(node = %node.name, running, job = job_id, "another job is running, try later");
            return Err(NodeJobError::NodeBusy {
                node: node.name.clone(),
                running: running.to_string(),
            });
        }

        let raw = input.to_json()?;
        let keys = &self.config.keys;
        node.labels.insert(keys.job_id_label.clone(), job_id.to_string());
        node.labels.insert(keys.job_type_label.clone(), job_type.to_string());
        node.annotations.insert(keys.node_job_input_annotation.clone(), raw);
        info!(node = %node.name, job = job_id, commands = input.commands.len(), "dispatched node job");
        Ok(DispatchOutcome::Dispatched)
    }

    /// Releases `node` if it belongs to `job_id`. Returns whether anything was removed.
    pub fn clear(
        &self,
        node: &mut Node,
        job_id: &str,
    ) -> bool {
        if self.job_id(node) != job_id {
            return false;
        }
        let keys = &self.config.keys;
        node.labels.remove(&keys.job_id_label);
        node.labels.remove(&keys.job_type_label);
        node.annotations.remove(&keys.node_job_input_annotation);
        info!(node = %node.name, job = job_id, "cleared node job");
        true
    }

    /// `node` as seen through this dispatcher's keys.
    pub fn source<'a>(
        &'a self,
        node: &'a Node,
    ) -> KeyedNode<'a> {
        KeyedNode::new(node, &self.config.keys)
    }

    pub fn input_of(
        &self,
        node: &Node,
    ) -> Extraction {
        extract_node_job_input(&self.source(node))
    }

    pub fn phase_of(
        &self,
        node: &Node,
    ) -> (NodeJobPhase, String) {
        let job_id = self.job_id(node);
        let input = self.input_of(node).into_option();
        let condition = node.find_condition(&self.config.keys.node_job_condition, job_id);
        node_job_phase(&node.name, input.as_ref(), condition)
    }
}
