use crate::{
    KeysConfig,
    node::{NODE_JOB_INPUT_ANNOTATION, Node},
};

/// Locates the raw encoded node job batch on an object.
///
/// Implementations return an empty string when the object carries no batch.
pub trait NodeJobSource {
    fn raw_node_job_input(&self) -> &str;
}

impl NodeJobSource for Node {
    fn raw_node_job_input(&self) -> &str {
        self.annotation(NODE_JOB_INPUT_ANNOTATION).unwrap_or_default()
    }
}

/// A node read through configured keys instead of the defaults.
#[derive(Debug, Clone, Copy)]
pub struct KeyedNode<'a> {
    pub node: &'a Node,
    pub keys: &'a KeysConfig,
}

impl<'a> KeyedNode<'a> {
    pub fn new(
        node: &'a Node,
        keys: &'a KeysConfig,
    ) -> Self {
        Self {
            node,
            keys,
        }
    }
}

impl NodeJobSource for KeyedNode<'_> {
    fn raw_node_job_input(&self) -> &str {
        self.node.annotation(&self.keys.node_job_input_annotation).unwrap_or_default()
    }
}

impl NodeJobSource for str {
    fn raw_node_job_input(&self) -> &str {
        self
    }
}

impl NodeJobSource for String {
    fn raw_node_job_input(&self) -> &str {
        self.as_str()
    }
}

impl<T: NodeJobSource + ?Sized> NodeJobSource for &T {
    fn raw_node_job_input(&self) -> &str {
        (**self).raw_node_job_input()
    }
}
