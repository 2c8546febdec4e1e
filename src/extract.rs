//! Reading a node job batch off an object.
//!
//! [`get_node_job_input`] collapses both "nothing written" and "written but
//! unreadable" into `None`. Callers that need to tell the two apart use
//! [`extract_node_job_input`].

use crate::{NodeJobError, NodeJobInput, Result, source::NodeJobSource};

/// Outcome of reading a node job batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The object carries no batch.
    Absent,
    /// The batch decoded successfully.
    Present(NodeJobInput),
    /// The object carries a batch that failed to decode.
    Malformed(String),
}

impl Extraction {
    pub fn is_absent(&self) -> bool {
        matches!(self, Extraction::Absent)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Extraction::Malformed(_))
    }

    pub fn into_option(self) -> Option<NodeJobInput> {
        match self {
            Extraction::Present(input) => Some(input),
            Extraction::Absent | Extraction::Malformed(_) => None,
        }
    }

    pub fn into_result(self) -> Result<Option<NodeJobInput>> {
        match self {
            Extraction::Absent => Ok(None),
            Extraction::Present(input) => Ok(Some(input)),
            Extraction::Malformed(reason) => Err(NodeJobError::Decode(reason)),
        }
    }
}

/// Decodes a raw batch string.
pub fn decode_raw(raw: &str) -> Extraction {
    if raw.is_empty() {
        return Extraction::Absent;
    }
    match serde_json::from_str::<NodeJobInput>(raw) {
        Ok(input) => Extraction::Present(input),
        Err(e) => Extraction::Malformed(e.to_string()),
    }
}

/// Returns the batch carried by `obj`, or `None` when it is missing or unreadable.
pub fn get_node_job_input<S: NodeJobSource + ?Sized>(obj: &S) -> Option<NodeJobInput> {
    decode_raw(obj.raw_node_job_input()).into_option()
}

/// Like [`get_node_job_input`] but keeps malformed input distinct from absence.
pub fn extract_node_job_input<S: NodeJobSource + ?Sized>(obj: &S) -> Extraction {
    decode_raw(obj.raw_node_job_input())
}
