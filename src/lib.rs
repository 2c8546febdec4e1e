//! # nodejob
//!
//! Batches of addon commands that a node-management controller hands to
//! node agents, and the plumbing around them.
//!
//! The controller encodes a [`NodeJobInput`] as JSON into an annotation on
//! the node. [`get_node_job_input`] reads it back, yielding `None` when the
//! annotation is missing or cannot be decoded.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nodejob::{Dispatcher, Node, build_node_job_input, dispatch_time_now, get_node_job_input};
//!
//! let input = build_node_job_input(&templates, dispatch_time_now());
//! let dispatcher = Dispatcher::default();
//! dispatcher.dispatch(&mut node, "job-a", "addon", &input)?;
//!
//! assert_eq!(get_node_job_input(&node), Some(input));
//! ```

mod config;
mod dispatcher;
mod error;
mod extract;
mod model;
pub mod node;
mod phase;
mod source;
mod template;
mod utils;

pub use config::{Config, KeysConfig};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use error::NodeJobError;
pub use extract::{Extraction, decode_raw, extract_node_job_input, get_node_job_input};
pub use model::*;
pub use node::Node;
pub use phase::{NodeJobPhase, node_job_phase};
pub use source::{KeyedNode, NodeJobSource};
pub use template::{AddonTemplate, AddonTemplateKind, build_node_job_input, dispatch_time_now};

/// Result type alias for nodejob operations.
pub type Result<T> = std::result::Result<T, NodeJobError>;
