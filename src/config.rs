use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    Result,
    node::{JOB_ID_LABEL, JOB_TYPE_LABEL, NODE_JOB_CONDITION, NODE_JOB_INPUT_ANNOTATION},
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// object keys node jobs are written under
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeysConfig {
    /// annotation holding the encoded batch
    pub node_job_input_annotation: String,
    /// label holding the id of the job that owns the node
    pub job_id_label: String,
    pub job_type_label: String,
    /// condition type the node agent reports results under
    pub node_job_condition: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            node_job_input_annotation: NODE_JOB_INPUT_ANNOTATION.to_string(),
            job_id_label: JOB_ID_LABEL.to_string(),
            job_type_label: JOB_TYPE_LABEL.to_string(),
            node_job_condition: NODE_JOB_CONDITION.to_string(),
        }
    }
}

impl Config {
    pub fn create<T: AsRef<Path>>(path: T) -> Result<Self> {
        let data = fs::read_to_string(path.as_ref())?;

        Self::load_from_str(data.as_str())
    }

    pub fn load_from_str(toml_str: &str) -> Result<Self> {
        let config = toml::from_str::<Config>(toml_str)?;
        Ok(config)
    }
}
