use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::node::{AMD_GPU_RESOURCE, NVIDIA_GPU_RESOURCE};

/// Hardware target of a node job command.
///
/// `Any` is the wildcard and travels as the empty string, so a command
/// without a chip applies to every node. Tags this crate does not know are
/// kept in `Other` and match no node.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ChipType {
    #[default]
    Any,
    Amd,
    Nvidia,
    Other(String),
}

impl ChipType {
    pub fn is_any(&self) -> bool {
        matches!(self, ChipType::Any)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChipType::Any => "",
            ChipType::Amd => "amd",
            ChipType::Nvidia => "nvidia",
            ChipType::Other(tag) => tag,
        }
    }

    /// Whether a node exposing `gpu_resource` should run a command tagged with this chip.
    pub fn matches_gpu_resource(
        &self,
        gpu_resource: Option<&str>,
    ) -> bool {
        match self {
            ChipType::Any => true,
            ChipType::Amd => gpu_resource == Some(AMD_GPU_RESOURCE),
            ChipType::Nvidia => gpu_resource == Some(NVIDIA_GPU_RESOURCE),
            ChipType::Other(_) => false,
        }
    }
}

impl From<&str> for ChipType {
    fn from(tag: &str) -> Self {
        match tag {
            "" => ChipType::Any,
            "amd" => ChipType::Amd,
            "nvidia" => ChipType::Nvidia,
            other => ChipType::Other(other.to_string()),
        }
    }
}

impl From<String> for ChipType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "" | "amd" | "nvidia" => ChipType::from(tag.as_str()),
            _ => ChipType::Other(tag),
        }
    }
}

impl From<ChipType> for String {
    fn from(chip: ChipType) -> Self {
        match chip {
            ChipType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ChipType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ChipType::from(s))
    }
}

impl AsRef<str> for ChipType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ChipType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::ChipType;

    #[test]
    fn test_chip_wire_strings() {
        assert_eq!(serde_json::to_string(&ChipType::Any).unwrap(), r#""""#);
        assert_eq!(serde_json::to_string(&ChipType::Nvidia).unwrap(), r#""nvidia""#);
        assert_eq!(serde_json::from_str::<ChipType>(r#""""#).unwrap(), ChipType::Any);
        assert_eq!(serde_json::from_str::<ChipType>(r#""amd""#).unwrap(), ChipType::Amd);
        assert!(serde_json::from_str::<ChipType>("3").is_err());
    }

    #[test]
    fn test_unknown_chip_is_kept() {
        let chip = serde_json::from_str::<ChipType>(r#""intel""#).unwrap();
        assert_eq!(chip, ChipType::Other("intel".to_string()));
        assert_eq!(serde_json::to_string(&chip).unwrap(), r#""intel""#);
    }

    #[test]
    fn test_chip_from_str() {
        assert_eq!(ChipType::from_str("").unwrap(), ChipType::Any);
        assert_eq!(ChipType::from_str("amd").unwrap(), ChipType::Amd);
        assert_eq!(ChipType::from_str("tpu").unwrap(), ChipType::Other("tpu".to_string()));
        assert_eq!(ChipType::Nvidia.as_ref(), "nvidia");
        assert_eq!(ChipType::Other("tpu".to_string()).to_string(), "tpu");
    }

    #[test]
    fn test_chip_matches_gpu_resource() {
        assert!(ChipType::Any.matches_gpu_resource(None));
        assert!(ChipType::Any.matches_gpu_resource(Some("amd.com/gpu")));
        assert!(ChipType::Amd.matches_gpu_resource(Some("amd.com/gpu")));
        assert!(!ChipType::Amd.matches_gpu_resource(Some("nvidia.com/gpu")));
        assert!(ChipType::Nvidia.matches_gpu_resource(Some("nvidia.com/gpu")));
        assert!(!ChipType::Nvidia.matches_gpu_resource(None));
        assert!(!ChipType::Other("intel".to_string()).matches_gpu_resource(Some("amd.com/gpu")));
        assert!(!ChipType::Other("intel".to_string()).matches_gpu_resource(None));
    }
}
