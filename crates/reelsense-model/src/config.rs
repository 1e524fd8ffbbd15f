//! Serde specifications for artifact configuration files

use crate::loader::{ArtifactConfig, ArtifactSource, DeviceKind, RnnDimensions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Artifact source specification (for YAML/config files)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArtifactSpec {
    /// Local file path
    Local { path: PathBuf },

    /// Hugging Face Hub
    HuggingFace {
        repo_id: String,
        filename: String,
        revision: Option<String>,
    },
}

/// Device specification (for config files)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSpec {
    Cpu,
    Cuda { index: Option<usize> },
    Metal { index: Option<usize> },
}

impl Default for DeviceSpec {
    fn default() -> Self {
        Self::Cpu
    }
}

impl DeviceSpec {
    /// Convert to the runtime device kind
    pub fn to_device_kind(&self) -> DeviceKind {
        match self {
            DeviceSpec::Cpu => DeviceKind::Cpu,
            DeviceSpec::Cuda { index } => DeviceKind::Cuda(index.unwrap_or(0)),
            DeviceSpec::Metal { index } => DeviceKind::Metal(index.unwrap_or(0)),
        }
    }
}

impl ArtifactSpec {
    /// Convert to a loadable artifact configuration
    pub fn to_artifact_config(
        &self,
        device: DeviceKind,
        dimensions: RnnDimensions,
    ) -> ArtifactConfig {
        let source = match self {
            ArtifactSpec::Local { path } => ArtifactSource::LocalPath(path.clone()),
            ArtifactSpec::HuggingFace {
                repo_id,
                filename,
                revision,
            } => ArtifactSource::HuggingFace {
                repo_id: repo_id.clone(),
                revision: revision.clone(),
                filename: filename.clone(),
            },
        };

        ArtifactConfig {
            source,
            device,
            dimensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_spec_yaml() {
        let yaml = "path: ./models/imdb-rnn.safetensors";
        let spec: ArtifactSpec = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(spec, ArtifactSpec::Local { .. }));
    }

    #[test]
    fn test_hf_spec_yaml() {
        let yaml = r#"
repo_id: reelsense/imdb-rnn
filename: model.safetensors
"#;
        let spec: ArtifactSpec = serde_yaml::from_str(yaml).unwrap();
        if let ArtifactSpec::HuggingFace {
            repo_id,
            filename,
            revision,
        } = &spec
        {
            assert_eq!(repo_id, "reelsense/imdb-rnn");
            assert_eq!(filename, "model.safetensors");
            assert!(revision.is_none());
        } else {
            panic!("Expected HuggingFace spec");
        }
    }

    #[test]
    fn test_device_spec_yaml() {
        let spec: DeviceSpec = serde_yaml::from_str("cpu").unwrap();
        assert!(matches!(spec, DeviceSpec::Cpu));
        assert!(matches!(spec.to_device_kind(), DeviceKind::Cpu));

        let cuda = DeviceSpec::Cuda { index: Some(1) }.to_device_kind();
        assert!(matches!(cuda, DeviceKind::Cuda(1)));

        let metal = DeviceSpec::Metal { index: None }.to_device_kind();
        assert!(matches!(metal, DeviceKind::Metal(0)));
    }

    #[test]
    fn test_spec_to_artifact_config() {
        let spec: ArtifactSpec = serde_yaml::from_str(
            r#"
repo_id: reelsense/imdb-rnn
filename: model.safetensors
revision: v1
"#,
        )
        .unwrap();

        let config = spec.to_artifact_config(DeviceKind::Cpu, RnnDimensions::default());
        if let ArtifactSource::HuggingFace { revision, .. } = &config.source {
            assert_eq!(revision.as_deref(), Some("v1"));
        } else {
            panic!("Expected HuggingFace source");
        }
        assert_eq!(config.dimensions.vocab_size, 10_000);
    }
}
