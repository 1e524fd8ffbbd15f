//! Artifact loading and device management for the Candle scorer

use candle_core::Device;
use hf_hub::{api::sync::Api, Repo, RepoType};
use reelsense_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for loading the sentiment model artifact
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    /// Source of the model weights
    pub source: ArtifactSource,

    /// Device to run inference on
    pub device: DeviceKind,

    /// Network dimensions the artifact was trained with
    pub dimensions: RnnDimensions,
}

/// Source location for model weights
#[derive(Debug, Clone)]
pub enum ArtifactSource {
    /// Load from local file system
    LocalPath(PathBuf),

    /// Download from Hugging Face Hub
    HuggingFace {
        repo_id: String,
        revision: Option<String>,
        filename: String,
    },
}

/// Device type for inference
#[derive(Debug, Clone, Copy)]
pub enum DeviceKind {
    /// CPU inference (always available)
    Cpu,
    /// CUDA GPU inference (if available)
    Cuda(usize), // GPU index
    /// Metal (Apple Silicon)
    Metal(usize),
}

/// Layer dimensions of the recurrent network.
///
/// These must match the artifact: the embedding table has `vocab_size` rows,
/// which bounds the token indices the encoder may produce.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RnnDimensions {
    /// Embedding table rows (corpus vocabulary cap plus sentinel indices)
    #[serde(default = "default_vocab_size")]
    pub vocab_size: usize,

    /// Embedding output width
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,

    /// Recurrent state width
    #[serde(default = "default_hidden_dim")]
    pub hidden_dim: usize,
}

fn default_vocab_size() -> usize {
    10_000
}

fn default_embedding_dim() -> usize {
    128
}

fn default_hidden_dim() -> usize {
    128
}

impl Default for RnnDimensions {
    fn default() -> Self {
        Self {
            vocab_size: default_vocab_size(),
            embedding_dim: default_embedding_dim(),
            hidden_dim: default_hidden_dim(),
        }
    }
}

impl ArtifactConfig {
    /// Create a new artifact configuration from a local path
    pub fn from_local(path: impl Into<PathBuf>) -> Self {
        Self {
            source: ArtifactSource::LocalPath(path.into()),
            device: DeviceKind::Cpu,
            dimensions: RnnDimensions::default(),
        }
    }

    /// Create a new artifact configuration from Hugging Face
    pub fn from_hf(repo_id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            source: ArtifactSource::HuggingFace {
                repo_id: repo_id.into(),
                revision: None,
                filename: filename.into(),
            },
            device: DeviceKind::Cpu,
            dimensions: RnnDimensions::default(),
        }
    }

    /// Set device
    pub fn with_device(mut self, device: DeviceKind) -> Self {
        self.device = device;
        self
    }

    /// Set network dimensions
    pub fn with_dimensions(mut self, dimensions: RnnDimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Set Hugging Face revision
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        if let ArtifactSource::HuggingFace {
            repo_id, filename, ..
        } = self.source
        {
            self.source = ArtifactSource::HuggingFace {
                repo_id,
                revision: Some(revision.into()),
                filename,
            };
        }
        self
    }
}

/// Resolve the artifact to a local weights path, downloading when sourced
/// from the Hub
pub fn resolve_artifact_path(config: &ArtifactConfig) -> Result<PathBuf> {
    match &config.source {
        ArtifactSource::LocalPath(path) => {
            if !path.exists() {
                return Err(Error::config(format!(
                    "model artifact not found: {}",
                    path.display()
                )));
            }
            Ok(path.clone())
        }
        ArtifactSource::HuggingFace {
            repo_id,
            revision,
            filename,
        } => {
            let api = Api::new()
                .map_err(|e| Error::config(format!("failed to initialize HF API: {e}")))?;

            let repo = api.repo(Repo::with_revision(
                repo_id.clone(),
                RepoType::Model,
                revision.clone().unwrap_or_else(|| "main".to_string()),
            ));

            let artifact_path = repo.get(filename).map_err(|e| {
                Error::config(format!("failed to download model artifact from HF: {e}"))
            })?;

            tracing::info!(%repo_id, %filename, "downloaded model artifact");
            Ok(artifact_path)
        }
    }
}

/// Create a Candle device from the configured kind
pub fn create_device(kind: DeviceKind) -> Result<Device> {
    match kind {
        DeviceKind::Cpu => Ok(Device::Cpu),
        DeviceKind::Cuda(index) => Device::new_cuda(index)
            .map_err(|e| Error::model(format!("failed to create CUDA device: {e}"))),
        DeviceKind::Metal(index) => Device::new_metal(index)
            .map_err(|e| Error::model(format!("failed to create Metal device: {e}"))),
    }
}

/// Derive a scorer name from the artifact file name
pub fn artifact_name(weights_path: &Path) -> String {
    weights_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("sentiment-rnn")
        .to_string()
}
