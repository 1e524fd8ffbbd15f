//! Recurrent sentiment scorer backed by Candle
//!
//! Reimplements the pre-trained network the demo ships with: an embedding
//! layer, a single simple-RNN layer with ReLU activation, and a dense
//! sigmoid head producing one probability per review.

use crate::loader::{
    artifact_name, create_device, resolve_artifact_path, ArtifactConfig, RnnDimensions,
};
use crate::scorer::Scorer;
use async_trait::async_trait;
use candle_core::{DType, Device, Tensor};
use candle_nn::{embedding, linear, linear_no_bias, Embedding, Linear, Module, VarBuilder};
use reelsense_core::{Error, Result};
use reelsense_encoder::{PaddedReview, SEQ_LEN};

/// Scorer over the pre-trained recurrent network.
///
/// Weight layout in the safetensors artifact:
/// `embedding.weight`, `rnn.input.{weight,bias}`, `rnn.recurrent.weight`,
/// `head.{weight,bias}`.
pub struct RnnScorer {
    name: String,
    embedding: Embedding,
    input: Linear,
    recurrent: Linear,
    head: Linear,
    dimensions: RnnDimensions,
    device: Device,
}

impl RnnScorer {
    /// Load the scorer from an artifact configuration
    pub fn load(config: ArtifactConfig) -> Result<Self> {
        let weights_path = resolve_artifact_path(&config)?;
        let device = create_device(config.device)?;

        let tensors = candle_core::safetensors::load(&weights_path, &device).map_err(|e| {
            Error::model(format!(
                "failed to load safetensors {}: {e}",
                weights_path.display()
            ))
        })?;
        let vb = VarBuilder::from_tensors(tensors, DType::F32, &device);

        let scorer =
            Self::from_var_builder(vb, &config.dimensions, device, artifact_name(&weights_path))?;
        tracing::info!(
            model = %scorer.name,
            vocab_size = config.dimensions.vocab_size,
            hidden_dim = config.dimensions.hidden_dim,
            "loaded rnn scorer"
        );
        Ok(scorer)
    }

    /// Build the scorer directly from a `VarBuilder` (artifact weights or a
    /// freshly initialized `VarMap`)
    pub fn from_var_builder(
        vb: VarBuilder,
        dimensions: &RnnDimensions,
        device: Device,
        name: impl Into<String>,
    ) -> Result<Self> {
        let layers = || -> candle_core::Result<(Embedding, Linear, Linear, Linear)> {
            let embedding = embedding(
                dimensions.vocab_size,
                dimensions.embedding_dim,
                vb.pp("embedding"),
            )?;
            let input = linear(
                dimensions.embedding_dim,
                dimensions.hidden_dim,
                vb.pp("rnn.input"),
            )?;
            let recurrent = linear_no_bias(
                dimensions.hidden_dim,
                dimensions.hidden_dim,
                vb.pp("rnn.recurrent"),
            )?;
            let head = linear(dimensions.hidden_dim, 1, vb.pp("head"))?;
            Ok((embedding, input, recurrent, head))
        };
        let (embedding, input, recurrent, head) =
            layers().map_err(|e| Error::model(format!("failed to build rnn layers: {e}")))?;

        Ok(Self {
            name: name.into(),
            embedding,
            input,
            recurrent,
            head,
            dimensions: *dimensions,
            device,
        })
    }

    /// Get the network dimensions
    pub fn dimensions(&self) -> &RnnDimensions {
        &self.dimensions
    }

    /// Get the device the scorer runs on
    pub fn device(&self) -> &Device {
        &self.device
    }

    fn forward(&self, review: &PaddedReview) -> candle_core::Result<f32> {
        let indices = Tensor::new(review.as_slice(), &self.device)?.unsqueeze(0)?;
        let embedded = self.embedding.forward(&indices)?; // (1, SEQ_LEN, embedding_dim)

        let mut state = Tensor::zeros(
            (1, self.dimensions.hidden_dim),
            DType::F32,
            &self.device,
        )?;
        for step in 0..SEQ_LEN {
            let token = embedded.narrow(1, step, 1)?.squeeze(1)?; // (1, embedding_dim)
            state = (self.input.forward(&token)? + self.recurrent.forward(&state)?)?.relu()?;
        }

        let logit = self.head.forward(&state)?; // (1, 1)
        candle_nn::ops::sigmoid(&logit)?
            .squeeze(1)?
            .squeeze(0)?
            .to_scalar::<f32>()
    }
}

#[async_trait]
impl Scorer for RnnScorer {
    async fn score(&self, review: &PaddedReview) -> Result<f32> {
        self.forward(review)
            .map_err(|e| Error::model(format!("rnn forward pass failed: {e}")))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
