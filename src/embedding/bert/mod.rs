//! BERT embedder (safetensors + tokenizer), with a model-free stub backend.
//!
//! The text embedding is the `[CLS]` token of the last hidden state. Use
//! [`BertConfig::stub`] for tests and local runs without model files.

/// BERT embedder configuration.
pub mod config;


pub use config::{BERT_EMBEDDING_DIM, BERT_MAX_SEQ_LEN, BertConfig};

use candle_core::{DType, Device, IndexOp, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as CheckpointConfig};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use super::EmbeddingProvider;
use super::device::{device_label, select_device};
use super::error::EmbeddingError;
use super::stub::hashed_bag_of_words;
use super::utils::load_tokenizer;

enum EmbedderBackend {
    Model {
        model: BertModel,
        tokenizer: Tokenizer,
    },
    Stub,
}

/// Text embedder backed by a BERT encoder (or the deterministic stub).
pub struct BertEmbedder {
    backend: EmbedderBackend,
    device: Device,
    config: BertConfig,
}

impl std::fmt::Debug for BertEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BertEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { .. } => format!("Model({:?})", self.device),
                    EmbedderBackend::Stub => format!("Stub({:?})", self.device),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl BertEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: BertConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        let device = select_device();
        debug!(?device, "Selected compute device for embedder");

        if config.testing_stub {
            warn!("Embedder running in STUB mode (no model loaded)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                device,
                config,
            });
        }

        let (model, tokenizer) = Self::load_model(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            device = device_label(&device),
            "BERT model loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model { model, tokenizer },
            device,
            config,
        })
    }

    /// Shorthand for `load(BertConfig::stub())`.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(BertConfig::stub())
    }

    fn load_model(
        config: &BertConfig,
        device: &Device,
    ) -> Result<(BertModel, Tokenizer), EmbeddingError> {
        let checkpoint_content = std::fs::read_to_string(config.config_path())?;
        let checkpoint: CheckpointConfig =
            serde_json::from_str(&checkpoint_content).map_err(|e| {
                EmbeddingError::ModelLoadFailed {
                    reason: format!("Failed to parse config.json: {}", e),
                }
            })?;

        if checkpoint.hidden_size != config.embedding_dim {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim, checkpoint.hidden_size
                ),
            });
        }

        // SAFETY: the weights file is not modified while the process holds the mapping.
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[config.weights_path()], DType::F32, device)
        }
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("Failed to map safetensors: {}", e),
        })?;

        // Pretraining checkpoints nest the encoder under `bert.`; bare exports do not.
        let vb = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            vb.pp("bert")
        } else {
            vb
        };

        let model =
            BertModel::load(vb, &checkpoint).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            })?;

        let tokenizer = load_tokenizer(&config.tokenizer_path(), config.max_seq_len).map_err(
            |e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            },
        )?;

        Ok((model, tokenizer))
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &BertModel,
        tokenizer: &Tokenizer,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let len = encoding.get_ids().len().min(self.config.max_seq_len);
        if len == 0 {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = len,
            "Generating embedding (BERT forward pass)"
        );

        let input_ids = Tensor::new(&encoding.get_ids()[..len], &self.device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(&encoding.get_type_ids()[..len], &self.device)?.unsqueeze(0)?;
        let attention_mask =
            Tensor::new(&encoding.get_attention_mask()[..len], &self.device)?.unsqueeze(0)?;

        // hidden_states: [1, seq_len, hidden_size]
        let hidden_states = model
            .forward(&input_ids, &type_ids, Some(&attention_mask))
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("BERT forward pass failed: {}", e),
            })?;

        let cls = hidden_states
            .i((0, 0))?
            .to_dtype(DType::F32)?
            .to_vec1::<f32>()?;

        Ok(cls)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }
}

impl EmbeddingProvider for BertEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model { model, tokenizer } => {
                self.embed_with_model(text, model, tokenizer)
            }
            EmbedderBackend::Stub => {
                debug!(text_len = text.len(), "Generating stub embedding");
                Ok(hashed_bag_of_words(text, self.config.embedding_dim))
            }
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn is_stub(&self) -> bool {
        BertEmbedder::is_stub(self)
    }

    fn device_label(&self) -> &'static str {
        device_label(&self.device)
    }
}
