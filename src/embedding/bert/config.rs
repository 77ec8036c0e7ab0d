use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default BERT embedding dimension (`bert-base-uncased`).
pub const BERT_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default BERT token budget.
pub const BERT_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
/// Configuration for [`BertEmbedder`](super::BertEmbedder).
pub struct BertConfig {
    /// Checkpoint directory holding `config.json`, `model.safetensors`, `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens fed to the model; longer input is truncated.
    pub max_seq_len: usize,
    /// Output dimension. Must equal the checkpoint's hidden size.
    pub embedding_dim: usize,
    /// If true, run the model-free deterministic embedder.
    pub testing_stub: bool,
}

impl Default for BertConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: BERT_MAX_SEQ_LEN,
            embedding_dim: BERT_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl BertConfig {
    /// Creates a config for a checkpoint directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; deterministic bag-of-words vectors).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Overrides the token budget.
    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join("config.json")
    }

    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join("model.safetensors")
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join("tokenizer.json")
    }

    /// Validates sizes, and for non-stub mode that every checkpoint file is present.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.max_seq_len == 0 || self.max_seq_len > BERT_MAX_SEQ_LEN {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!(
                    "max_seq_len must be between 1 and {}, got {}",
                    BERT_MAX_SEQ_LEN, self.max_seq_len
                ),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        for path in [
            self.model_dir.clone(),
            self.config_path(),
            self.weights_path(),
            self.tokenizer_path(),
        ] {
            if !path.exists() {
                return Err(EmbeddingError::ModelNotFound { path });
            }
        }

        Ok(())
    }
}
