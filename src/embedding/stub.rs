//! Model-free embedding used when no checkpoint is configured.
//!
//! Each lowercase alphanumeric token is hashed (BLAKE3) into one of `dim`
//! buckets and counted, then the vector is L2-normalized. Vectors are
//! non-negative, so cosine similarity between two stub embeddings lies in
//! `[0, 1]`, and texts sharing vocabulary score higher than unrelated ones.

use super::utils::l2_normalize;

/// Embeds `text` into a deterministic `dim`-sized vector.
///
/// Text without any alphanumeric token maps to the unit vector on bucket 0.
pub fn hashed_bag_of_words(text: &str, dim: usize) -> Vec<f32> {
    let mut embedding = vec![0.0f32; dim];
    if dim == 0 {
        return embedding;
    }

    let lowered = text.to_lowercase();
    let mut tokens = 0usize;
    for token in lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        embedding[bucket(token, dim)] += 1.0;
        tokens += 1;
    }

    if tokens == 0 {
        embedding[0] = 1.0;
        return embedding;
    }

    l2_normalize(&mut embedding);
    embedding
}

fn bucket(token: &str, dim: usize) -> usize {
    let hash = blake3::hash(token.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    (u64::from_le_bytes(bytes) % dim as u64) as usize
}
