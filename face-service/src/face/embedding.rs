/// Number of dimensions in a placeholder embedding
pub const EMBEDDING_DIM: usize = 512;

/// Generate a deterministic embedding from raw image bytes
///
/// Chunks of the input are summed and folded into [-1, 1], then the vector is
/// normalised to unit length. Identical inputs always produce identical
/// embeddings. This is not a face embedding; it stands in for a real model.
pub fn placeholder_embedding(image_data: &[u8]) -> Vec<f32> {
    let mut embedding = vec![0.0f32; EMBEDDING_DIM];

    let chunk_size = (image_data.len() / EMBEDDING_DIM).max(1);
    for (i, chunk) in image_data
        .chunks(chunk_size)
        .take(EMBEDDING_DIM)
        .enumerate()
    {
        let sum: u32 = chunk.iter().map(|&b| b as u32).sum();
        embedding[i] = ((sum % 2000) as f32 / 1000.0) - 1.0;
    }

    let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
    if magnitude > 0.0 {
        for val in &mut embedding {
            *val /= magnitude;
        }
    }

    embedding
}
