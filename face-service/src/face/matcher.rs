/// Euclidean distance between two embeddings
/// For unit-length embeddings the result lies in [0.0, 2.0]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Embeddings must have same length");

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Map a distance between unit embeddings onto a 0-100 similarity percentage,
/// rounded to two decimals
pub fn similarity_percent(distance: f32) -> f32 {
    let similarity = ((1.0 - distance / 2.0) * 100.0).clamp(0.0, 100.0);
    (similarity * 100.0).round() / 100.0
}
