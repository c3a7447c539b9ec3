use crate::error::{ServiceError, ServiceResult};
use crate::face::embedding::placeholder_embedding;
use crate::face::matcher::{euclidean_distance, similarity_percent};
use common::{CompareResult, Confidence, DetectResult};

/// Recognition engine consumed by the route handlers
///
/// Implementations score raw image bytes. Timing is filled in by the caller,
/// so `processing_time_ms` in returned values is ignored.
pub trait FaceBackend: Send + Sync {
    /// Compare a reference image against a probe image
    fn compare(&self, reference: &[u8], probe: &[u8]) -> ServiceResult<CompareResult>;

    /// Detect whether an image contains a face
    fn detect(&self, image: &[u8]) -> ServiceResult<DetectResult>;
}

/// Deterministic scorer built on content-hash embeddings
pub struct PlaceholderBackend {
    threshold: f32,
}

impl PlaceholderBackend {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl FaceBackend for PlaceholderBackend {
    fn compare(&self, reference: &[u8], probe: &[u8]) -> ServiceResult<CompareResult> {
        if reference.is_empty() {
            return Err(ServiceError::Internal("Reference image is empty".to_string()));
        }
        if probe.is_empty() {
            return Err(ServiceError::Internal("Uploaded image is empty".to_string()));
        }

        let distance = euclidean_distance(
            &placeholder_embedding(reference),
            &placeholder_embedding(probe),
        );
        let similarity = similarity_percent(distance);

        tracing::debug!(distance, similarity, "Placeholder comparison");

        Ok(CompareResult {
            success: true,
            is_match: distance <= self.threshold,
            distance,
            similarity,
            threshold: self.threshold,
            confidence: Confidence::from_similarity(similarity),
            processing_time_ms: 0,
        })
    }

    fn detect(&self, image: &[u8]) -> ServiceResult<DetectResult> {
        Ok(DetectResult {
            face_found: !image.is_empty(),
            processing_time_ms: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_identical_images() {
        let backend = PlaceholderBackend::new(0.5);
        let result = backend.compare(b"same face", b"same face").unwrap();

        assert!(result.success);
        assert!(result.is_match);
        assert_eq!(result.distance, 0.0);
        assert_eq!(result.similarity, 100.0);
        assert_eq!(result.threshold, 0.5);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_compare_different_images() {
        let backend = PlaceholderBackend::new(0.5);
        let reference: Vec<u8> = (0..2048u32).map(|i| (i * 7 % 256) as u8).collect();
        let probe: Vec<u8> = (0..2048u32).map(|i| (i * 13 % 256) as u8).collect();

        let result = backend.compare(&reference, &probe).unwrap();

        assert!(result.distance > 0.0);
        assert!(result.similarity >= 0.0 && result.similarity <= 100.0);
        assert_eq!(result.is_match, result.distance <= 0.5);
        assert_eq!(
            result.confidence,
            Confidence::from_similarity(result.similarity)
        );
    }

    #[test]
    fn test_compare_threshold_controls_match() {
        let reference = b"reference image bytes";
        let probe = b"a different probe";

        let strict = PlaceholderBackend::new(0.0).compare(reference, probe).unwrap();
        let lenient = PlaceholderBackend::new(2.0).compare(reference, probe).unwrap();

        assert!(!strict.is_match);
        assert!(lenient.is_match);
        assert_eq!(strict.distance, lenient.distance);
    }

    #[test]
    fn test_compare_empty_image_is_internal_error() {
        let backend = PlaceholderBackend::new(0.5);

        let err = backend.compare(b"", b"probe").unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));

        let err = backend.compare(b"reference", b"").unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
    }

    #[test]
    fn test_detect() {
        let backend = PlaceholderBackend::new(0.5);

        assert!(backend.detect(b"test").unwrap().face_found);
        assert!(!backend.detect(b"").unwrap().face_found);
    }
}
