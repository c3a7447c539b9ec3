use crate::error::CommonError;
use serde::{Deserialize, Serialize};

/// Request to compare a reference image (by URL) against an uploaded image
///
/// Fields are optional on the wire so that an empty or partial body can be
/// answered with a validation error instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_image: Option<String>,
}

impl CompareRequest {
    /// Check field presence and URL scheme, returning `(image_url, base64_image)`
    ///
    /// Empty strings count as missing.
    pub fn validate(&self) -> Result<(&str, &str), CommonError> {
        let (Some(image_url), Some(base64_image)) =
            (present(&self.image_url), present(&self.base64_image))
        else {
            return Err(CommonError::MissingField(
                "imageUrl or base64Image".to_string(),
            ));
        };

        if !image_url.starts_with("http://") && !image_url.starts_with("https://") {
            return Err(CommonError::InvalidData("image URL format".to_string()));
        }

        Ok((image_url, base64_image))
    }
}

/// Request to detect a face in an uploaded image
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_image: Option<String>,
}

impl DetectRequest {
    pub fn validate(&self) -> Result<&str, CommonError> {
        present(&self.base64_image)
            .ok_or_else(|| CommonError::MissingField("base64Image".to_string()))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Qualitative bucket derived from a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Bucket a similarity percentage (0-100)
    pub fn from_similarity(similarity: f32) -> Self {
        if similarity >= 80.0 {
            Confidence::High
        } else if similarity >= 60.0 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Result of a face comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareResult {
    pub success: bool,
    #[serde(rename = "match")]
    pub is_match: bool,
    pub distance: f32,
    pub similarity: f32,
    pub threshold: f32,
    pub confidence: Confidence,
    pub processing_time_ms: u64,
}

/// Result of face detection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResult {
    pub face_found: bool,
    pub processing_time_ms: u64,
}

/// Readiness reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ready,
    Loading,
    Ok,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub timestamp: String,
    pub uptime: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Error body shared by every failing route
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorResponse {
    /// Failure body for the API routes: `success: false` with the same text
    /// in `error` and `message`
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: Some(false),
            message: Some(error.clone()),
            error,
            path: None,
        }
    }

    /// Body for requests that matched no route
    pub fn not_found(path: impl Into<String>) -> Self {
        Self {
            success: None,
            error: "Not Found".to_string(),
            message: Some("url not found".to_string()),
            path: Some(path.into()),
        }
    }
}
