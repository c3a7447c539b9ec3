use crate::error::ServiceError;
use axum::http::Uri;

/// Fallback for any path or method no route accepts
pub async fn not_found_handler(uri: Uri) -> ServiceError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    tracing::debug!("No route for {}", path);

    ServiceError::NotFound { path }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_keeps_path() {
        let err = not_found_handler(Uri::from_static("/unknown")).await;

        match err {
            ServiceError::NotFound { path } => assert_eq!(path, "/unknown"),
            e => panic!("Expected NotFound error, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_not_found_keeps_query() {
        let err = not_found_handler(Uri::from_static("/missing?x=1")).await;

        match err {
            ServiceError::NotFound { path } => assert_eq!(path, "/missing?x=1"),
            e => panic!("Expected NotFound error, got {:?}", e),
        }
    }
}
