//! Fetch-with-synthetic-fallback
//!
//! Every upstream read goes through `fetch_or_synthesize`: the live result
//! when the source answers with a well-formed body, otherwise the output of
//! the supplied generator. The caller never sees the failure.

use std::future::Future;

use crate::external::ExternalError;

pub async fn fetch_or_synthesize<T, F, G>(operation: &str, fetch: F, synthesize: G) -> T
where
    F: Future<Output = Result<T, ExternalError>>,
    G: FnOnce() -> T,
{
    match fetch.await {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!("{} unavailable, serving synthetic data: {}", operation, error);
            synthesize()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_live_value_passes_through() {
        let value = fetch_or_synthesize("test", async { Ok(7) }, || 0).await;
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_failure_uses_generator() {
        let failing = async {
            Err(ExternalError::InvalidUrl {
                upstream: "test",
                detail: "unreachable".to_string(),
            })
        };
        let value: Vec<u8> = fetch_or_synthesize("test", failing, || vec![1, 2, 3]).await;
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_generator_not_called_on_success() {
        let mut called = false;
        let _ = fetch_or_synthesize("test", async { Ok(1) }, || {
            called = true;
            0
        })
        .await;
        assert!(!called);
    }
}
