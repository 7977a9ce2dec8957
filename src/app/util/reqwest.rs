use reqwest::{header::HeaderMap, StatusCode};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum PostJsonError {
    #[error("request failed: {0}")]
    Send(String),
    #[error("upstream returned {code}: {body}")]
    Status { code: StatusCode, body: String },
    #[error("failed to read response body: {0}")]
    Read(String),
}

/// Posts `body` as json and returns the raw response text of a 2xx reply.
pub async fn post_json<T: Serialize + ?Sized>(
    client: &reqwest::Client,
    url: &str,
    headers: HeaderMap,
    body: &T,
) -> Result<String, PostJsonError> {
    let res = match client.post(url).headers(headers).json(body).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(PostJsonError::Send(e.to_string()));
        }
    };

    let code = res.status();

    match res.text().await {
        Ok(text) => match code.is_success() {
            true => Ok(text),
            false => {
                tracing::error!("post_json {} returned {}: {}", url, code, text);
                Err(PostJsonError::Status { code, body: text })
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(PostJsonError::Read(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_status_error_names_code_and_body() {
        let error = PostJsonError::Status {
            code: StatusCode::BAD_REQUEST,
            body: "API key not valid.".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "upstream returned 400 Bad Request: API key not valid."
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_send_error() {
        let client = reqwest::Client::new();

        let result = post_json(&client, "http://127.0.0.1:9/", HeaderMap::new(), &json!({})).await;

        assert_matches!(result, Err(PostJsonError::Send(_)));
    }
}
