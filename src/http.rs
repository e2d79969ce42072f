// Shared HTTP plumbing for upstream lookups.
// Every outbound call uses a fixed user agent and a 6 second timeout, no retries.

use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{PortfolioError, Result};

/// Total time budget for a single upstream request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);

/// User agent sent with every request.
pub const USER_AGENT_VALUE: &str = concat!("portfolio-site/", env!("CARGO_PKG_VERSION"));

/// Start a client builder with the shared user agent and timeout.
/// Callers add their own default headers before building.
pub fn client_builder(mut headers: HeaderMap) -> ClientBuilder {
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
}

/// Reject non-success responses.
pub fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PortfolioError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

/// Read a response body as UTF-8 text.
pub async fn text_body(response: Response) -> Result<String> {
    let bytes = response.bytes().await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// GET a URL, reject error statuses, and return the body as text.
pub async fn get_text<T: serde::Serialize + ?Sized>(
    client: &Client,
    url: &str,
    params: &T,
) -> Result<String> {
    let response = client.get(url).query(params).send().await?;
    text_body(ensure_success(response)?).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_text_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", USER_AGENT_VALUE))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let client = client_builder(HeaderMap::new()).build().unwrap();
        let body = get_text(&client, &format!("{}/page", server.uri()), &[("q", "1")])
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_builder(HeaderMap::new()).build().unwrap();
        let err = get_text(&client, &format!("{}/missing", server.uri()), &[("attempt", "1")])
            .await
            .unwrap_err();
        assert!(matches!(err, PortfolioError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_a_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
            .mount(&server)
            .await;

        let client = client_builder(HeaderMap::new()).build().unwrap();
        let err = get_text(&client, &server.uri(), &[("attempt", "1")]).await.unwrap_err();
        assert!(matches!(err, PortfolioError::Decode(_)));
    }
}
