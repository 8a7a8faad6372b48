//! HTTP client for the config store
//!
//! Thin wrappers around GET/POST/PUT/DELETE on a caller-supplied URI. Writes
//! send the body as `application/json`. There is no retrying, no timeout and
//! no status checking: callers get the raw [`Response`] and sequence
//! dependent requests themselves.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response};

use super::Result;

#[derive(Debug, Clone, Default)]
pub struct ConfigClient {
    client: Client,
}

impl ConfigClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn build_fetch(&self, uri: &str) -> Result<Request> {
        Ok(self.client.get(uri).build()?)
    }

    pub fn build_create(&self, uri: &str, body: String) -> Result<Request> {
        self.build_write(Method::POST, uri, body)
    }

    pub fn build_replace(&self, uri: &str, body: String) -> Result<Request> {
        self.build_write(Method::PUT, uri, body)
    }

    pub fn build_delete(&self, uri: &str) -> Result<Request> {
        Ok(self.client.delete(uri).build()?)
    }

    fn build_write(&self, method: Method, uri: &str, body: String) -> Result<Request> {
        Ok(self
            .client
            .request(method, uri)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .build()?)
    }

    pub async fn fetch_config(&self, uri: &str) -> Result<Response> {
        self.send(self.build_fetch(uri)?).await
    }

    pub async fn create_config(&self, uri: &str, body: String) -> Result<Response> {
        self.send(self.build_create(uri, body)?).await
    }

    pub async fn replace_config(&self, uri: &str, body: String) -> Result<Response> {
        self.send(self.build_replace(uri, body)?).await
    }

    pub async fn delete_config(&self, uri: &str) -> Result<Response> {
        self.send(self.build_delete(uri)?).await
    }

    async fn send(&self, request: Request) -> Result<Response> {
        log::debug!("{} {}", request.method(), request.url());
        Ok(self.client.execute(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "http://localhost:8080/api/lighting/abc";

    #[test]
    fn test_fetch_is_get_without_body() {
        let request = ConfigClient::new().build_fetch(URI).unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(request.url().as_str(), URI);
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_create_posts_json() {
        let request = ConfigClient::new().build_create(URI, "{}".to_string()).unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_replace_puts_json() {
        let request = ConfigClient::new()
            .build_replace(URI, r#"{"id": "abc"}"#.to_string())
            .unwrap();
        assert_eq!(request.method(), &Method::PUT);
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_delete() {
        let request = ConfigClient::new().build_delete(URI).unwrap();
        assert_eq!(request.method(), &Method::DELETE);
    }

    #[test]
    fn test_bad_uri_is_an_error() {
        assert!(ConfigClient::new().build_fetch("not a uri").is_err());
    }
}
