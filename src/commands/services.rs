//! Service factory for building the HTTP client and release source.

use anyhow::Result;
use reqwest::Client;

use crate::{http::HttpClient, source::GoDevSource};

use super::config::Config;

const USER_AGENT: &str = "gorel-cli";

/// Build the HTTP client used for the feed request
pub fn build_http_client() -> Result<HttpClient> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(HttpClient::new(client))
}

/// Build the release source from configuration
pub fn build_source(config: &Config) -> Result<GoDevSource> {
    let http_client = build_http_client()?;
    Ok(GoDevSource::from_http_client(http_client, &config.url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::config::ListOptions;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn test_http_client_sends_user_agent_only() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/")
            .match_header("user-agent", "gorel-cli")
            .match_header("authorization", Matcher::Missing)
            .create_async()
            .await;

        let client = build_http_client().unwrap();
        let _ = client.inner().get(server.url()).send().await;

        mock.assert_async().await;
    }

    #[test]
    fn test_build_source_uses_config_url() {
        let mut config = Config::new(ListOptions::default());
        assert_eq!(build_source(&config).unwrap().url(), config.url);

        config.url = "http://127.0.0.1:9/dl".into();
        assert_eq!(build_source(&config).unwrap().url(), "http://127.0.0.1:9/dl");
    }
}
