// src/core/net.rs
// Blocking HTTPS GET for the dataset's raw YAML files. One request per conference.

use reqwest::blocking::Client;

use crate::config::options::{FetchOptions, Target};
use crate::error::{Error, Result};

/// Where conference documents come from. The runner only talks to this, so tests can
/// feed documents from memory.
pub trait Source {
    fn fetch(&self, target: &Target) -> Result<String>;
}

pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(|source| Error::Http { url: opts.base_url.clone(), source })?;
        Ok(Self { client, base_url: opts.base_url.clone() })
    }
}

impl Source for HttpSource {
    fn fetch(&self, target: &Target) -> Result<String> {
        let url = target.url(&self.base_url);
        http_get(&self.client, &url)
    }
}

pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .map_err(|source| Error::Http { url: url.to_string(), source })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
    }
    resp.text().map_err(|source| Error::Http { url: url.to_string(), source })
}
