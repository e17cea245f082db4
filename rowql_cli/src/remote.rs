use anyhow::{Context, bail};
use reqwest::blocking::Client;
use rowql_core::types::ResultSet;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct QueryRequest<'a> {
    sql: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Sends queries to a running rowql_server.
pub struct RemoteClient {
    base_url: String,
    http: Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn query(&self, sql: &str) -> anyhow::Result<ResultSet> {
        let url = format!("{}/query", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&QueryRequest { sql })
            .send()
            .with_context(|| format!("failed to reach {url}"))?;

        let status = resp.status();
        if status.is_success() {
            return resp.json::<ResultSet>().context("bad response body");
        }
        match resp.json::<ErrorBody>() {
            Ok(body) => bail!("{}", body.error),
            Err(_) => bail!("server returned {status}"),
        }
    }
}
