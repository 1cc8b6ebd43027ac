use crate::errors::RelayError;
use reqwest::header::HeaderMap;
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://jbkfsvinitavzyflcuwg.supabase.co/functions/v1/tripo-file-proxy";
pub const DEFAULT_QUERY_URL: &str = "https://www.google.com/robots.txt";

/// 代理所需的唯一参数名
pub const URL_PARAM: &str = "url";

pub type QueryParams = BTreeMap<String, String>;

/// One GET against the proxy: the endpoint plus the query parameters forwarded to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyRequest {
    pub endpoint: String,
    pub params: QueryParams,
}

impl ProxyRequest {
    pub fn new(endpoint: &str, query_url: &str) -> ProxyRequest {
        let mut params = QueryParams::new();
        params.insert(String::from(URL_PARAM), String::from(query_url));
        ProxyRequest {
            endpoint: String::from(endpoint),
            params,
        }
    }

    /// Builds the wire URL, params serialized as `application/x-www-form-urlencoded`.
    pub fn to_url(&self) -> Result<Url, RelayError> {
        let url = Url::parse_with_params(&self.endpoint, self.params.iter())?;
        Ok(url)
    }
}

impl Default for ProxyRequest {
    fn default() -> Self {
        ProxyRequest::new(DEFAULT_ENDPOINT, DEFAULT_QUERY_URL)
    }
}

impl fmt::Display for ProxyRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} with params {:?}", self.endpoint, self.params)
    }
}

#[derive(Debug, Clone)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(u16),
    Failed(String),
}
