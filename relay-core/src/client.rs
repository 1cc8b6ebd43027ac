use crate::errors::RelayError;
use crate::models::{ProxyRequest, ProxyResponse};
use async_trait::async_trait;
use log::{debug, trace};
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProxyFetch {
    async fn fetch(&self, request: &ProxyRequest) -> Result<ProxyResponse, RelayError>;
}

/// `ProxyFetch` over reqwest. No timeout is configured: a silent endpoint
/// holds the run for as long as the transport allows.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(proxy_url: &Option<String>) -> Result<ReqwestFetcher, RelayError> {
        let builder = reqwest::Client::builder();
        let proxy_builder = match proxy_url {
            Some(val) => {
                debug!("routing https through proxy {}", val);
                builder.proxy(reqwest::Proxy::https(val)?)
            }
            None => { builder }
        };

        Ok(ReqwestFetcher {
            client: proxy_builder.build()?,
        })
    }
}

#[async_trait]
impl ProxyFetch for ReqwestFetcher {
    async fn fetch(&self, request: &ProxyRequest) -> Result<ProxyResponse, RelayError> {
        let url = request.to_url()?;
        debug!("GET {}", url);

        let res = self.client.get(url).send().await?;
        trace!("Response: {:?} {}", res.version(), res.status());
        let status = res.status().as_u16();
        let headers = res.headers().clone();
        let body = res.text().await?;
        trace!("body:{}", &body);

        Ok(ProxyResponse {
            status,
            headers,
            body,
        })
    }
}
