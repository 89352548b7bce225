//! Location from the caller's public IP.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::error_handling::LocationError;
use crate::geo::Geo;

use super::LocationResolver;

/// Resolves location by echoing the public IP and geo-locating it.
///
/// Two sequential calls: the IP echo service returns a bare address in plain
/// text, then the geo-IP service maps it to a `Geo`. Either call failing
/// fails the whole resolver; neither call is retried and no partial result
/// is produced.
pub struct PublicIpLocationResolver {
    client: Arc<reqwest::Client>,
    ipify_url: String,
    ip_api_base_url: String,
}

impl PublicIpLocationResolver {
    pub fn new(client: Arc<reqwest::Client>, ipify_url: String, ip_api_base_url: String) -> Self {
        PublicIpLocationResolver {
            client,
            ipify_url,
            ip_api_base_url,
        }
    }

    /// Asks the echo service for our public IP.
    ///
    /// The body is parsed as an `IpAddr` so that an HTML error page from a
    /// captive portal or proxy fails here instead of being sent to the
    /// geo-IP service as a nonsense path segment.
    async fn fetch_public_ip(&self) -> Result<IpAddr, LocationError> {
        let body = self
            .client
            .get(&self.ipify_url)
            .send()
            .await
            .map_err(|e| LocationError::IpLookupFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| LocationError::IpLookupFailed(e.to_string()))?
            .text()
            .await
            .map_err(|e| LocationError::IpLookupFailed(e.to_string()))?;

        body.trim()
            .parse()
            .map_err(|_| LocationError::IpLookupFailed(format!("not an IP address: {body:?}")))
    }

    /// Maps an IP to a location via the geo-IP service.
    async fn fetch_geo(&self, ip: IpAddr) -> Result<Geo, LocationError> {
        let url = format!("{}/json/{}", self.ip_api_base_url, ip);
        self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| LocationError::IpLookupFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| LocationError::IpLookupFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| LocationError::IpLookupFailed(e.to_string()))
    }
}

#[async_trait]
impl LocationResolver for PublicIpLocationResolver {
    fn name(&self) -> &'static str {
        "public-ip"
    }

    async fn resolve(&self) -> Result<Geo, LocationError> {
        let ip = self.fetch_public_ip().await?;
        debug!("public IP is {ip}");
        self.fetch_geo(ip).await
    }
}
