use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppConfig {
    pub places_api_key: String,
    pub enrich_api_key: String,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub user_agent: String,
    /// Override for the places directory endpoint, used by tests and local stubs.
    pub places_base_url: Option<String>,
    /// Override for the enrichment directory endpoint, used by tests and local stubs.
    pub enrich_base_url: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("places_api_key", &"[redacted]")
            .field("enrich_api_key", &"[redacted]")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("places_base_url", &self.places_base_url)
            .field("enrich_base_url", &self.enrich_base_url)
            .finish()
    }
}
