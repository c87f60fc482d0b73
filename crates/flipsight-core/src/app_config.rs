#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub log_level: String,
    pub proxy_username: String,
    pub proxy_password: String,
    pub proxy_host: String,
    pub proxy_port: String,
    pub marketplace_base_url: String,
    pub demand_base_url: String,
    pub suggest_base_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub fetch_attempts: u32,
    pub fetch_retry_delay_secs: u64,
    pub demand_attempts: u32,
    pub demand_retry_delay_secs: u64,
    pub sweep_interval_secs: u64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("proxy_username", &"[redacted]")
            .field("proxy_password", &"[redacted]")
            .field("proxy_host", &self.proxy_host)
            .field("proxy_port", &self.proxy_port)
            .field("marketplace_base_url", &self.marketplace_base_url)
            .field("demand_base_url", &self.demand_base_url)
            .field("suggest_base_url", &self.suggest_base_url)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("fetch_attempts", &self.fetch_attempts)
            .field("fetch_retry_delay_secs", &self.fetch_retry_delay_secs)
            .field("demand_attempts", &self.demand_attempts)
            .field("demand_retry_delay_secs", &self.demand_retry_delay_secs)
            .field("sweep_interval_secs", &self.sweep_interval_secs)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
