use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("proxy endpoint {endpoint} rejected: {source}")]
    Proxy {
        /// Endpoint as `host:port`; credentials never appear in errors.
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no usable volume figure in response from {url}")]
    MissingVolume { url: String },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("proxy pool cannot be empty")]
    EmptyProxyPool,
}
