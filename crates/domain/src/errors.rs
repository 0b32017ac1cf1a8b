use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport error talking to {server}: {message}")]
    TransportError { server: String, message: String },

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors caused by the caller's input rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::InvalidIpAddress(_)
                | DomainError::MissingField(_)
                | DomainError::InvalidDnsMessage(_)
        )
    }
}
