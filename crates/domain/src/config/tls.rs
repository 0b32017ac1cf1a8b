use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    #[serde(default = "default_cert_path")]
    pub cert_path: String,

    #[serde(default = "default_key_path")]
    pub key_path: String,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: default_cert_path(),
            key_path: default_key_path(),
        }
    }
}

fn default_cert_path() -> String {
    "certs/cert.pem".to_string()
}

fn default_key_path() -> String {
    "certs/key.pem".to_string()
}
