//! Certificate loading for the HTTPS listener.

use orbital_dns_domain::DomainError;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::ServerConfig;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Builds a rustls server config from a PEM certificate chain and key,
/// advertising HTTP/2 and HTTP/1.1 over ALPN.
pub fn load_server_config(
    cert_path: impl AsRef<Path>,
    key_path: impl AsRef<Path>,
) -> Result<Arc<ServerConfig>, DomainError> {
    let cert_path = cert_path.as_ref();
    let key_path = key_path.as_ref();

    let certs = load_certs(cert_path)?;
    let key = load_private_key(key_path)?;

    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let mut config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(certs, key)
        .map_err(|e| DomainError::ConfigError(format!("Invalid certificate or key: {}", e)))?;
    config.alpn_protocols = vec![b"h2".to_vec(), b"http/1.1".to_vec()];

    info!(cert = %cert_path.display(), "TLS certificate loaded");
    Ok(Arc::new(config))
}

fn open(path: &Path) -> Result<BufReader<File>, DomainError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))
}

fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>, DomainError> {
    let mut reader = open(path)?;
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DomainError::ConfigError(format!("{}: {}", path.display(), e)))?;

    if certs.is_empty() {
        return Err(DomainError::ConfigError(format!(
            "{}: no certificates found",
            path.display()
        )));
    }
    Ok(certs)
}

fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>, DomainError> {
    let mut reader = open(path)?;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| DomainError::ConfigError(format!("{}: {}", path.display(), e)))?
        .ok_or_else(|| DomainError::ConfigError(format!("{}: no private key found", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_loads_self_signed_pair() {
        let generated = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
        let cert = write_temp(&generated.cert.pem());
        let key = write_temp(&generated.key_pair.serialize_pem());

        let config = load_server_config(cert.path(), key.path()).unwrap();
        assert_eq!(config.alpn_protocols[0], b"h2".to_vec());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_server_config("/nonexistent/cert.pem", "/nonexistent/key.pem");
        assert!(matches!(result, Err(DomainError::IoError(_))));
    }

    #[test]
    fn test_file_without_pem_blocks_is_rejected() {
        let cert = write_temp("not a certificate\n");
        let key = write_temp("not a key\n");

        let result = load_server_config(cert.path(), key.path());
        assert!(matches!(result, Err(DomainError::ConfigError(_))));
    }
}
