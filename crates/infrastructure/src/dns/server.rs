use crate::dns::wire::WireCodec;
use orbital_dns_application::use_cases::ResolveQueryUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Turns one raw query datagram into one raw reply.
#[derive(Clone)]
pub struct DnsRequestHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl DnsRequestHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when nothing should be sent back.
    pub async fn handle_datagram(&self, bytes: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let query = match WireCodec::decode_query(bytes) {
            Ok(query) => query,
            Err(e) => {
                warn!(client = %client, len = bytes.len(), error = %e, "Malformed DNS query");
                return WireCodec::format_error_reply(bytes);
            }
        };

        debug!(
            client = %client,
            id = query.id,
            questions = query.questions.len(),
            "DNS query received"
        );

        let response = self.use_case.execute(&query).await;

        match WireCodec::encode_response(&response) {
            Ok(reply) => Some(reply),
            Err(e) => {
                error!(client = %client, id = query.id, error = %e, "Failed to encode DNS response");
                None
            }
        }
    }
}
