use orbital_dns_domain::{DnsAnswer, DnsResponse};
use orbital_dns_infrastructure::dns::WireCodec;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock upstream does with each query it receives.
#[derive(Clone)]
pub enum MockBehavior {
    /// Authoritative-looking reply with these answers and the query's id.
    Answer(Vec<DnsAnswer>),
    /// Valid reply carrying a different id.
    WrongId,
    /// Bytes that are not a DNS message.
    Garbage,
    /// Never replies.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = queries.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(reply) = Self::build_reply(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_reply(behavior: &MockBehavior, request: &[u8]) -> Option<Vec<u8>> {
        let query = WireCodec::decode_query(request).ok()?;

        match behavior {
            MockBehavior::Answer(answers) => {
                let mut response = DnsResponse::authoritative_for(&query);
                response.authoritative = false;
                response.answers = answers.clone();
                WireCodec::encode_response(&response).ok()
            }
            MockBehavior::WrongId => {
                let mut response = DnsResponse::authoritative_for(&query);
                response.id = query.id.wrapping_add(1);
                WireCodec::encode_response(&response).ok()
            }
            MockBehavior::Garbage => Some(vec![0xde, 0xad, 0xbe, 0xef]),
            MockBehavior::Silent => None,
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
