#![allow(dead_code)]
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use orbital_dns_api::{create_routes, AppState};
use orbital_dns_application::ports::{UpstreamForwarder, ZoneStore};
use orbital_dns_application::use_cases::{AddZoneRecordUseCase, ResolveQueryUseCase};
use orbital_dns_domain::{DnsAnswer, DnsQuery, DnsResponse, DomainError};
use orbital_dns_infrastructure::zone::InMemoryZoneStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// Answers every forwarded query with the same answers, or fails.
pub struct StubForwarder {
    answers: Option<Vec<DnsAnswer>>,
    calls: AtomicUsize,
}

impl StubForwarder {
    pub fn answering(answers: Vec<DnsAnswer>) -> Self {
        Self {
            answers: Some(answers),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            answers: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamForwarder for StubForwarder {
    async fn forward(&self, query: &DnsQuery) -> Result<DnsResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.answers {
            Some(answers) => {
                let mut response = DnsResponse::authoritative_for(query);
                response.answers = answers.clone();
                Ok(response)
            }
            None => Err(DomainError::TransportAllServersUnreachable),
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub zone: Arc<InMemoryZoneStore>,
    pub forwarder: Arc<StubForwarder>,
}

impl TestApp {
    pub fn new(forwarder: StubForwarder) -> Self {
        let zone = Arc::new(InMemoryZoneStore::new());
        let forwarder = Arc::new(forwarder);

        let state = AppState {
            resolve_query: Arc::new(ResolveQueryUseCase::new(zone.clone(), forwarder.clone())),
            add_zone_record: Arc::new(AddZoneRecordUseCase::new(zone.clone(), 300)),
        };

        Self {
            router: create_routes(state),
            zone,
            forwarder,
        }
    }

    pub fn with_record(self, domain: &str, ipv6: &str) -> Self {
        AddZoneRecordUseCase::new(self.zone.clone(), 300)
            .execute(domain, ipv6)
            .unwrap();
        self
    }

    pub fn zone_len(&self) -> usize {
        self.zone.len()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
