use crate::ports::{UpstreamForwarder, ZoneStore};
use orbital_dns_domain::{
    DnsAnswer, DnsClass, DnsQuery, DnsQuestion, DnsResponse, ForwardMode, RecordType,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Question types answered from the zone. Every other type is skipped
/// without forwarding and produces no answer.
pub const AUTHORITATIVE_TYPES: &[RecordType] = &[RecordType::AAAA];

/// Answers from the zone when it can, forwards upstream when it can't.
pub struct ResolveQueryUseCase {
    zone: Arc<dyn ZoneStore>,
    forwarder: Arc<dyn UpstreamForwarder>,
    forward_mode: ForwardMode,
}

impl ResolveQueryUseCase {
    pub fn new(zone: Arc<dyn ZoneStore>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self {
            zone,
            forwarder,
            forward_mode: ForwardMode::default(),
        }
    }

    pub fn with_forward_mode(mut self, forward_mode: ForwardMode) -> Self {
        self.forward_mode = forward_mode;
        self
    }

    pub fn forward_mode(&self) -> ForwardMode {
        self.forward_mode
    }

    /// Resolves every question of `query` into one authoritative response.
    ///
    /// Never fails: a miss with no usable upstream reply is an empty answer
    /// section, not an error.
    ///
    /// In [`ForwardMode::WholeQuery`] the first local miss forwards the whole
    /// original query once and its answers land at that position; later
    /// misses reuse that exchange. In [`ForwardMode::MissedOnly`] the missed
    /// questions are collected and forwarded together after the zone pass.
    pub async fn execute(&self, query: &DnsQuery) -> DnsResponse {
        let mut response = DnsResponse::authoritative_for(query);
        let mut whole_query_forwarded = false;
        let mut missed: Vec<DnsQuestion> = Vec::new();

        for question in &query.questions {
            if !AUTHORITATIVE_TYPES.contains(&question.record_type) {
                debug!(
                    domain = %question.name,
                    record_type = %question.record_type,
                    "Unsupported record type, skipping question"
                );
                continue;
            }

            if let Some(value) = self.zone.lookup(&question.name, question.record_type) {
                debug!(domain = %question.name, record_type = %question.record_type, "Zone hit");
                response.answers.push(DnsAnswer {
                    name: question.name.clone(),
                    class: DnsClass::IN,
                    ttl: value.ttl,
                    data: value.data,
                });
                continue;
            }

            debug!(domain = %question.name, record_type = %question.record_type, "Zone miss");
            match self.forward_mode {
                ForwardMode::WholeQuery => {
                    if !whole_query_forwarded {
                        whole_query_forwarded = true;
                        let answers = self.forward_answers(query).await;
                        response.answers.extend(answers);
                    }
                }
                ForwardMode::MissedOnly => missed.push(question.clone()),
            }
        }

        if !missed.is_empty() {
            let narrowed = query.with_questions(missed);
            let answers = self.forward_answers(&narrowed).await;
            response.answers.extend(answers);
        }

        response
    }

    async fn forward_answers(&self, query: &DnsQuery) -> Vec<DnsAnswer> {
        match self.forwarder.forward(query).await {
            Ok(upstream) => {
                debug!(
                    id = query.id,
                    answers = upstream.answers.len(),
                    rcode = %upstream.response_code,
                    "Upstream replied"
                );
                upstream.answers
            }
            Err(e) => {
                warn!(id = query.id, error = %e, "Forwarding failed, answering without upstream data");
                Vec::new()
            }
        }
    }
}
