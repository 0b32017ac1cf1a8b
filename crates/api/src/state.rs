use orbital_dns_application::use_cases::{AddZoneRecordUseCase, ResolveQueryUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub resolve_query: Arc<ResolveQueryUseCase>,
    pub add_zone_record: Arc<AddZoneRecordUseCase>,
}
