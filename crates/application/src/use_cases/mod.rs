pub mod dns;
pub mod zone;

pub use dns::{ResolveQueryUseCase, AUTHORITATIVE_TYPES};
pub use zone::AddZoneRecordUseCase;
