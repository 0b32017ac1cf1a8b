mod add_record;

pub use add_record::AddZoneRecordUseCase;
