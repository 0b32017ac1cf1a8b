pub mod doh;
pub mod health;
pub mod zones;

pub use health::health_check;
