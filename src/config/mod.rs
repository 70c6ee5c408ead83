/// Configuration module - run settings and their defaults
pub mod schema;

pub use schema::Config;
