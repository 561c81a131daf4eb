pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod mappers;

pub use error::{WellnessError, WellnessResult};
pub use mappers::{DocumentCodec, decode_document, encode_document};
