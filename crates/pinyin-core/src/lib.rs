pub mod dict;
pub mod key;
pub mod settings;
pub mod unicode;

pub use dict::{CandidateDictionary, DictError, Tier};
