pub mod config;
pub mod decompress;
pub mod error;
pub mod fixture;
pub mod output;
pub mod sampler;
pub mod wordlist;

pub use config::GeneratorConfig;
pub use error::Error;
pub use fixture::{Fixture, Sample, generate_file};
pub use sampler::Sampler;
pub use wordlist::WordSet;
