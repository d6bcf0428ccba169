pub mod config;
pub mod encoder;
pub mod entropy;
pub mod error;
pub mod generate;
pub mod generator;
pub mod policy;

pub use config::{DEFAULT_LENGTH, DEFAULT_SALT, Requirements, ResolvedRequirements, resolve};
pub use encoder::{DigestEncoder, Encoder, Sha256Encoder, Sha512Encoder, default_encoder};
pub use entropy::{Entropy, SeedSource};
pub use error::{Result, SiftIdError};
pub use generator::Generator;
pub use policy::{CasePolicy, Composition, apply_case, apply_composition};

/// Deterministic ID for `input`; `None` uses the default requirements.
pub fn generate_static(input: &str, requirements: Option<Requirements>) -> Result<String> {
    generate::generate_static(input, &resolve(requirements))
}

/// Random ID; `None` uses the default requirements.
pub fn generate_random(requirements: Option<Requirements>) -> Result<String> {
    generate::generate_random(&resolve(requirements))
}
