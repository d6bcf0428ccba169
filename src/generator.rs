use crate::config::{Requirements, ResolvedRequirements, resolve};
use crate::error::Result;
use crate::generate;

/// Reusable handle bound to one set of resolved requirements.
///
/// Resolution happens once, in [`Generator::new`]. The generator holds no
/// other state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    requirements: ResolvedRequirements,
}

impl Generator {
    /// Create a generator, resolving `requirements` (or the defaults).
    pub fn new(requirements: Option<Requirements>) -> Self {
        Self {
            requirements: resolve(requirements),
        }
    }

    pub const fn requirements(&self) -> &ResolvedRequirements {
        &self.requirements
    }

    /// Same input, same ID.
    pub fn static_id(&self, input: &str) -> Result<String> {
        generate::generate_static(input, &self.requirements)
    }

    /// A new ID on every call.
    pub fn random_id(&self) -> Result<String> {
        generate::generate_random(&self.requirements)
    }
}

impl From<Requirements> for Generator {
    fn from(requirements: Requirements) -> Self {
        Self::new(Some(requirements))
    }
}

impl From<ResolvedRequirements> for Generator {
    fn from(requirements: ResolvedRequirements) -> Self {
        Self { requirements }
    }
}
