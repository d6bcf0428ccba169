use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::encoder::{Encoder, default_encoder};
use crate::policy::{CasePolicy, Composition};

pub const DEFAULT_LENGTH: usize = 64;

pub const DEFAULT_SALT: &str =
    r#"[156vs/d1ce5_35c=t+RF&^£$fDFS5RV45_;_31dfv1r4w5(}]})e6f1d1\5sdD@5we(fE",fe3s5EF]"#;

/// Partially specified ID requirements.
///
/// Every field may be left unset; [`Requirements::resolve`] fills the gaps
/// with defaults. An empty salt counts as unset unless `omit_salt` is true.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Requirements {
    pub length: Option<usize>,
    pub salt: Option<String>,
    pub omit_salt: bool,
    pub case: Option<CasePolicy>,
    pub composition: Option<Composition>,
    #[serde(skip)]
    pub encoder: Option<Arc<dyn Encoder>>,
}

impl Requirements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length(mut self, len: usize) -> Self {
        self.length = Some(len);
        self
    }

    pub fn salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Leave an unset or empty salt empty instead of falling back to
    /// [`DEFAULT_SALT`].
    pub fn omit_salt(mut self) -> Self {
        self.omit_salt = true;
        self
    }

    pub fn case(mut self, case: CasePolicy) -> Self {
        self.case = Some(case);
        self
    }

    pub fn composition(mut self, composition: Composition) -> Self {
        self.composition = Some(composition);
        self
    }

    pub fn encoder(mut self, encoder: impl Encoder + 'static) -> Self {
        self.encoder = Some(Arc::new(encoder));
        self
    }

    pub fn shared_encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        self.encoder = Some(encoder);
        self
    }

    /// Fill every unset field with its default.
    ///
    /// Never fails: a zero length, an empty salt or a missing encoder are
    /// all replaced rather than rejected.
    pub fn resolve(self) -> ResolvedRequirements {
        let length = match self.length {
            Some(len) if len > 0 => len,
            other => {
                tracing::debug!(requested = ?other, default = DEFAULT_LENGTH, "using default length");
                DEFAULT_LENGTH
            }
        };

        let salt = match self.salt {
            Some(salt) if !salt.is_empty() => salt,
            _ if self.omit_salt => String::new(),
            _ => {
                tracing::debug!("using default salt");
                DEFAULT_SALT.to_string()
            }
        };

        let encoder = self.encoder.unwrap_or_else(|| {
            tracing::debug!("using default sha512 encoder");
            default_encoder()
        });

        ResolvedRequirements {
            length,
            salt,
            case: self.case.unwrap_or_default(),
            composition: self.composition.unwrap_or_default(),
            encoder,
        }
    }
}

impl fmt::Debug for Requirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirements")
            .field("length", &self.length)
            .field("salt", &self.salt)
            .field("omit_salt", &self.omit_salt)
            .field("case", &self.case)
            .field("composition", &self.composition)
            .field("encoder", &self.encoder.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// Fully populated requirements, consumed read-only by the generator.
#[derive(Clone)]
pub struct ResolvedRequirements {
    length: usize,
    salt: String,
    case: CasePolicy,
    composition: Composition,
    encoder: Arc<dyn Encoder>,
}

impl ResolvedRequirements {
    pub const fn length(&self) -> usize {
        self.length
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub const fn case(&self) -> CasePolicy {
        self.case
    }

    pub const fn composition(&self) -> Composition {
        self.composition
    }

    pub fn encoder(&self) -> &dyn Encoder {
        &*self.encoder
    }
}

impl Default for ResolvedRequirements {
    fn default() -> Self {
        resolve(None)
    }
}

impl From<Requirements> for ResolvedRequirements {
    fn from(requirements: Requirements) -> Self {
        requirements.resolve()
    }
}

impl fmt::Debug for ResolvedRequirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedRequirements")
            .field("length", &self.length)
            .field("salt", &self.salt)
            .field("case", &self.case)
            .field("composition", &self.composition)
            .finish_non_exhaustive()
    }
}

/// Resolve optional requirements; `None` yields the built-in defaults.
pub fn resolve(candidate: Option<Requirements>) -> ResolvedRequirements {
    candidate.unwrap_or_default().resolve()
}
