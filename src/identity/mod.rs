//! Client identity resolution.
//!
//! # Data Flow
//! ```text
//! Protocol layer extracts credential bytes (e.g. forwarded client cert)
//!     → IdentityResolver::resolve
//!     → Ok(None)            no credential presented
//!     → Ok(Some(Identity))  credential understood
//!     → Err(IdentityError)  credential present but malformed
//! ```
//!
//! # Design Decisions
//! - Resolution is a trait so the router never depends on a credential format
//! - A missing credential is anonymous access, not an error
//! - No signature or chain validation; that belongs to the TLS terminator

pub mod certificate;

use thiserror::Error;

pub use certificate::ClientCertResolver;

/// Name shown for requests without an identity.
pub const ANONYMOUS: &str = "anonymous";

/// Opaque credential presented with a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential(Vec<u8>);

impl Credential {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// A resolved client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Subject common name from the client certificate.
    pub common_name: String,
    /// Base64 SHA-256 of the certificate DER; stable per client.
    pub fingerprint: String,
}

/// Display name for an optional identity.
pub fn display_name(identity: Option<&Identity>) -> &str {
    identity.map_or(ANONYMOUS, |i| i.common_name.as_str())
}

/// Errors raised while resolving a credential.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Credential present but contains no PEM certificate.
    #[error("credential contains no certificate")]
    NoCertificate,

    /// PEM framing could not be read.
    #[error("malformed PEM credential: {0}")]
    Pem(#[from] std::io::Error),

    /// DER body is not a valid X.509 certificate.
    #[error("malformed certificate: {0}")]
    Certificate(String),
}

/// Turns request credentials into identities.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, credential: &Credential) -> Result<Option<Identity>, IdentityError>;
}

/// Resolver that ignores credentials entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl IdentityResolver for Anonymous {
    fn resolve(&self, _credential: &Credential) -> Result<Option<Identity>, IdentityError> {
        Ok(None)
    }
}
