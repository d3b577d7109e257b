//! Identity from a forwarded PEM client certificate.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

use crate::identity::{Credential, Identity, IdentityError, IdentityResolver};

/// Reads the first certificate of a PEM credential.
///
/// The common name comes from the certificate subject (empty when the
/// subject has none) and the fingerprint is the base64 SHA-256 of the DER.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientCertResolver;

impl IdentityResolver for ClientCertResolver {
    fn resolve(&self, credential: &Credential) -> Result<Option<Identity>, IdentityError> {
        if credential.is_empty() {
            return Ok(None);
        }

        let mut reader = credential.as_bytes();
        let der = rustls_pemfile::certs(&mut reader)
            .next()
            .ok_or(IdentityError::NoCertificate)??;

        let der_bytes: &[u8] = der.as_ref();

        let (_, cert) = x509_parser::parse_x509_certificate(der_bytes)
            .map_err(|e| IdentityError::Certificate(e.to_string()))?;

        let common_name = cert
            .subject()
            .iter_common_name()
            .next()
            .and_then(|cn| cn.as_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(Some(Identity {
            common_name,
            fingerprint: STANDARD.encode(Sha256::digest(der_bytes)),
        }))
    }
}
