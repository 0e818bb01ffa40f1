//! libsodium-compatible sealed box.
//!
//! X25519 key agreement with a per-message ephemeral key, XSalsa20-Poly1305
//! for the payload. The ephemeral secret lives inside `crypto_box` and is
//! zeroized when the call returns.

use crypto_box::aead::OsRng;
use crypto_box::PublicKey;
use tracing::trace;

use super::{RecipientKey, Sealer};
use crate::error::SealError;

/// Sealed-box backend backed by `crypto_box`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SealedBox;

impl Sealer for SealedBox {
    fn name(&self) -> &'static str {
        "sealed-box"
    }

    fn seal(&self, recipient: &RecipientKey, plaintext: &[u8]) -> Result<Vec<u8>, SealError> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let public = PublicKey::from(*recipient.as_bytes());
        let sealed = public
            .seal(&mut OsRng, plaintext)
            .map_err(|e| SealError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");
        Ok(sealed)
    }
}
