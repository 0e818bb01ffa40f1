//! Sealed-box encryption for repository secrets.
//!
//! The platform stores secrets encrypted to a per-repository X25519 public
//! key. Values are sealed anonymously: each message gets a fresh ephemeral
//! keypair whose public half is prepended to the ciphertext, so only the
//! holder of the repository's private key can open it.
//!
//! ## Wire format
//!
//! ```text
//! ephemeral_pk (32) || xsalsa20poly1305(plaintext) (len + 16)
//! ```
//!
//! This is libsodium's `crypto_box_seal`, which is what the platform
//! expects. Keys and ciphertexts cross the API boundary as standard base64.
//!
//! ## Adding a New Sealer
//!
//! 1. Implement the `Sealer` trait
//! 2. Add the implementation in a new file next to `sealed_box.rs`
//! 3. Re-export from this module

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::SealError;

mod sealed_box;

pub use sealed_box::SealedBox;

/// Size of a recipient public key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of the Poly1305 authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Bytes a sealed box adds to the plaintext: ephemeral public key + tag.
pub const SEAL_OVERHEAD: usize = KEY_SIZE + TAG_SIZE;

/// A decoded recipient public key.
///
/// Always exactly [`KEY_SIZE`] bytes; construction fails otherwise, so a
/// sealer is never handed truncated or padded key material.
#[derive(Clone, PartialEq, Eq)]
pub struct RecipientKey([u8; KEY_SIZE]);

impl RecipientKey {
    /// Decode a base64 public key as returned by the platform.
    ///
    /// # Errors
    ///
    /// Returns `SealError::InvalidKey` if the input is not valid base64 or
    /// does not decode to exactly 32 bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, SealError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| SealError::InvalidKey(format!("invalid base64: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Build a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `SealError::InvalidKey` unless `bytes` is exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SealError> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| {
            SealError::InvalidKey(format!(
                "expected {} bytes, got {}",
                KEY_SIZE,
                bytes.len()
            ))
        })?;
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Standard base64 encoding of the key.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl fmt::Debug for RecipientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecipientKey")
            .field(&self.to_base64())
            .finish()
    }
}

/// Anonymous public-key encryption.
///
/// Implementations must be non-deterministic: sealing the same plaintext
/// twice yields different ciphertexts.
pub trait Sealer {
    /// Seal `plaintext` so that only the holder of the private half of
    /// `recipient` can open it.
    ///
    /// # Errors
    ///
    /// Returns `SealError::EncryptionFailed` if the primitive fails.
    fn seal(&self, recipient: &RecipientKey, plaintext: &[u8]) -> Result<Vec<u8>, SealError>;

    /// Sealer name for logs.
    fn name(&self) -> &'static str;
}

/// Seal `plaintext` for a base64 public key and return base64 ciphertext.
///
/// This is a convenience wrapper around `SealedBox::seal`.
///
/// # Errors
///
/// Returns `SealError::InvalidKey` for a malformed key and
/// `SealError::EncryptionFailed` if sealing fails.
pub fn seal_base64(public_key: &str, plaintext: &[u8]) -> Result<String, SealError> {
    seal_base64_with(&SealedBox, public_key, plaintext)
}

/// Like [`seal_base64`] with an explicit sealer.
pub fn seal_base64_with<S: Sealer + ?Sized>(
    sealer: &S,
    public_key: &str,
    plaintext: &[u8],
) -> Result<String, SealError> {
    let recipient = RecipientKey::from_base64(public_key)?;
    let sealed = sealer.seal(&recipient, plaintext)?;
    Ok(STANDARD.encode(sealed))
}
