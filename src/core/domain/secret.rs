//! Repository secret types.
//!
//! Plaintext never appears here: the platform only ever sees sealed values.

use serde::{Deserialize, Serialize};

use crate::core::types::{EncryptedValue, KeyId};

/// A repository's current secret-encryption public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPublicKey {
    /// Identifier to send back with anything sealed to `key`.
    pub key_id: KeyId,
    /// Base64 X25519 public key.
    pub key: String,
}

/// A sealed secret ready for submission, keyed by name in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedSecret {
    pub encrypted_value: EncryptedValue,
    pub key_id: KeyId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_deserializes() {
        let key: RepositoryPublicKey = serde_json::from_value(serde_json::json!({
            "key_id": "568250167242549743",
            "key": "hBT5WZEj8ZoOv6TYJsfWq7MxTEQopZO5/IT3ZCVQPzs=",
        }))
        .unwrap();
        assert_eq!(key.key_id, "568250167242549743");
    }

    #[test]
    fn test_encrypted_secret_body() {
        let body = serde_json::to_value(EncryptedSecret {
            encrypted_value: "c2VhbGVk".into(),
            key_id: "568250167242549743".into(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "encrypted_value": "c2VhbGVk",
                "key_id": "568250167242549743",
            })
        );
    }
}
