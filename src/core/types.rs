//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A git object id (commit, blob or tree SHA).
pub type Sha = String;

/// Opaque identifier of a repository public key.
pub type KeyId = String;

/// A secret name (e.g., DEPLOY_TOKEN).
pub type SecretName = String;

/// A base64-encoded sealed-box ciphertext.
pub type EncryptedValue = String;

/// A repository topic.
pub type Topic = String;
