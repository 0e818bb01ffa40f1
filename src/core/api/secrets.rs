//! Repository secrets.
//!
//! Provisioning is three steps, each a precondition for the next:
//!
//! 1. fetch the repository's current public key and key id
//! 2. seal the value to that key
//! 3. upsert `{encrypted_value, key_id}` under the secret name
//!
//! The key is fetched on every call and never cached: a rotated key would
//! otherwise produce ciphertext the platform silently cannot open.

use tracing::debug;

use super::{Client, Request, Transport};
use crate::core::domain::{EncryptedSecret, RepositoryPublicKey};
use crate::core::seal::{seal_base64_with, SealedBox, Sealer};
use crate::core::validation::validate_secret_name;
use crate::error::{ApiError, Error, ProvisionError, Result};

impl<T: Transport> Client<T> {
    /// Get the public key secrets for `owner/repo` must be sealed to.
    pub fn get_public_key(&self, owner: &str, repo: &str) -> Result<RepositoryPublicKey> {
        let _span = self.span.enter();
        self.fetch_public_key(owner, repo).map_err(Error::from)
    }

    fn fetch_public_key(
        &self,
        owner: &str,
        repo: &str,
    ) -> std::result::Result<RepositoryPublicKey, ApiError> {
        debug!(owner, repo, "getting repository public key");
        let resource = format!("public key {}/{}", owner, repo);
        let request = Request::get(format!("/repos/{}/{}/actions/secrets/public-key", owner, repo));
        self.call(&resource, &request)
            .inspect_err(|e| debug!(owner, repo, error = %e, "error getting repository public key"))
    }

    /// Create or update the secret `name` in `owner/repo`.
    ///
    /// The value is sealed with [`SealedBox`]; it is never logged or sent in
    /// the clear.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an invalid name (before any request) and
    /// `ProvisionError` naming the step that failed otherwise.
    pub fn put_secret(&self, owner: &str, repo: &str, name: &str, value: &str) -> Result<()> {
        self.put_secret_with(&SealedBox, owner, repo, name, value)
    }

    /// Like [`put_secret`](Self::put_secret) with an explicit sealer.
    pub fn put_secret_with<S: Sealer + ?Sized>(
        &self,
        sealer: &S,
        owner: &str,
        repo: &str,
        name: &str,
        value: &str,
    ) -> Result<()> {
        let _span = self.span.enter();
        debug!(owner, repo, secret = name, sealer = sealer.name(), "creating or updating repository secret");

        validate_secret_name(name)?;
        let repository = format!("{}/{}", owner, repo);

        let key = self
            .fetch_public_key(owner, repo)
            .map_err(|source| ProvisionError::FetchKey {
                repository: repository.clone(),
                secret: name.to_string(),
                source,
            })?;

        let encrypted_value = seal_base64_with(sealer, &key.key, value.as_bytes())
            .inspect_err(|e| debug!(owner, repo, secret = name, error = %e, "error encrypting secret"))
            .map_err(|source| ProvisionError::Seal {
                repository: repository.clone(),
                secret: name.to_string(),
                source,
            })?;

        let body = EncryptedSecret {
            encrypted_value,
            key_id: key.key_id,
        };
        let resource = format!("secret {}/{}", repository, name);
        let request = Request::put(
            format!("/repos/{}/{}/actions/secrets/{}", owner, repo, name),
            serde_json::to_value(body)?,
        );

        // 201 on create, 204 on update; neither has a body worth reading
        self.send(&resource, &request)
            .inspect_err(|e| debug!(owner, repo, secret = name, error = %e, "error creating or updating repo secret"))
            .map_err(|source| ProvisionError::Submit {
                repository,
                secret: name.to_string(),
                source,
            })?;

        Ok(())
    }
}
