//! ghkit - provision GitHub repositories from scripts.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── repo          # Look up / create repositories
//! │   ├── branch        # Branch from the default branch
//! │   ├── file          # File writes and content reads
//! │   ├── topics        # Replace topics
//! │   ├── secret        # Sealed secret provisioning
//! │   ├── pr            # Open pull requests
//! │   ├── ruleset       # Default-branch rulesets
//! │   └── completions   # Shell completions
//! ├── core/             # Core library components
//! │   ├── api/          # REST client
//! │   │   ├── mod       # Client, status mapping
//! │   │   └── transport # Transport trait, reqwest implementation
//! │   ├── seal/         # Secret sealing
//! │   │   ├── mod       # Sealer trait, recipient keys
//! │   │   └── sealed_box # X25519 + XSalsa20-Poly1305 sealed box
//! │   ├── config        # ~/.config/ghkit/config.toml
//! │   ├── domain/       # Request and response types
//! │   └── validation    # Secret name rules
//! ├── error             # Error types
//! └── testing           # Scripted transport for tests
//! ```
//!
//! # Provisioning a secret
//!
//! ```no_run
//! use ghkit::core::api::Client;
//!
//! # fn main() -> ghkit::error::Result<()> {
//! let client = Client::new("ghp_token")?;
//! client.put_secret("octo", "hello", "DEPLOY_TOKEN", "s3cr3t")?;
//! # Ok(())
//! # }
//! ```
//!
//! The repository's public key is fetched, the value is sealed to it
//! locally and only the ciphertext is submitted.

pub mod cli;
pub mod core;
pub mod error;
pub mod testing;

pub use crate::core::api::Client;
pub use crate::error::{Error, Result};
