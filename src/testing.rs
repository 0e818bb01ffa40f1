//! Test doubles.
//!
//! [`MockTransport`] replays scripted responses in order and records every
//! request it receives, so tests can assert on request shape and call order
//! without a network.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;

use crate::core::api::{Request, Response, Transport};
use crate::error::TransportError;

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<Response, TransportError>>,
    calls: Vec<Request>,
}

/// Scripted transport.
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a response.
    pub fn respond(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.state()
            .responses
            .push_back(Ok(Response::new(status, body)));
    }

    /// Queue a failure where no response is received.
    pub fn fail(&self, message: &str) {
        self.state()
            .responses
            .push_back(Err(TransportError::Connection(message.to_string())));
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<Request> {
        self.state().calls.clone()
    }

    /// Scripted responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.state().responses.len()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        let mut state = self.state();
        state.calls.push(request.clone());
        state.responses.pop_front().unwrap_or_else(|| {
            Err(TransportError::Connection(format!(
                "no scripted response for {} {}",
                request.method, request.path
            )))
        })
    }
}

/// A fresh repository keypair: the private key and the base64 public key
/// as the platform would return it.
pub fn test_keypair() -> (SecretKey, String) {
    let secret = SecretKey::generate(&mut OsRng);
    let public = STANDARD.encode(secret.public_key().as_bytes());
    (secret, public)
}
