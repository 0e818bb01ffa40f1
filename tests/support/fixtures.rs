//! Scripted API responses and recording test doubles.

use std::sync::{Arc, Mutex};

use ghkit::core::api::{Request, Response, Transport};
use ghkit::core::seal::{RecipientKey, SealedBox, Sealer};
use ghkit::error::{SealError, TransportError};
use ghkit::testing::MockTransport;

/// Public key response body.
pub fn public_key_body(key_id: &str, key: &str) -> String {
    serde_json::json!({ "key_id": key_id, "key": key }).to_string()
}

/// Repository response body.
pub fn repository_body(owner: &str, name: &str, default_branch: &str) -> String {
    serde_json::json!({
        "id": 1,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "private": false,
        "html_url": format!("https://github.com/{}/{}", owner, name),
        "default_branch": default_branch,
        "topics": []
    })
    .to_string()
}

/// Git ref response body.
pub fn ref_body(branch: &str, sha: &str) -> String {
    serde_json::json!({
        "ref": format!("refs/heads/{}", branch),
        "object": { "sha": sha, "type": "commit" }
    })
    .to_string()
}

/// Events observed by recording doubles, in order.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Transport that logs `METHOD path` before delegating to a mock.
pub struct RecordingTransport {
    pub inner: MockTransport,
    pub log: EventLog,
}

impl Transport for RecordingTransport {
    fn send(&self, request: &Request) -> Result<Response, TransportError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{} {}", request.method, request.path));
        self.inner.send(request)
    }
}

/// Sealer that logs each call before delegating to [`SealedBox`].
pub struct RecordingSealer {
    pub log: EventLog,
}

impl Sealer for RecordingSealer {
    fn seal(&self, key: &RecipientKey, plaintext: &[u8]) -> Result<Vec<u8>, SealError> {
        self.log.lock().unwrap().push("seal".to_string());
        SealedBox.seal(key, plaintext)
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
