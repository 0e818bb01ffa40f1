//! Secret provisioning: step order, abort behavior and wire shape.

mod support;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use ghkit::core::api::Client;
use ghkit::core::seal::SEAL_OVERHEAD;
use ghkit::error::{ApiError, Error, ProvisionError, ProvisionStep, ValidationError};
use ghkit::testing::{test_keypair, MockTransport};
use support::*;

fn recording_client(log: &EventLog) -> Client<RecordingTransport> {
    Client::with_transport(RecordingTransport {
        inner: MockTransport::new(),
        log: log.clone(),
    })
}

#[test]
fn test_fetch_then_seal_then_submit() {
    let (_, public) = test_keypair();
    let log = event_log();
    let client = recording_client(&log);
    client.transport().inner.respond(200, public_key_body("kid-1", &public));
    client.transport().inner.respond(201, "");

    let sealer = RecordingSealer { log: log.clone() };
    client
        .put_secret_with(&sealer, "octo", "hello", "DEPLOY_TOKEN", "s3cr3t")
        .unwrap();

    assert_eq!(
        events(&log),
        vec![
            "GET /repos/octo/hello/actions/secrets/public-key",
            "seal",
            "PUT /repos/octo/hello/actions/secrets/DEPLOY_TOKEN",
        ]
    );
}

#[test]
fn test_key_fetch_failure_aborts_before_sealing() {
    let log = event_log();
    let client = recording_client(&log);
    client.transport().inner.respond(404, r#"{"message":"Not Found"}"#);

    let sealer = RecordingSealer { log: log.clone() };
    let err = client
        .put_secret_with(&sealer, "octo", "hello", "DEPLOY_TOKEN", "s3cr3t")
        .unwrap_err();

    match &err {
        Error::Provision(e) => {
            assert_eq!(e.step(), ProvisionStep::FetchKey);
            assert!(matches!(
                e,
                ProvisionError::FetchKey {
                    source: ApiError::NotFound { .. },
                    ..
                }
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        events(&log),
        vec!["GET /repos/octo/hello/actions/secrets/public-key"]
    );
}

#[test]
fn test_malformed_key_aborts_before_submit() {
    let log = event_log();
    let client = recording_client(&log);
    client
        .transport()
        .inner
        .respond(200, public_key_body("kid-1", "c2hvcnQ="));

    let err = client
        .put_secret("octo", "hello", "DEPLOY_TOKEN", "s3cr3t")
        .unwrap_err();

    match err {
        Error::Provision(e) => assert_eq!(e.step(), ProvisionStep::Seal),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(events(&log).len(), 1);
}

#[test]
fn test_submit_failure_is_reported_as_submit() {
    let (_, public) = test_keypair();
    let mock = MockTransport::new();
    mock.respond(200, public_key_body("kid-1", &public));
    mock.respond(500, r#"{"message":"Server Error"}"#);
    let client = Client::with_transport(&mock);

    let err = client
        .put_secret("octo", "hello", "DEPLOY_TOKEN", "s3cr3t")
        .unwrap_err();

    assert!(err.is_retryable());
    match err {
        Error::Provision(e) => assert_eq!(e.step(), ProvisionStep::Submit),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_name_sends_nothing() {
    let mock = MockTransport::new();
    let client = Client::with_transport(&mock);

    let err = client
        .put_secret("octo", "hello", "GITHUB_TOKEN", "s3cr3t")
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidSecretName { .. })
    ));
    assert!(mock.calls().is_empty());
}

#[test]
fn test_deploy_token_end_to_end() {
    let (secret, public) = test_keypair();
    let mock = MockTransport::new();
    for _ in 0..2 {
        mock.respond(200, public_key_body("568250167242549743", &public));
        mock.respond(204, "");
    }
    let client = Client::with_transport(&mock);

    client
        .put_secret("octo", "hello", "DEPLOY_TOKEN", "s3cr3t")
        .unwrap();
    client
        .put_secret("octo", "hello", "DEPLOY_TOKEN", "s3cr3t")
        .unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 4);

    let submitted: Vec<_> = [&calls[1], &calls[3]]
        .iter()
        .map(|call| call.body.clone().unwrap())
        .collect();
    for body in &submitted {
        assert_eq!(body["key_id"], "568250167242549743");
        let sealed = STANDARD
            .decode(body["encrypted_value"].as_str().unwrap())
            .unwrap();
        assert_eq!(sealed.len(), "s3cr3t".len() + SEAL_OVERHEAD);
        assert_eq!(secret.unseal(&sealed).unwrap(), b"s3cr3t");
    }
    assert_ne!(
        submitted[0]["encrypted_value"],
        submitted[1]["encrypted_value"]
    );
}
