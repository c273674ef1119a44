mod common;

use common::{TestCa, handshake, self_signed_leaf, served_leaf, write_leaf};
use hotcert::ssl::enums::certificate_error::CertificateError;
use hotcert::ssl::enums::client_auth_policy::ClientAuthPolicy;
use hotcert::ssl::enums::credential_origin::CredentialOrigin;
use hotcert::ssl::enums::manager_state::ManagerState;
use hotcert::ssl::enums::trust_source::TrustSource;
use hotcert::ssl::ssl::{MIN_PROTOCOL_VERSION, is_trust_file};
use hotcert::ssl::structs::credential_cell::CredentialCell;
use hotcert::ssl::structs::credential_manager::CredentialManager;
use hotcert::ssl::structs::trust_pool::TrustPool;
use proptest::prelude::*;
use rustls::ProtocolVersion;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_trust_pool_verifies_issued_certificate() {
    let ca = TestCa::new("Test Root A");
    let other = TestCa::new("Test Root B");
    let pool = TrustPool::empty();
    pool.add_from_bytes(ca.cert_pem.as_bytes()).unwrap();
    assert_eq!(pool.len(), 1);

    assert!(pool.verify(ca.issue("localhost").cert_pem.as_bytes()).is_ok());
    let result = pool.verify(other.issue("localhost").cert_pem.as_bytes());
    assert!(matches!(result, Err(CertificateError::Untrusted(_))));
}

#[test]
fn test_trust_pool_duplicate_adds_are_idempotent() {
    let ca = TestCa::new("Test Root");
    let pool = TrustPool::empty();
    pool.add_from_bytes(ca.cert_pem.as_bytes()).unwrap();
    pool.add_from_bytes(ca.cert_pem.as_bytes()).unwrap();
    assert_eq!(pool.len(), 1);
    assert!(pool.verify(ca.issue("localhost").cert_pem.as_bytes()).is_ok());
}

#[test]
fn test_trust_pool_bundle_with_several_certificates() {
    let first = TestCa::new("Bundle One");
    let second = TestCa::new("Bundle Two");
    let bundle = format!("{}\n{}", first.cert_pem, second.cert_pem);
    let pool = TrustPool::empty();
    pool.add_from_bytes(bundle.as_bytes()).unwrap();
    assert_eq!(pool.len(), 2);
    assert!(pool.verify(second.issue("localhost").cert_pem.as_bytes()).is_ok());
}

#[test]
fn test_trust_pool_snapshot_is_frozen() {
    let ca = TestCa::new("Snapshot Root");
    let pool = TrustPool::empty();
    let before = pool.snapshot();
    pool.add_from_bytes(ca.cert_pem.as_bytes()).unwrap();
    assert!(before.is_empty());
    assert_eq!(pool.snapshot().len(), 1);
}

#[test]
fn test_trust_pool_add_from_file_missing() {
    let dir = TempDir::new().unwrap();
    let pool = TrustPool::empty();
    let result = pool.add_from_file(dir.path().join("absent.crt"));
    assert!(matches!(result, Err(CertificateError::NotFound { ref path }) if path.ends_with("absent.crt")));
}

#[test]
fn test_trust_pool_directory_scan() {
    let dir = TempDir::new().unwrap();
    let cas: Vec<TestCa> = ["A", "B", "C", "D"].iter().map(|name| TestCa::new(name)).collect();
    std::fs::write(dir.path().join("a.crt"), &cas[0].cert_pem).unwrap();
    std::fs::write(dir.path().join("b.pem"), &cas[1].cert_pem).unwrap();
    std::fs::write(dir.path().join("c.txt"), &cas[2].cert_pem).unwrap();
    std::fs::create_dir(dir.path().join("d")).unwrap();
    std::fs::write(dir.path().join("d").join("e.crt"), &cas[3].cert_pem).unwrap();

    let pool = TrustPool::empty();
    pool.add_from_directory(dir.path()).unwrap();
    assert_eq!(pool.len(), 2);
    assert!(pool.verify(cas[0].issue("localhost").cert_pem.as_bytes()).is_ok());
    assert!(pool.verify(cas[1].issue("localhost").cert_pem.as_bytes()).is_ok());
    assert!(pool.verify(cas[2].issue("localhost").cert_pem.as_bytes()).is_err());
    assert!(pool.verify(cas[3].issue("localhost").cert_pem.as_bytes()).is_err());
}

#[test]
fn test_trust_pool_directory_scan_uppercase_extension() {
    let dir = TempDir::new().unwrap();
    let ca = TestCa::new("Upper");
    std::fs::write(dir.path().join("ROOT.CRT"), &ca.cert_pem).unwrap();
    let pool = TrustPool::empty();
    pool.add_from_directory(dir.path()).unwrap();
    assert_eq!(pool.len(), 1);
}

#[test]
fn test_trust_pool_directory_scan_fails_on_bad_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("broken.pem"),
        b"-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n",
    )
    .unwrap();
    let pool = TrustPool::empty();
    let error = pool.add_from_directory(dir.path()).unwrap_err();
    assert!(matches!(error, CertificateError::Parse { .. }));
    assert!(error.to_string().contains("broken.pem"));
}

#[test]
fn test_credential_load_publish_current() {
    let dir = TempDir::new().unwrap();
    let leaf = TestCa::new("Loader").issue("localhost");
    let (cert_path, key_path) = write_leaf(dir.path(), &leaf);

    let credential = CredentialCell::load_from_files(&cert_path, &key_path).unwrap();
    let cell = CredentialCell::new();
    cell.publish(credential);
    let current = cell.current().unwrap();
    assert_eq!(current.leaf().as_ref(), leaf.cert_der.as_slice());
    assert_eq!(
        current.origin(),
        &CredentialOrigin::Files { cert_path, key_path }
    );
    assert!(current.validate().is_ok());
}

#[test]
fn test_credential_key_mismatch() {
    let dir = TempDir::new().unwrap();
    let ca = TestCa::new("Mismatch");
    let leaf = ca.issue("localhost");
    let other = ca.issue("localhost");
    let (cert_path, key_path) = write_leaf(dir.path(), &leaf);
    std::fs::write(&key_path, &other.key_pem).unwrap();

    let result = CredentialCell::load_from_files(&cert_path, &key_path);
    assert!(matches!(result, Err(CertificateError::KeyMismatch { .. })));
}

#[test]
fn test_credential_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = CredentialCell::load_from_files(dir.path().join("tls.crt"), dir.path().join("tls.key"));
    assert!(matches!(result, Err(CertificateError::NotFound { .. })));
}

#[test]
fn test_manager_server_and_client_handshake() {
    let dir = TempDir::new().unwrap();
    let ca = TestCa::new("Handshake Root");
    let leaf = ca.issue("localhost");
    let (cert_path, key_path) = write_leaf(dir.path(), &leaf);

    let manager = CredentialManager::new(false);
    manager.configure_trust([TrustSource::bytes(ca.cert_pem.clone())]).unwrap();
    manager.set_credential_files(&cert_path, &key_path).unwrap();
    assert_eq!(manager.state(), ManagerState::Configuring);

    let server = manager.server_config().unwrap();
    assert_eq!(manager.state(), ManagerState::Active);
    assert_eq!(server.min_protocol_version, MIN_PROTOCOL_VERSION);
    assert_eq!(server.client_auth, ClientAuthPolicy::None);
    assert_eq!(server.credential.leaf().as_ref(), leaf.cert_der.as_slice());
    assert!(manager.is_watching());

    let client = manager.client_config().unwrap();
    assert!(!client.insecure_skip_verify);
    let (client_conn, _) = handshake(client.rustls_config().unwrap(), server.rustls_config().unwrap()).unwrap();
    assert_eq!(served_leaf(&client_conn), leaf.cert_der);
    let negotiated = u16::from(client_conn.protocol_version().unwrap());
    assert!(negotiated >= u16::from(ProtocolVersion::TLSv1_2));
    manager.close();
}

#[test]
fn test_client_rejects_untrusted_server() {
    let server_manager = CredentialManager::new(false);
    let leaf = TestCa::new("Server Root").issue("localhost");
    server_manager.set_credential_bytes(leaf.cert_pem.as_bytes(), leaf.key_pem.as_bytes()).unwrap();
    let server = server_manager.server_config().unwrap().rustls_config().unwrap();

    let client_manager = CredentialManager::new(false);
    client_manager
        .configure_trust([TrustSource::bytes(TestCa::new("Unrelated").cert_pem)])
        .unwrap();
    let client = client_manager.client_config().unwrap().rustls_config().unwrap();
    assert!(handshake(client, server.clone()).is_err());

    client_manager.set_insecure_skip_verify(true);
    let insecure = client_manager.client_config().unwrap();
    assert!(insecure.insecure_skip_verify);
    assert!(handshake(insecure.rustls_config().unwrap(), server).is_ok());
}

fn mtls_server(ca: &TestCa, policy: ClientAuthPolicy) -> (CredentialManager, std::sync::Arc<rustls::ServerConfig>) {
    let manager = CredentialManager::new(false);
    let leaf = ca.issue("localhost");
    manager.configure_trust([TrustSource::bytes(ca.cert_pem.clone())]).unwrap();
    manager.set_credential_bytes(leaf.cert_pem.as_bytes(), leaf.key_pem.as_bytes()).unwrap();
    manager.set_client_auth_policy(policy);
    let config = manager.server_config().unwrap().rustls_config().unwrap();
    (manager, config)
}

fn mtls_client(ca: &TestCa, identity: Option<&common::TestLeaf>) -> std::sync::Arc<rustls::ClientConfig> {
    let manager = CredentialManager::new(false);
    manager.configure_trust([TrustSource::bytes(ca.cert_pem.clone())]).unwrap();
    if let Some(identity) = identity {
        manager.set_credential_bytes(identity.cert_pem.as_bytes(), identity.key_pem.as_bytes()).unwrap();
    }
    let client = manager.client_config().unwrap();
    assert_eq!(client.credential.is_some(), identity.is_some());
    client.rustls_config().unwrap()
}

#[test]
fn test_mtls_require_and_verify() {
    let ca = TestCa::new("Mutual Root");
    let (_manager, server) = mtls_server(&ca, ClientAuthPolicy::RequireAndVerify);
    let trusted_client = ca.issue("client.test");
    let foreign_client = TestCa::new("Foreign").issue("client.test");

    assert!(handshake(mtls_client(&ca, None), server.clone()).is_err());
    assert!(handshake(mtls_client(&ca, Some(&foreign_client)), server.clone()).is_err());
    let (_, server_conn) = handshake(mtls_client(&ca, Some(&trusted_client)), server).unwrap();
    assert_eq!(
        server_conn.peer_certificates().unwrap()[0].as_ref(),
        trusted_client.cert_der.as_slice()
    );
}

#[test]
fn test_mtls_verify_if_given() {
    let ca = TestCa::new("Optional Root");
    let (_manager, server) = mtls_server(&ca, ClientAuthPolicy::VerifyIfGiven);
    assert!(handshake(mtls_client(&ca, None), server.clone()).is_ok());
    let foreign_client = TestCa::new("Foreign").issue("client.test");
    assert!(handshake(mtls_client(&ca, Some(&foreign_client)), server).is_err());
}

#[test]
fn test_mtls_require_any_skips_verification() {
    let ca = TestCa::new("Any Root");
    let (_manager, server) = mtls_server(&ca, ClientAuthPolicy::RequireAny);
    assert!(handshake(mtls_client(&ca, None), server.clone()).is_err());
    let stranger = self_signed_leaf("stranger.test");
    assert!(handshake(mtls_client(&ca, Some(&stranger)), server).is_ok());
}

#[test]
fn test_mtls_request_accepts_anonymous() {
    let ca = TestCa::new("Request Root");
    let (_manager, server) = mtls_server(&ca, ClientAuthPolicy::Request);
    assert!(handshake(mtls_client(&ca, None), server).is_ok());
}

#[test]
fn test_verifying_policy_needs_trust_pool() {
    let manager = CredentialManager::new(false);
    let leaf = self_signed_leaf("localhost");
    manager.set_credential_bytes(leaf.cert_pem.as_bytes(), leaf.key_pem.as_bytes()).unwrap();
    manager.set_client_auth_policy(ClientAuthPolicy::RequireAndVerify);
    let result = manager.server_config().unwrap().rustls_config();
    assert!(matches!(result, Err(CertificateError::Configuration(_))));
}

#[test]
fn test_server_config_is_a_snapshot() {
    let manager = CredentialManager::new(false);
    let leaf = self_signed_leaf("localhost");
    manager.set_credential_bytes(leaf.cert_pem.as_bytes(), leaf.key_pem.as_bytes()).unwrap();
    let issued = manager.server_config().unwrap();
    manager.set_client_auth_policy(ClientAuthPolicy::Request);
    manager.configure_trust([TrustSource::bytes(TestCa::new("Later").cert_pem)]).unwrap();
    assert_eq!(issued.client_auth, ClientAuthPolicy::None);
    assert!(issued.client_roots.is_empty());
    assert_eq!(manager.server_config().unwrap().client_auth, ClientAuthPolicy::Request);
}

#[test]
fn test_issued_listener_keeps_identity_after_new_credential_bytes() {
    let ca = TestCa::new("Snapshot Identity Root");
    let first = ca.issue("localhost");
    let second = ca.issue("localhost");
    let manager = CredentialManager::new(false);
    manager.configure_trust([TrustSource::bytes(ca.cert_pem.clone())]).unwrap();
    manager.set_credential_bytes(first.cert_pem.as_bytes(), first.key_pem.as_bytes()).unwrap();

    let issued = manager.server_config().unwrap();
    let listener = issued.rustls_config().unwrap();
    manager.set_credential_bytes(second.cert_pem.as_bytes(), second.key_pem.as_bytes()).unwrap();

    let client = manager.client_config().unwrap().rustls_config().unwrap();
    let (client_conn, _) = handshake(client.clone(), listener).unwrap();
    assert_eq!(served_leaf(&client_conn), first.cert_der);
    let (client_conn, _) = handshake(client.clone(), issued.rustls_config().unwrap()).unwrap();
    assert_eq!(served_leaf(&client_conn), first.cert_der);

    let fresh = manager.server_config().unwrap();
    assert_eq!(fresh.credential.leaf().as_ref(), second.cert_der.as_slice());
    let (client_conn, _) = handshake(client, fresh.rustls_config().unwrap()).unwrap();
    assert_eq!(served_leaf(&client_conn), second.cert_der);
}

#[test]
fn test_issued_listener_keeps_identity_after_new_credential_files() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();
    let ca = TestCa::new("Switched Files Root");
    let first = ca.issue("localhost");
    let second = ca.issue("localhost");
    let (first_cert, first_key) = write_leaf(first_dir.path(), &first);
    let (second_cert, second_key) = write_leaf(second_dir.path(), &second);

    let manager = CredentialManager::new(false);
    manager.configure_trust([TrustSource::bytes(ca.cert_pem.clone())]).unwrap();
    manager.set_credential_files(&first_cert, &first_key).unwrap();
    let listener = manager.server_config().unwrap().rustls_config().unwrap();

    manager.set_credential_files(&second_cert, &second_key).unwrap();
    let fresh = manager.server_config().unwrap();
    assert_eq!(fresh.credential.leaf().as_ref(), second.cert_der.as_slice());

    let client = manager.client_config().unwrap().rustls_config().unwrap();
    let (client_conn, _) = handshake(client.clone(), listener).unwrap();
    assert_eq!(served_leaf(&client_conn), first.cert_der);
    let (client_conn, _) = handshake(client, fresh.rustls_config().unwrap()).unwrap();
    assert_eq!(served_leaf(&client_conn), second.cert_der);
    manager.close();
}

#[test]
fn test_credential_bytes_never_start_monitor() {
    let manager = CredentialManager::new(false);
    let leaf = self_signed_leaf("localhost");
    manager.set_credential_bytes(leaf.cert_pem.as_bytes(), leaf.key_pem.as_bytes()).unwrap();
    let server = manager.server_config().unwrap();
    assert_eq!(server.credential.origin(), &CredentialOrigin::Memory);
    assert!(!manager.is_watching());
    assert!(manager.monitor_stats().is_none());
}

#[test]
fn test_configure_trust_mixed_sources() {
    let dir = TempDir::new().unwrap();
    let from_bytes = TestCa::new("Bytes");
    let from_file = TestCa::new("File");
    let from_dir = TestCa::new("Dir");
    let file_path = dir.path().join("single.pem");
    std::fs::write(&file_path, &from_file.cert_pem).unwrap();
    let ca_dir = dir.path().join("cas");
    std::fs::create_dir(&ca_dir).unwrap();
    std::fs::write(ca_dir.join("root.crt"), &from_dir.cert_pem).unwrap();

    let manager = CredentialManager::new(false);
    manager
        .configure_trust([
            TrustSource::bytes(from_bytes.cert_pem.clone()),
            TrustSource::file(&file_path),
            TrustSource::directory(&ca_dir),
        ])
        .unwrap();
    assert_eq!(manager.trust_pool().len(), 3);
    for ca in [&from_bytes, &from_file, &from_dir] {
        assert!(manager.verify_external_cert(ca.issue("localhost").cert_pem.as_bytes()).is_ok());
    }
}

#[test]
fn test_configure_trust_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    let good = TestCa::new("Good");
    let late = TestCa::new("Late");
    let missing = dir.path().join("missing.pem");
    let manager = CredentialManager::new(false);
    let error = manager
        .configure_trust([
            TrustSource::bytes(good.cert_pem.clone()),
            TrustSource::file(&missing),
            TrustSource::bytes(late.cert_pem.clone()),
        ])
        .unwrap_err();
    assert!(matches!(error, CertificateError::NotFound { ref path } if path == &missing));
    assert_eq!(manager.trust_pool().len(), 1);
}

#[test]
fn test_verify_external_cert_with_intermediate_chain_order() {
    let ca = TestCa::new("Chain Root");
    let manager = CredentialManager::new(false);
    manager.configure_trust([TrustSource::bytes(ca.cert_pem.clone())]).unwrap();
    let leaf = ca.issue("peer.test");
    let chain = format!("{}{}", leaf.cert_pem, ca.cert_pem);
    assert!(manager.verify_external_cert(chain.as_bytes()).is_ok());
    assert!(matches!(
        manager.verify_external_cert(b""),
        Err(CertificateError::Parse { .. })
    ));
}

#[test]
fn test_set_credential_files_rejects_directory() {
    let dir = TempDir::new().unwrap();
    let leaf = self_signed_leaf("localhost");
    let (_, key_path) = write_leaf(dir.path(), &leaf);
    let manager = CredentialManager::new(false);
    let result = manager.set_credential_files(dir.path(), &key_path);
    assert!(matches!(result, Err(CertificateError::Io { .. })));
}

#[test]
fn test_close_twice_and_after_close() {
    let dir = TempDir::new().unwrap();
    let leaf = self_signed_leaf("localhost");
    let (cert_path, key_path) = write_leaf(dir.path(), &leaf);
    let manager = CredentialManager::new(false);
    manager.set_credential_files(&cert_path, &key_path).unwrap();
    manager.server_config().unwrap();
    assert!(manager.is_watching());

    manager.close();
    manager.close();
    assert!(!manager.is_watching());
    assert_eq!(manager.state(), ManagerState::Closed);
    assert!(matches!(manager.server_config(), Err(CertificateError::Configuration(_))));
    assert!(matches!(
        manager.set_credential_files(&cert_path, &key_path),
        Err(CertificateError::Configuration(_))
    ));
}

#[test]
fn test_close_without_monitor() {
    let manager = CredentialManager::new(false);
    manager.close();
    manager.close();
}

proptest! {
    #[test]
    fn prop_trust_extension_any_case(upper in proptest::collection::vec(any::<bool>(), 3), pem in any::<bool>()) {
        let base = if pem { "pem" } else { "crt" };
        let extension: String = base
            .chars()
            .zip(upper)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        let file_name = format!("root.{}", extension);
        prop_assert!(is_trust_file(Path::new(&file_name)));
    }

    #[test]
    fn prop_other_extensions_rejected(extension in "[a-z]{1,5}") {
        prop_assume!(extension != "crt" && extension != "pem");
        let file_name = format!("root.{}", extension);
        prop_assert!(!is_trust_file(Path::new(&file_name)));
    }
}
