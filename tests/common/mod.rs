#![allow(dead_code)]
use rcgen::{BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, Issuer, KeyPair};
use rustls::pki_types::ServerName;
use rustls::{ClientConfig, ClientConnection, ConnectionCommon, ServerConfig, ServerConnection};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const SERVER_NAME: &str = "localhost";

pub struct TestCa {
    pub cert_pem: String,
    issuer: Issuer<'static, KeyPair>,
}

pub struct TestLeaf {
    pub cert_pem: String,
    pub key_pem: String,
    pub cert_der: Vec<u8>,
}

impl TestCa {
    pub fn new(common_name: &str) -> Self {
        let key = KeyPair::generate().unwrap();
        let mut params = CertificateParams::new(Vec::<String>::new()).unwrap();
        let mut name = DistinguishedName::new();
        name.push(DnType::CommonName, common_name);
        params.distinguished_name = name;
        params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
        let cert = params.self_signed(&key).unwrap();
        Self {
            cert_pem: cert.pem(),
            issuer: Issuer::new(params, key),
        }
    }

    pub fn issue(&self, dns_name: &str) -> TestLeaf {
        let key = KeyPair::generate().unwrap();
        let params = CertificateParams::new(vec![dns_name.to_string()]).unwrap();
        let cert = params.signed_by(&key, &self.issuer).unwrap();
        TestLeaf {
            cert_pem: cert.pem(),
            key_pem: key.serialize_pem(),
            cert_der: cert.der().to_vec(),
        }
    }
}

pub fn self_signed_leaf(dns_name: &str) -> TestLeaf {
    let key = KeyPair::generate().unwrap();
    let params = CertificateParams::new(vec![dns_name.to_string()]).unwrap();
    let cert = params.self_signed(&key).unwrap();
    TestLeaf {
        cert_pem: cert.pem(),
        key_pem: key.serialize_pem(),
        cert_der: cert.der().to_vec(),
    }
}

/// Writes `leaf` as `tls.crt` / `tls.key` inside `dir`.
pub fn write_leaf(dir: &Path, leaf: &TestLeaf) -> (PathBuf, PathBuf) {
    let cert_path = dir.join("tls.crt");
    let key_path = dir.join("tls.key");
    std::fs::write(&cert_path, &leaf.cert_pem).unwrap();
    std::fs::write(&key_path, &leaf.key_pem).unwrap();
    (cert_path, key_path)
}

/// Replaces `path` the way deployment tools do: write a sibling, then rename over.
pub fn replace_file(path: &Path, contents: &[u8]) {
    let staging = path.with_extension("next");
    std::fs::write(&staging, contents).unwrap();
    std::fs::rename(&staging, path).unwrap();
}

pub fn rotate_leaf(cert_path: &Path, key_path: &Path, leaf: &TestLeaf) {
    replace_file(key_path, leaf.key_pem.as_bytes());
    replace_file(cert_path, leaf.cert_pem.as_bytes());
}

pub fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    condition()
}

fn transfer<L, R, LD, RD>(from: &mut L, to: &mut R) -> Result<(), rustls::Error>
where
    L: DerefMut<Target = ConnectionCommon<LD>>,
    R: DerefMut<Target = ConnectionCommon<RD>>,
{
    let mut buffer = Vec::new();
    while from.wants_write() {
        from.write_tls(&mut buffer).unwrap();
    }
    let mut cursor = buffer.as_slice();
    while !cursor.is_empty() {
        to.read_tls(&mut cursor).unwrap();
        to.process_new_packets()?;
    }
    Ok(())
}

/// Runs a full handshake between the two configurations in memory.
pub fn handshake(
    client_config: Arc<ClientConfig>,
    server_config: Arc<ServerConfig>,
) -> Result<(ClientConnection, ServerConnection), rustls::Error> {
    let server_name = ServerName::try_from(SERVER_NAME).unwrap();
    let mut client = ClientConnection::new(client_config, server_name)?;
    let mut server = ServerConnection::new(server_config)?;
    for _ in 0..16 {
        if !client.is_handshaking() && !server.is_handshaking() {
            return Ok((client, server));
        }
        transfer(&mut client, &mut server)?;
        transfer(&mut server, &mut client)?;
    }
    Err(rustls::Error::General("handshake did not complete".to_string()))
}

pub fn served_leaf(client: &ClientConnection) -> Vec<u8> {
    client.peer_certificates().unwrap()[0].as_ref().to_vec()
}
