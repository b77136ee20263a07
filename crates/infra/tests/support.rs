//! Shared helpers for `contactsync-infra` integration tests.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use contactsync_domain::SyncPayload;
use wiremock::{Request, ResponseTemplate};

pub fn sample_payload() -> SyncPayload {
    SyncPayload {
        phone_number: "628123456789".into(),
        name: "Budi".into(),
        timezone: "Asia/Makassar".into(),
        branch_code: "062".into(),
        attributes: r#"{"ids":"C001","companies":""}"#.into(),
    }
}

/// Responder that answers with `statuses` in order, repeating the last one,
/// and records when each request arrived.
#[derive(Clone)]
pub struct StatusSequence {
    statuses: Arc<Vec<u16>>,
    arrivals: Arc<Mutex<Vec<Instant>>>,
}

impl StatusSequence {
    pub fn new(statuses: &[u16]) -> Self {
        assert!(!statuses.is_empty(), "status sequence needs at least one entry");
        Self { statuses: Arc::new(statuses.to_vec()), arrivals: Arc::new(Mutex::new(Vec::new())) }
    }

    pub fn respond(&self, _request: &Request) -> ResponseTemplate {
        let mut arrivals = self.arrivals.lock().unwrap();
        let index = arrivals.len().min(self.statuses.len() - 1);
        arrivals.push(Instant::now());
        let status = self.statuses[index];
        ResponseTemplate::new(status).set_body_string(format!(r#"{{"message":"status {status}"}}"#))
    }

    /// Time between consecutive requests.
    pub fn gaps(&self) -> Vec<Duration> {
        let arrivals = self.arrivals.lock().unwrap();
        arrivals.windows(2).map(|pair| pair[1].duration_since(pair[0])).collect()
    }
}

/// URL of a local port with nothing listening on it.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener); // release the port so that requests fail with ECONNREFUSED
    format!("http://{addr}/api/contacts")
}
