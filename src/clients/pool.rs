use rquest_util::Emulation;
use tracing::debug;

use crate::clients::http::HttpClient;
use crate::config::ApiConfig;
use crate::error::Result;

/// Round-robin pool of clients with distinct browser emulations, so
/// consecutive requests don't all present the same fingerprint.
pub struct ClientPool {
    clients: Vec<HttpClient>,
    current: std::sync::atomic::AtomicUsize,
}

impl ClientPool {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let emulations = vec![
            Emulation::Firefox136,
            Emulation::Chrome133,
            Emulation::Safari18_3,
            Emulation::Edge134,
        ];

        debug!("Creating client pool with {} emulations", emulations.len());

        let clients = emulations
            .into_iter()
            .map(|emulation| HttpClient::new(api, emulation))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            clients,
            current: std::sync::atomic::AtomicUsize::new(0),
        })
    }

    pub fn next_client(&self) -> &HttpClient {
        let current = self.current.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        &self.clients[current % self.clients.len()]
    }
}
