//! HTTP transport for the remote backend
//!
//! Fetches are synchronous. Pushes go through a channel to a single
//! replication thread that posts snapshots in submission order, collapsing a
//! queue of pending snapshots to the newest one. Push failures are logged at
//! debug level and otherwise dropped.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{ScoringError, ScoringResult};

use super::remote::{RemoteState, RemoteTransport};

/// Talks to `<base>/api/data`
pub struct HttpTransport {
    client: Client,
    data_url: String,
    sender: Mutex<Option<Sender<RemoteState>>>,
    worker: Option<JoinHandle<()>>,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> ScoringResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScoringError::Remote(format!("Failed to build HTTP client: {}", e)))?;
        let data_url = data_url(base_url);

        let (sender, receiver) = mpsc::channel();
        let worker_client = client.clone();
        let worker_url = data_url.clone();
        let worker = thread::Builder::new()
            .name("remote-replication".into())
            .spawn(move || replicate(worker_client, worker_url, receiver))
            .map_err(|e| ScoringError::Remote(format!("Failed to start replication: {}", e)))?;

        Ok(Self {
            client,
            data_url,
            sender: Mutex::new(Some(sender)),
            worker: Some(worker),
        })
    }
}

impl RemoteTransport for HttpTransport {
    fn fetch(&self) -> ScoringResult<RemoteState> {
        let state = self
            .client
            .get(&self.data_url)
            .header("Cache-Control", "no-cache")
            .send()?
            .error_for_status()?
            .json::<RemoteState>()?;
        Ok(state)
    }

    fn push(&self, state: RemoteState) {
        let Ok(sender) = self.sender.lock() else {
            return;
        };
        if let Some(sender) = sender.as_ref() {
            if sender.send(state).is_err() {
                debug!("replication thread gone; dropping snapshot");
            }
        }
    }
}

impl Drop for HttpTransport {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain what is queued and exit
        if let Ok(mut sender) = self.sender.lock() {
            sender.take();
        }
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn replicate(client: Client, url: String, receiver: Receiver<RemoteState>) {
    while let Ok(mut state) = receiver.recv() {
        while let Ok(newer) = receiver.try_recv() {
            state = newer;
        }

        let result = client
            .post(&url)
            .json(&state)
            .send()
            .and_then(|response| response.error_for_status());

        match result {
            Ok(_) => debug!(url = %url, "remote push accepted"),
            Err(e) => debug!(url = %url, error = %e, "remote push failed; ignoring"),
        }
    }
}

fn data_url(base_url: &str) -> String {
    format!("{}/api/data", base_url.trim().trim_end_matches('/'))
}
