//! Application state for the HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ServerConfig;

/// Where each request's random generator comes from.
#[derive(Clone)]
pub enum RngSource {
    /// A fresh OS-seeded generator per request.
    Entropy,
    /// Per-request generators seeded from a shared master generator, so a
    /// sequence of requests against one server replays exactly.
    Seeded(Arc<Mutex<StdRng>>),
}

impl RngSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::Seeded(Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))),
            None => RngSource::Entropy,
        }
    }

    /// Generator for a single request.
    pub fn next_rng(&self) -> StdRng {
        match self {
            RngSource::Entropy => StdRng::from_entropy(),
            RngSource::Seeded(master) => StdRng::seed_from_u64(master.lock().gen()),
        }
    }
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub rng: RngSource,
    /// Directory holding `index.html` and `favicon.ico`
    pub static_dir: PathBuf,
    pub body_limit_bytes: usize,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            rng: RngSource::from_seed(config.seed),
            static_dir: config.static_dir.clone(),
            body_limit_bytes: config.body_limit_bytes,
        }
    }
}
