// src/expect.rs
// Factory that hands out responses wired to a configured reporter

use std::path::PathBuf;
use std::rc::Rc;

use crate::chain::Chain;
use crate::config::{default_body_preview, Config, ConfigError, ConfigLoader};
use crate::raw::RawResponse;
use crate::reporter::Reporter;
use crate::response::Response;

/// Shared settings for every response checked by one test.
///
/// Each response gets its own chain; all chains report to the same sink.
#[derive(Clone)]
pub struct Expect {
    reporter: Rc<dyn Reporter>,
    body_preview: usize,
}

impl Expect {
    pub fn new(reporter: impl Reporter + 'static) -> Self {
        Self {
            reporter: Rc::new(reporter),
            body_preview: default_body_preview(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            reporter: config.build_reporter(),
            body_preview: config.body_preview,
        }
    }

    /// Loads `hakiki.json` (or `.hakiki.json`) from `dir`, falling back to
    /// defaults when neither exists.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let config = ConfigLoader::new(dir.into()).load_configuration(None)?;
        Ok(Self::from_config(&config))
    }

    pub fn response(&self, raw: impl Into<RawResponse>) -> Response {
        let chain = Chain::new(Rc::clone(&self.reporter));
        Response::with_chain(chain, raw.into()).with_preview_limit(self.body_preview)
    }
}

impl Default for Expect {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
