#[cfg(test)]
use mockall::automock;
use tracing::debug;
use ureq;

use crate::config::Endpoints;

/// Checks whether a URL currently resolves, as a stand-in for an asset availability API
#[cfg_attr(test, automock)]
pub trait ExistenceProbe {
    fn probe(&self, url: &str) -> bool;
}

pub struct HttpProber {
    agent: ureq::Agent,
}

impl HttpProber {
    pub fn new(agent: ureq::Agent) -> HttpProber {
        HttpProber { agent }
    }

    pub fn from_endpoints(endpoints: &Endpoints) -> HttpProber {
        HttpProber::new(ureq::AgentBuilder::new().timeout(endpoints.timeout()).build())
    }
}

impl ExistenceProbe for HttpProber {
    fn probe(&self, url: &str) -> bool {
        match self.agent.head(url).call() {
            Ok(res) => (200..300).contains(&res.status()),
            Err(ureq::Error::Status(code, _)) => {
                debug!(url, code, "Probed url does not exist");
                false
            }
            Err(e) => {
                debug!(url, error = %e, "Failed to probe url");
                false
            }
        }
    }
}
