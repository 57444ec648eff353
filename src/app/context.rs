use url::Url;

use crate::ports::SiteClient;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: SiteClient> {
    client: C,
    server_url: Option<Url>,
}

impl<C: SiteClient> AppContext<C> {
    /// Create a new application context.
    pub fn new(client: C, server_url: Option<Url>) -> Self {
        Self { client, server_url }
    }

    /// Get a reference to the site client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a mutable reference to the site client.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// Server address shown in reports, if one was configured.
    pub fn server_url(&self) -> Option<&Url> {
        self.server_url.as_ref()
    }
}
