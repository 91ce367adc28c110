//! Admin site registration and configuration.

use patina_contract::AdminRoutes;
use tracing::debug;

use crate::error::{AdminError, Result};
use crate::options::ModelAdmin;

/// The admin site: a base route plus ordered model registrations.
///
/// Built once at process start and never mutated afterwards; render calls
/// borrow it, so concurrent requests share it without locking. This replaces
/// any notion of a process-wide mutable base-route singleton.
#[derive(Debug, Clone)]
pub struct AdminSite {
    /// Site display name.
    pub name: String,
    routes: AdminRoutes,
    models: Vec<ModelAdmin>,
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::new("Administration")
    }
}

impl AdminSite {
    /// Creates a site with the given display name, based at `/admin`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: AdminRoutes::default(),
            models: Vec::new(),
        }
    }

    /// Sets the base path for every admin route.
    #[must_use]
    pub fn base_path(mut self, base: impl Into<String>) -> Self {
        self.routes = AdminRoutes::new(base);
        self
    }

    /// Registers a model, keeping registration order for navigation.
    ///
    /// # Errors
    /// Returns the descriptor's validation error, if any.
    pub fn register(mut self, admin: ModelAdmin) -> Result<Self> {
        admin.validate()?;
        debug!(model = %admin.model_name, url_path = %admin.url_path, "registered admin model");
        self.models.push(admin);
        Ok(self)
    }

    /// Returns the route builder shared by every render call.
    pub fn routes(&self) -> &AdminRoutes {
        &self.routes
    }

    /// Returns all registered models in registration order.
    pub fn registered_models(&self) -> &[ModelAdmin] {
        &self.models
    }

    /// Looks up a model by its URL segment.
    pub fn get(&self, url_path: &str) -> Result<&ModelAdmin> {
        self.models
            .iter()
            .find(|m| m.url_path == url_path)
            .ok_or_else(|| AdminError::ModelNotRegistered(url_path.to_string()))
    }

    /// Returns `(plural name, list URL)` pairs for navigation chrome.
    pub fn model_list(&self) -> Vec<(String, String)> {
        self.models
            .iter()
            .map(|m| (m.model_name_plural.clone(), self.routes.list(&m.url_path)))
            .collect()
    }
}
