//! Admin route construction.

use serde::{Deserialize, Serialize};

/// Builds every admin URL from a single base path.
///
/// Constructed once at startup and passed by reference into each render
/// call; never mutated afterwards, so it can be shared freely across
/// concurrent renders. The hydrator rebuilds an equivalent value from
/// `window.location.pathname` via [`AdminRoutes::from_pathname`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRoutes {
    base: String,
}

impl Default for AdminRoutes {
    fn default() -> Self {
        Self::new("/admin")
    }
}

impl AdminRoutes {
    /// Creates routes rooted at the given base path.
    ///
    /// A missing leading slash is added and a trailing slash stripped, so
    /// `"admin/"` and `"/admin"` produce the same routes.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let trimmed = base.trim_matches('/');
        Self {
            base: format!("/{trimmed}"),
        }
    }

    /// Returns the base path (no trailing slash).
    pub fn base(&self) -> &str {
        &self.base
    }

    /// List view: `{base}/{url_path}`.
    pub fn list(&self, url_path: &str) -> String {
        format!("{}/{url_path}", self.base)
    }

    /// Create form: `{base}/{url_path}/new`.
    pub fn create(&self, url_path: &str) -> String {
        format!("{}/{url_path}/new", self.base)
    }

    /// Single item (form post target): `{base}/{url_path}/{id}`.
    pub fn item(&self, url_path: &str, id: &str) -> String {
        format!("{}/{url_path}/{id}", self.base)
    }

    /// Edit form: `{base}/{url_path}/{id}/edit`.
    pub fn edit(&self, url_path: &str, id: &str) -> String {
        format!("{}/{url_path}/{id}/edit", self.base)
    }

    /// Delete action: `{base}/{url_path}/{id}/delete`.
    pub fn delete(&self, url_path: &str, id: &str) -> String {
        format!("{}/{url_path}/{id}/delete", self.base)
    }

    /// Bulk delete: `{base}/{url_path}/delete?ids=<comma-joined>`.
    ///
    /// Ids must already be URL-safe; that precondition is owned by the data
    /// source that produced them.
    pub fn bulk_delete(&self, url_path: &str, ids: &[String]) -> String {
        format!("{}/{url_path}/delete?ids={}", self.base, ids.join(","))
    }

    /// Sign-in form post target: `{base}/login`.
    pub fn login(&self) -> String {
        format!("{}/login", self.base)
    }

    /// MFA setup form post target: `{base}/mfa/setup`.
    pub fn mfa_setup(&self) -> String {
        format!("{}/mfa/setup", self.base)
    }

    /// MFA verification form post target: `{base}/mfa/verify`.
    pub fn mfa_verify(&self) -> String {
        format!("{}/mfa/verify", self.base)
    }

    /// Recovers the routes and the model segment from a document pathname.
    ///
    /// `"/admin/posts/7/edit"` yields routes based at `/admin` and the
    /// segment `"posts"`. Returns `None` when the pathname has fewer than
    /// two segments, in which case bulk actions stay inert.
    pub fn from_pathname(pathname: &str) -> Option<(Self, String)> {
        let mut segments = pathname.split('/').filter(|s| !s.is_empty());
        let base = segments.next()?;
        let url_path = segments.next()?;
        Some((Self::new(base), url_path.to_string()))
    }
}
