// storefront/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use crate::web::templates;
use shopcart::{Catalog, SessionLimits, SessionStore};
use std::sync::Arc;
use tera::Tera;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
  pub catalog: Arc<Catalog>,
  pub sessions: Arc<SessionStore<Uuid>>,
  pub templates: Arc<Tera>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(config: AppConfig, catalog: Catalog) -> Result<Self> {
    let limits = SessionLimits {
      max_sessions: config.max_sessions,
      idle_timeout: config.session_idle_timeout,
    };
    Ok(Self {
      catalog: Arc::new(catalog),
      sessions: Arc::new(SessionStore::with_limits(limits)),
      templates: Arc::new(templates::init_templates()?),
      config: Arc::new(config),
    })
  }
}

/// Loads the configured catalog file, or the built-in demo catalog when none is set.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
  match &config.catalog_path {
    Some(path) => Ok(Catalog::from_json_file(path)?),
    None => {
      tracing::info!("No CATALOG_PATH configured; using the built-in demo catalog.");
      Ok(Catalog::default_seed())
    }
  }
}
