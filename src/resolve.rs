//! Derived URL set for one configuration and page origin.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::config::ShellConfig;
use crate::registry::{list_modules, resolve_module_base_url, ModuleId};
use crate::surfaces::{resolve_surface_urls, SurfaceId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedModule {
    pub id: ModuleId,
    pub url: String,
    pub config_key: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSurface {
    pub id: SurfaceId,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedUrlSet {
    pub gateway: String,
    pub modules: Vec<ResolvedModule>,
    pub surfaces: Vec<ResolvedSurface>,
}

impl ResolvedUrlSet {
    pub fn module_url(&self, id: ModuleId) -> &str {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.url.as_str())
            .unwrap_or_default()
    }

    pub fn surface_url(&self, id: SurfaceId) -> &str {
        self.surfaces
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.url.as_str())
            .unwrap_or_default()
    }
}

/// Resolve every module and tagger surface against `page_origin`.
pub fn resolve_all(config: &ShellConfig, page_origin: &str) -> ResolvedUrlSet {
    let gateway = config.gateway_or(page_origin);
    let modules = list_modules()
        .iter()
        .map(|m| ResolvedModule {
            id: m.id,
            url: resolve_module_base_url(gateway, m, config.override_for(m.id)),
            config_key: m.config_key,
            source: config.override_source(m.id).as_str(),
        })
        .collect();
    let surfaces = resolve_surface_urls(gateway, config.override_for(ModuleId::Tagger))
        .into_iter()
        .map(|(id, url)| ResolvedSurface { id, url })
        .collect();
    ResolvedUrlSet {
        gateway: gateway.to_string(),
        modules,
        surfaces,
    }
}

/// Remembers the last resolution so repeated requests from the same origin skip recomputation.
#[derive(Debug, Default)]
pub struct ResolveMemo {
    last: Mutex<Option<(String, Arc<ResolvedUrlSet>)>>,
}

impl ResolveMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, config: &ShellConfig, page_origin: &str) -> Arc<ResolvedUrlSet> {
        let mut guard = match self.last.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some((origin, set)) = guard.as_ref() {
            if origin == page_origin {
                return set.clone();
            }
        }
        let set = Arc::new(resolve_all(config, page_origin));
        *guard = Some((page_origin.to_string(), set.clone()));
        set
    }
}
