#![allow(clippy::module_name_repetitions)]
//! Module registry: the fixed, ordered set of embeddable tools and their base URL defaulting.
//!
//! Order is sidebar order. The module id doubles as the default path segment under the gateway.

use serde::Serialize;

/// Closed set of embeddable modules.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Graphical,
    Tagger,
    Article,
    Graph,
}

impl ModuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Graphical => "graphical",
            ModuleId::Tagger => "tagger",
            ModuleId::Article => "article",
            ModuleId::Graph => "graph",
        }
    }

    /// Parse a module id; surrounding whitespace is ignored, matching is exact otherwise.
    pub fn parse(s: &str) -> Option<ModuleId> {
        match s.trim() {
            "graphical" => Some(ModuleId::Graphical),
            "tagger" => Some(ModuleId::Tagger),
            "article" => Some(ModuleId::Article),
            "graph" => Some(ModuleId::Graph),
            _ => None,
        }
    }

    pub fn descriptor(&self) -> &'static ModuleDescriptor {
        // MODULES is indexed in declaration order of the enum.
        &MODULES[*self as usize]
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Static display and configuration metadata for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    pub id: ModuleId,
    pub label: &'static str,
    pub meta: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Environment variable that may override this module's URL.
    pub config_key: &'static str,
}

impl ModuleDescriptor {
    /// Gateway API prefix shown next to the active module.
    pub fn api_prefix(&self) -> String {
        format!("/api/v1/{}", self.id)
    }
}

pub const GATEWAY_KEY: &str = "GATEWAY_URL";

static MODULES: [ModuleDescriptor; 4] = [
    ModuleDescriptor {
        id: ModuleId::Graphical,
        label: "Causal Model",
        meta: "Graphical Model",
        icon: "GM",
        title: "Graphical Model",
        description: "Bayesian inference, interventions, and prediction outputs.",
        config_key: "GRAPHICAL_UI_URL",
    },
    ModuleDescriptor {
        id: ModuleId::Tagger,
        label: "Image Tagger",
        meta: "Workbench",
        icon: "IT",
        title: "Image Tagger",
        description: "Annotate images, inspect attributes, and export training data.",
        config_key: "TAGGER_UI_URL",
    },
    ModuleDescriptor {
        id: ModuleId::Article,
        label: "Evidence",
        meta: "Article Eater",
        icon: "AE",
        title: "Article Eater",
        description: "Extract findings, generate rules, and manage evidence runs.",
        config_key: "ARTICLE_UI_URL",
    },
    ModuleDescriptor {
        id: ModuleId::Graph,
        label: "Knowledge Graph",
        meta: "Graph Explorer",
        icon: "KG",
        title: "Knowledge Graph",
        description: "Explore causal links and evidence provenance.",
        config_key: "GRAPH_UI_URL",
    },
];

/// All modules in sidebar order.
pub fn list_modules() -> &'static [ModuleDescriptor] {
    &MODULES
}

/// Module selected when nothing (or an unknown id) is requested.
pub fn default_module() -> &'static ModuleDescriptor {
    &MODULES[0]
}

pub fn find_module(id: &str) -> Option<&'static ModuleDescriptor> {
    ModuleId::parse(id).map(|m| m.descriptor())
}

/// Effective base URL for a module.
///
/// Rules:
/// - A non-empty (trimmed) override is returned verbatim.
/// - Otherwise `<gateway_base>/<id>/`.
pub fn resolve_module_base_url(
    gateway_base: &str,
    descriptor: &ModuleDescriptor,
    override_url: &str,
) -> String {
    let trimmed = override_url.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    format!("{}/{}/", gateway_base, descriptor.id)
}
