//! Image tagger surfaces: expand one configured tagger URL into the four sibling surface URLs.
//!
//! Rules:
//! - An empty override resolves every surface under the gateway root.
//! - An override that already ends in `/<surface>` or `/<surface>/` is reduced to the prefix
//!   before that segment, so pointing the config at any one surface yields all four.
//! - Any other override is used as the base with a single trailing '/' removed.

use serde::Serialize;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceId {
    Workbench,
    Monitor,
    Explorer,
    Admin,
}

impl SurfaceId {
    pub const ALL: [SurfaceId; 4] = [
        SurfaceId::Workbench,
        SurfaceId::Monitor,
        SurfaceId::Explorer,
        SurfaceId::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceId::Workbench => "workbench",
            SurfaceId::Monitor => "monitor",
            SurfaceId::Explorer => "explorer",
            SurfaceId::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<SurfaceId> {
        SurfaceId::ALL.into_iter().find(|id| id.as_str() == s.trim())
    }

    pub fn descriptor(&self) -> &'static SurfaceDescriptor {
        &SURFACES[*self as usize]
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceDescriptor {
    pub id: SurfaceId,
    pub title: &'static str,
    pub description: &'static str,
}

static SURFACES: [SurfaceDescriptor; 4] = [
    SurfaceDescriptor {
        id: SurfaceId::Workbench,
        title: "Workbench",
        description: "Tag images and review attribute suggestions.",
    },
    SurfaceDescriptor {
        id: SurfaceId::Monitor,
        title: "Monitor",
        description: "Follow labeling throughput and model runs.",
    },
    SurfaceDescriptor {
        id: SurfaceId::Explorer,
        title: "Explorer",
        description: "Browse the tagged corpus and its attributes.",
    },
    SurfaceDescriptor {
        id: SurfaceId::Admin,
        title: "Admin",
        description: "Manage users, label sets, and exports.",
    },
];

pub fn list_surfaces() -> &'static [SurfaceDescriptor] {
    &SURFACES
}

/// Prefix before a trailing `/<surface>` or `/<surface>/` segment, if the URL ends in one.
fn strip_surface_suffix(url: &str) -> Option<&str> {
    let body = url.strip_suffix('/').unwrap_or(url);
    SurfaceId::ALL.iter().find_map(|id| {
        body.strip_suffix(id.as_str())
            .and_then(|rest| rest.strip_suffix('/'))
    })
}

/// Base every surface URL hangs off.
///
/// `root` is the gateway (or page origin); `override_url` is the tagger module's raw override.
pub fn surface_base_root(root: &str, override_url: &str) -> String {
    let normalized = override_url.trim();
    if normalized.is_empty() {
        return root.to_string();
    }
    if let Some(prefix) = strip_surface_suffix(normalized) {
        return prefix.to_string();
    }
    normalized
        .strip_suffix('/')
        .unwrap_or(normalized)
        .to_string()
}

pub fn surface_url(base_root: &str, surface: SurfaceId) -> String {
    format!("{}/{}/", base_root, surface)
}

/// Resolve all four surfaces, in declaration order.
pub fn resolve_surface_urls(root: &str, override_url: &str) -> Vec<(SurfaceId, String)> {
    let base = surface_base_root(root, override_url);
    SurfaceId::ALL
        .into_iter()
        .map(|id| (id, surface_url(&base, id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_surface_suffix_requires_whole_segment() {
        assert_eq!(
            strip_surface_suffix("https://x.test/tagger/monitor"),
            Some("https://x.test/tagger")
        );
        assert_eq!(
            strip_surface_suffix("https://x.test/tagger/explorer/"),
            Some("https://x.test/tagger")
        );
        assert_eq!(strip_surface_suffix("https://x.test/superadmin/"), None);
        assert_eq!(strip_surface_suffix("https://x.test/workbenchy/"), None);
        assert_eq!(strip_surface_suffix("https://x.test/admin//"), None);
    }

    #[test]
    fn test_surface_segment_in_middle_is_not_a_match() {
        assert_eq!(
            surface_base_root("https://gw.test", "https://x.test/workbench/v2/"),
            "https://x.test/workbench/v2"
        );
    }

    #[test]
    fn test_parse_round_trips_known_ids() {
        for id in SurfaceId::ALL {
            assert_eq!(SurfaceId::parse(id.as_str()), Some(id));
            assert_eq!(id.descriptor().id, id);
        }
        assert_eq!(SurfaceId::parse("Admin"), None);
    }
}
