/*
Targets in src/surfaces.rs:
- surface_base_root: empty override -> root; known surface suffix -> prefix; else one '/' stripped.
- resolve_surface_urls: `<base>/<surface>/` for all four surfaces.
*/
use research_console::{resolve_surface_urls, surface_base_root, SurfaceId};

fn url_for(root: &str, override_url: &str, id: SurfaceId) -> String {
    resolve_surface_urls(root, override_url)
        .into_iter()
        .find(|(sid, _)| *sid == id)
        .map(|(_, url)| url)
        .expect("surface present")
}

#[test]
fn unit_plain_override_strips_single_trailing_slash() {
    assert_eq!(
        surface_base_root("https://gw.test", "https://x.test/foo/bar/"),
        "https://x.test/foo/bar"
    );
    assert_eq!(
        url_for("https://gw.test", "https://x.test/foo/bar/", SurfaceId::Workbench),
        "https://x.test/foo/bar/workbench/"
    );
}

#[test]
fn unit_override_pointing_at_a_surface_uses_its_parent() {
    assert_eq!(
        surface_base_root("https://gw.test", "https://x.test/tagger/workbench"),
        "https://x.test/tagger"
    );
    assert_eq!(
        url_for("https://gw.test", "https://x.test/tagger/workbench", SurfaceId::Admin),
        "https://x.test/tagger/admin/"
    );
    assert_eq!(
        resolve_surface_urls("https://gw.test", "https://x.test/tagger/workbench/"),
        resolve_surface_urls("https://gw.test", "https://x.test/tagger/workbench"),
        "trailing slash after the surface segment does not change the result"
    );
}

#[test]
fn unit_empty_override_uses_gateway_root() {
    assert_eq!(
        url_for("https://gw.test", "", SurfaceId::Monitor),
        "https://gw.test/monitor/"
    );
    assert_eq!(
        url_for("https://gw.test", "   ", SurfaceId::Explorer),
        "https://gw.test/explorer/"
    );
}

#[test]
fn unit_surface_match_is_anchored_and_exact() {
    assert_eq!(
        surface_base_root("https://gw.test", "https://x.test/workbenchy/"),
        "https://x.test/workbenchy"
    );
    assert_eq!(
        url_for("https://gw.test", "https://x.test/workbenchy/", SurfaceId::Workbench),
        "https://x.test/workbenchy/workbench/"
    );
    assert_eq!(
        surface_base_root("https://gw.test", "https://x.test/workbench-extra/"),
        "https://x.test/workbench-extra"
    );
}

#[test]
fn unit_only_one_trailing_slash_is_stripped() {
    assert_eq!(
        surface_base_root("https://gw.test", "https://x.test/foo//"),
        "https://x.test/foo/"
    );
    assert_eq!(
        url_for("https://gw.test", "https://x.test/foo//", SurfaceId::Admin),
        "https://x.test/foo//admin/"
    );
}

#[test]
fn unit_resolution_is_idempotent_and_ordered() {
    let a = resolve_surface_urls("https://gw.test", " https://x.test/tagger/monitor/ ");
    let b = resolve_surface_urls("https://gw.test", " https://x.test/tagger/monitor/ ");
    assert_eq!(a, b);
    let ids: Vec<SurfaceId> = a.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, SurfaceId::ALL.to_vec());
    assert!(a.iter().all(|(id, url)| url == &format!("https://x.test/tagger/{}/", id)));
}
