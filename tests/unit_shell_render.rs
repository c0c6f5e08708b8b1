/*
Targets in src/shell.rs:
- Selection::from_query: defaults and unknown ids.
- embed_for: empty URL renders the configuration prompt naming the key.
- render_shell: navigation order, active item, tagger surface tabs, escaping.
*/
use std::collections::HashMap;

use research_console::{
    embed_for, render_shell, resolve_all, Embed, ModuleId, Selection, ShellConfig, SurfaceId,
};

fn q(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn config_from(pairs: &[(&str, &str)]) -> ShellConfig {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ShellConfig::from_lookup(|k| map.get(k).cloned())
}

#[test]
fn unit_selection_defaults_and_unknown_ids() {
    let sel = Selection::from_query(&[]);
    assert_eq!(sel.module, ModuleId::Graphical);
    assert_eq!(sel.surface, SurfaceId::Workbench);

    let sel = Selection::from_query(&q(&[("module", "tagger"), ("surface", "admin")]));
    assert_eq!(sel.module, ModuleId::Tagger);
    assert_eq!(sel.surface, SurfaceId::Admin);

    let sel = Selection::from_query(&q(&[("module", "nope"), ("surface", "root")]));
    assert_eq!(sel, Selection::default());
}

#[test]
fn unit_empty_url_prompts_for_config_key() {
    assert_eq!(
        embed_for("Article Eater", "  ", "ARTICLE_UI_URL"),
        Embed::Unconfigured {
            title: "Article Eater".to_string(),
            config_key: "ARTICLE_UI_URL"
        }
    );
    assert!(matches!(
        embed_for("Article Eater", "https://ae.test/", "ARTICLE_UI_URL"),
        Embed::Frame { .. }
    ));

    let cfg = config_from(&[]);
    let set = resolve_all(&cfg, "");
    let html = render_shell(
        &set,
        Selection {
            module: ModuleId::Article,
            surface: SurfaceId::Workbench,
        },
    );
    // With neither gateway nor origin the default is still "/article/", so a frame is rendered.
    assert!(html.contains("src=\"/article/\""));
}

#[test]
fn unit_shell_lists_modules_and_marks_active() {
    let cfg = config_from(&[("GATEWAY_URL", "https://gw.test")]);
    let set = resolve_all(&cfg, "http://unused.local");
    let html = render_shell(
        &set,
        Selection {
            module: ModuleId::Graph,
            surface: SurfaceId::Workbench,
        },
    );
    let order: Vec<usize> = ["?module=graphical", "?module=tagger", "?module=article", "?module=graph\""]
        .iter()
        .map(|needle| html.find(needle).expect(needle))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "sidebar order");
    assert!(html.contains("class=\"nav-item is-active\" href=\"/?module=graph\""));
    assert!(html.contains("<h1>Knowledge Graph</h1>"));
    assert!(html.contains("/api/v1/graph"));
    assert!(html.contains("src=\"https://gw.test/graph/\""));
    assert!(html.contains("Open in new tab"));
    assert!(html.contains("Gateway: https://gw.test"));
}

#[test]
fn unit_tagger_embeds_selected_surface() {
    let cfg = config_from(&[("TAGGER_UI_URL", "https://x.test/tagger/workbench")]);
    let set = resolve_all(&cfg, "http://console.local");
    let html = render_shell(
        &set,
        Selection {
            module: ModuleId::Tagger,
            surface: SurfaceId::Monitor,
        },
    );
    assert!(html.contains("src=\"https://x.test/tagger/monitor/\""));
    for id in SurfaceId::ALL {
        assert!(html.contains(&format!("surface={}", id)));
    }
    assert!(html.contains("class=\"surface-tab is-active\" href=\"/?module=tagger&amp;surface=monitor\""));
}

#[test]
fn unit_urls_are_escaped_in_markup() {
    let cfg = config_from(&[("GRAPHICAL_UI_URL", "https://gm.test/?a=1&b=\"x\"")]);
    let set = resolve_all(&cfg, "http://console.local");
    let html = render_shell(&set, Selection::default());
    assert!(html.contains("src=\"https://gm.test/?a=1&amp;b=&quot;x&quot;\""));
    assert!(!html.contains("b=\"x\""));
}
