//! Shell page rendering: sidebar navigation, header card and the active module's embedding.
//!
//! Markup only; styling is left to whatever stylesheet the deployment serves alongside.

use crate::registry::{default_module, list_modules, ModuleDescriptor, ModuleId};
use crate::resolve::ResolvedUrlSet;
use crate::surfaces::{list_surfaces, SurfaceId};
use crate::util::html_escape;

pub const BRAND_TITLE: &str = "Image Analyzer";
pub const BRAND_SUBTITLE: &str = "Unified Research Console";

/// Active module and tagger surface for one render.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Selection {
    pub module: ModuleId,
    pub surface: SurfaceId,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            module: default_module().id,
            surface: SurfaceId::Workbench,
        }
    }
}

impl Selection {
    /// Pick `module` / `surface` from query pairs; unknown values keep the defaults.
    pub fn from_query(pairs: &[(String, String)]) -> Selection {
        let mut sel = Selection::default();
        for (k, v) in pairs {
            match k.as_str() {
                "module" => {
                    if let Some(m) = ModuleId::parse(v) {
                        sel.module = m;
                    }
                }
                "surface" => {
                    if let Some(s) = SurfaceId::parse(v) {
                        sel.surface = s;
                    }
                }
                _ => {}
            }
        }
        sel
    }
}

/// What the embedding surface shows for a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Embed {
    Frame { title: String, url: String },
    /// No URL available: prompt naming the configuration key to set.
    Unconfigured { title: String, config_key: &'static str },
}

pub fn embed_for(title: &str, url: &str, config_key: &'static str) -> Embed {
    if url.trim().is_empty() {
        Embed::Unconfigured {
            title: title.to_string(),
            config_key,
        }
    } else {
        Embed::Frame {
            title: title.to_string(),
            url: url.to_string(),
        }
    }
}

fn render_embed(embed: &Embed) -> String {
    match embed {
        Embed::Frame { title, url } => {
            let url = html_escape(url);
            format!(
                concat!(
                    "<div class=\"panel-actions\"><a class=\"panel-link\" href=\"{url}\" target=\"_blank\" rel=\"noreferrer\">Open in new tab</a></div>\n",
                    "<div class=\"module-shell\">\n",
                    "<div class=\"module-loading\">Loading module\u{2026}</div>\n",
                    "<iframe class=\"module-iframe\" title=\"{title} module\" src=\"{url}\" ",
                    "onload=\"this.parentElement.classList.add('is-loaded')\"></iframe>\n",
                    "</div>\n"
                ),
                url = url,
                title = html_escape(title),
            )
        }
        Embed::Unconfigured { config_key, .. } => format!(
            concat!(
                "<div class=\"empty-state\">\n",
                "<div class=\"empty-icon\">Configure</div>\n",
                "<div class=\"empty-text\">Set the module UI URL in `{key}` to embed this tool.</div>\n",
                "</div>\n"
            ),
            key = html_escape(config_key),
        ),
    }
}

fn render_surface_tabs(set: &ResolvedUrlSet, active: SurfaceId) -> String {
    let mut out = String::from("<nav class=\"surface-tabs\">\n");
    for s in list_surfaces() {
        let class = if s.id == active {
            "surface-tab is-active"
        } else {
            "surface-tab"
        };
        out.push_str(&format!(
            "<a class=\"{class}\" href=\"/?module=tagger&amp;surface={id}\" title=\"{desc}\" data-url=\"{url}\">{title}</a>\n",
            class = class,
            id = s.id,
            desc = html_escape(s.description),
            url = html_escape(set.surface_url(s.id)),
            title = html_escape(s.title),
        ));
    }
    out.push_str("</nav>\n");
    out
}

/// Body of the module panel for the selection.
fn render_module(set: &ResolvedUrlSet, sel: Selection) -> String {
    let d = sel.module.descriptor();
    match sel.module {
        ModuleId::Tagger => {
            let surface = sel.surface.descriptor();
            let title = format!("{} {}", d.title, surface.title);
            let embed = embed_for(&title, set.surface_url(sel.surface), d.config_key);
            format!(
                "{}{}",
                render_surface_tabs(set, sel.surface),
                render_embed(&embed)
            )
        }
        ModuleId::Graphical | ModuleId::Article | ModuleId::Graph => {
            render_embed(&embed_for(d.title, set.module_url(d.id), d.config_key))
        }
    }
}

fn render_navigation(active: ModuleId, gateway: &str) -> String {
    let mut out = String::new();
    out.push_str("<aside class=\"shell-sidebar\">\n");
    out.push_str(&format!(
        "<div class=\"brand-mark\"><div class=\"brand-title\">{}</div><div class=\"brand-subtitle\">{}</div></div>\n",
        BRAND_TITLE, BRAND_SUBTITLE
    ));
    out.push_str("<nav class=\"nav-list\">\n");
    for item in list_modules() {
        out.push_str(&render_nav_item(item, item.id == active));
    }
    out.push_str("</nav>\n");
    out.push_str(&format!(
        "<div class=\"sidebar-footer\"><div class=\"status-chip\">Gateway: {}</div></div>\n",
        html_escape(gateway)
    ));
    out.push_str("</aside>\n");
    out
}

fn render_nav_item(item: &ModuleDescriptor, active: bool) -> String {
    format!(
        "<a class=\"{class}\" href=\"/?module={id}\"><span class=\"nav-icon\" aria-hidden=\"true\">{icon}</span><span class=\"nav-label\">{label}</span><span class=\"nav-meta\">{meta}</span></a>\n",
        class = if active { "nav-item is-active" } else { "nav-item" },
        id = item.id,
        icon = html_escape(item.icon),
        label = html_escape(item.label),
        meta = html_escape(item.meta),
    )
}

fn render_header(d: &ModuleDescriptor, gateway: &str) -> String {
    format!(
        concat!(
            "<header class=\"shell-header\">\n",
            "<div><div class=\"header-eyebrow\">{eyebrow}</div><h1>{title}</h1><p>{desc}</p></div>\n",
            "<dl class=\"header-card\">",
            "<dt>Gateway</dt><dd class=\"mono\">{gateway}</dd>",
            "<dt>API Prefix</dt><dd class=\"mono\">{api}</dd>",
            "<dt>Status</dt><dd class=\"status-pill\">Ready</dd>",
            "</dl>\n",
            "</header>\n"
        ),
        eyebrow = BRAND_SUBTITLE,
        title = html_escape(d.title),
        desc = html_escape(d.description),
        gateway = html_escape(gateway),
        api = html_escape(&d.api_prefix()),
    )
}

/// Full HTML document for the shell with `sel` active.
pub fn render_shell(set: &ResolvedUrlSet, sel: Selection) -> String {
    let d = sel.module.descriptor();
    let mut out = String::with_capacity(4096);
    out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>{} | {}</title>\n</head>\n<body>\n<div class=\"shell\">\n",
        html_escape(d.title),
        BRAND_SUBTITLE
    ));
    out.push_str(&render_navigation(sel.module, &set.gateway));
    out.push_str("<main class=\"shell-main\">\n");
    out.push_str(&render_header(d, &set.gateway));
    out.push_str(&format!(
        "<section class=\"module-frame\" data-module=\"{}\">\n",
        d.id
    ));
    out.push_str(&render_module(set, sel));
    out.push_str("</section>\n</main>\n</div>\n</body>\n</html>\n");
    out
}
