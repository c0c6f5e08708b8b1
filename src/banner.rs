use research_console::{ShellConfig, BRAND_SUBTITLE};

pub(crate) fn print_startup_banner(config: &ShellConfig, gateway: &str) {
    let version = env!("CARGO_PKG_VERSION");
    let built = option_env!("RESEARCH_CONSOLE_BUILD_DATE").unwrap_or("unknown");
    let use_err = research_console::color_enabled_stderr();
    eprintln!();
    eprintln!("────────────────────────────────────────────────────────────────");
    eprintln!(
        "{}",
        research_console::paint(
            use_err,
            "\x1b[36;1m",
            &format!(" {BRAND_SUBTITLE} v{version} (built {built})")
        )
    );
    eprintln!("────────────────────────────────────────────────────────────────");
    eprintln!(
        "  gateway: {} ({})",
        gateway,
        config.gateway_source().as_str()
    );
    for key in config.unset_keys() {
        eprintln!("  {key}: unset, using gateway default");
    }
    eprintln!();
}
