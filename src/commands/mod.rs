use std::process::ExitCode;

use research_console::{
    log_error_stderr, log_info_stderr, log_warn_stderr, page_origin, probe_url, resolve_all,
    ModuleId, ShellConfig, ShellError, SurfaceId,
};

use crate::banner::print_startup_banner;
use crate::cli::Cli;

pub(crate) fn run_modules(
    config: &ShellConfig,
    origin: Option<&str>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let origin = page_origin(origin);
    let set = resolve_all(config, &origin);
    if json {
        println!("{}", serde_json::to_string_pretty(&set.modules)?);
        return Ok(ExitCode::SUCCESS);
    }
    for m in &set.modules {
        let d = m.id.descriptor();
        println!(
            "{:<10} {:<16} {:<18} {:<9} {}",
            m.id, d.label, m.config_key, m.source, m.url
        );
    }
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn run_surfaces(
    config: &ShellConfig,
    origin: Option<&str>,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let origin = page_origin(origin);
    let set = resolve_all(config, &origin);
    if json {
        println!("{}", serde_json::to_string_pretty(&set.surfaces)?);
        return Ok(ExitCode::SUCCESS);
    }
    for s in &set.surfaces {
        println!("{:<10} {:<10} {}", s.id, s.id.descriptor().title, s.url);
    }
    Ok(ExitCode::SUCCESS)
}

/// Effective URL for `module` (and `surface`, tagger only).
pub(crate) fn resolve_one(
    config: &ShellConfig,
    origin: &str,
    module: &str,
    surface: Option<&str>,
) -> Result<String, ShellError> {
    let id = ModuleId::parse(module).ok_or_else(|| {
        ShellError::Usage(format!(
            "unknown module '{}': expected one of graphical, tagger, article, graph",
            module.trim()
        ))
    })?;
    let set = resolve_all(config, origin);
    match (id, surface) {
        (_, None) => Ok(set.module_url(id).to_string()),
        (ModuleId::Tagger, Some(s)) => {
            let sid = SurfaceId::parse(s).ok_or_else(|| {
                ShellError::Usage(format!(
                    "unknown surface '{}': expected one of workbench, monitor, explorer, admin",
                    s.trim()
                ))
            })?;
            Ok(set.surface_url(sid).to_string())
        }
        (other, Some(_)) => Err(ShellError::Usage(format!(
            "module '{other}' has no surfaces; only tagger does"
        ))),
    }
}

pub(crate) fn run_resolve(
    config: &ShellConfig,
    origin: Option<&str>,
    module: &str,
    surface: Option<&str>,
) -> ExitCode {
    let use_err = research_console::color_enabled_stderr();
    let origin = page_origin(origin);
    match resolve_one(config, &origin, module, surface) {
        Ok(url) => {
            if url.is_empty() {
                if let Some(d) = ModuleId::parse(module).map(|m| m.descriptor()) {
                    log_warn_stderr(
                        use_err,
                        &format!("research-console: {} is not configured; set {}", d.id, d.config_key),
                    );
                }
            }
            println!("{url}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_error_stderr(use_err, &format!("research-console: {e}"));
            ExitCode::from(research_console::exit_code_for_shell_error(&e))
        }
    }
}

pub(crate) fn run_doctor(config: &ShellConfig, origin: Option<&str>, timeout_ms: u64) -> ExitCode {
    let use_err = research_console::color_enabled_stderr();
    let origin = page_origin(origin);
    let set = resolve_all(config, &origin);
    log_info_stderr(use_err, "research-console doctor");
    eprintln!();
    eprintln!("  version: v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "  build:   {} / {}",
        option_env!("RESEARCH_CONSOLE_BUILD_DATE").unwrap_or("unknown"),
        option_env!("RESEARCH_CONSOLE_BUILD_TARGET").unwrap_or("unknown")
    );
    eprintln!(
        "  gateway: {} ({})",
        set.gateway,
        config.gateway_source().as_str()
    );
    eprintln!();

    let mut unreachable = 0usize;
    for m in &set.modules {
        let outcome = probe_url(&m.url, timeout_ms);
        if outcome != research_console::ProbeOutcome::Reachable {
            unreachable += 1;
        }
        eprintln!(
            "  {:<10} {:<9} {} [{}]",
            m.id,
            m.source,
            m.url,
            outcome.as_str()
        );
    }
    eprintln!();
    for s in &set.surfaces {
        eprintln!("  tagger/{:<10} {}", s.id, s.url);
    }
    eprintln!();

    if unreachable > 0 {
        log_warn_stderr(
            use_err,
            &format!("doctor: {unreachable} module endpoint(s) not reachable from this host."),
        );
    } else {
        log_info_stderr(use_err, "doctor: all module endpoints reachable.");
    }
    ExitCode::SUCCESS
}

pub(crate) fn run_serve(cli: &Cli, config: ShellConfig, bind: Option<&str>) -> ExitCode {
    let use_err = research_console::color_enabled_stderr();
    let bind = research_console::bind_address(bind);
    let server = match research_console::start_server(config.clone(), &bind) {
        Ok(s) => s,
        Err(e) => {
            let e = ShellError::from(e);
            log_error_stderr(use_err, &format!("research-console: {e}"));
            return ExitCode::from(research_console::exit_code_for_shell_error(&e));
        }
    };
    let addr = server.local_addr();
    if !cli.quiet {
        let fallback = format!("http://{addr}");
        print_startup_banner(&config, config.gateway_or(&fallback));
    }
    log_info_stderr(use_err, &format!("research-console: serving on http://{addr}/"));
    server.join();
    ExitCode::SUCCESS
}
