//! Command implementations

use colored::Colorize;
use gcm_core::trace::redact_url;
use gcm_core::{
    ProxyConfiguration, ProxySourceKind, ResolutionContext, Settings, TraceSetting,
    scope_candidates,
};
use serde::Serialize;

use crate::error::Result;

/// Named settings, as reported by `flags`
#[derive(Debug, Serialize)]
pub struct FlagsReport {
    pub debug: bool,
    pub terminal_prompts: bool,
    pub trace: TraceSetting,
    pub trace_secrets: bool,
    pub provider: Option<String>,
    pub authority: Option<String>,
}

impl FlagsReport {
    pub fn resolve(settings: &Settings<'_>) -> Result<Self> {
        Ok(Self {
            debug: settings.is_debugging_enabled()?,
            terminal_prompts: settings.is_terminal_prompts_enabled(),
            trace: settings.tracing_enabled(),
            trace_secrets: settings.is_secret_tracing_enabled()?,
            provider: settings.provider_override()?,
            authority: settings.legacy_authority_override()?,
        })
    }
}

/// Effective proxy, as reported by `proxy`
#[derive(Debug, Default, Serialize)]
pub struct ProxyReport {
    /// Proxy URL with its password masked
    pub url: Option<String>,
    pub source: Option<ProxySourceKind>,
    pub origin: Option<String>,
    pub deprecated: bool,
}

impl From<Option<&ProxyConfiguration>> for ProxyReport {
    fn from(proxy: Option<&ProxyConfiguration>) -> Self {
        match proxy {
            Some(proxy) => Self {
                url: Some(redact_url(&proxy.url)),
                source: Some(proxy.source),
                origin: Some(proxy.origin.clone()),
                deprecated: proxy.is_deprecated(),
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SettingReport<'a> {
    section: &'a str,
    property: &'a str,
    value: Option<&'a str>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn display_option(value: Option<&str>) -> String {
    match value {
        Some(value) => value.cyan().to_string(),
        None => "(not set)".dimmed().to_string(),
    }
}

/// Run the flags command
pub fn run_flags(settings: &Settings<'_>, json: bool) -> Result<()> {
    let report = FlagsReport::resolve(settings)?;
    if json {
        return print_json(&report);
    }

    let trace = match (&report.trace.value, report.trace.enabled) {
        (None, _) => "(not set)".dimmed().to_string(),
        (Some(value), true) => format!("{} ({})", "on".green(), value),
        (Some(value), false) => format!("{} ({})", "off".dimmed(), value),
    };

    println!("{}", "Settings".bold());
    println!();
    println!("{}:            {}", "Debug".dimmed(), report.debug);
    println!("{}: {}", "Terminal prompts".dimmed(), report.terminal_prompts);
    println!("{}:            {}", "Trace".dimmed(), trace);
    println!("{}:    {}", "Trace secrets".dimmed(), report.trace_secrets);
    println!("{}:         {}", "Provider".dimmed(), display_option(report.provider.as_deref()));
    println!("{}:        {}", "Authority".dimmed(), display_option(report.authority.as_deref()));

    Ok(())
}

/// Run the proxy command
pub fn run_proxy(settings: &Settings<'_>, json: bool) -> Result<()> {
    let proxy = settings.proxy_configuration()?;
    let report = ProxyReport::from(proxy.as_ref());

    if let Some(proxy) = &proxy
        && proxy.is_deprecated()
    {
        eprintln!(
            "{}: proxy is configured with the deprecated setting '{}'; use http.proxy or HTTPS_PROXY/HTTP_PROXY instead",
            "warning".yellow().bold(),
            proxy.origin
        );
    }

    if json {
        return print_json(&report);
    }

    match (&report.url, &report.origin) {
        (Some(url), Some(origin)) => {
            println!("{}:    {}", "Proxy".dimmed(), url.cyan());
            println!("{}:  {}", "Origin".dimmed(), origin);
        }
        _ => println!("{}", "No proxy configured".dimmed()),
    }

    Ok(())
}

/// Run the get command
///
/// Returns whether the setting was found.
pub fn run_get(
    settings: &Settings<'_>,
    envar: Option<&str>,
    section: &str,
    property: &str,
    json: bool,
) -> Result<bool> {
    let value = settings.try_get_setting(envar, section, property)?;

    if json {
        print_json(&SettingReport {
            section,
            property,
            value: value.as_deref(),
        })?;
    } else if let Some(value) = &value {
        println!("{value}");
    }

    Ok(value.is_some())
}

/// Run the values command
pub fn run_values(
    settings: &Settings<'_>,
    envar: Option<&str>,
    section: &str,
    property: &str,
    json: bool,
) -> Result<()> {
    let values = settings.get_setting_values(envar, section, property)?;
    if json {
        return print_json(&values);
    }

    for value in &values {
        println!("{value}");
    }
    Ok(())
}

/// Run the scopes command
pub fn run_scopes(context: &ResolutionContext, json: bool) -> Result<()> {
    let candidates = scope_candidates(context.remote_url());
    if json {
        return print_json(&candidates);
    }

    for candidate in &candidates {
        let scope = match &candidate.scope {
            Some(scope) => scope.cyan().to_string(),
            None => "(unscoped)".dimmed().to_string(),
        };
        println!("{:>3}  {}", candidate.rank, scope);
    }
    Ok(())
}
