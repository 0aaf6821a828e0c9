use std::path::Path;

use httpscrub_core::Settings;

use crate::OutputFormat;

pub fn run(settings: &Settings, path: Option<&Path>, format: &OutputFormat) -> anyhow::Result<()> {
    let Some(path) = path else {
        anyhow::bail!("no settings file given (use --config or HTTPSCRUB_CONFIG)");
    };

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "path": path.display().to_string(),
                "hosts": settings.redactions.hosts().len(),
                "rules": settings.redactions.rule_count(),
                "whitelist": settings.whitelist.len(),
                "options": settings.options,
            })
        ),
        OutputFormat::Text => {
            println!("{} is valid.", path.display());
            println!(
                "  {} host entries, {} rules, {} whitelist entries",
                settings.redactions.hosts().len(),
                settings.redactions.rule_count(),
                settings.whitelist.len(),
            );
            println!(
                "  redact GET bodies: {}, unknown content: {:?}",
                settings.options.redact_get_bodies, settings.options.unknown_content,
            );
        }
    }
    Ok(())
}
