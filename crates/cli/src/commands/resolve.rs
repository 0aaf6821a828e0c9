use clap::Args;
use httpscrub_core::{RedactionRule, RedactionTargetType, Settings};
use httpscrub_rules::{resolve, select_for_target};
use url::Url;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// URL to resolve rules for.
    #[arg(long)]
    pub url: Url,
    /// Only show the effective rules for this target
    /// (`query`, `header`, `request` or `response`).
    #[arg(long)]
    pub target: Option<RedactionTargetType>,
}

pub fn run(settings: &Settings, args: &ResolveArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let resolved = resolve(&settings.redactions, &args.url);
    let rules: Vec<RedactionRule> = match args.target {
        Some(target) => select_for_target(&resolved, target),
        None => resolved,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        OutputFormat::Text => {
            let scope = args
                .target
                .map_or_else(String::new, |target| format!(" for target '{target}'"));
            println!("{} rules apply to {}{scope}:", rules.len(), args.url);
            for rule in &rules {
                let action = if rule.remove { "remove" } else { "mask" };
                println!(
                    "  [{action:<6}] {target}: {value}",
                    target = rule.target,
                    value = rule.match_value,
                );
            }
        }
    }
    Ok(())
}
