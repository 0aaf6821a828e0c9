use clap::Args;
use httpscrub_core::Settings;
use httpscrub_engine::ConfiguredRedactor;
use url::Url;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// URL to check against the whitelist.
    #[arg(long)]
    pub url: Url,
}

pub fn run(settings: Settings, args: &CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let redactor = ConfiguredRedactor::new(settings);
    let log = redactor.should_log(&args.url);

    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "url": args.url.as_str(), "log": log })
        ),
        OutputFormat::Text => {
            let verdict = if log { "logged" } else { "not logged" };
            println!("{}: {verdict}", args.url);
        }
    }
    Ok(())
}
