use std::fmt::Write as _;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use httpscrub_core::{MessageKind, NormalizedHttpMessage, RedactionRule, Settings};
use httpscrub_engine::ConfiguredRedactor;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Message file (JSON). `-` reads from stdin.
    #[arg(long, default_value = "-")]
    pub message: PathBuf,
    /// Extra rule in `type:value[:remove]` form. Repeatable.
    #[arg(long = "rule")]
    pub rules: Vec<RedactionRule>,
}

pub fn run(settings: Settings, args: &RedactArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let raw = read_input(&args.message)?;
    let message: NormalizedHttpMessage =
        serde_json::from_str(&raw).context("message is not a valid normalized HTTP message")?;

    let redactor = ConfiguredRedactor::new(settings);
    let redacted = redactor.redact(&message, &args.rules);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&redacted)?),
        OutputFormat::Text => print!("{}", render(&redacted)),
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading message from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Render a message roughly as it would appear on the wire.
fn render(message: &NormalizedHttpMessage) -> String {
    let mut out = String::new();
    match message.kind {
        MessageKind::Request => {
            let method = message.method.as_deref().unwrap_or("-");
            let _ = writeln!(out, "{method} {}", message.url);
        }
        MessageKind::Response => {
            let status = message
                .status_code
                .map_or_else(|| "-".to_owned(), |code| code.to_string());
            let _ = writeln!(out, "{status} {}", message.url);
        }
        MessageKind::Unknown => {
            let _ = writeln!(out, "? {}", message.url);
        }
    }
    for (name, values) in &message.headers {
        for value in values {
            let _ = writeln!(out, "{name}: {value}");
        }
    }
    if !message.body.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", String::from_utf8_lossy(&message.body));
    }
    out
}
