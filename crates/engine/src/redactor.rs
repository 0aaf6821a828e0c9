use httpscrub_core::{
    MessageKind, NormalizedHttpMessage, RedactionOptions, RedactionRule, RedactionTargetType,
    Settings,
};
use httpscrub_rules::{is_whitelisted, resolve, select_for_target};
use tracing::{debug, warn};
use url::Url;

use crate::body::redact_body_with;
use crate::headers::redact_headers;
use crate::query::redact_query;

/// Conversion into the URL a redacted message should carry.
///
/// Implemented for parsed [`Url`]s and for strings, which are parsed.
pub trait IntoMessageUrl {
    fn into_message_url(self) -> Result<Url, url::ParseError>;
}

impl IntoMessageUrl for Url {
    fn into_message_url(self) -> Result<Url, url::ParseError> {
        Ok(self)
    }
}

impl IntoMessageUrl for &Url {
    fn into_message_url(self) -> Result<Url, url::ParseError> {
        Ok(self.clone())
    }
}

impl IntoMessageUrl for &str {
    fn into_message_url(self) -> Result<Url, url::ParseError> {
        Url::parse(self)
    }
}

impl IntoMessageUrl for String {
    fn into_message_url(self) -> Result<Url, url::ParseError> {
        Url::parse(&self)
    }
}

/// Applies already resolved rules to HTTP messages.
///
/// Stateless apart from its options; one instance can be shared across
/// threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageRedactor {
    options: RedactionOptions,
}

impl MessageRedactor {
    #[must_use]
    pub fn new(options: RedactionOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &RedactionOptions {
        &self.options
    }

    /// Redact `message`, rewriting its URL to `url`.
    ///
    /// `resolved` (from configuration) and `additional` (caller supplied)
    /// rules form one pool; between them only wildcard and removal precedence
    /// applies. Requests get their query, headers and (unless `GET`) body
    /// redacted; responses their headers and body. Messages of unknown kind
    /// are returned unchanged. A `url` that fails to parse is ignored in
    /// favor of the message's own URL.
    #[must_use]
    pub fn redact(
        &self,
        url: impl IntoMessageUrl,
        message: &NormalizedHttpMessage,
        resolved: &[RedactionRule],
        additional: &[RedactionRule],
    ) -> NormalizedHttpMessage {
        let url = url.into_message_url().unwrap_or_else(|e| {
            warn!(error = %e, "cannot parse message URL, keeping the recorded one");
            message.url.clone()
        });
        let pool: Vec<RedactionRule> = resolved.iter().chain(additional).cloned().collect();

        match message.kind {
            MessageKind::Request => self.redact_request(url, message, &pool),
            MessageKind::Response => self.redact_response(message, &pool),
            MessageKind::Unknown => message.clone(),
        }
    }

    /// [`redact`](Self::redact) using the message's own URL.
    #[must_use]
    pub fn redact_message(
        &self,
        message: &NormalizedHttpMessage,
        resolved: &[RedactionRule],
        additional: &[RedactionRule],
    ) -> NormalizedHttpMessage {
        self.redact(&message.url, message, resolved, additional)
    }

    fn redact_request(
        &self,
        mut url: Url,
        message: &NormalizedHttpMessage,
        pool: &[RedactionRule],
    ) -> NormalizedHttpMessage {
        let mut out = message.clone();

        let query_rules = select_for_target(pool, RedactionTargetType::Query);
        if !query_rules.is_empty() {
            let redacted = redact_query(url.query().unwrap_or_default(), &query_rules);
            url.set_query((!redacted.is_empty()).then_some(redacted.as_str()));
            debug!(rules = query_rules.len(), "redacted query");
        }
        out.url = url;

        redact_headers_into(&mut out, pool);

        if message.is_get() && !self.options.redact_get_bodies {
            debug!("skipping GET request body");
        } else {
            self.redact_body_into(
                &mut out,
                pool,
                RedactionTargetType::RequestBody,
                message.content_type(),
            );
        }
        out
    }

    fn redact_response(
        &self,
        message: &NormalizedHttpMessage,
        pool: &[RedactionRule],
    ) -> NormalizedHttpMessage {
        let mut out = message.clone();
        redact_headers_into(&mut out, pool);
        self.redact_body_into(
            &mut out,
            pool,
            RedactionTargetType::ResponseBody,
            message.content_type(),
        );
        out
    }

    /// `content_type` must come from the message as received: header rules
    /// may already have masked or removed `Content-Type` on `out`.
    fn redact_body_into(
        &self,
        out: &mut NormalizedHttpMessage,
        pool: &[RedactionRule],
        target: RedactionTargetType,
        content_type: Option<&str>,
    ) {
        if out.body.is_empty() {
            return;
        }
        let rules = select_for_target(pool, target);
        if rules.is_empty() {
            return;
        }
        out.body = redact_body_with(
            &out.body,
            &rules,
            content_type,
            self.options.unknown_content,
        );
        debug!(
            body_target = %target,
            rules = rules.len(),
            content_type = content_type.unwrap_or_default(),
            "redacted body"
        );
    }
}

fn redact_headers_into(out: &mut NormalizedHttpMessage, pool: &[RedactionRule]) {
    let rules = select_for_target(pool, RedactionTargetType::Header);
    if rules.is_empty() {
        return;
    }
    out.headers = redact_headers(&out.headers, &rules);
    debug!(rules = rules.len(), headers = out.headers.len(), "redacted headers");
}

/// Redact `message` with default options. See [`MessageRedactor::redact`].
#[must_use]
pub fn redact(
    url: impl IntoMessageUrl,
    message: &NormalizedHttpMessage,
    resolved: &[RedactionRule],
    additional: &[RedactionRule],
) -> NormalizedHttpMessage {
    MessageRedactor::default().redact(url, message, resolved, additional)
}

/// A redactor bound to a settings document: rules are resolved from the
/// configured host/path tree for each message.
#[derive(Debug, Clone)]
pub struct ConfiguredRedactor {
    settings: Settings,
    redactor: MessageRedactor,
}

impl ConfiguredRedactor {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        let redactor = MessageRedactor::new(settings.options);
        Self { settings, redactor }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Rules the configuration assigns to `url`.
    #[must_use]
    pub fn rules_for(&self, url: &Url) -> Vec<RedactionRule> {
        resolve(&self.settings.redactions, url)
    }

    /// Resolve rules for the message URL and redact it, adding `additional`
    /// to the resolved pool.
    #[must_use]
    pub fn redact(
        &self,
        message: &NormalizedHttpMessage,
        additional: &[RedactionRule],
    ) -> NormalizedHttpMessage {
        let resolved = self.rules_for(&message.url);
        self.redactor.redact_message(message, &resolved, additional)
    }

    /// Whether traffic to `url` should be logged at all. An empty whitelist
    /// admits everything.
    #[must_use]
    pub fn should_log(&self, url: &Url) -> bool {
        self.settings.whitelist.is_empty() || is_whitelisted(&self.settings.whitelist, url)
    }
}
