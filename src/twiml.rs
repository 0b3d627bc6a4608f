//! TwiML rendering for turn decisions
//!
//! The provider reads the webhook reply as a `<Response>` document: a
//! `<Gather>` wrapping the spoken prompt keeps the call listening, while a
//! trailing `<Hangup/>` ends it.

use crate::conversation::{Announcement, GatherConfig, TurnDecision};

pub const CONTENT_TYPE: &str = "text/xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Render a decision as a complete TwiML document
pub fn render(decision: &TurnDecision) -> String {
    let mut out = String::with_capacity(512);
    out.push_str(XML_DECLARATION);
    out.push_str("<Response>");

    match decision {
        TurnDecision::Gather { prompt, config } => render_gather(&mut out, prompt, config),
        TurnDecision::Hangup { announcements } => {
            for announcement in announcements {
                render_announcement(&mut out, announcement);
            }
            out.push_str("<Hangup/>");
        }
    }

    out.push_str("</Response>");
    out
}

fn render_gather(out: &mut String, prompt: &str, config: &GatherConfig) {
    out.push_str(&format!(
        r#"<Gather input="{}" timeout="{}" speechTimeout="{}" speechModel="{}" enhanced="{}" language="{}" action="{}" method="{}">"#,
        escape(&config.input),
        config.timeout_secs,
        escape(&config.speech_timeout),
        escape(&config.speech_model),
        config.enhanced,
        escape(&config.language),
        escape(&config.action),
        escape(&config.method),
    ));
    out.push_str(&format!(
        r#"<Say voice="{}" language="{}">{}</Say>"#,
        escape(&config.voice.voice),
        escape(&config.voice.language),
        escape(prompt),
    ));
    out.push_str("</Gather>");
}

fn render_announcement(out: &mut String, announcement: &Announcement) {
    match announcement {
        Announcement::Say { text } => {
            out.push_str(&format!("<Say>{}</Say>", escape(text)));
        }
        Announcement::Pause { seconds } => {
            out.push_str(&format!(r#"<Pause length="{}"/>"#, seconds));
        }
    }
}

/// Escape text for use in XML content and double-quoted attributes
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
