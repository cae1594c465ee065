use std::sync::LazyLock;

use eframe::egui::{self, Color32, FontFamily, FontId};
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::theme::Theme;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEMES: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Syntax for a language token. The bundled set has no TypeScript grammar,
/// so `ts`/`tsx` fall back to JavaScript.
fn find_syntax(language: &str) -> &'static SyntaxReference {
    let token = match language {
        "ts" | "tsx" | "typescript" => "js",
        other => other,
    };
    SYNTAXES
        .find_syntax_by_token(token)
        .unwrap_or_else(|| SYNTAXES.find_syntax_plain_text())
}

/// Build a highlighted layout job. Falls back to plain monospace text when
/// highlighting fails.
pub fn highlight_code(
    code: &str,
    language: &str,
    font_size: f32,
    opacity: f32,
    theme: &Theme,
    max_width: f32,
) -> egui::text::LayoutJob {
    let font_id = FontId::new(font_size, FontFamily::Monospace);
    let mut job = egui::text::LayoutJob::default();
    job.wrap.max_width = max_width;

    let Some(syntect_theme) = THEMES.themes.get(theme.syntect_theme_name()) else {
        append_plain(&mut job, code, &font_id, theme, opacity);
        return job;
    };

    let mut highlighter = HighlightLines::new(find_syntax(language), syntect_theme);
    for line in LinesWithEndings::from(code) {
        let Ok(ranges) = highlighter.highlight_line(line, &SYNTAXES) else {
            tracing::debug!(language, "syntax highlighting failed, using plain text");
            let mut plain = egui::text::LayoutJob::default();
            plain.wrap.max_width = max_width;
            append_plain(&mut plain, code, &font_id, theme, opacity);
            return plain;
        };
        for (style, text) in ranges {
            let fg = style.foreground;
            let color = Theme::with_opacity(Color32::from_rgb(fg.r, fg.g, fg.b), opacity);
            let format = egui::text::TextFormat {
                font_id: font_id.clone(),
                color,
                italics: style.font_style.contains(FontStyle::ITALIC),
                ..Default::default()
            };
            job.append(text, 0.0, format);
        }
    }
    job
}

fn append_plain(
    job: &mut egui::text::LayoutJob,
    code: &str,
    font_id: &FontId,
    theme: &Theme,
    opacity: f32,
) {
    let format = egui::text::TextFormat {
        font_id: font_id.clone(),
        color: Theme::with_opacity(theme.code_foreground, opacity),
        ..Default::default()
    };
    job.append(code, 0.0, format);
}
