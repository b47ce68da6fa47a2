//! Report renderer for HTML, JSON, YAML and plain text

use std::fmt::Write;

use crate::domain::errors::DomainError;
use crate::domain::model::{ReportFormat, Theme};
use crate::output::ProgressReport;

/// Colours that differ between themes
struct Palette {
    text: &'static str,
    background: &'static str,
    heading: &'static str,
    panel: &'static str,
    card: &'static str,
    track: &'static str,
    bar: &'static str,
    muted: &'static str,
    border: &'static str,
    header_row: &'static str,
    hover_row: &'static str,
    done: &'static str,
    pending: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: "#333",
                background: "#fff",
                heading: "#2c3e50",
                panel: "#f9f9f9",
                card: "#fff",
                track: "#ecf0f1",
                bar: "#2ecc71",
                muted: "#7f8c8d",
                border: "#ddd",
                header_row: "#f2f2f2",
                hover_row: "#f5f5f5",
                done: "#2ecc71",
                pending: "#e74c3c",
            },
            Theme::Dark => Self {
                text: "#e0e0e0",
                background: "#1e1f24",
                heading: "#8ab4f8",
                panel: "#272930",
                card: "#30333b",
                track: "#3b3e47",
                bar: "#27ae60",
                muted: "#9aa0a6",
                border: "#3b3e47",
                header_row: "#30333b",
                hover_row: "#2c2f36",
                done: "#5fd38d",
                pending: "#f28b82",
            },
        }
    }
}

/// Renders a `ProgressReport` in the selected format
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    format: ReportFormat,
    theme: Theme,
}

impl ReportRenderer {
    /// Create a renderer; the theme only affects HTML output
    pub fn new(format: ReportFormat, theme: Theme) -> Self {
        Self { format, theme }
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Render the report
    pub fn render(&self, report: &ProgressReport) -> Result<String, DomainError> {
        match self.format {
            ReportFormat::Html => Ok(self.render_html(report)),
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| DomainError::InternalError(format!("JSON serialization failed: {}", e))),
            ReportFormat::Yaml => serde_yaml::to_string(report)
                .map_err(|e| DomainError::InternalError(format!("YAML serialization failed: {}", e))),
            ReportFormat::Text => Ok(Self::render_text(report)),
        }
    }

    fn render_text(report: &ProgressReport) -> String {
        let mut out = String::new();
        let name_width = report
            .chapters
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Chapter".len());

        let _ = writeln!(out, "Course Progress Report");
        let _ = writeln!(out, "Course: {}", report.course_path);
        let _ = writeln!(out, "Overall Progress: {:.1}%", report.percentage);
        let _ = writeln!(out, "  Completed:      {}", report.completed);
        let _ = writeln!(out, "  Remaining:      {}", report.remaining);
        let _ = writeln!(out, "  Total Duration: {}", report.total);
        let _ = writeln!(
            out,
            "  Chapters Done:  {} of {}",
            report.chapters_done,
            report.chapters.len()
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<width$}  {:>9}  Status", "Chapter", "Duration", width = name_width);
        for chapter in &report.chapters {
            let status = if chapter.done { "Done" } else { "Pending" };
            let _ = writeln!(
                out,
                "{:<width$}  {:>9}  {}",
                chapter.name,
                chapter.duration,
                status,
                width = name_width
            );
        }

        if !report.skipped.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "Skipped:");
            for entry in &report.skipped {
                let _ = writeln!(out, "  {} ({})", entry.path.display(), entry.reason);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Report generated on: {}", report.generated_at);
        out
    }

    fn render_html(&self, report: &ProgressReport) -> String {
        let p = Palette::for_theme(self.theme);
        let mut html = String::with_capacity(8 * 1024);

        let _ = write!(
            html,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Course Progress Report</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: {text}; background: {background}; max-width: 1000px; margin: 0 auto; padding: 20px; }}
        h1, h2 {{ color: {heading}; }}
        .progress-container {{ background: {panel}; border-radius: 8px; padding: 20px; margin-bottom: 30px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
        .progress-bar {{ height: 30px; background: {track}; border-radius: 15px; margin: 15px 0; overflow: hidden; }}
        .progress {{ height: 100%; background: {bar}; width: {pct:.1}%; display: flex; align-items: center; justify-content: center; color: white; font-weight: bold; }}
        .stats {{ display: flex; justify-content: space-between; margin-top: 15px; }}
        .stat-box {{ background: {card}; border-radius: 6px; padding: 10px 15px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); flex: 1; margin: 0 5px; text-align: center; }}
        .stat-box h3 {{ margin-top: 0; color: {muted}; }}
        table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
        th, td {{ padding: 12px 15px; text-align: left; border-bottom: 1px solid {border}; }}
        th {{ background-color: {header_row}; font-weight: bold; }}
        tr:hover {{ background-color: {hover_row}; }}
        .done {{ color: {done}; font-weight: bold; }}
        .pending {{ color: {pending}; }}
        .timestamp {{ text-align: right; color: {muted}; font-size: 0.9em; margin-top: 20px; }}
    </style>
</head>
<body>
    <h1>Course Progress Report</h1>
    <p>Course: {course}</p>
    <div class="progress-container">
        <h2>Overall Progress: {pct:.1}%</h2>
        <div class="progress-bar">
            <div class="progress">{pct:.1}%</div>
        </div>
        <div class="stats">
            <div class="stat-box"><h3>Completed</h3><p>{completed}</p></div>
            <div class="stat-box"><h3>Remaining</h3><p>{remaining}</p></div>
            <div class="stat-box"><h3>Total Duration</h3><p>{total}</p></div>
        </div>
    </div>
    <h2>Chapter Details</h2>
    <table>
        <thead>
            <tr><th>Chapter Name</th><th>Duration</th><th>Status</th></tr>
        </thead>
        <tbody>
"#,
            text = p.text,
            background = p.background,
            heading = p.heading,
            panel = p.panel,
            track = p.track,
            bar = p.bar,
            card = p.card,
            muted = p.muted,
            border = p.border,
            header_row = p.header_row,
            hover_row = p.hover_row,
            done = p.done,
            pending = p.pending,
            pct = report.percentage,
            course = escape_html(&report.course_path),
            completed = report.completed,
            remaining = report.remaining,
            total = report.total,
        );

        for chapter in &report.chapters {
            let (class, label) = if chapter.done {
                ("done", "&#10003; Done")
            } else {
                ("pending", "Pending")
            };
            let _ = writeln!(
                html,
                r#"            <tr><td>{}</td><td>{}</td><td class="{}">{}</td></tr>"#,
                escape_html(&chapter.name),
                chapter.duration,
                class,
                label
            );
        }

        html.push_str("        </tbody>\n    </table>\n");

        if !report.skipped.is_empty() {
            html.push_str("    <h2>Skipped</h2>\n    <ul>\n");
            for entry in &report.skipped {
                let _ = writeln!(
                    html,
                    "        <li>{} ({})</li>",
                    escape_html(&entry.path.display().to_string()),
                    escape_html(&entry.reason.to_string())
                );
            }
            html.push_str("    </ul>\n");
        }

        let _ = write!(
            html,
            "    <div class=\"timestamp\">\n        Report generated on: {}\n    </div>\n</body>\n</html>\n",
            report.generated_at
        );

        html
    }
}

/// Escape text for use inside HTML element content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
