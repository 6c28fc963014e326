//! Markdown rendering of an [`AnalysisResult`].

use crate::models::AnalysisResult;
use std::fmt::Write;

/// Render the project overview document. Sections with no content are left out.
pub fn render_markdown(result: &AnalysisResult, generated_at: &str) -> String {
    let repo = &result.repo;
    let mut sections: Vec<(&str, String)> = Vec::new();

    sections.push(("📌 Purpose", repo.description.trim().to_string()));
    sections.push(("🧠 Architecture", result.architecture.trim().to_string()));

    let mut components = repo.components.clone();
    components.sort_by(|a, b| (&a.kind, &a.name).cmp(&(&b.kind, &b.name)));
    let mut body = String::new();
    for c in &components {
        let _ = writeln!(body, "### {} ({})", c.name, c.kind);
        let _ = writeln!(body, "{}", c.description);
        let _ = writeln!(body, "Location: `{}`\n", c.path);
    }
    sections.push(("🔍 Components", body.trim_end().to_string()));

    let mut entry_points = repo.entry_points.clone();
    entry_points.sort();
    sections.push((
        "🚀 Entry Points",
        entry_points
            .iter()
            .map(|e| format!("- `{}`", e))
            .collect::<Vec<_>>()
            .join("\n"),
    ));

    sections.push((
        "📦 Dependencies",
        repo.dependencies
            .iter()
            .map(|(name, version)| format!("- {}: {}", name, version))
            .collect::<Vec<_>>()
            .join("\n"),
    ));

    sections.push(("🛠 Setup Instructions", result.setup.trim().to_string()));

    let flow = result.flow_diagram.trim();
    sections.push((
        "🌀 Flow Diagram",
        if flow.is_empty() {
            String::new()
        } else {
            format!("```mermaid\n{}\n```", flow)
        },
    ));

    let mut languages: Vec<(&String, &f64)> = repo.languages.iter().collect();
    languages.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));
    sections.push((
        "📊 Language Statistics",
        languages
            .iter()
            .map(|(lang, pct)| format!("- {}: {:.1}%", lang, pct))
            .collect::<Vec<_>>()
            .join("\n"),
    ));

    let mut out = format!("# Project Overview: {}\n", repo.name);
    for (title, body) in sections {
        if body.is_empty() {
            continue;
        }
        let _ = write!(out, "\n## {}\n{}\n", title, body);
    }
    let tool = if result.generated_with.is_empty() {
        "repolens"
    } else {
        result.generated_with.as_str()
    };
    let _ = write!(out, "\n---\nGenerated with ❤️ by {} at {}\n", tool, generated_at);
    out
}
