//! Unified diff rendering for `apply --dry-run`.

use colored::Colorize;

/// Render the change from `old` to `new` as a unified diff with `a/`, `b/`
/// headers. Inserted lines are green, deleted lines red. Returns an empty
/// string when the texts are equal.
pub fn render_unified(label: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    let patch = diffy::create_patch(old, new);
    let mut out = String::new();
    out.push_str(&format!("--- a/{label}\n").bold().to_string());
    out.push_str(&format!("+++ b/{label}\n").bold().to_string());

    for hunk in patch.hunks() {
        let old_range = hunk.old_range();
        let new_range = hunk.new_range();
        let header = format!(
            "@@ -{},{} +{},{} @@",
            old_range.start(),
            old_range.len(),
            new_range.start(),
            new_range.len()
        );
        out.push_str(&header.cyan().to_string());
        out.push('\n');

        for line in hunk.lines() {
            let rendered = match line {
                diffy::Line::Insert(text) => format!("+{}", text.trim_end_matches('\n'))
                    .green()
                    .to_string(),
                diffy::Line::Delete(text) => format!("-{}", text.trim_end_matches('\n'))
                    .red()
                    .to_string(),
                diffy::Line::Context(text) => format!(" {}", text.trim_end_matches('\n')),
            };
            out.push_str(&rendered);
            out.push('\n');
        }
    }
    out
}
