use nuget_report_types::Diagnostic;

/// Render diagnostics as GitHub Actions workflow command annotations.
///
/// Format:
/// `::warning file={path}::[{code}] {message}`
pub fn render_github_annotations(diagnostics: &[Diagnostic]) -> Vec<String> {
    let mut out = Vec::with_capacity(diagnostics.len());

    for d in diagnostics {
        let message = escape_data(&format!("[{}] {}", d.code, d.message));
        match &d.path {
            Some(path) => out.push(format!(
                "::warning file={}::{}",
                escape_property(path.as_str()),
                message
            )),
            None => out.push(format!("::warning::{}", message)),
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
