//! Small helpers over `roxmltree` shared by the manifest adapters.
//!
//! MSBuild item and attribute names are case-insensitive and legacy project files carry a default
//! namespace, so matching is done on ASCII-case-insensitive local names.

use camino::Utf8Path;
use nuget_report_types::{Diagnostic, RepoPath, ids};
use roxmltree::{Document, Node};

/// Read a workspace file fully. Missing, unreadable and undecodable files become a diagnostic.
pub(crate) fn read_text(root: &Utf8Path, path: &RepoPath) -> Result<String, Diagnostic> {
    let abs = root.join(path.as_str());
    std::fs::read(&abs).and_then(decode_text).map_err(|e| {
        Diagnostic::new(
            ids::CODE_UNREADABLE_FILE,
            format!("{} could not be read ({e}); skipping", path.file_name()),
        )
        .at(path)
    })
}

/// Decode file bytes by byte order mark: UTF-16LE, UTF-16BE, otherwise UTF-8.
pub(crate) fn decode_text(bytes: Vec<u8>) -> std::io::Result<String> {
    let utf16 = |rest: &[u8], from: fn([u8; 2]) -> u16| {
        if rest.len() % 2 != 0 {
            return Err(invalid_data("odd byte count in UTF-16 text"));
        }
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|pair| from([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).map_err(invalid_data)
    };

    match bytes.as_slice() {
        [0xFF, 0xFE, rest @ ..] => utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => utf16(rest, u16::from_be_bytes),
        _ => String::from_utf8(bytes).map_err(invalid_data),
    }
}

fn invalid_data<E>(e: E) -> std::io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    std::io::Error::new(std::io::ErrorKind::InvalidData, e)
}

/// Parse XML text, tolerating a leading byte order mark.
pub(crate) fn parse_document<'a>(
    path: &RepoPath,
    text: &'a str,
) -> Result<Document<'a>, Diagnostic> {
    Document::parse(text.trim_start_matches('\u{feff}')).map_err(|e| {
        Diagnostic::new(
            ids::CODE_MALFORMED_XML,
            format!(
                "{} is a malformed xml file or has an unsupported encoding ({e}); skipping",
                path.file_name()
            ),
        )
        .at(path)
    })
}

pub(crate) fn elements_named<'a, 'input: 'a>(
    doc: &'a Document<'input>,
    local_name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    doc.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case(local_name))
}

/// Attribute value by case-insensitive name, trimmed. Absent attributes read as empty.
pub(crate) fn attr<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attributes()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .map(|a| a.value().trim())
        .unwrap_or("")
}

/// Trimmed text of the first child element named `local_name`.
pub(crate) fn child_text<'a>(node: Node<'a, '_>, local_name: &str) -> &'a str {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name().eq_ignore_ascii_case(local_name))
        .and_then(|c| c.text())
        .map(str::trim)
        .unwrap_or("")
}

/// Trimmed text of the first element named `local_name` anywhere in the document.
pub(crate) fn first_text<'a>(doc: &'a Document<'_>, local_name: &str) -> Option<&'a str> {
    doc.descendants()
        .find(|n| n.is_element() && n.tag_name().name().eq_ignore_ascii_case(local_name))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
