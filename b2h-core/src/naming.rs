//! Output file name, array identifier and include guard derivation.
//!
//! All functions here are pure: the same input always yields the same name,
//! and feeding a derived name back in returns it unchanged.

use std::path::{Path, PathBuf};

/// Characters replaced by `_` in derived file names.
const FILE_NAME_BADCHARS: [char; 5] = ['\\', '+', '-', '*', ' '];

fn is_file_name_badchar(c: char) -> bool {
    FILE_NAME_BADCHARS.contains(&c)
}

fn is_identifier_badchar(c: char) -> bool {
    is_file_name_badchar(c) || c == '.'
}

/// Replaces `\ + - * space` with `_`. Dots are kept so extensions survive.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_file_name_badchar(c) { '_' } else { c })
        .collect()
}

/// Turns `name` into a C identifier: file name badchars and `.` become `_`,
/// and a leading decimal digit gets an `_` prefix.
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if is_identifier_badchar(c) { '_' } else { c })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

pub fn include_guard(identifier: &str) -> String {
    format!("{}_H", identifier.to_ascii_uppercase())
}

/// `<dir>/<sanitized base name>.h`, next to the input.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let base = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{}.h", sanitize_file_name(&base));
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Picks the array identifier. A caller-supplied name wins unless it is blank
/// or made only of replaced characters; otherwise the output file stem is used.
pub fn resolve_identifier(requested: Option<&str>, output: &Path) -> String {
    if let Some(name) = requested.map(str::trim) {
        if name.chars().any(|c| !is_identifier_badchar(c)) {
            return sanitize_identifier(name);
        }
    }
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    sanitize_identifier(&stem)
}

/// Identifier and include guard of one generated header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderNames {
    pub identifier: String,
    pub guard: String,
}

impl HeaderNames {
    pub fn new(identifier: String) -> Self {
        let guard = include_guard(&identifier);
        Self { identifier, guard }
    }
}
