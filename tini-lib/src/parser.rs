use regex::{Captures, Regex};
use thiserror::Error;

pub const ENTRY_KEY_GROUP_NAME: &str = "key";
pub const ENTRY_VALUE_GROUP_NAME: &str = "value";
pub const SECTION_NAME_GROUP_NAME: &str = "section_name";

const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Regex compilation error: {0}")]
    RegexCompilationError(#[from] regex::Error),
    #[error("The group {0} was not found in the provided regex")]
    RegexCaptureGroupNotFound(&'static str),
    #[error("Line {line_number} is neither a section header nor a key-value pair: {line}")]
    MalformedLine { line_number: usize, line: String },
}

/// Walks `content` line by line and hands every `(section, key, value)` triple to `handler`.
///
/// Pairs that appear before the first section header belong to the section named `""`.
/// A section name ends at the first `]`; anything after it on the header line is ignored.
/// A key ends at the first `=` or `:` and may be empty.
/// The first error, whether from the text itself or from `handler`, stops parsing and is returned.
pub fn parse<F, E>(content: &str, mut handler: F) -> Result<(), E>
where
    F: FnMut(&str, &str, &str) -> Result<(), E>,
    E: From<ParseError>,
{
    let key_value_regex = Regex::new(&format!(
        r"^(?P<{ENTRY_KEY_GROUP_NAME}>[^=:]*?)\s*[=:]\s*(?P<{ENTRY_VALUE_GROUP_NAME}>.*?)(?:\s+;.*)?$"
    ))
    .map_err(ParseError::from)?;
    let section_header_regex =
        Regex::new(&format!(r"^\[(?P<{SECTION_NAME_GROUP_NAME}>[^\]]*)\]")).map_err(ParseError::from)?;

    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut current_section = "";

    for (index, line) in content.lines().map(str::trim).enumerate() {
        log::debug!("Parsing line: {line}");

        if line.is_empty() || line.starts_with([';', '#']) {
            continue;
        }

        if let Some(section_header_captures) = section_header_regex.captures(line) {
            log::debug!("Line matched section start regex");
            current_section = capture(&section_header_captures, SECTION_NAME_GROUP_NAME)?;
            continue;
        }

        if let Some(key_value_captures) = key_value_regex.captures(line) {
            log::debug!("Line matched key-value regex.");
            let key = capture(&key_value_captures, ENTRY_KEY_GROUP_NAME)?;
            let value = capture(&key_value_captures, ENTRY_VALUE_GROUP_NAME)?;
            handler(current_section, key, value)?;
            continue;
        }

        return Err(ParseError::MalformedLine { line_number: index + 1, line: line.to_owned() }.into());
    }

    log::debug!("End of input reached.");

    Ok(())
}

fn capture<'line>(captures: &Captures<'line>, group: &'static str) -> Result<&'line str, ParseError> {
    captures
        .name(group)
        .map(|found| found.as_str())
        .ok_or(ParseError::RegexCaptureGroupNotFound(group))
}
