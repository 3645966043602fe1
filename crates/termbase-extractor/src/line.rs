//! Line classification shared by detection and parsing

/// A markdown ATX heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
}

/// Classify a line as a heading (`#`..`######` followed by a space)
pub(crate) fn heading(line: &str) -> Option<Heading<'_>> {
    let trimmed = line.trim();
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(Heading {
        level,
        text: rest.trim(),
    })
}

/// A solitary `---` line
pub(crate) fn is_separator(line: &str) -> bool {
    line.trim() == "---"
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split a `**Key**: value` line
pub(crate) fn bold_field(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix("**")?;
    let end = rest.find("**")?;
    let value = rest[end + 2..].strip_prefix(':')?;
    Some((&rest[..end], value.trim()))
}

/// Split a bare `Key: value` line whose key is one of `keys`
pub(crate) fn bare_field<'a>(line: &'a str, keys: &[&str]) -> Option<(&'a str, &'a str)> {
    let (key, value) = line.trim().split_once(':')?;
    if keys.contains(&key) {
        Some((key, value.trim()))
    } else {
        None
    }
}
