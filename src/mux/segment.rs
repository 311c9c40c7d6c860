//! Route segment syntax.
//!
//! # Syntax
//! ```text
//! users          literal, matched by exact text
//! :id            parameter, default pattern (.+)
//! :id[^\d+$]     parameter constrained by the regex between the brackets
//! ```

pub const PATH_DELIMITER: char = '/';
pub const PARAM_DELIMITER: char = ':';
pub const LEFT_PATTERN_DELIMITER: char = '[';
pub const RIGHT_PATTERN_DELIMITER: char = ']';

/// Pattern applied to parameters declared without a constraint.
pub const WILDCARD_PATTERN: &str = "(.+)";

/// Path that registers a handler on the namespace root itself.
pub const ROOT_PATH: &str = "/";

/// Split a path into its non-empty segments.
///
/// Leading, trailing and repeated delimiters are ignored.
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_DELIMITER).filter(|s| !s.is_empty())
}

/// Returns true if the segment key declares a parameter.
pub fn is_dynamic(key: &str) -> bool {
    key.starts_with(PARAM_DELIMITER)
}

/// Regex source of a parameter key.
///
/// `:id[^\d+$]` yields `^\d+$`, `:id` yields the wildcard. The source ends at the
/// first `]` after the opening `[`, so constraints cannot contain bracket classes.
pub fn extract_pattern(key: &str) -> &str {
    let Some(left) = key.find(LEFT_PATTERN_DELIMITER) else {
        return WILDCARD_PATTERN;
    };
    let rest = &key[left + 1..];
    match rest.find(RIGHT_PATTERN_DELIMITER) {
        Some(right) => &rest[..right],
        None => WILDCARD_PATTERN,
    }
}

/// Parameter name of a key: the text after `:` up to the constraint, if any.
pub fn extract_param_name(key: &str) -> &str {
    let start = key
        .find(PARAM_DELIMITER)
        .map(|i| i + PARAM_DELIMITER.len_utf8())
        .unwrap_or(0);
    let rest = &key[start..];
    match rest.find(LEFT_PATTERN_DELIMITER) {
        Some(end) => &rest[..end],
        None => rest,
    }
}
