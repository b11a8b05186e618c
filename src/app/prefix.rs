//! Longest-common-prefix computation and prefix substitution.
//!
//! These helpers work on plain strings. Callers decide what the strings are;
//! the renamer feeds them basenames.

/// Longest string that is a prefix of every input.
///
/// Comparison is per `char`, so the result never splits a multi-byte code
/// point. An empty input yields `""`; a single input yields itself.
pub fn longest_common_prefix<S: AsRef<str>>(items: &[S]) -> String {
    let Some((first, rest)) = items.split_first() else {
        return String::new();
    };
    let first = first.as_ref();

    let mut end = first.len();
    for other in rest {
        let common: usize = first
            .chars()
            .zip(other.as_ref().chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a.len_utf8())
            .sum();
        end = end.min(common);
        if end == 0 {
            break;
        }
    }

    first[..end].to_string()
}

/// The explicit prefix if one was given, otherwise the LCP of `names`.
pub fn resolve_prefix<S: AsRef<str>>(explicit: Option<&str>, names: &[S]) -> String {
    match explicit {
        Some(prefix) => prefix.to_string(),
        None => longest_common_prefix(names),
    }
}

/// `name` without `prefix`, or `None` when `name` does not start with it.
pub fn strip<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)
}

/// Puts `prefix` back in front of a stripped name.
pub fn restore(stripped: &str, prefix: &str) -> String {
    format!("{}{}", prefix, stripped)
}

/// New name with `prefix` replaced by `replacement`.
pub fn replace(name: &str, prefix: &str, replacement: &str) -> Option<String> {
    strip(name, prefix).map(|rest| restore(rest, replacement))
}
