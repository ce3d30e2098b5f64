//! Command-name suggestions and tab completion.
//!
//! Pure functions over the registry's name list. Matching is a
//! case-insensitive prefix test; results keep registry order and are never
//! ranked.

/// Names in `names` that start with `input`, ignoring case.
fn matching<'a, I>(input: &str, names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.to_lowercase();
    names
        .into_iter()
        .filter(|name| name.starts_with(&needle))
        .collect()
}

/// Suggestions to show for the current input.
///
/// Empty when the input is empty, which means "hide the list".
pub fn suggestions<'a, I>(input: &str, names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    if input.is_empty() {
        return Vec::new();
    }
    matching(input, names)
}

/// The longest string every match starts with. Empty for no matches.
pub fn longest_common_prefix(matches: &[&str]) -> String {
    let Some((first, rest)) = matches.split_first() else {
        return String::new();
    };
    let mut prefix = (*first).to_string();
    for other in rest {
        while !other.starts_with(prefix.as_str()) {
            prefix.pop();
        }
        if prefix.is_empty() {
            break;
        }
    }
    prefix
}

/// What Tab should turn `input` into, or `None` to leave it alone.
///
/// A single match completes fully. Several matches extend the input to
/// their common prefix, but only when that prefix is strictly longer than
/// what was typed. Completion never shortens the input and never cycles.
pub fn autocomplete<'a, I>(input: &str, names: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let matches = matching(input, names);
    match matches.as_slice() {
        [] => None,
        [only] => Some((*only).to_string()),
        _ => {
            let common = longest_common_prefix(&matches);
            (common.chars().count() > input.chars().count()).then_some(common)
        },
    }
}
