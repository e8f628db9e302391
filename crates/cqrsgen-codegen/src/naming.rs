//! Naming heuristics used by the generators.
//!
//! # Event names
//!
//! An event name is derived from the command that records it:
//!
//! | command | aggregate | event |
//! |---------|-----------|-------|
//! | `engageInBusiness` | `Customer` | `InBusinessWasEngaged` |
//! | `relocate` | `Customer` | `CustomerWasRelocated` |
//! | `labelBottles` | `Customer` | `BottlesWereLabelled` |
//!
//! The words after the first form the subject (the aggregate name when there are
//! none), a trailing plural `s` selects `Were` over `Was`, and the first word is
//! turned into a participle. The letter rules are a fixed heuristic; irregular
//! verbs come out wrong and generated code relies on exactly these names.

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];
const DOUBLED_FINALS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'k', 'l', 'm', 'n', 'p', 'r', 't', 'z',
];

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use cqrsgen_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("billingAddress"), "BillingAddress");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string.
///
/// ```
/// use cqrsgen_codegen::naming::decapitalize;
///
/// assert_eq!(decapitalize("Customer"), "customer");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Split a camel-case name in front of every upper-case letter.
///
/// A name starting with an upper-case letter yields an empty first word.
pub fn split_words(name: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    for (index, _) in name.char_indices().filter(|(_, c)| c.is_ascii_uppercase()) {
        words.push(&name[start..index]);
        start = index;
    }
    words.push(&name[start..]);
    words
}

/// The past participle stem of a verb, without the `ed` ending.
///
/// Applied in order: a final consonant after a short vowel is doubled, a
/// trailing `y` becomes `i`, and a trailing run of `e` is dropped.
pub fn participle_stem(verb: &str) -> String {
    let mut stem: Vec<char> = verb.chars().collect();
    if let [.., before, vowel, last] = stem.as_slice()
        && !VOWELS.contains(before)
        && VOWELS.contains(vowel)
        && DOUBLED_FINALS.contains(last)
    {
        let last = *last;
        stem.push(last);
    }
    if stem.last() == Some(&'y') {
        stem.pop();
        stem.push('i');
    }
    while stem.last() == Some(&'e') {
        stem.pop();
    }
    stem.into_iter().collect()
}

/// Whether a command name ends in a plural `s`, i.e. an `s` not preceded by `s`.
pub fn is_plural(name: &str) -> bool {
    let mut tail = name.chars().rev();
    matches!((tail.next(), tail.next()), (Some('s'), Some(before)) if before != 's')
}

/// Derive the name of the event recorded by `command` on `aggregate`.
pub fn event_name(aggregate: &str, command: &str) -> String {
    let words = split_words(command);
    let (verb, rest) = match words.split_first() {
        Some((verb, rest)) => (*verb, rest.concat()),
        None => return command.to_string(),
    };
    let subject = if rest.is_empty() {
        aggregate.to_string()
    } else {
        rest
    };
    let voice = if is_plural(command) { "Were" } else { "Was" };
    format!("{subject}{voice}{}ed", capitalize(&participle_stem(verb)))
}

/// Guard predicate suggested for an argument, chosen by the type's short name.
pub fn guard_predicate(short_name: Option<&str>, identifier: &str) -> &'static str {
    match short_name {
        Some("bool") => "MatchesCurrentState",
        Some("float") => "IsWithinAllowedPrecision",
        Some("int") => "IsWithinAllowedRange",
        Some("string") => "IsUtf8Encoded",
        Some(name) if name == identifier => "IsVersion4Uuid",
        _ => "IsSupported",
    }
}
