//! String predicates and transforms used by the inflection rules.
//!
//! Every helper works on UTF-8 text as-is; suffix tables are lowercase, so
//! callers that need case-insensitive matching fold first with [`fold`].

/// Lowercase a surface form for comparisons (`ẞ` folds to `ß`, `Ä` to `ä`).
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive equality of two surface forms.
pub fn eq_folded(a: &str, b: &str) -> bool {
    a == b || fold(a) == fold(b)
}

pub fn ends_with_any<S: AsRef<str>>(who: &str, of: &[S]) -> bool {
    of.iter().any(|o| who.ends_with(o.as_ref()))
}

pub fn starts_with_any<S: AsRef<str>>(who: &str, of: &[S]) -> bool {
    of.iter().any(|o| who.starts_with(o.as_ref()))
}

/// True if `x` equals one of `of` exactly.
pub fn is_any_of<S: AsRef<str>>(x: &str, of: &[S]) -> bool {
    of.iter().any(|o| o.as_ref() == x)
}

/// Strip `prefix` from `s` in place. Returns whether it was present.
pub fn try_eat(s: &mut String, prefix: &str) -> bool {
    if s.starts_with(prefix) {
        s.drain(..prefix.len());
        true
    } else {
        false
    }
}

/// Strip `suffix` from `s` in place. Returns whether it was present.
pub fn try_eat_back(s: &mut String, suffix: &str) -> bool {
    if s.ends_with(suffix) {
        s.truncate(s.len() - suffix.len());
        true
    } else {
        false
    }
}

/// Strip the first of `suffixes` (in list order) that `s` ends with.
pub fn try_eat_back_any(s: &mut String, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| try_eat_back(s, suffix))
}

/// Replace every non-overlapping occurrence of `what`, scanning left to right.
pub fn replace_all(s: &str, what: &str, with: &str) -> String {
    if what.is_empty() {
        return s.to_string();
    }
    s.replace(what, with)
}

/// Front the back vowels (a, o, u) of `s` and repair the diphthongs the
/// blanket substitution breaks (äü → äu, eü → eu, äi → ai).
pub fn umlautify(s: &str) -> String {
    const STEPS: [(&str, &str); 10] = [
        ("a", "ä"),
        ("A", "Ä"),
        ("u", "ü"),
        ("U", "Ü"),
        ("o", "ö"),
        ("O", "Ö"),
        ("äü", "äu"),
        ("Äü", "Äu"),
        ("eü", "eu"),
        ("äi", "ai"),
    ];
    STEPS
        .iter()
        .fold(s.to_string(), |acc, (what, with)| replace_all(&acc, what, with))
}

/// Count occurrences of `infixes` in `who` where every character can be
/// consumed by at most one match.
///
/// The scan walks left to right; at each position the first infix (in list
/// order) that matches is counted and its characters are skipped. Callers
/// list longer infixes first (diphthongs before single vowels) so that "au"
/// counts once rather than twice.
pub fn count_in_order<S: AsRef<str>>(who: &str, infixes: &[S]) -> usize {
    let mut count = 0;
    let mut rest = who;
    while !rest.is_empty() {
        match infixes
            .iter()
            .map(AsRef::as_ref)
            .find(|inf| !inf.is_empty() && rest.starts_with(inf))
        {
            Some(inf) => {
                count += 1;
                rest = &rest[inf.len()..];
            }
            None => {
                let step = rest.chars().next().map(char::len_utf8).unwrap_or(1);
                rest = &rest[step..];
            }
        }
    }
    count
}

/// Remove every occurrence of `what` from `s`.
pub fn remove_sub(s: &str, what: &str) -> String {
    replace_all(s, what, "")
}
