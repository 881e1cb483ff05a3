//! Helpers for building human-readable diagnostics.

/// Joins words into an English list: `a`, `a and b`, `a, b, and c`.
///
/// ```rust
/// use remarkable_matcher::text::to_sentence;
///
/// assert_eq!(to_sentence(["password"]), "password");
/// assert_eq!(to_sentence(["password", "token"]), "password and token");
/// assert_eq!(to_sentence(["a", "b", "c"]), "a, b, and c");
/// ```
pub fn to_sentence<I, T>(words: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let words: Vec<T> = words.into_iter().collect();
    match words.as_slice() {
        [] => String::new(),
        [only] => T::as_ref(only).to_owned(),
        [first, second] => format!("{} and {}", T::as_ref(first), T::as_ref(second)),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(T::as_ref).collect();
            format!("{}, and {}", head.join(", "), T::as_ref(last))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], "")]
    #[case(&["name"], "name")]
    #[case(&["name", "email"], "name and email")]
    #[case(&["name", "email", "admin"], "name, email, and admin")]
    #[case(&["a", "b", "c", "d"], "a, b, c, and d")]
    fn joins_words(#[case] words: &[&str], #[case] expected: &str) {
        assert_eq!(to_sentence(words), expected);
    }
}
