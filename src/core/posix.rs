//! Shell-safe environment variable names.
//!
//! Variable names derived from secret names and JSON keys can contain
//! anything (`my/secret/3`, `fooBar`, `db-url`). A shell can only read
//! `[A-Za-z_][A-Za-z0-9_]*`, so names are rewritten to upper snake case.

/// Derive a POSIX-shell-safe identifier from a variable name.
///
/// Converts to snake case, prefixes `_` when the result starts with a
/// digit, replaces anything outside `[A-Za-z0-9_]` with `_` and
/// upper-cases the result. Applying it twice gives the same result as
/// applying it once.
///
/// ```
/// use smenv::core::posix::posix_name;
///
/// assert_eq!(posix_name("TF_VAR_fooBar"), "TF_VAR_FOO_BAR");
/// assert_eq!(posix_name("TF_VAR_my/secret/3"), "TF_VAR_MY_SECRET_3");
/// ```
pub fn posix_name(name: &str) -> String {
    let mut snake = snake_case(name);
    if snake.starts_with(|c: char| c.is_ascii_digit()) {
        snake.insert(0, '_');
    }

    snake
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Lower snake case.
///
/// A new word starts at an uppercase letter that follows a lowercase
/// letter (`fooBar`), or that follows another uppercase letter and is
/// itself followed by a lowercase one (`HTTPServer`). Runs of characters
/// outside `[A-Za-z0-9]` separate words and are dropped. Digits never start
/// a new word on their own.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || (prev.is_ascii_uppercase() && next_is_lower) {
                flush(&mut current, &mut words);
            }
        }

        current.push(c.to_ascii_lowercase());
    }
    flush(&mut current, &mut words);

    words.join("_")
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
