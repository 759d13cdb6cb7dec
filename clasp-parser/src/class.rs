/*!
Character classes for option names. Only ASCII is accepted: an option starts
with a letter, and long options continue with letters, digits, or `-`.
*/

/// The first character of any option, and every character of a short option
#[inline]
#[must_use]
pub const fn is_option_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Any character after the first in a long option
#[inline]
#[must_use]
pub const fn is_option_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/**
Check that `name` could appear on the command line as an option, either as
`--name` or (if it's a single character) as `-n`.
*/
#[must_use]
pub fn is_valid_option_name(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => is_option_start(first) && chars.all(is_option_continue),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_names() {
        assert!(is_valid_option_name("f"));
        assert!(is_valid_option_name("foo-bar"));
        assert!(is_valid_option_name("X11"));
        assert!(is_valid_option_name("a-"));

        assert!(!is_valid_option_name(""));
        assert!(!is_valid_option_name("-f"));
        assert!(!is_valid_option_name("1st"));
        assert!(!is_valid_option_name("foo_bar"));
        assert!(!is_valid_option_name("foo=bar"));
        assert!(!is_valid_option_name("*"));
        assert!(!is_valid_option_name("ünder"));
    }
}
