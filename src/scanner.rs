//! Brace-group scanning and command recognition.
//!
//! These are the two lowest layers of the parser: [`parse_braces`] extracts
//! one balanced `{...}` group from a text cursor, and [`parse_command`]
//! recognizes a backslash-prefixed command and consumes its brace-delimited
//! arguments.

/// Characters that a backslash escapes inside a brace group.
fn is_escapable(c: char) -> bool {
    matches!(c, '\\' | '{' | '}' | '#' | '$')
}

/// Extract the content of the first balanced brace group in `text`.
///
/// Returns the content strictly inside the group (nested braces preserved
/// literally) and the remaining text after the closing brace, trimmed of
/// surrounding whitespace. A backslash followed by one of `\ { } # $` is
/// resolved to the literal character while scanning.
///
/// Unbalanced input is handled leniently: if the braces never return to zero
/// nesting depth, everything collected is returned as content with an empty
/// remainder.
///
/// # Examples
///
/// ```
/// use butterxml::scanner::parse_braces;
///
/// let (content, rest) = parse_braces("{A{B}C} rest");
/// assert_eq!(content, "A{B}C");
/// assert_eq!(rest, "rest");
/// ```
pub fn parse_braces(text: &str) -> (String, &str) {
    let mut depth = 0i32;
    let mut content = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '{' => {
                depth += 1;
                if depth > 1 {
                    content.push(c);
                }
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return (content, text[i + 1..].trim());
                }
                content.push(c);
            }
            '\\' => match chars.peek() {
                Some(&(_, next)) if is_escapable(next) => {
                    content.push(next);
                    chars.next();
                }
                _ => content.push('\\'),
            },
            _ => content.push(c),
        }
    }

    (content, "")
}

/// Recognize a command at the start of `text`.
///
/// A command is a backslash followed by an optional `#` directive marker and
/// one or more ASCII alphabetic characters. On a match, brace-delimited
/// arguments are consumed greedily via [`parse_braces`]; returns the command
/// name (including the `#` marker for directives), the ordered argument
/// list, and the remaining text. Returns `None` when `text` does not start
/// with a command, signaling the caller to fall back to plain-text handling.
pub fn parse_command(text: &str) -> Option<(String, Vec<String>, &str)> {
    let rest = text.strip_prefix('\\')?;
    let (marker, body) = match rest.strip_prefix('#') {
        Some(stripped) => ("#", stripped),
        None => ("", rest),
    };

    let name_len = body
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if name_len == 0 {
        return None;
    }
    let name = format!("{marker}{}", &body[..name_len]);

    let mut remaining = body[name_len..].trim();
    let mut args = Vec::new();
    while remaining.starts_with('{') {
        let (arg, rest) = parse_braces(remaining);
        args.push(arg);
        remaining = rest;
    }

    Some((name, args, remaining))
}

/// Byte offset of the next command start in `text`, if any.
///
/// Used by the builder to decide whether a plain-text run contains a brace
/// group before the next command. An escaped brace (`\{`) or a bare
/// backslash does not count as a command start.
pub(crate) fn next_command_pos(text: &str) -> Option<usize> {
    memchr::memchr_iter(b'\\', text.as_bytes()).find(|&i| {
        let rest = &text[i + 1..];
        let rest = rest.strip_prefix('#').unwrap_or(rest);
        rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_braces_basic() {
        let (content, rest) = parse_braces("{test content} remaining text");
        assert_eq!(content, "test content");
        assert_eq!(rest, "remaining text");
    }

    #[test]
    fn test_parse_braces_nested() {
        let (content, rest) = parse_braces("{A{B}C} rest");
        assert_eq!(content, "A{B}C");
        assert_eq!(rest, "rest");
    }

    #[test]
    fn test_parse_braces_escapes() {
        let (content, rest) = parse_braces(r"{a \{literal\} b} rest");
        assert_eq!(content, "a {literal} b");
        assert_eq!(rest, "rest");

        let (content, _) = parse_braces(r"{cost \$5 \# item \\ done}");
        assert_eq!(content, r"cost $5 # item \ done");
    }

    #[test]
    fn test_parse_braces_non_escape_backslash_kept() {
        let (content, _) = parse_braces(r"{a \n b}");
        assert_eq!(content, r"a \n b");
    }

    #[test]
    fn test_parse_braces_never_closed() {
        let (content, rest) = parse_braces("{abc");
        assert_eq!(content, "abc");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_braces_close_before_open() {
        let (content, rest) = parse_braces("}x{");
        assert_eq!(content, "}x");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_braces_content_before_group() {
        // Characters before the first brace are collected into the content.
        let (content, rest) = parse_braces("pre {in} post");
        assert_eq!(content, "pre in");
        assert_eq!(rest, "post");
    }

    #[test]
    fn test_parse_command_basic() {
        let (name, args, rest) =
            parse_command(r"\section{Test Section} remaining text").unwrap();
        assert_eq!(name, "section");
        assert_eq!(args, vec!["Test Section"]);
        assert_eq!(rest, "remaining text");
    }

    #[test]
    fn test_parse_command_multiple_args() {
        let (name, args, rest) = parse_command(r"\cmd{a} {b} x").unwrap();
        assert_eq!(name, "cmd");
        assert_eq!(args, vec!["a", "b"]);
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_parse_command_no_args() {
        let (name, args, rest) = parse_command(r"\break and more").unwrap();
        assert_eq!(name, "break");
        assert!(args.is_empty());
        assert_eq!(rest, "and more");
    }

    #[test]
    fn test_parse_command_directive() {
        let (name, args, rest) = parse_command(r"\#include{file.txt}").unwrap();
        assert_eq!(name, "#include");
        assert_eq!(args, vec!["file.txt"]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_command_no_match() {
        assert!(parse_command("plain text").is_none());
        assert!(parse_command(r"\{").is_none());
        assert!(parse_command(r"\").is_none());
        assert!(parse_command(r"\#").is_none());
        assert!(parse_command(r"\42").is_none());
    }

    #[test]
    fn test_parse_command_name_stops_at_non_alpha() {
        let (name, args, rest) = parse_command(r"\foo1{x}").unwrap();
        assert_eq!(name, "foo");
        assert!(args.is_empty());
        assert_eq!(rest, "1{x}");
    }

    #[test]
    fn test_next_command_pos() {
        assert_eq!(next_command_pos(r"text \section{x}"), Some(5));
        assert_eq!(next_command_pos(r"text \#include{x}"), Some(5));
        assert_eq!(next_command_pos(r"escaped \{ only"), None);
        assert_eq!(next_command_pos("no commands here"), None);
    }
}
