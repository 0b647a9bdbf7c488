//! Pattern options
//!
//! Patterns are usually written in delimited form, `/^[a-z]+$/i`: the first
//! character is the delimiter, the pattern ends at its last occurrence and
//! any trailing letters are flags. [`Pattern::parse`] strips the delimiters
//! and turns the flags into inline `(?flags)` groups. Text that does not look
//! delimited is compiled verbatim.
//!
//! Matching is a search, not an anchored match: anchor explicitly with `^`
//! and `$` where needed.

use regex::Regex;

/// Characters accepted as pattern delimiters.
const DELIMITERS: &[char] = &['/', '#', '~', '%', '!', '@', ';', ',', '`'];

/// A compiled pattern that remembers how it was written.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern, delimited or bare.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_validators::validators::Pattern;
    ///
    /// let pattern = Pattern::parse("/^abc$/i").unwrap();
    /// assert!(pattern.is_match("ABC"));
    /// assert_eq!(pattern.as_str(), "/^abc$/i");
    ///
    /// let bare = Pattern::parse(r"^\d+$").unwrap();
    /// assert!(bare.is_match("42"));
    /// ```
    pub fn parse(source: &str) -> Result<Self, regex::Error> {
        let expression = match split_delimited(source) {
            Some((body, flags)) if flags.is_empty() => body.to_owned(),
            Some((body, flags)) => format!("(?{flags}){body}"),
            None => source.to_owned(),
        };

        Ok(Self {
            source: source.to_owned(),
            regex: Regex::new(&expression)?,
        })
    }

    /// The pattern exactly as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern matches anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Splits `/body/flags` into the body and the translated inline flags.
fn split_delimited(source: &str) -> Option<(&str, String)> {
    let delimiter = source.chars().next().filter(|c| DELIMITERS.contains(c))?;
    let start = delimiter.len_utf8();
    let end = source.rfind(delimiter).filter(|&end| end >= start)?;

    let mut flags = String::new();
    for flag in source[end + start..].chars() {
        match flag {
            'i' | 'm' | 's' | 'x' | 'U' => {
                if !flags.contains(flag) {
                    flags.push(flag);
                }
            }
            // Unicode matching is always on.
            'u' => {}
            _ => return None,
        }
    }

    Some((&source[start..end], flags))
}
