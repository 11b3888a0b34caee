/*
 * parameter_list.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Mimeparam, a MIME parameter list library.
 *
 * Mimeparam is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Mimeparam is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Mimeparam.  If not, see <http://www.gnu.org/licenses/>.
 */

//! MIME parameter list (RFC 2045 section 5.1, RFC 2046):
//!
//! ```text
//! parameters := *(";" parameter)
//! parameter  := attribute "=" value
//! value      := token / quoted-string
//! ```
//!
//! Names are case-insensitive and stored lowercased. Values are stored decoded
//! (quotes and escapes removed) and re-quoted on output only where needed.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use tracing::{debug, trace};

use super::error::{ParseError, Result};
use super::options::{DuplicatePolicy, ParseOptions, SeparatorPolicy};
use super::utils::{is_token_char, normalize_name, quote_value};

/// Case-insensitive mapping of parameter names to decoded values.
/// Equality and hashing ignore insertion order.
#[derive(Debug, Clone, Default)]
pub struct ParameterList {
    parameter_map: HashMap<String, String>,
}

impl ParameterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw parameter list such as `; charset="utf-8"; format=flowed`
    /// with the default options. Empty (or blank) input gives an empty list.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, &ParseOptions::default())
    }

    pub fn parse_with(raw: &str, options: &ParseOptions) -> Result<Self> {
        parse_parameters(raw, options).inspect_err(|e| {
            debug!(error = %e, input_len = raw.len(), "rejected MIME parameter list");
        })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.parameter_map.get(&normalize_name(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameter_map.contains_key(&normalize_name(name))
    }

    /// Store `value` (decoded form) under the normalized name, replacing any earlier value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.parameter_map.insert(normalize_name(name), value.into());
    }

    /// Remove the parameter if present; returns the old value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.parameter_map.remove(&normalize_name(name))
    }

    pub fn len(&self) -> usize {
        self.parameter_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameter_map.is_empty()
    }

    /// Normalized names currently stored. Order is unspecified.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.parameter_map.keys().map(String::as_str)
    }

    /// (name, value) pairs. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + Clone + '_ {
        self.parameter_map
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl PartialEq for ParameterList {
    fn eq(&self, other: &Self) -> bool {
        self.parameter_map == other.parameter_map
    }
}

impl Eq for ParameterList {}

impl Hash for ParameterList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Entries are hashed independently and summed so visit order does not matter.
        let combined = self.parameter_map.iter().fold(0u64, |acc, (name, value)| {
            let mut h = DefaultHasher::new();
            name.hash(&mut h);
            value.hash(&mut h);
            acc.wrapping_add(h.finish())
        });
        state.write_usize(self.parameter_map.len());
        state.write_u64(combined);
    }
}

/// Canonical form: `; name=value` per entry, values quoted only when not a token.
impl fmt::Display for ParameterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.parameter_map {
            write!(f, "; {}={}", name, quote_value(value))?;
        }
        Ok(())
    }
}

impl FromStr for ParameterList {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ParameterList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = ParameterList::new();
        list.extend(iter);
        list
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for ParameterList {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name.as_ref(), value);
        }
    }
}

/// Character cursor over the input; positions are character indices.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn take_token(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_token_char) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    /// At an opening `"`: read up to the matching unescaped `"`, resolving `\x` to `x`.
    fn take_quoted(&mut self) -> Result<String> {
        let start = self.pos;
        self.pos += 1;
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(ParseError::UnterminatedQuote { index: start }),
                Some('"') => {
                    self.pos += 1;
                    return Ok(value);
                }
                Some('\\') => {
                    self.pos += 1;
                    match self.peek() {
                        Some(c) => {
                            value.push(c);
                            self.pos += 1;
                        }
                        None => return Err(ParseError::UnterminatedQuote { index: start }),
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }
    }
}

fn parse_parameters(raw: &str, options: &ParseOptions) -> Result<ParameterList> {
    let mut list = ParameterList::new();
    let mut cursor = Cursor::new(raw);
    cursor.skip_whitespace();
    let mut first = true;

    while !cursor.at_end() {
        let implicit_separator =
            first && options.leading_separator == SeparatorPolicy::Optional;
        if !cursor.eat(';') && !implicit_separator {
            let found = cursor.peek().unwrap_or_default();
            return Err(ParseError::UnexpectedCharacter {
                found,
                index: cursor.pos,
            });
        }
        first = false;
        cursor.skip_whitespace();

        let name_index = cursor.pos;
        let name = cursor.take_token().to_ascii_lowercase();
        if name.is_empty() {
            return Err(ParseError::MissingName { index: name_index });
        }
        cursor.skip_whitespace();
        if !cursor.eat('=') {
            return Err(ParseError::MissingEquals { index: cursor.pos });
        }
        cursor.skip_whitespace();

        let value = match cursor.peek() {
            None => {
                return Err(ParseError::MissingValue {
                    name,
                    index: cursor.pos,
                })
            }
            Some('"') => cursor.take_quoted()?,
            Some(c) if is_token_char(c) => cursor.take_token(),
            Some(found) => {
                return Err(ParseError::UnexpectedCharacter {
                    found,
                    index: cursor.pos,
                })
            }
        };

        trace!(name = %name, value_len = value.len(), "parsed MIME parameter");
        if list.parameter_map.contains_key(&name) {
            match options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(ParseError::DuplicateParameter {
                        name,
                        index: name_index,
                    })
                }
                DuplicatePolicy::LastWins => {
                    debug!(name = %name, "duplicate MIME parameter overrides earlier value");
                }
            }
        }
        list.parameter_map.insert(name, value);
        cursor.skip_whitespace();
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(list: &ParameterList) -> u64 {
        let mut h = DefaultHasher::new();
        list.hash(&mut h);
        h.finish()
    }

    #[test]
    fn empty_and_blank_input_give_empty_list() {
        assert!(ParameterList::parse("").unwrap().is_empty());
        assert_eq!(ParameterList::parse("  \t ").unwrap().len(), 0);
    }

    #[test]
    fn token_and_quoted_values() {
        let list = ParameterList::parse("; charset=\"utf-8\"; format=flowed").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("charset"), Some("utf-8"));
        assert_eq!(list.get("format"), Some("flowed"));
    }

    #[test]
    fn names_are_case_insensitive() {
        let list = ParameterList::parse("; Charset=\"utf-8\"").unwrap();
        assert_eq!(list.get("CHARSET"), Some("utf-8"));
        assert_eq!(list.get("charset"), Some("utf-8"));
        assert_eq!(list.get("  ChArSeT "), Some("utf-8"));
        assert_eq!(list.names().collect::<Vec<_>>(), vec!["charset"]);
    }

    #[test]
    fn whitespace_around_separators_is_skipped() {
        let list = ParameterList::parse("  ;  a  =  b ;\tc= \"d e\"  ").unwrap();
        assert_eq!(list.get("a"), Some("b"));
        assert_eq!(list.get("c"), Some("d e"));
    }

    #[test]
    fn escapes_in_quoted_value_are_resolved() {
        let list = ParameterList::parse(r#"; x="a\"b\\c\d""#).unwrap();
        assert_eq!(list.get("x"), Some("a\"b\\cd"));
    }

    #[test]
    fn quoted_value_may_hold_tspecials_and_non_ascii() {
        let list = ParameterList::parse("; name=\"r\u{e9}sum\u{e9}; v1 (final).txt\"").unwrap();
        assert_eq!(list.get("name"), Some("r\u{e9}sum\u{e9}; v1 (final).txt"));
    }

    #[test]
    fn last_occurrence_wins_by_default() {
        let list = ParameterList::parse("; a=1; A=2").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("a"), Some("2"));
    }

    #[test]
    fn duplicates_rejected_when_configured() {
        let err = ParameterList::parse_with("; a=1; A=2", &ParseOptions::strict()).unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateParameter {
                name: "a".into(),
                index: 7
            }
        );
    }

    #[test]
    fn leading_separator_required_by_default() {
        let err = ParameterList::parse("a=b").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedCharacter { found: 'a', index: 0 });
    }

    #[test]
    fn leading_separator_optional_when_configured() {
        let options = ParseOptions::new().with_leading_separator(SeparatorPolicy::Optional);
        let list = ParameterList::parse_with("a=b; c=d", &options).unwrap();
        assert_eq!(list.get("a"), Some("b"));
        assert_eq!(list.get("c"), Some("d"));
        // still only the first separator may be omitted
        assert!(ParameterList::parse_with("a=b c=d", &options).is_err());
        assert!(ParameterList::parse_with("; a=b", &options).is_ok());
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        assert_eq!(
            ParameterList::parse("; a=").unwrap_err(),
            ParseError::MissingValue { name: "a".into(), index: 4 }
        );
        assert_eq!(
            ParameterList::parse("; =b").unwrap_err(),
            ParseError::MissingName { index: 2 }
        );
        assert_eq!(
            ParameterList::parse("; a=\"unterminated").unwrap_err(),
            ParseError::UnterminatedQuote { index: 4 }
        );
        assert_eq!(
            ParameterList::parse("; a b=c").unwrap_err(),
            ParseError::MissingEquals { index: 4 }
        );
    }

    #[test]
    fn more_malformed_inputs() {
        assert_eq!(
            ParameterList::parse("; a").unwrap_err(),
            ParseError::MissingEquals { index: 3 }
        );
        assert_eq!(
            ParameterList::parse(";").unwrap_err(),
            ParseError::MissingName { index: 1 }
        );
        assert_eq!(
            ParameterList::parse("; a=b;").unwrap_err(),
            ParseError::MissingName { index: 6 }
        );
        assert_eq!(
            ParameterList::parse("; a=b c").unwrap_err(),
            ParseError::UnexpectedCharacter { found: 'c', index: 6 }
        );
        assert_eq!(
            ParameterList::parse("; a=/b").unwrap_err(),
            ParseError::UnexpectedCharacter { found: '/', index: 4 }
        );
        assert_eq!(
            ParameterList::parse("; a=\"x\\").unwrap_err(),
            ParseError::UnterminatedQuote { index: 4 }
        );
    }

    #[test]
    fn error_index_counts_characters() {
        let err = ParameterList::parse("; \u{e9}=b").unwrap_err();
        assert_eq!(err, ParseError::MissingName { index: 2 });
        let err = ParameterList::parse("; a=\"\u{e9}\u{e9}\" x").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedCharacter { found: 'x', index: 9 });
    }

    #[test]
    fn set_get_remove() {
        let mut list = ParameterList::new();
        list.set("Charset", "utf-8");
        assert_eq!(list.get("charset"), Some("utf-8"));
        list.set("CHARSET", "us-ascii");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("Charset"), Some("us-ascii"));
        assert_eq!(list.remove("charSet"), Some("us-ascii".to_string()));
        assert_eq!(list.remove("charset"), None);
        assert!(list.is_empty());
        assert_eq!(list.get("missing"), None);
    }

    #[test]
    fn names_is_restartable() {
        let list: ParameterList = [("a", "1"), ("b", "2")].into_iter().collect();
        let names = list.names();
        let mut first: Vec<_> = names.clone().collect();
        let mut second: Vec<_> = names.collect();
        first.sort();
        second.sort();
        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(first, second);
        assert_eq!(ParameterList::new().names().count(), 0);
    }

    #[test]
    fn serialization_quotes_only_when_needed() {
        let mut list = ParameterList::new();
        list.set("a", "b");
        assert_eq!(list.to_string(), "; a=b");
        list.set("a", "has space");
        assert_eq!(list.to_string(), "; a=\"has space\"");
        list.set("a", "text/plain");
        assert_eq!(list.to_string(), "; a=\"text/plain\"");
        list.set("a", "");
        assert_eq!(list.to_string(), "; a=\"\"");
        assert_eq!(ParameterList::new().to_string(), "");
    }

    #[test]
    fn quoting_round_trip() {
        let mut list = ParameterList::new();
        list.set("x", "a\"b\\c");
        let reparsed = ParameterList::parse(&list.to_string()).unwrap();
        assert_eq!(reparsed.get("x"), Some("a\"b\\c"));
        assert_eq!(reparsed, list);
    }

    #[test]
    fn equality_and_hash_ignore_order() {
        let mut a = ParameterList::new();
        a.set("a", "1");
        a.set("b", "2");
        let mut b = ParameterList::new();
        b.set("b", "2");
        b.set("a", "1");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.set("b", "3");
        assert_ne!(a, b);
        b.set("b", "2");
        b.set("c", "2");
        assert_ne!(a, b);
    }

    #[test]
    fn clone_is_independent() {
        let original = ParameterList::parse("; a=1").unwrap();
        let mut copy = original.clone();
        copy.set("a", "2");
        copy.set("b", "3");
        assert_eq!(original.get("a"), Some("1"));
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn iter_yields_decoded_pairs() {
        let list = ParameterList::parse("; A=\"x y\"; b=z").unwrap();
        let mut pairs: Vec<_> = list.iter().collect();
        pairs.sort();
        assert_eq!(pairs, vec![("a", "x y"), ("b", "z")]);
    }

    #[test]
    fn from_str_parses() {
        let list: ParameterList = "; boundary=----abc123".parse().unwrap();
        assert_eq!(list.get("boundary"), Some("----abc123"));
    }
}
