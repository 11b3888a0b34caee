/*
 * utils.rs
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

//! MIME token utilities (RFC 2045 token, tspecials, value quoting).

use std::borrow::Cow;

/// Checks if a character is one of the RFC 2045 tspecials.
#[inline]
pub fn is_tspecial(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '<' | '>' | '@' | ',' | ';' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '='
    )
}

/// Checks if a character is valid in an RFC 2045 token: printable ASCII (33..=126), not a tspecial.
#[inline]
pub fn is_token_char(c: char) -> bool {
    matches!(c, '!'..='~') && !is_tspecial(c)
}

/// Checks if the string is a valid RFC 2045 token (1+ token chars).
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Parameter names are case-insensitive and stored trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Quote a parameter value for output. Tokens are emitted as-is; anything else
/// (including the empty string) is wrapped in double quotes with `\` and `"` escaped.
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if is_token(value) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    Cow::Owned(out)
}
