/*
 * error.rs
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

//! MIME type and parameter list parse errors.

use thiserror::Error;

/// Grammar violation found while parsing a parameter list or MIME type.
/// `index` is a character index into the parsed string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("couldn't find parameter name at index {index}")]
    MissingName { index: usize },

    #[error("expected '=' separating parameter name from value at index {index}")]
    MissingEquals { index: usize },

    #[error("couldn't find a value for parameter named {name:?} at index {index}")]
    MissingValue { name: String, index: usize },

    #[error("unterminated quoted parameter value starting at index {index}")]
    UnterminatedQuote { index: usize },

    #[error("unexpected character {found:?} at index {index}")]
    UnexpectedCharacter { found: char, index: usize },

    /// Only raised when duplicates are rejected (see `DuplicatePolicy::Reject`).
    #[error("duplicate parameter {name:?} at index {index}")]
    DuplicateParameter { name: String, index: usize },

    #[error("unable to find a sub type")]
    MissingSubType,

    #[error("primary type {0:?} is invalid")]
    InvalidPrimaryType(String),

    #[error("sub type {0:?} is invalid")]
    InvalidSubType(String),
}

impl ParseError {
    /// Character index of the violation, if it has one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::MissingName { index }
            | ParseError::MissingEquals { index }
            | ParseError::MissingValue { index, .. }
            | ParseError::UnterminatedQuote { index }
            | ParseError::UnexpectedCharacter { index, .. }
            | ParseError::DuplicateParameter { index, .. } => Some(*index),
            ParseError::MissingSubType
            | ParseError::InvalidPrimaryType(_)
            | ParseError::InvalidSubType(_) => None,
        }
    }

    /// Rebase the index when the parsed text was a suffix of a larger string.
    pub(crate) fn shifted(self, offset: usize) -> Self {
        match self {
            ParseError::MissingName { index } => ParseError::MissingName { index: index + offset },
            ParseError::MissingEquals { index } => ParseError::MissingEquals { index: index + offset },
            ParseError::MissingValue { name, index } => ParseError::MissingValue {
                name,
                index: index + offset,
            },
            ParseError::UnterminatedQuote { index } => ParseError::UnterminatedQuote { index: index + offset },
            ParseError::UnexpectedCharacter { found, index } => ParseError::UnexpectedCharacter {
                found,
                index: index + offset,
            },
            ParseError::DuplicateParameter { name, index } => ParseError::DuplicateParameter {
                name,
                index: index + offset,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
