/*
 * options.rs
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

//! Parser options. Defaults follow the RFC 2045 grammar: every parameter is
//! introduced by `;` and a repeated name overwrites the earlier value.

/// What to do when a parameter name appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later occurrence replaces the earlier value.
    #[default]
    LastWins,
    /// Second occurrence is a parse error.
    Reject,
}

/// Whether the first parameter must be preceded by `;`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorPolicy {
    #[default]
    Required,
    /// `charset=utf-8; format=flowed` is accepted as if it began with `;`.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub duplicates: DuplicatePolicy,
    pub leading_separator: SeparatorPolicy,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn with_leading_separator(mut self, policy: SeparatorPolicy) -> Self {
        self.leading_separator = policy;
        self
    }

    /// Reject duplicates; still require the leading `;`.
    pub fn strict() -> Self {
        Self::default().with_duplicates(DuplicatePolicy::Reject)
    }
}
