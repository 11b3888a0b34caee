/*
 * mime_type.rs
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

//! MIME type with parameters (RFC 2045 Content-Type value): `primary/sub; name=value`.

use std::fmt;
use std::str::FromStr;

use super::error::{ParseError, Result};
use super::options::ParseOptions;
use super::parameter_list::ParameterList;
use super::utils::is_token;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType {
    primary_type: String,
    sub_type: String,
    parameters: ParameterList,
}

impl MimeType {
    /// Build from already-split parts. Types are trimmed and lowercased and must be tokens.
    pub fn new(primary_type: &str, sub_type: &str) -> Result<Self> {
        let primary_type = primary_type.trim().to_lowercase();
        let sub_type = sub_type.trim().to_lowercase();
        if !is_token(&primary_type) {
            return Err(ParseError::InvalidPrimaryType(primary_type));
        }
        if !is_token(&sub_type) {
            return Err(ParseError::InvalidSubType(sub_type));
        }
        Ok(Self {
            primary_type,
            sub_type,
            parameters: ParameterList::new(),
        })
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, &ParseOptions::default())
    }

    /// Parse `primary/sub` optionally followed by a parameter list. Error indices
    /// refer to characters of `raw`.
    pub fn parse_with(raw: &str, options: &ParseOptions) -> Result<Self> {
        let slash = raw.find('/');
        let semi = raw.find(';');
        let (type_part, params_part) = match (slash, semi) {
            (Some(_), None) => (raw, ""),
            (Some(s), Some(p)) if s < p => raw.split_at(p),
            _ => return Err(ParseError::MissingSubType),
        };
        let (primary, sub) = match type_part.split_once('/') {
            Some(parts) => parts,
            None => return Err(ParseError::MissingSubType),
        };
        let mut mime_type = Self::new(primary, sub)?;
        mime_type.parameters = ParameterList::parse_with(params_part, options)
            .map_err(|e| e.shifted(type_part.chars().count()))?;
        Ok(mime_type)
    }

    pub fn get_primary_type(&self) -> &str {
        &self.primary_type
    }

    pub fn get_sub_type(&self) -> &str {
        &self.sub_type
    }

    /// `primary/sub` without parameters.
    pub fn get_base_type(&self) -> String {
        format!("{}/{}", self.primary_type, self.sub_type)
    }

    pub fn is_primary_type(&self, t: &str) -> bool {
        self.primary_type.eq_ignore_ascii_case(t)
    }

    pub fn is_sub_type(&self, t: &str) -> bool {
        self.sub_type.eq_ignore_ascii_case(t)
    }

    pub fn is_mime_type(&self, primary: &str, sub: &str) -> bool {
        self.is_primary_type(primary) && self.is_sub_type(sub)
    }

    /// Same base type, ignoring parameters. A `*` sub type on either side matches any sub type.
    pub fn matches(&self, other: &MimeType) -> bool {
        self.primary_type == other.primary_type
            && (self.sub_type == "*" || other.sub_type == "*" || self.sub_type == other.sub_type)
    }

    pub fn get_parameters(&self) -> &ParameterList {
        &self.parameters
    }

    pub fn get_parameters_mut(&mut self) -> &mut ParameterList {
        &mut self.parameters
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name)
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains(name)
    }

    pub fn set_parameter(&mut self, name: &str, value: impl Into<String>) {
        self.parameters.set(name, value);
    }

    pub fn remove_parameter(&mut self, name: &str) -> Option<String> {
        self.parameters.remove(name)
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}", self.primary_type, self.sub_type, self.parameters)
    }
}

impl FromStr for MimeType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
