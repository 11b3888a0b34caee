/*
 * mod.rs
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

//! MIME parameter lists and MIME types (RFC 2045, RFC 2046).

mod error;
mod mime_type;
mod options;
mod parameter_list;
mod utils;

pub use error::{ParseError, Result};
pub use mime_type::MimeType;
pub use options::{DuplicatePolicy, ParseOptions, SeparatorPolicy};
pub use parameter_list::ParameterList;
pub use utils::{is_token, is_token_char, is_tspecial, quote_value};
