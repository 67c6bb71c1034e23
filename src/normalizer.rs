// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;

use crate::helper_constants::{LEFT_PARENTHESIS, PLUS_SIGN, STRIPPED_CHARS, TRUNK_PREFIX};

/// Removes number decorations so that the result can be used as a lookup
/// key.
///
/// Spaces, dashes, dots, slashes, parentheses and plus signs are dropped
/// wherever they occur. A `0` is dropped only when it is the first
/// character of the input or directly follows `(`, which covers national
/// trunk prefixes such as `44(0)20...`. Everything else, including the
/// extension separators `x` and `,`, is kept in order.
///
/// Returns the borrowed input when there is nothing to remove. This is not
/// validation: any input, even an empty one, produces some output.
pub fn sanitize(phone: &str) -> Cow<'_, str> {
    if !phone.starts_with(TRUNK_PREFIX) && !phone.contains(STRIPPED_CHARS) {
        return Cow::Borrowed(phone);
    }

    let mut sanitized = String::with_capacity(phone.len());
    let mut previous: Option<char> = None;
    for c in phone.chars() {
        let drop_trunk_prefix = c == TRUNK_PREFIX
            && previous.is_none_or(|prev| prev == LEFT_PARENTHESIS);
        if !drop_trunk_prefix && !STRIPPED_CHARS.contains(&c) {
            sanitized.push(c);
        }
        previous = Some(c);
    }
    Cow::Owned(sanitized)
}

/// Sanitizes the number and prefixes it with exactly one `+`.
pub fn normalize(phone: &str) -> String {
    let sanitized = sanitize(phone);
    fast_cat::concat_str!(PLUS_SIGN, &*sanitized)
}
