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

use thiserror::Error;

/// Rejected configuration of a [`crate::PrefixIndexBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IndexConfigError {
    /// A country code length in the priority order is zero or longer
    /// than the longest possible country calling code.
    #[error("Country code length {0} is out of range 1..=3")]
    InvalidLength(usize),
    /// The same country code length appears more than once in the
    /// priority order.
    #[error("Country code length {0} is listed more than once")]
    DuplicateLength(usize),
}
