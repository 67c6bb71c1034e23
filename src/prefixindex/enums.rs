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

use strum::EnumIter;

/// Classification flags a dialing prefix can carry.
///
/// The flags are not mutually exclusive in the prefix table, so a single
/// record may report more than one kind (see [`crate::PrefixRecord::kinds`]).
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    /// **Geographic numbers.**
    /// Ranges tied to a country or an area within it.
    Geographic,
    /// **Mobile numbers.**
    /// Ranges assigned to wireless operators.
    Mobile,
    /// **Satellite numbers.**
    /// Ranges served by satellite networks, including the global
    /// mobile satellite system codes.
    Satellite,
}
