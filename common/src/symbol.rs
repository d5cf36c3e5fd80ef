//
// Copyright 2025-2026 Mirkwald Contributors. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Opaque handles into the script runtime

use serde::{Deserialize, Serialize};

/// Index of a named symbol (function or global) in the script runtime's
/// symbol table
///
/// Symbol indices are only meaningful to the runtime that issued them; the
/// world logic treats them as opaque tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct SymbolIndex(u32);

impl SymbolIndex {
    /// Wrap a raw symbol-table index
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw symbol-table index
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SymbolIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle of a script-object instance
///
/// Instances are bound to named roles (for example `SELF`) before a scripted
/// function is invoked, so the function knows which character it acts for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct InstanceHandle(u32);

impl InstanceHandle {
    /// Wrap a raw instance identifier
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw instance identifier
    pub const fn id(self) -> u32 {
        self.0
    }
}
