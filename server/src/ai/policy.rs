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

//! Permission policy for player-controlled characters

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// States a player-controlled character may run without a builtin override
///
/// The default set covers the magic-reaction states every character must be
/// able to enter even while under player control.
const DEFAULT_PLAYER_STATES: [&str; 8] = [
    "ZS_ASSESSMAGIC",
    "ZS_ASSESSSTOPMAGIC",
    "ZS_MAGICFREEZE",
    "ZS_WHIRLWIND",
    "ZS_SHORTZAPPED",
    "ZS_ZAPPED",
    "ZS_PYRO",
    "ZS_MAGICSLEEP",
];

/// Error raised when a state policy cannot be loaded
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read state policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse state policy: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Allow-list of scripted states a player-controlled character may run
///
/// Non-player characters never consult this policy. It is injected into the
/// state machine so permission rules stay data-driven; the default set can
/// be replaced wholesale from a YAML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatePolicy {
    allowed_states: BTreeSet<String>,
}

impl PlayerStatePolicy {
    /// Build a policy from an explicit set of state names
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed_states: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an empty policy that admits no named state
    pub fn deny_all() -> Self {
        Self {
            allowed_states: BTreeSet::new(),
        }
    }

    /// Load a policy from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Whether the named state is admitted
    pub fn allows(&self, name: &str) -> bool {
        self.allowed_states.contains(name)
    }

    /// Admit an additional state name
    pub fn allow(&mut self, name: impl Into<String>) {
        self.allowed_states.insert(name.into());
    }

    /// Number of admitted state names
    pub fn len(&self) -> usize {
        self.allowed_states.len()
    }

    /// Whether the policy admits no named state at all
    pub fn is_empty(&self) -> bool {
        self.allowed_states.is_empty()
    }
}

impl Default for PlayerStatePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_STATES)
    }
}
