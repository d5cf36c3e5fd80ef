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

//! AI state records and naming conventions

use mirkwald_common::SymbolIndex;
use serde::{Deserialize, Serialize};

/// Prefix distinguishing multi-phase behavior states from one-shot actions
pub const STATE_PREFIX: &str = "ZS_";

/// Suffix of a state's per-tick loop function
pub const LOOP_SUFFIX: &str = "_LOOP";

/// Suffix of a state's finalizer function
pub const END_SUFFIX: &str = "_END";

/// Phase a state record moves through while active
///
/// A record always runs `Uninitialized -> Loop -> End -> Interrupt`; `End`
/// is never skipped and `Loop` is never revisited once left. `Interrupt` is
/// the inert terminal marker a record rests in until it is superseded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiPhase {
    /// Entry function has not run yet
    #[default]
    Uninitialized,
    /// Loop function runs once per tick until it signals completion
    Loop,
    /// Finalizer runs on the next tick, then the record is invalidated
    End,
    /// Inert; waiting to be superseded
    Interrupt,
}

/// Privileged state categories the runtime recognizes regardless of name
///
/// Externally supplied on a [`StateRequest`]; `Dead` and `Unconscious`
/// bypass the player permission policy entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinAiState {
    /// Not a builtin state; permission falls back to the name allow-list
    #[default]
    None,
    Answer,
    Dead,
    Unconscious,
    FadeAway,
    Follow,
}

/// One script-driven behavior of a character
///
/// Records are created by a state request, staged as `next`, promoted to
/// `current`, and invalidated in place once their finalizer has run; they
/// are reset rather than deleted. Symbol fields are only meaningful while
/// `valid` is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiState {
    /// Base name of the state family (e.g. `ZS_TALK`)
    pub name: String,
    /// Entry function, run once when the record reaches `Uninitialized`
    pub entry_symbol: Option<SymbolIndex>,
    /// Loop body, run every tick while in `Loop`
    pub loop_symbol: Option<SymbolIndex>,
    /// Finalizer, run once when the record reaches `End`
    pub end_symbol: Option<SymbolIndex>,
    /// Whether this state was entered as part of the background routine
    /// rather than an explicit command
    pub is_routine: bool,
    /// Current phase of the record
    pub phase: AiPhase,
    /// Whether the record designates a live, runnable state
    pub valid: bool,
    /// Externally supplied privileged category
    pub builtin: BuiltinAiState,
    /// Seconds spent in the `Loop` phase; zeroed on promotion
    pub state_time: f32,
}

impl AiState {
    /// Whether the state's base name carries the behavior-state prefix
    pub fn is_state_name(name: &str) -> bool {
        name.starts_with(STATE_PREFIX)
    }

    /// Name of the state's loop companion function
    pub fn loop_name(name: &str) -> String {
        format!("{name}{LOOP_SUFFIX}")
    }

    /// Name of the state's finalizer companion function
    pub fn end_name(name: &str) -> String {
        format!("{name}{END_SUFFIX}")
    }
}

/// Identifier of a requested state: an already resolved symbol or a name
/// still to be resolved through the script runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateTarget {
    Symbol(SymbolIndex),
    Name(String),
}

/// Request to move a character into a new scripted state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRequest {
    /// What to run
    pub target: StateTarget,
    /// Let the current state finish its own finalizer before being replaced,
    /// instead of interrupting it outright
    pub end_old_state: bool,
    /// Mark the new state as background-routine behavior
    pub is_routine: bool,
    /// Privileged category, if the caller is entering a builtin state
    pub builtin: BuiltinAiState,
}

impl StateRequest {
    /// Request a state by resolved symbol index
    pub fn by_symbol(symbol: SymbolIndex) -> Self {
        Self {
            target: StateTarget::Symbol(symbol),
            end_old_state: false,
            is_routine: false,
            builtin: BuiltinAiState::None,
        }
    }

    /// Request a state by script function name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            target: StateTarget::Name(name.into()),
            end_old_state: false,
            is_routine: false,
            builtin: BuiltinAiState::None,
        }
    }

    /// Let the current state run its finalizer before being replaced
    pub fn with_end_old_state(mut self, end_old_state: bool) -> Self {
        self.end_old_state = end_old_state;
        self
    }

    /// Mark the request as background-routine behavior
    pub fn with_routine(mut self, is_routine: bool) -> Self {
        self.is_routine = is_routine;
        self
    }

    /// Tag the request with a privileged builtin category
    pub fn with_builtin(mut self, builtin: BuiltinAiState) -> Self {
        self.builtin = builtin;
        self
    }
}
