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

//! Script-driven AI states for characters
//!
//! Scripts author a character's behavior as a family of functions sharing a
//! base name: the state entry function (`ZS_TALK`), its per-tick loop body
//! (`ZS_TALK_LOOP`), and its finalizer (`ZS_TALK_END`). This module owns the
//! per-character machine that sequences those functions through their
//! phases, the permission policy restricting which states a player-controlled
//! character may run, and the extension seam for routine (background
//! schedule) behavior.

pub mod agent;
pub mod machine;
pub mod policy;
pub mod routine;
pub mod state;

#[cfg(test)]
pub mod test_utils;

pub use agent::CharacterAgent;
pub use machine::NpcScriptState;
pub use policy::{PlayerStatePolicy, PolicyError};
pub use routine::{NoRoutine, RoutineProvider};
pub use state::{AiPhase, AiState, BuiltinAiState, StateRequest};
