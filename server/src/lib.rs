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

//! Mirkwald World Logic
//!
//! This crate drives script-authored behavior for characters in the
//! simulated world. Each character owns an [`ai::NpcScriptState`] machine
//! that stages, promotes, runs, and retires bytecode-scripted AI states,
//! calling into the script runtime through the `ScriptVm` boundary and into
//! the character's body through the [`ai::CharacterAgent`] boundary.

pub mod ai;
