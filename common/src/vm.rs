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

//! Capability interface into the bytecode script runtime

use crate::symbol::{InstanceHandle, SymbolIndex};

/// Signal reported by a scripted function when it returns
///
/// A state's loop function reports zero while the state should keep looping
/// and non-zero once it has finished.
pub type CompletionSignal = i32;

/// Capability interface implemented by a bytecode script runtime
///
/// The world logic talks to scripted code exclusively through this trait:
/// resolving named functions to symbol indices, binding instance roles, and
/// invoking functions. Bytecode-level failures (bad instructions, missing
/// bound instances) are the implementation's own responsibility; callers
/// only observe the returned completion signal.
pub trait ScriptVm {
    /// Resolve a symbol name to its table index
    fn resolve_symbol(&self, name: &str) -> Option<SymbolIndex>;

    /// Check whether a symbol with the given name exists
    fn has_symbol(&self, name: &str) -> bool;

    /// Canonical name of the symbol at the given index
    fn symbol_name(&self, index: SymbolIndex) -> Option<&str>;

    /// Bind a script-object instance to a named role for subsequent calls
    fn bind_instance(&mut self, role: &str, instance: InstanceHandle);

    /// Run the function at the given index and report its completion signal
    fn run_function(&mut self, index: SymbolIndex) -> CompletionSignal;
}
