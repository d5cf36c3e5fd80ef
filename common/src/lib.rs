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

//! Mirkwald Common Types
//!
//! This crate defines the boundary between the world logic and the bytecode
//! script runtime:
//! - Opaque handles into the runtime's symbol table (`SymbolIndex`,
//!   `InstanceHandle`)
//! - The `ScriptVm` capability trait the world logic invokes scripted
//!   functions through

pub mod symbol;
pub mod vm;

pub use symbol::{InstanceHandle, SymbolIndex};
pub use vm::{CompletionSignal, ScriptVm};
