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

//! Test utilities for AI state testing

use crate::ai::agent::CharacterAgent;
use crate::ai::state::{END_SUFFIX, LOOP_SUFFIX};
use mirkwald_common::{CompletionSignal, InstanceHandle, ScriptVm, SymbolIndex};
use std::collections::HashMap;

/// Script runtime fixture backed by a plain symbol table
///
/// Functions report completion signals queued per symbol; a symbol with no
/// queued signals reports zero (for a loop body: "keep looping").
#[derive(Debug, Default)]
pub struct ScriptedVm {
    names: Vec<String>,
    queued_signals: HashMap<SymbolIndex, Vec<CompletionSignal>>,
    calls: Vec<String>,
    bindings: Vec<(String, InstanceHandle)>,
}

impl ScriptedVm {
    /// Create an empty runtime fixture
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function symbol
    pub fn define(&mut self, name: impl Into<String>) -> SymbolIndex {
        self.names.push(name.into());
        SymbolIndex::new((self.names.len() - 1) as u32)
    }

    /// Register a state family: the base symbol plus its loop and end
    /// companions
    pub fn define_state(&mut self, name: &str) -> SymbolIndex {
        let base = self.define(name);
        self.define(format!("{name}{LOOP_SUFFIX}"));
        self.define(format!("{name}{END_SUFFIX}"));
        base
    }

    /// Queue the completion signal the symbol reports on its next call
    pub fn queue_signal(&mut self, symbol: SymbolIndex, signal: CompletionSignal) {
        self.queued_signals.entry(symbol).or_default().push(signal);
    }

    /// Names of every function invoked so far, in call order
    pub fn calls(&self) -> &[String] {
        &self.calls
    }

    /// Number of times the named function was invoked
    pub fn call_count(&self, name: &str) -> usize {
        self.calls.iter().filter(|called| *called == name).count()
    }

    /// Every role binding performed so far, in call order
    pub fn bindings(&self) -> &[(String, InstanceHandle)] {
        &self.bindings
    }
}

impl ScriptVm for ScriptedVm {
    fn resolve_symbol(&self, name: &str) -> Option<SymbolIndex> {
        self.names
            .iter()
            .position(|known| known == name)
            .map(|index| SymbolIndex::new(index as u32))
    }

    fn has_symbol(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    fn symbol_name(&self, index: SymbolIndex) -> Option<&str> {
        self.names.get(index.index() as usize).map(String::as_str)
    }

    fn bind_instance(&mut self, role: &str, instance: InstanceHandle) {
        self.bindings.push((role.to_string(), instance));
    }

    fn run_function(&mut self, index: SymbolIndex) -> CompletionSignal {
        let name = self
            .names
            .get(index.index() as usize)
            .cloned()
            .unwrap_or_else(|| index.to_string());
        self.calls.push(name);
        match self.queued_signals.get_mut(&index) {
            Some(signals) if !signals.is_empty() => signals.remove(0),
            _ => 0,
        }
    }
}

/// Character agent fixture recording everything done to it
#[derive(Debug)]
pub struct TestAgent {
    pub player_controlled: bool,
    pub pending_events: usize,
    pub animations_stopped: usize,
    pub interrupts: usize,
    pub queue_clears: usize,
    instance: InstanceHandle,
}

impl TestAgent {
    /// Agent for a non-player character
    pub fn npc() -> Self {
        Self {
            player_controlled: false,
            pending_events: 0,
            animations_stopped: 0,
            interrupts: 0,
            queue_clears: 0,
            instance: InstanceHandle::new(1),
        }
    }

    /// Agent for the player-controlled character
    pub fn player() -> Self {
        Self {
            player_controlled: true,
            ..Self::npc()
        }
    }

    /// Queue a number of pending inbound event messages
    pub fn with_pending_events(mut self, pending: usize) -> Self {
        self.pending_events = pending;
        self
    }
}

impl CharacterAgent for TestAgent {
    fn is_player_controlled(&self) -> bool {
        self.player_controlled
    }

    fn stop_animations(&mut self) {
        self.animations_stopped += 1;
    }

    fn interrupt(&mut self) {
        self.interrupts += 1;
    }

    fn is_event_queue_empty(&self) -> bool {
        self.pending_events == 0
    }

    fn clear_event_queue(&mut self) {
        self.pending_events = 0;
        self.queue_clears += 1;
    }

    fn script_instance(&self) -> InstanceHandle {
        self.instance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_vm_symbol_table() {
        let mut vm = ScriptedVm::new();
        let talk = vm.define_state("ZS_TALK");

        assert_eq!(vm.resolve_symbol("ZS_TALK"), Some(talk));
        assert!(vm.has_symbol("ZS_TALK_LOOP"));
        assert!(vm.has_symbol("ZS_TALK_END"));
        assert!(!vm.has_symbol("ZS_SLEEP"));
        assert_eq!(vm.symbol_name(talk), Some("ZS_TALK"));
    }

    #[test]
    fn test_scripted_vm_queued_signals() {
        let mut vm = ScriptedVm::new();
        let body = vm.define("ZS_TALK_LOOP");
        vm.queue_signal(body, 0);
        vm.queue_signal(body, 1);

        assert_eq!(vm.run_function(body), 0);
        assert_eq!(vm.run_function(body), 1);
        // Exhausted queue falls back to "keep looping"
        assert_eq!(vm.run_function(body), 0);
        assert_eq!(vm.call_count("ZS_TALK_LOOP"), 3);
    }

    #[test]
    fn test_agent_records_actions() {
        let mut agent = TestAgent::npc().with_pending_events(2);
        assert!(!agent.is_event_queue_empty());

        agent.stop_animations();
        agent.interrupt();
        agent.clear_event_queue();

        assert!(agent.is_event_queue_empty());
        assert_eq!(agent.animations_stopped, 1);
        assert_eq!(agent.interrupts, 1);
        assert_eq!(agent.queue_clears, 1);
    }
}
