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

//! Per-character script-state machine

use crate::ai::agent::CharacterAgent;
use crate::ai::policy::PlayerStatePolicy;
use crate::ai::routine::{NoRoutine, RoutineProvider};
use crate::ai::state::{AiPhase, AiState, BuiltinAiState, StateRequest, StateTarget};
use mirkwald_common::{ScriptVm, SymbolIndex};

/// Role the acting character is bound under before every scripted call
pub const SELF_ROLE: &str = "SELF";

/// Script-state machine of a single character
///
/// Owns exactly two state records: the live `current` state and the staged
/// `next` state. Requests only ever write into `next` (and the current
/// record's phase), and promotion happens only at the top of [`tick`], so a
/// scripted function requesting a new state mid-tick cannot corrupt the
/// record being processed; the request simply waits for a later tick.
///
/// The machine never owns its collaborators. The script runtime and the
/// character agent are handed in per call by the simulation driver.
///
/// [`tick`]: NpcScriptState::tick
pub struct NpcScriptState {
    current: AiState,
    next: AiState,
    last_state_symbol: Option<SymbolIndex>,
    policy: PlayerStatePolicy,
    routine: Box<dyn RoutineProvider>,
}

impl NpcScriptState {
    /// Create an idle machine with the default player policy and no routine
    pub fn new() -> Self {
        Self {
            current: AiState::default(),
            next: AiState::default(),
            last_state_symbol: None,
            policy: PlayerStatePolicy::default(),
            routine: Box::new(NoRoutine),
        }
    }

    /// Replace the player permission policy
    pub fn with_policy(mut self, policy: PlayerStatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the routine-selection strategy
    pub fn with_routine_provider(mut self, provider: impl RoutineProvider + 'static) -> Self {
        self.routine = Box::new(provider);
        self
    }

    /// The live state record
    pub fn current_state(&self) -> &AiState {
        &self.current
    }

    /// The staged state record
    pub fn next_state(&self) -> &AiState {
        &self.next
    }

    /// Entry symbol of the most recently superseded state
    pub fn last_state_symbol(&self) -> Option<SymbolIndex> {
        self.last_state_symbol
    }

    /// Whether the named state is currently live
    pub fn is_state_active(&self, name: &str) -> bool {
        self.current.valid && self.current.name == name
    }

    /// Request a transition into a new scripted state
    ///
    /// Symbols whose name lacks the `ZS_` prefix are one-shot actions: the
    /// function is invoked synchronously and no state is staged. Otherwise
    /// the state is staged into `next` together with its loop and end
    /// companions, the current state is told to end or is interrupted, and
    /// one zero-length tick runs so the transition completes immediately
    /// when nothing blocks it.
    ///
    /// Returns false, without mutating any record, when the name cannot be
    /// resolved or a companion function is missing.
    pub fn request_state<V, A>(&mut self, vm: &mut V, agent: &mut A, request: StateRequest) -> bool
    where
        V: ScriptVm + ?Sized,
        A: CharacterAgent + ?Sized,
    {
        let symbol = match &request.target {
            StateTarget::Symbol(symbol) => *symbol,
            StateTarget::Name(name) => match vm.resolve_symbol(name) {
                Some(symbol) => symbol,
                None => {
                    tracing::warn!(name = %name, "requested state is not a known script symbol");
                    return false;
                }
            },
        };

        let Some(name) = vm.symbol_name(symbol) else {
            tracing::warn!(%symbol, "requested symbol has no name in the script runtime");
            return false;
        };
        let name = name.to_string();

        if !AiState::is_state_name(&name) {
            return self.run_immediate_action(vm, agent, symbol, request.is_routine);
        }

        let loop_name = AiState::loop_name(&name);
        let end_name = AiState::end_name(&name);
        if !vm.has_symbol(&loop_name) || !vm.has_symbol(&end_name) {
            tracing::warn!(
                state = %name,
                "state request is missing loop or end companion function"
            );
            return false;
        }

        self.next = AiState {
            name: name.clone(),
            entry_symbol: Some(symbol),
            loop_symbol: vm.resolve_symbol(&loop_name),
            end_symbol: vm.resolve_symbol(&end_name),
            is_routine: request.is_routine,
            phase: AiPhase::Uninitialized,
            valid: true,
            builtin: request.builtin,
            state_time: 0.0,
        };
        tracing::debug!(state = %name, end_old_state = request.end_old_state, "staged ai state");

        if request.end_old_state {
            // Let the old state run its own finalizer on a later tick.
            self.current.phase = AiPhase::End;
        } else {
            self.current.phase = AiPhase::Interrupt;
            if !agent.is_player_controlled() || self.can_player_use_state(&self.next) {
                agent.stop_animations();
                agent.interrupt();
                agent.clear_event_queue();
            }
        }

        self.tick(vm, agent, 0.0);
        true
    }

    /// One-shot action: bind the character and call the function once
    fn run_immediate_action<V, A>(
        &mut self,
        vm: &mut V,
        agent: &A,
        symbol: SymbolIndex,
        is_routine: bool,
    ) -> bool
    where
        V: ScriptVm + ?Sized,
        A: CharacterAgent + ?Sized,
    {
        // The action may have the character assess something mid-routine,
        // so the routine flag follows the call and is restored afterward.
        let saved_routine = self.current.is_routine;
        self.current.is_routine = is_routine;

        vm.bind_instance(SELF_ROLE, agent.script_instance());
        vm.run_function(symbol);

        self.current.is_routine = saved_routine;
        true
    }

    /// Advance the machine by one simulation step
    ///
    /// Promotes the staged state once the current one is invalid, then runs
    /// the current state's phase function. The return value is reserved for
    /// future signaling and is always false.
    pub fn tick<V, A>(&mut self, vm: &mut V, agent: &mut A, delta_time: f32) -> bool
    where
        V: ScriptVm + ?Sized,
        A: CharacterAgent + ?Sized,
    {
        // States wait while event messages are queued for delivery; the
        // tick must not mutate anything in that case.
        if !agent.is_event_queue_empty() {
            return false;
        }

        if self.current.valid && self.current.phase == AiPhase::Loop {
            self.current.state_time += delta_time;
        }

        if !self.current.valid && self.next.valid {
            self.last_state_symbol = self.current.entry_symbol;
            self.current = std::mem::take(&mut self.next);
            self.current.state_time = 0.0;
            tracing::debug!(state = %self.current.name, "promoted staged ai state");
        }

        // Players may only run admitted states; anything else stays staged
        // but dormant.
        if agent.is_player_controlled() && !self.can_player_use_state(&self.current) {
            return false;
        }

        if !self.current.valid {
            return false;
        }

        vm.bind_instance(SELF_ROLE, agent.script_instance());

        match self.current.phase {
            AiPhase::Uninitialized => {
                if let Some(entry) = self.current.entry_symbol {
                    vm.run_function(entry);
                }
                self.current.phase = AiPhase::Loop;
            }
            AiPhase::Loop => {
                let mut finished = true;
                if let Some(loop_symbol) = self.current.loop_symbol {
                    finished = vm.run_function(loop_symbol) != 0;
                }
                if finished {
                    self.current.phase = AiPhase::End;
                }
            }
            AiPhase::End => {
                if let Some(end_symbol) = self.current.end_symbol {
                    vm.run_function(end_symbol);
                }
                self.current.phase = AiPhase::Interrupt;
                self.current.valid = false;
                tracing::debug!(state = %self.current.name, "ai state finished");
            }
            AiPhase::Interrupt => {}
        }

        false
    }

    /// Whether a player-controlled character may run the given state
    ///
    /// `Dead` and `Unconscious` builtin states are always permitted; any
    /// other builtin never is. States without a builtin category consult
    /// the injected name policy. Non-player characters bypass this gate
    /// entirely.
    pub fn can_player_use_state(&self, state: &AiState) -> bool {
        if !state.valid {
            return false;
        }
        match state.builtin {
            BuiltinAiState::Dead | BuiltinAiState::Unconscious => true,
            BuiltinAiState::None => self.policy.allows(&state.name),
            _ => false,
        }
    }

    /// Stage the character's scheduled background behavior, if any
    ///
    /// The player never has a routine, so this reports success immediately
    /// for player-controlled characters. Otherwise the injected
    /// [`RoutineProvider`] picks the behavior; providers with nothing
    /// scheduled leave the machine untouched.
    pub fn start_routine_state<V, A>(&mut self, vm: &mut V, agent: &mut A) -> bool
    where
        V: ScriptVm + ?Sized,
        A: CharacterAgent + ?Sized,
    {
        if agent.is_player_controlled() {
            return true;
        }

        match self.routine.next_routine() {
            Some(request) => self.request_state(vm, agent, request.with_routine(true)),
            None => true,
        }
    }
}

impl Default for NpcScriptState {
    fn default() -> Self {
        Self::new()
    }
}
