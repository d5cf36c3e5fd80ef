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

//! Boundary to a character's body and message queue

use mirkwald_common::InstanceHandle;

/// Boundary to the character a state machine drives
///
/// The agent owns the character's animation playback, in-progress physical
/// actions, and the queue of inbound event messages awaiting delivery.
/// Scripted states do not progress while that queue is non-empty, and an
/// interrupting state request flushes it.
pub trait CharacterAgent {
    /// Whether this character is controlled by the player
    fn is_player_controlled(&self) -> bool;

    /// Stop all animation playback
    fn stop_animations(&mut self);

    /// Abort any in-progress physical action
    fn interrupt(&mut self);

    /// Whether the inbound event-message queue is empty
    fn is_event_queue_empty(&self) -> bool;

    /// Discard all pending inbound event messages
    fn clear_event_queue(&mut self);

    /// Script-object instance bound as `SELF` before scripted calls
    fn script_instance(&self) -> InstanceHandle;
}
