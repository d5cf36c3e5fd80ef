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

//! Extension seam for background-routine behavior

use crate::ai::state::StateRequest;

/// Strategy selecting a non-player character's scheduled background behavior
///
/// Daily-schedule selection (who does what at which hour) lives outside this
/// crate; the machine only asks the provider what, if anything, should run
/// next. Returning `None` means the character has nothing scheduled.
pub trait RoutineProvider {
    /// Select the next scheduled behavior, if any
    fn next_routine(&mut self) -> Option<StateRequest>;
}

/// Provider for characters without any schedule
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRoutine;

impl RoutineProvider for NoRoutine {
    fn next_routine(&mut self) -> Option<StateRequest> {
        None
    }
}
