//! Player locomotion driven by the input snapshot
//!
//! Horizontal state is a pure function of the held keys; checks run in order
//! left, right, none, so holding both directions moves left.

use super::state::{LocomotionState, Player};
use super::tick::TickInput;
use crate::config::Tuning;

/// Apply one tick of input to the player
///
/// Jumping needs `grounded` from the previous collision pass. The flag is
/// consumed by the jump so it cannot fire twice before the next pass.
pub fn apply_input(player: &mut Player, input: &TickInput, tuning: &Tuning) {
    if !player.alive {
        return;
    }

    let (vx, state) = if input.left {
        (-tuning.player_speed, LocomotionState::MovingLeft)
    } else if input.right {
        (tuning.player_speed, LocomotionState::MovingRight)
    } else {
        (0.0, LocomotionState::Idle)
    };
    player.body.vel.x = vx;
    player.locomotion = state;

    if input.up && player.grounded {
        player.body.vel.y = -tuning.jump_impulse;
        player.grounded = false;
        log::trace!("Jump at {}", player.body.pos);
    }
}
