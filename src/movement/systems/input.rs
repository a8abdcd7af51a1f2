//! Movement domain: input sampling and action queueing.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Sample keyboard and gamepads into the frame's input state. Runs on the
/// frame clock; edges are latched here and consumed by `queue_actions`.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<MovementInput>,
) {
    let mut axis: f32 = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    let mut jump_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    let mut jump_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
    let mut grab_pressed = keyboard.just_pressed(KeyCode::KeyJ);
    let mut trigger_held = false;

    for gamepad in &gamepads {
        axis += gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0);
        jump_pressed |= gamepad.just_pressed(GamepadButton::South);
        jump_released |= gamepad.just_released(GamepadButton::South);
        grab_pressed |= gamepad.just_pressed(GamepadButton::West);

        let left_trigger = gamepad.get(GamepadButton::LeftTrigger2).unwrap_or(0.0);
        let right_trigger = gamepad.get(GamepadButton::RightTrigger2).unwrap_or(0.0);
        trigger_held |= left_trigger > 0.0 || right_trigger > 0.0;
    }

    // Analog triggers grab on the crossing from zero to nonzero.
    if trigger_held && !input.trigger_was_held {
        grab_pressed = true;
    }
    input.trigger_was_held = trigger_held;

    input.axis = axis.clamp(-1.0, 1.0);
    input.jump_pressed = jump_pressed;
    input.jump_released = jump_released;
    input.grab_pressed = grab_pressed;
}

/// Turn the frame's edges into per-body state. A jump press restarts the
/// buffer window, replacing any prior arming.
pub(crate) fn queue_actions(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        if input.jump_pressed {
            state.jump_buffer.start(tuning.jump_buffer_time);
            state.jump_queued = true;
        }
        if input.jump_released {
            state.release_queued = true;
        }
        if input.grab_pressed {
            state.grab_queued = true;
        }
    }
}
