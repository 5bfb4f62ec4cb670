//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::PlayerInput;

/// Freezes the keyboard into this frame's input snapshot.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    *input = sample_input(&keyboard);
}

pub(crate) fn sample_input(keyboard: &ButtonInput<KeyCode>) -> PlayerInput {
    let any = |keys: &[KeyCode]| keys.iter().any(|key| keyboard.pressed(*key));

    PlayerInput {
        left: any(&[KeyCode::ArrowLeft, KeyCode::KeyA]),
        right: any(&[KeyCode::ArrowRight, KeyCode::KeyD]),
        up: any(&[KeyCode::ArrowUp, KeyCode::KeyW]),
        down: any(&[KeyCode::ArrowDown, KeyCode::KeyS]),
        jump: any(&[KeyCode::Space]),
        dash: any(&[KeyCode::ShiftLeft, KeyCode::KeyJ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_map_to_snapshot() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::Space);
        keyboard.press(KeyCode::ShiftLeft);

        let input = sample_input(&keyboard);

        assert!(input.left && input.jump && input.dash);
        assert!(!input.right && !input.up && !input.down);
    }

    #[test]
    fn test_debug_damage_chord_does_not_jump() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::ControlLeft);
        keyboard.press(KeyCode::KeyK);

        assert_eq!(sample_input(&keyboard), PlayerInput::default());
    }
}
