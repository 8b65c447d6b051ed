use crate::core::data::view_command::ViewCommand;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Translates a key press into a view command. Releases are ignored; held keys
/// repeat through the platform's key repeat.
#[must_use]
pub fn view_command_for_key(key_code: KeyCode, state: ElementState) -> Option<ViewCommand> {
    if state != ElementState::Pressed {
        return None;
    }

    match key_code {
        KeyCode::Equal | KeyCode::NumpadAdd | KeyCode::KeyZ => Some(ViewCommand::ZoomIn),
        KeyCode::Minus | KeyCode::NumpadSubtract | KeyCode::KeyX => Some(ViewCommand::ZoomOut),
        KeyCode::ArrowLeft => Some(ViewCommand::Pan { dx: -1.0, dy: 0.0 }),
        KeyCode::ArrowRight => Some(ViewCommand::Pan { dx: 1.0, dy: 0.0 }),
        KeyCode::ArrowUp => Some(ViewCommand::Pan { dx: 0.0, dy: -1.0 }),
        KeyCode::ArrowDown => Some(ViewCommand::Pan { dx: 0.0, dy: 1.0 }),
        KeyCode::KeyC => Some(ViewCommand::CyclePalette),
        KeyCode::KeyR => Some(ViewCommand::Reset),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_keys_map_to_zoom_commands() {
        for key in [KeyCode::Equal, KeyCode::NumpadAdd, KeyCode::KeyZ] {
            assert_eq!(
                view_command_for_key(key, ElementState::Pressed),
                Some(ViewCommand::ZoomIn)
            );
        }

        for key in [KeyCode::Minus, KeyCode::NumpadSubtract, KeyCode::KeyX] {
            assert_eq!(
                view_command_for_key(key, ElementState::Pressed),
                Some(ViewCommand::ZoomOut)
            );
        }
    }

    #[test]
    fn test_releases_are_ignored() {
        assert_eq!(
            view_command_for_key(KeyCode::KeyZ, ElementState::Released),
            None
        );
    }

    #[test]
    fn test_arrows_pan_in_screen_directions() {
        assert_eq!(
            view_command_for_key(KeyCode::ArrowDown, ElementState::Pressed),
            Some(ViewCommand::Pan { dx: 0.0, dy: 1.0 })
        );
        assert_eq!(
            view_command_for_key(KeyCode::ArrowLeft, ElementState::Pressed),
            Some(ViewCommand::Pan { dx: -1.0, dy: 0.0 })
        );
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        assert_eq!(
            view_command_for_key(KeyCode::KeyQ, ElementState::Pressed),
            None
        );
    }
}
