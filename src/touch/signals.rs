use super::gamepad::{ButtonId, VirtualGamepad};

/// Abstract controller inputs the game already understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerButton {
    A,
    B,
    X,
    Y,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    Back,
    Start,
    LeftStick,
}

impl ControllerButton {
    pub fn for_button(id: ButtonId) -> Self {
        match id {
            ButtonId::PrimaryAction => ControllerButton::A,
            ButtonId::Cancel => ControllerButton::B,
            ButtonId::SecondaryAction => ControllerButton::X,
            ButtonId::SpellAction => ControllerButton::Y,
            ButtonId::Stand => ControllerButton::LeftShoulder,
            ButtonId::Health => ControllerButton::LeftTrigger,
            ButtonId::Mana => ControllerButton::RightTrigger,
            ButtonId::Character => ControllerButton::Back,
            ButtonId::Quests => ControllerButton::Start,
            ButtonId::Inventory => ControllerButton::RightShoulder,
            ButtonId::Map => ControllerButton::LeftStick,
        }
    }
}

/// Press or release of a controller button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerEvent {
    pub button: ControllerButton,
    pub pressed: bool,
}

/// Per-tick copy of what the gamepad reports, safe to hand to another thread.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerState {
    /// Indexed like [`ButtonId::ALL`]
    pub held: [bool; 11],
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Stick deflection, y positive down
    pub movement: (f32, f32),
}

impl ControllerState {
    pub fn capture(gamepad: &VirtualGamepad) -> Self {
        let pad = &gamepad.direction_pad;
        Self {
            held: ButtonId::ALL.map(|id| gamepad.button(id).is_held()),
            up: pad.is_up_pressed,
            down: pad.is_down_pressed,
            left: pad.is_left_pressed,
            right: pad.is_right_pressed,
            movement: pad.axis(),
        }
    }

    pub fn is_held(&self, button: ControllerButton) -> bool {
        ButtonId::ALL
            .iter()
            .zip(self.held)
            .any(|(&id, held)| held && ControllerButton::for_button(id) == button)
    }
}

/// Drain this cycle's edges as controller events. Each edge is reported once.
pub fn poll_events(gamepad: &mut VirtualGamepad) -> Vec<ControllerEvent> {
    let mut events = Vec::new();
    for id in ButtonId::ALL {
        if gamepad.take_state_change(id) {
            events.push(ControllerEvent {
                button: ControllerButton::for_button(id),
                pressed: gamepad.button(id).is_held(),
            });
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::geometry::{Displacement, Size};
    use crate::touch::GamepadConfig;

    fn gamepad() -> VirtualGamepad {
        VirtualGamepad::initialize(Size::new(1280, 720), &GamepadConfig::default()).unwrap()
    }

    #[test]
    fn mapping_is_one_to_one() {
        let mapped: HashSet<_> = ButtonId::ALL
            .into_iter()
            .map(ControllerButton::for_button)
            .collect();
        assert_eq!(mapped.len(), ButtonId::ALL.len());
    }

    #[test]
    fn edges_are_reported_once() {
        let mut gamepad = gamepad();
        gamepad.update_button(ButtonId::PrimaryAction, true);
        gamepad.update_button(ButtonId::Map, true);

        let events = poll_events(&mut gamepad);
        assert_eq!(
            events,
            vec![
                ControllerEvent {
                    button: ControllerButton::A,
                    pressed: true
                },
                ControllerEvent {
                    button: ControllerButton::LeftStick,
                    pressed: true
                },
            ]
        );
        assert!(poll_events(&mut gamepad).is_empty());

        gamepad.update_button(ButtonId::PrimaryAction, false);
        assert_eq!(
            poll_events(&mut gamepad),
            vec![ControllerEvent {
                button: ControllerButton::A,
                pressed: false
            }]
        );
    }

    #[test]
    fn capture_reflects_buttons_and_pad() {
        let mut gamepad = gamepad();
        gamepad.update_button(ButtonId::Health, true);
        let radius = gamepad.direction_pad.area.radius;
        let target = gamepad.direction_pad.area.center + Displacement::new(-radius, 0);
        gamepad.direction_pad.update_position(target);

        let state = ControllerState::capture(&gamepad);
        assert!(state.is_held(ControllerButton::LeftTrigger));
        assert!(!state.is_held(ControllerButton::A));
        assert!(state.left && !state.right && !state.up && !state.down);
        assert_eq!(state.movement, (-1.0, 0.0));
    }

    #[test]
    fn neutral_gamepad_captures_default_state() {
        assert_eq!(ControllerState::capture(&gamepad()), ControllerState::default());
    }
}
