use log::{debug, info};

use crate::error::Result;
use crate::geometry::{Point, Size};

use super::button::{MenuButton, PadButton, Usability};
use super::config::GamepadConfig;
use super::direction_pad::VirtualDirectionPad;
use super::layout::GamepadLayout;
use super::menu_panel::VirtualMenuPanel;

/// Every button on the virtual gamepad.
///
/// Pad buttons come first, in hit-test priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Stand,
    PrimaryAction,
    SecondaryAction,
    SpellAction,
    Cancel,
    Health,
    Mana,
    Character,
    Quests,
    Inventory,
    Map,
}

impl ButtonId {
    pub const ALL: [ButtonId; 11] = [
        ButtonId::Stand,
        ButtonId::PrimaryAction,
        ButtonId::SecondaryAction,
        ButtonId::SpellAction,
        ButtonId::Cancel,
        ButtonId::Health,
        ButtonId::Mana,
        ButtonId::Character,
        ButtonId::Quests,
        ButtonId::Inventory,
        ButtonId::Map,
    ];

    pub const PAD_BUTTONS: [ButtonId; 7] = [
        ButtonId::Stand,
        ButtonId::PrimaryAction,
        ButtonId::SecondaryAction,
        ButtonId::SpellAction,
        ButtonId::Cancel,
        ButtonId::Health,
        ButtonId::Mana,
    ];

    pub fn is_menu_button(self) -> bool {
        VirtualMenuPanel::BUTTONS.contains(&self)
    }
}

/// What a touch point landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    DirectionPad,
    Button(ButtonId),
}

/// Shared view over either button shape.
#[derive(Debug, Clone, Copy)]
pub enum ButtonRef<'a> {
    Pad(&'a PadButton),
    Menu(&'a MenuButton),
}

impl ButtonRef<'_> {
    pub fn contains(&self, point: Point) -> bool {
        match self {
            ButtonRef::Pad(button) => button.contains(point),
            ButtonRef::Menu(button) => button.contains(point),
        }
    }

    pub fn is_held(&self) -> bool {
        match self {
            ButtonRef::Pad(button) => button.is_held,
            ButtonRef::Menu(button) => button.is_held,
        }
    }

    pub fn did_state_change(&self) -> bool {
        match self {
            ButtonRef::Pad(button) => button.did_state_change,
            ButtonRef::Menu(button) => button.did_state_change,
        }
    }

    pub fn is_usable(&self) -> bool {
        match self {
            ButtonRef::Pad(button) => button.is_usable(),
            ButtonRef::Menu(button) => button.is_usable(),
        }
    }
}

/// 🎮 The whole on-screen gamepad.
///
/// Owned by the input layer; the touch router borrows it mutably once per
/// cycle and the renderer reads it to draw the controls.
#[derive(Debug, Clone, Default)]
pub struct VirtualGamepad {
    pub menu_panel: VirtualMenuPanel,
    pub direction_pad: VirtualDirectionPad,
    pub stand: PadButton,
    pub primary_action: PadButton,
    pub secondary_action: PadButton,
    pub spell_action: PadButton,
    pub cancel: PadButton,
    pub health: PadButton,
    pub mana: PadButton,
    is_active: bool,
}

impl VirtualGamepad {
    /// Lay out every control for `screen`. Starts inactive.
    pub fn initialize(screen: Size, config: &GamepadConfig) -> Result<Self> {
        let layout = GamepadLayout::compute(screen, config)?;
        let gamepad = Self::from_layout(&layout, config.dead_zone_ratio);
        info!("virtual gamepad initialized");
        Ok(gamepad)
    }

    pub fn from_layout(layout: &GamepadLayout, dead_zone_ratio: f32) -> Self {
        let [character, quests, inventory, map] = layout.menu_buttons.map(MenuButton::new);
        Self {
            menu_panel: VirtualMenuPanel {
                character,
                quests,
                inventory,
                map,
                area: layout.menu_panel,
            },
            direction_pad: VirtualDirectionPad::new(layout.direction_pad, dead_zone_ratio),
            stand: PadButton::new(layout.stand),
            primary_action: PadButton::new(layout.primary_action),
            secondary_action: PadButton::new(layout.secondary_action),
            spell_action: PadButton::new(layout.spell_action),
            cancel: PadButton::new(layout.cancel),
            health: PadButton::new(layout.health),
            mana: PadButton::new(layout.mana),
            is_active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Start accepting touches. Button and pad state is left alone.
    pub fn activate(&mut self) {
        if !self.is_active {
            debug!("virtual gamepad activated");
        }
        self.is_active = true;
    }

    /// Stop accepting touches and release everything.
    pub fn deactivate(&mut self) {
        if self.is_active {
            debug!("virtual gamepad deactivated");
        }
        self.is_active = false;
        self.menu_panel.deactivate();
        self.direction_pad.deactivate();
        for id in ButtonId::PAD_BUTTONS {
            if let Some(button) = self.pad_button_mut(id) {
                button.deactivate();
            }
        }
    }

    /// Control under `point`: direction pad first, then pad buttons, then the
    /// menu panel.
    pub fn hit_test(&self, point: Point) -> Option<Control> {
        if self.direction_pad.contains(point) {
            return Some(Control::DirectionPad);
        }
        let pad_hit = ButtonId::PAD_BUTTONS
            .into_iter()
            .find(|&id| self.pad_button(id).is_some_and(|b| b.contains(point)));
        pad_hit
            .or_else(|| self.menu_panel.button_at(point))
            .map(Control::Button)
    }

    pub fn button(&self, id: ButtonId) -> ButtonRef<'_> {
        match id {
            ButtonId::Stand => ButtonRef::Pad(&self.stand),
            ButtonId::PrimaryAction => ButtonRef::Pad(&self.primary_action),
            ButtonId::SecondaryAction => ButtonRef::Pad(&self.secondary_action),
            ButtonId::SpellAction => ButtonRef::Pad(&self.spell_action),
            ButtonId::Cancel => ButtonRef::Pad(&self.cancel),
            ButtonId::Health => ButtonRef::Pad(&self.health),
            ButtonId::Mana => ButtonRef::Pad(&self.mana),
            ButtonId::Character => ButtonRef::Menu(&self.menu_panel.character),
            ButtonId::Quests => ButtonRef::Menu(&self.menu_panel.quests),
            ButtonId::Inventory => ButtonRef::Menu(&self.menu_panel.inventory),
            ButtonId::Map => ButtonRef::Menu(&self.menu_panel.map),
        }
    }

    pub fn pad_button(&self, id: ButtonId) -> Option<&PadButton> {
        match self.button(id) {
            ButtonRef::Pad(button) => Some(button),
            ButtonRef::Menu(_) => None,
        }
    }

    pub fn pad_button_mut(&mut self, id: ButtonId) -> Option<&mut PadButton> {
        match id {
            ButtonId::Stand => Some(&mut self.stand),
            ButtonId::PrimaryAction => Some(&mut self.primary_action),
            ButtonId::SecondaryAction => Some(&mut self.secondary_action),
            ButtonId::SpellAction => Some(&mut self.spell_action),
            ButtonId::Cancel => Some(&mut self.cancel),
            ButtonId::Health => Some(&mut self.health),
            ButtonId::Mana => Some(&mut self.mana),
            _ => None,
        }
    }

    pub fn set_usability(&mut self, id: ButtonId, usability: Usability) {
        if let Some(button) = self.pad_button_mut(id) {
            button.set_usability(usability);
        } else if let Some(button) = self.menu_panel.button_mut(id) {
            button.set_usability(usability);
        }
    }

    /// Feed one cycle's touch state to a button.
    pub fn update_button(&mut self, id: ButtonId, is_touched: bool) {
        if let Some(button) = self.pad_button_mut(id) {
            button.update_state(is_touched);
        } else if let Some(button) = self.menu_panel.button_mut(id) {
            button.update_state(is_touched);
        }
    }

    /// Take a button's change edge, clearing it.
    pub fn take_state_change(&mut self, id: ButtonId) -> bool {
        if let Some(button) = self.pad_button_mut(id) {
            button.take_state_change()
        } else {
            self.menu_panel
                .button_mut(id)
                .is_some_and(|button| button.take_state_change())
        }
    }

    /// True when no button is held and the direction pad is centered
    pub fn is_neutral(&self) -> bool {
        self.direction_pad.is_neutral()
            && ButtonId::ALL.iter().all(|&id| !self.button(id).is_held())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Area, Circle};

    fn gamepad() -> VirtualGamepad {
        VirtualGamepad::initialize(Size::new(1280, 720), &GamepadConfig::default()).unwrap()
    }

    #[test]
    fn starts_inactive_and_neutral() {
        let gamepad = gamepad();
        assert!(!gamepad.is_active());
        assert!(gamepad.is_neutral());
        assert_eq!(gamepad.direction_pad.position, gamepad.direction_pad.area.center);
    }

    #[test]
    fn activate_does_not_touch_state() {
        let mut gamepad = gamepad();
        gamepad.activate();
        assert!(gamepad.is_active());
        assert!(gamepad.is_neutral());
        assert!(!gamepad.primary_action.did_state_change);
    }

    #[test]
    fn deactivate_releases_everything() {
        let mut gamepad = gamepad();
        gamepad.activate();
        for id in ButtonId::ALL {
            gamepad.update_button(id, true);
        }
        let up = gamepad.direction_pad.area.center - crate::geometry::Displacement::new(0, 60);
        gamepad.direction_pad.update_position(up);
        assert!(gamepad.direction_pad.is_up_pressed);

        gamepad.deactivate();
        assert!(!gamepad.is_active());
        assert!(gamepad.is_neutral());
        for id in ButtonId::ALL {
            assert!(gamepad.button(id).did_state_change(), "{id:?} lost its release edge");
        }

        gamepad.deactivate();
        assert!(gamepad.is_neutral());
        for id in ButtonId::ALL {
            assert!(!gamepad.button(id).did_state_change());
        }
    }

    #[test]
    fn hit_test_finds_each_control() {
        let gamepad = gamepad();
        assert_eq!(
            gamepad.hit_test(gamepad.direction_pad.area.center),
            Some(Control::DirectionPad)
        );
        for id in ButtonId::PAD_BUTTONS {
            let center = gamepad.pad_button(id).unwrap().area.center;
            assert_eq!(gamepad.hit_test(center), Some(Control::Button(id)));
        }
        for id in VirtualMenuPanel::BUTTONS {
            let center = gamepad.menu_panel.button(id).unwrap().area.center();
            assert_eq!(gamepad.hit_test(center), Some(Control::Button(id)));
        }
    }

    #[test]
    fn empty_screen_space_hits_nothing() {
        let gamepad = gamepad();
        assert_eq!(gamepad.hit_test(Point::new(640, 200)), None);
        assert_eq!(gamepad.hit_test(Point::new(-5, -5)), None);
    }

    #[test]
    fn direction_pad_wins_overlaps() {
        let mut gamepad = gamepad();
        let pad_center = gamepad.direction_pad.area.center;
        gamepad.stand.area = Circle::new(pad_center, 20);
        assert_eq!(gamepad.hit_test(pad_center), Some(Control::DirectionPad));
    }

    #[test]
    fn earlier_pad_buttons_win_overlaps() {
        let mut gamepad = gamepad();
        let spot = gamepad.mana.area.center;
        gamepad.health.area = Circle::new(spot, 10);
        assert_eq!(gamepad.hit_test(spot), Some(Control::Button(ButtonId::Health)));
    }

    #[test]
    fn set_usability_reaches_both_button_kinds() {
        let mut gamepad = gamepad();
        gamepad.set_usability(ButtonId::Health, Usability::when(|| false));
        gamepad.set_usability(ButtonId::Map, Usability::when(|| false));
        assert!(!gamepad.button(ButtonId::Health).is_usable());
        assert!(!gamepad.button(ButtonId::Map).is_usable());
        assert!(gamepad.button(ButtonId::Mana).is_usable());
    }

    #[test]
    fn take_state_change_by_id() {
        let mut gamepad = gamepad();
        gamepad.update_button(ButtonId::Inventory, true);
        assert!(gamepad.take_state_change(ButtonId::Inventory));
        assert!(!gamepad.take_state_change(ButtonId::Inventory));
        assert!(gamepad.button(ButtonId::Inventory).is_held());
    }

    #[test]
    fn menu_classification() {
        assert!(ButtonId::Quests.is_menu_button());
        assert!(!ButtonId::Cancel.is_menu_button());
    }
}
