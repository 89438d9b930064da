use crate::geometry::{Area, Point, Rectangle};

use super::button::MenuButton;
use super::gamepad::ButtonId;

/// Row of menu buttons with a bounding box for quick rejection.
#[derive(Debug, Clone, Default)]
pub struct VirtualMenuPanel {
    pub character: MenuButton,
    pub quests: MenuButton,
    pub inventory: MenuButton,
    pub map: MenuButton,
    pub area: Rectangle,
}

impl VirtualMenuPanel {
    pub const BUTTONS: [ButtonId; 4] = [
        ButtonId::Character,
        ButtonId::Quests,
        ButtonId::Inventory,
        ButtonId::Map,
    ];

    pub fn button(&self, id: ButtonId) -> Option<&MenuButton> {
        match id {
            ButtonId::Character => Some(&self.character),
            ButtonId::Quests => Some(&self.quests),
            ButtonId::Inventory => Some(&self.inventory),
            ButtonId::Map => Some(&self.map),
            _ => None,
        }
    }

    pub fn button_mut(&mut self, id: ButtonId) -> Option<&mut MenuButton> {
        match id {
            ButtonId::Character => Some(&mut self.character),
            ButtonId::Quests => Some(&mut self.quests),
            ButtonId::Inventory => Some(&mut self.inventory),
            ButtonId::Map => Some(&mut self.map),
            _ => None,
        }
    }

    pub fn button_at(&self, point: Point) -> Option<ButtonId> {
        if !self.area.contains(point) {
            return None;
        }
        Self::BUTTONS
            .into_iter()
            .find(|&id| self.button(id).is_some_and(|button| button.contains(point)))
    }

    pub fn deactivate(&mut self) {
        self.character.deactivate();
        self.quests.deactivate();
        self.inventory.deactivate();
        self.map.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn panel() -> VirtualMenuPanel {
        let size = Size::new(20, 20);
        VirtualMenuPanel {
            character: MenuButton::new(Rectangle::new(Point::new(0, 0), size)),
            quests: MenuButton::new(Rectangle::new(Point::new(24, 0), size)),
            inventory: MenuButton::new(Rectangle::new(Point::new(48, 0), size)),
            map: MenuButton::new(Rectangle::new(Point::new(72, 0), size)),
            area: Rectangle::new(Point::new(0, 0), Size::new(92, 20)),
        }
    }

    #[test]
    fn finds_button_under_point() {
        let panel = panel();
        assert_eq!(panel.button_at(Point::new(5, 5)), Some(ButtonId::Character));
        assert_eq!(panel.button_at(Point::new(24, 19)), Some(ButtonId::Quests));
        assert_eq!(panel.button_at(Point::new(91, 0)), Some(ButtonId::Map));
    }

    #[test]
    fn gaps_and_outside_points_hit_nothing() {
        let panel = panel();
        assert_eq!(panel.button_at(Point::new(21, 5)), None);
        assert_eq!(panel.button_at(Point::new(30, 20)), None);
        assert_eq!(panel.button_at(Point::new(-1, 5)), None);
    }

    #[test]
    fn bounding_box_rejects_before_buttons() {
        let mut panel = panel();
        panel.area = Rectangle::new(Point::new(0, 0), Size::new(10, 10));
        assert_eq!(panel.button_at(Point::new(74, 5)), None);
    }

    #[test]
    fn deactivate_releases_every_button() {
        let mut panel = panel();
        panel.character.update_state(true);
        panel.map.update_state(true);

        panel.deactivate();
        assert!(!panel.character.is_held && panel.character.did_state_change);
        assert!(!panel.map.is_held && panel.map.did_state_change);
        assert!(!panel.quests.is_held && !panel.quests.did_state_change);

        panel.deactivate();
        for id in VirtualMenuPanel::BUTTONS {
            let button = panel.button(id).unwrap();
            assert!(!button.is_held);
            assert!(!button.did_state_change);
        }
    }

    #[test]
    fn pad_buttons_are_not_part_of_the_panel() {
        assert!(panel().button(ButtonId::Health).is_none());
    }
}
