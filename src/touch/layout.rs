use log::{info, warn};

use crate::error::{GamepadError, Result};
use crate::geometry::{Circle, Point, Rectangle, Size};

use super::config::GamepadConfig;

/// Smallest screen side the gamepad can be laid out on.
pub const MIN_SCREEN_SIDE: i32 = 120;

/// Where every control sits on screen, in touch coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GamepadLayout {
    pub screen: Size,
    pub direction_pad: Circle,
    pub stand: Circle,
    pub primary_action: Circle,
    pub secondary_action: Circle,
    pub spell_action: Circle,
    pub cancel: Circle,
    pub health: Circle,
    pub mana: Circle,
    pub menu_panel: Rectangle,
    /// character, quests, inventory, map
    pub menu_buttons: [Rectangle; 4],
}

/// Physical sizes in pixels, before placement
struct Metrics {
    margin: i32,
    direction_pad_size: i32,
    pad_button_size: i32,
    pad_button_spacing: i32,
}

impl Metrics {
    fn for_screen(screen: Size, dpi: Option<f32>) -> Self {
        match dpi {
            Some(dpi) => Self {
                margin: (0.25 * dpi).round() as i32,
                direction_pad_size: dpi.round() as i32,
                pad_button_size: (0.3 * dpi).round() as i32,
                pad_button_spacing: (0.1 * dpi).round() as i32,
            },
            None => {
                let base = screen.width.min(screen.height);
                let margin = base / 10;
                Self {
                    margin,
                    direction_pad_size: base / 4,
                    pad_button_size: (1.1 * base as f32 / 10.0).round() as i32,
                    pad_button_spacing: margin / 3,
                }
            }
        }
    }
}

impl GamepadLayout {
    pub fn compute(screen: Size, config: &GamepadConfig) -> Result<Self> {
        if screen.width < MIN_SCREEN_SIDE || screen.height < MIN_SCREEN_SIDE {
            return Err(GamepadError::ScreenTooSmall {
                width: screen.width,
                height: screen.height,
            });
        }
        config.validate()?;

        let m = Metrics::for_screen(screen, config.dpi);
        let menu = &config.menu_panel;
        let step = menu.button_width + menu.button_spacing;
        let too_small = || GamepadError::ScreenTooSmall {
            width: screen.width,
            height: screen.height,
        };
        if m.direction_pad_size + 2 * m.margin > screen.width.min(screen.height) {
            return Err(too_small());
        }
        if step * 4 > screen.width || menu.top_margin + menu.button_height > screen.height {
            return Err(too_small());
        }
        let button_radius = m.pad_button_size / 2;

        // bottom-left: direction pad
        let pad_radius = m.direction_pad_size / 2;
        let pad_center = Point::new(
            m.margin + pad_radius,
            screen.height - m.margin - pad_radius,
        );
        let direction_pad = Circle::new(pad_center, pad_radius);

        // stand sits diagonally below-right of the pad
        let stand_diagonal = pad_radius + m.pad_button_spacing / 2 + button_radius;
        let stand_offset = (stand_diagonal as f32 / std::f32::consts::SQRT_2).round() as i32;
        let stand = Circle::new(
            Point::new(pad_center.x + stand_offset, pad_center.y + stand_offset),
            button_radius,
        );

        // health and mana side by side above the pad
        let potion_y = pad_center.y - pad_radius - m.pad_button_spacing - button_radius;
        let potion_step = m.pad_button_size + m.pad_button_spacing;
        let health_x = pad_center.x - potion_step / 2;
        let health = Circle::new(Point::new(health_x, potion_y), button_radius);
        let mana = Circle::new(Point::new(health_x + potion_step, potion_y), button_radius);

        // bottom-right: action buttons in a diamond
        let diamond = (std::f32::consts::SQRT_2
            * (m.pad_button_size * 2 + m.pad_button_spacing) as f32)
            .round() as i32;
        let right = screen.width - m.margin - button_radius;
        let left = right - diamond;
        let bottom = screen.height - m.margin - button_radius;
        let top = bottom - diamond;
        let middle_x = left + diamond / 2;
        let middle_y = top + diamond / 2;
        let primary_action = Circle::new(Point::new(right, middle_y), button_radius);
        let secondary_action = Circle::new(Point::new(middle_x, top), button_radius);
        let spell_action = Circle::new(Point::new(left, middle_y), button_radius);
        let cancel = Circle::new(Point::new(middle_x, bottom), button_radius);

        // top-right: menu row
        let button_size = Size::new(menu.button_width, menu.button_height);
        let row_x = screen.width - step * 4;
        let menu_buttons = [0, 1, 2, 3].map(|i| {
            Rectangle::new(Point::new(row_x + step * i, menu.top_margin), button_size)
        });
        let menu_panel = Rectangle::new(
            Point::new(row_x, menu.top_margin),
            Size::new(step * 4 - menu.button_spacing, menu.button_height),
        );

        let layout = Self {
            screen,
            direction_pad,
            stand,
            primary_action,
            secondary_action,
            spell_action,
            cancel,
            health,
            mana,
            menu_panel,
            menu_buttons,
        };

        info!(
            "virtual gamepad layout for {}x{}: pad {:?} r{}, buttons r{}, menu at {:?}",
            screen.width,
            screen.height,
            direction_pad.center,
            direction_pad.radius,
            button_radius,
            menu_panel.origin
        );
        if !layout.fits_on_screen() {
            warn!("virtual gamepad controls extend past the screen edge");
        }

        Ok(layout)
    }

    pub fn circles(&self) -> [Circle; 8] {
        [
            self.direction_pad,
            self.stand,
            self.primary_action,
            self.secondary_action,
            self.spell_action,
            self.cancel,
            self.health,
            self.mana,
        ]
    }

    pub fn fits_on_screen(&self) -> bool {
        let circles_fit = self.circles().iter().all(|c| {
            c.center.x - c.radius >= 0
                && c.center.y - c.radius >= 0
                && c.center.x + c.radius <= self.screen.width
                && c.center.y + c.radius <= self.screen.height
        });
        let panel = self.menu_panel;
        circles_fit
            && panel.origin.x >= 0
            && panel.origin.y >= 0
            && panel.right() <= self.screen.width
            && panel.bottom() <= self.screen.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Area;

    fn layout(width: i32, height: i32) -> GamepadLayout {
        GamepadLayout::compute(Size::new(width, height), &GamepadConfig::default()).unwrap()
    }

    fn overlaps(a: &Circle, b: &Circle) -> bool {
        let reach = i64::from(a.radius + b.radius);
        (a.center - b.center).length_squared() <= reach * reach
    }

    fn assert_sane(layout: &GamepadLayout) {
        assert!(layout.fits_on_screen(), "{layout:?}");

        let circles = layout.circles();
        for (i, a) in circles.iter().enumerate() {
            for b in &circles[i + 1..] {
                assert!(!overlaps(a, b), "{a:?} overlaps {b:?}");
            }
            let top = a.center.y - a.radius;
            let left = a.center.x - a.radius;
            let clear_of_menu = top >= layout.menu_panel.bottom()
                || left + a.radius * 2 < layout.menu_panel.origin.x;
            assert!(clear_of_menu, "{a:?} reaches into the menu panel");
        }
    }

    #[test]
    fn landscape_layout() {
        let layout = layout(1280, 720);
        assert_eq!(layout.direction_pad, Circle::new(Point::new(162, 558), 90));
        assert_eq!(layout.stand, Circle::new(Point::new(262, 658), 39));
        assert_eq!(layout.primary_action, Circle::new(Point::new(1169, 480), 39));
        assert_eq!(layout.secondary_action, Circle::new(Point::new(1040, 352), 39));
        assert_eq!(layout.spell_action, Circle::new(Point::new(912, 480), 39));
        assert_eq!(layout.cancel, Circle::new(Point::new(1040, 609), 39));
        assert_eq!(layout.health, Circle::new(Point::new(111, 405), 39));
        assert_eq!(layout.mana, Circle::new(Point::new(214, 405), 39));
        assert_eq!(
            layout.menu_panel,
            Rectangle::new(Point::new(1008, 30), Size::new(268, 62))
        );
        assert_eq!(layout.menu_buttons[3].origin, Point::new(1212, 30));
        assert_sane(&layout);
    }

    #[test]
    fn smaller_screens_stay_sane() {
        assert_sane(&layout(800, 480));
        assert_sane(&layout(320, 240));
        assert_sane(&layout(720, 1280));
    }

    #[test]
    fn menu_buttons_are_inside_the_panel() {
        let layout = layout(1280, 720);
        for button in layout.menu_buttons {
            assert!(layout.menu_panel.contains(button.origin));
            assert!(button.right() <= layout.menu_panel.right());
        }
    }

    #[test]
    fn dpi_sizes_follow_physical_inches() {
        let config = GamepadConfig {
            dpi: Some(320.0),
            ..GamepadConfig::default()
        };
        let layout = GamepadLayout::compute(Size::new(1280, 720), &config).unwrap();
        assert_eq!(layout.direction_pad, Circle::new(Point::new(240, 480), 160));
        assert_eq!(layout.primary_action.radius, 48);
        assert_sane(&layout);
    }

    #[test]
    fn dpi_too_large_for_the_screen_is_rejected() {
        let config = GamepadConfig {
            dpi: Some(4096.0),
            ..GamepadConfig::default()
        };
        let err = GamepadLayout::compute(Size::new(1280, 720), &config).unwrap_err();
        assert!(matches!(err, GamepadError::ScreenTooSmall { .. }));
    }

    #[test]
    fn menu_row_wider_than_the_screen_is_rejected() {
        let mut config = GamepadConfig::default();
        config.menu_panel.button_width = 400;
        let err = GamepadLayout::compute(Size::new(1280, 720), &config).unwrap_err();
        assert!(matches!(err, GamepadError::ScreenTooSmall { .. }));
    }

    #[test]
    fn tiny_screens_are_rejected() {
        let err = GamepadLayout::compute(Size::new(100, 600), &GamepadConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            GamepadError::ScreenTooSmall {
                width: 100,
                height: 600
            }
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GamepadConfig {
            dead_zone_ratio: 2.0,
            ..GamepadConfig::default()
        };
        assert!(GamepadLayout::compute(Size::new(800, 480), &config).is_err());
    }
}
