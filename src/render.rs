use macroquad::prelude::*;
use touch_gamepad::geometry::{Area, Point};
use touch_gamepad::touch::{ButtonId, ButtonRef, VirtualGamepad, VirtualMenuPanel};

// Helper to convert touch coordinates to Macroquad's Vec2
fn to_mac_vec2(p: Point) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

fn label(id: ButtonId) -> &'static str {
    match id {
        ButtonId::Stand => "STAND",
        ButtonId::PrimaryAction => "ATK",
        ButtonId::SecondaryAction => "DASH",
        ButtonId::SpellAction => "SPELL",
        ButtonId::Cancel => "X",
        ButtonId::Health => "HP",
        ButtonId::Mana => "MP",
        ButtonId::Character => "CHAR",
        ButtonId::Quests => "QUEST",
        ButtonId::Inventory => "INV",
        ButtonId::Map => "MAP",
    }
}

fn button_color(button: &ButtonRef<'_>) -> Color {
    if !button.is_usable() {
        Color::from_rgba(90, 90, 90, 70)
    } else if button.is_held() {
        Color::from_rgba(255, 220, 120, 170)
    } else {
        Color::from_rgba(200, 220, 255, 80)
    }
}

fn draw_label(text: &str, center: Vec2, color: Color) {
    let size = measure_text(text, None, 18, 1.0);
    draw_text(
        text,
        center.x - size.width / 2.0,
        center.y + size.height / 2.0,
        18.0,
        color,
    );
}

/// 🎮 Draw every control where the gamepad says it is
pub fn draw_gamepad(gamepad: &VirtualGamepad) {
    let pad = &gamepad.direction_pad;
    let center = to_mac_vec2(pad.area.center);
    let knob = to_mac_vec2(pad.position);
    let ring = Color::from_rgba(100, 200, 255, 90);

    draw_circle_lines(center.x, center.y, pad.area.radius as f32, 2.0, ring);
    draw_circle_lines(center.x, center.y, pad.dead_zone as f32, 1.0, ring);

    // Thumb indicator
    let radius = pad.area.radius as f32 * 0.35;
    draw_circle(knob.x, knob.y, radius, Color::from_rgba(100, 200, 255, 110));
    draw_circle(knob.x, knob.y, radius * 0.7, Color::from_rgba(255, 255, 255, 90));

    for id in ButtonId::PAD_BUTTONS {
        let Some(button) = gamepad.pad_button(id) else {
            continue;
        };
        let view = ButtonRef::Pad(button);
        let at = to_mac_vec2(button.area.center);
        let r = button.area.radius as f32;
        draw_circle(at.x, at.y, r, button_color(&view));
        draw_circle_lines(at.x, at.y, r, 2.0, Color::from_rgba(255, 255, 255, 120));
        draw_label(label(id), at, WHITE);
    }

    for id in VirtualMenuPanel::BUTTONS {
        let view = gamepad.button(id);
        let Some(button) = gamepad.menu_panel.button(id) else {
            continue;
        };
        let area = button.area;
        let (x, y) = (area.origin.x as f32, area.origin.y as f32);
        let (w, h) = (area.size.width as f32, area.size.height as f32);
        draw_rectangle(x, y, w, h, button_color(&view));
        draw_rectangle_lines(x, y, w, h, 2.0, Color::from_rgba(255, 255, 255, 120));
        draw_label(label(id), to_mac_vec2(area.center()), WHITE);
    }

    if !gamepad.is_active() {
        draw_text("gamepad inactive", 30.0, screen_height() - 20.0, 20.0, GRAY);
    }
}

pub fn draw_panel_overlay(title: &str) {
    let (w, h) = (screen_width(), screen_height());
    draw_rectangle(0.0, 0.0, w, h, Color::from_rgba(0, 0, 0, 170));
    draw_rectangle(w * 0.2, h * 0.2, w * 0.6, h * 0.6, Color::from_rgba(40, 32, 60, 240));
    draw_label(title, Vec2::new(w / 2.0, h * 0.3), WHITE);
    draw_label("tap anywhere to close", Vec2::new(w / 2.0, h * 0.75), GRAY);
}
