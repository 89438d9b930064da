use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};
use macroquad::input::TouchPhase as PlatformPhase;
use macroquad::prelude::*;
use touch_gamepad::geometry::Size;
use touch_gamepad::touch::{
    poll_events, ButtonId, ControllerButton, ControllerEvent, ControllerState, GamepadConfig,
    TouchEvent, TouchPhase, TouchRouter, Usability, VirtualGamepad,
};

use crate::player::Player;
use crate::render;

/// Touch id used when the mouse stands in for a finger
const MOUSE_TOUCH_ID: u64 = u64::MAX;

const MAX_HEALTH: i32 = 5;
const MAX_MANA: i32 = 50;
const SPELL_COST: i32 = 10;

// Bolt fired by an action button
struct Bolt {
    pos: Vec2,
    velocity: Vec2,
    life: f32,
    size: f32,
    color: Color,
}

pub struct GameState {
    gamepad: VirtualGamepad,
    router: TouchRouter,
    player: Player,
    bolts: Vec<Bolt>,

    // Values the usability predicates look at
    health: Rc<Cell<i32>>,
    mana: Rc<Cell<i32>>,
    health_potions: Rc<Cell<u32>>,
    mana_potions: Rc<Cell<u32>>,

    open_panel: Option<&'static str>,
    time: f32,
}

impl GameState {
    pub fn new(config: &GamepadConfig) -> touch_gamepad::Result<Self> {
        let screen = Size::new(screen_width() as i32, screen_height() as i32);
        let mut gamepad = VirtualGamepad::initialize(screen, config)?;

        let health = Rc::new(Cell::new(MAX_HEALTH - 2));
        let mana = Rc::new(Cell::new(MAX_MANA));
        let health_potions = Rc::new(Cell::new(3));
        let mana_potions = Rc::new(Cell::new(2));

        {
            let (health, potions) = (Rc::clone(&health), Rc::clone(&health_potions));
            gamepad.set_usability(
                ButtonId::Health,
                Usability::when(move || potions.get() > 0 && health.get() < MAX_HEALTH),
            );
        }
        {
            let (mana, potions) = (Rc::clone(&mana), Rc::clone(&mana_potions));
            gamepad.set_usability(
                ButtonId::Mana,
                Usability::when(move || potions.get() > 0 && mana.get() < MAX_MANA),
            );
        }
        {
            let mana = Rc::clone(&mana);
            gamepad.set_usability(
                ButtonId::SpellAction,
                Usability::when(move || mana.get() >= SPELL_COST),
            );
        }

        gamepad.activate();

        Ok(Self {
            gamepad,
            router: TouchRouter::new(),
            player: Player::new(Vec2::new(screen_width() / 2.0, screen_height() / 2.0)),
            bolts: Vec::new(),
            health,
            mana,
            health_potions,
            mana_potions,
            open_panel: None,
            time: 0.0,
        })
    }

    pub fn update(&mut self, dt: f32) {
        self.time += dt;

        let events = collect_touch_events();

        // A panel covers the screen; any new touch closes it
        if self.open_panel.is_some() {
            if events.iter().any(|e| e.phase == TouchPhase::Down) {
                info!("closing {} panel", self.open_panel.unwrap_or_default());
                self.open_panel = None;
                self.gamepad.activate();
            }
            return;
        }

        self.router.process(&mut self.gamepad, &events);

        for event in poll_events(&mut self.gamepad) {
            self.handle(event);
        }

        let state = ControllerState::capture(&self.gamepad);
        self.player.standing = state.is_held(ControllerButton::LeftShoulder);
        self.player.update(Vec2::new(state.movement.0, state.movement.1), dt);

        // Wrap player around screen edges
        let mut pos = self.player.position;
        if pos.x < 0.0 { pos.x = screen_width(); }
        if pos.x > screen_width() { pos.x = 0.0; }
        if pos.y < 0.0 { pos.y = screen_height(); }
        if pos.y > screen_height() { pos.y = 0.0; }
        self.player.position = pos;

        self.bolts.retain_mut(|bolt| {
            bolt.pos += bolt.velocity * dt;
            bolt.life -= dt;
            bolt.life > 0.0
        });
    }

    fn handle(&mut self, event: ControllerEvent) {
        debug!("{:?} {}", event.button, if event.pressed { "pressed" } else { "released" });
        if !event.pressed {
            return;
        }

        match event.button {
            ControllerButton::A => self.fire(600.0, 6.0, Color::from_rgba(150, 255, 220, 255)),
            ControllerButton::Y => {
                self.mana.set(self.mana.get() - SPELL_COST);
                self.fire(350.0, 16.0, Color::from_rgba(255, 140, 60, 255));
            }
            ControllerButton::X => {
                self.player.position += self.player.facing() * 80.0;
            }
            ControllerButton::B => self.bolts.clear(),
            ControllerButton::LeftTrigger => {
                self.health_potions.set(self.health_potions.get() - 1);
                self.health.set((self.health.get() + 2).min(MAX_HEALTH));
            }
            ControllerButton::RightTrigger => {
                self.mana_potions.set(self.mana_potions.get() - 1);
                self.mana.set(MAX_MANA);
            }
            ControllerButton::Back => self.open("Character"),
            ControllerButton::Start => self.open("Quests"),
            ControllerButton::RightShoulder => self.open("Inventory"),
            ControllerButton::LeftStick => self.open("Map"),
            ControllerButton::LeftShoulder => {}
        }
    }

    fn fire(&mut self, speed: f32, size: f32, color: Color) {
        let facing = self.player.facing();
        self.bolts.push(Bolt {
            pos: self.player.position + facing * 30.0,
            velocity: facing * speed,
            life: 1.5,
            size,
            color,
        });
    }

    fn open(&mut self, panel: &'static str) {
        info!("opening {panel} panel");
        self.open_panel = Some(panel);
        self.gamepad.deactivate();
        self.router.reset();
    }

    pub fn draw(&self) {
        clear_background(Color::from_rgba(12, 10, 18, 255));

        // Floor grid
        let grid = Color::from_rgba(40, 36, 56, 255);
        let mut x = 0.0;
        while x < screen_width() {
            draw_line(x, 0.0, x, screen_height(), 1.0, grid);
            x += 64.0;
        }
        let mut y = 0.0;
        while y < screen_height() {
            draw_line(0.0, y, screen_width(), y, 1.0, grid);
            y += 64.0;
        }

        for bolt in &self.bolts {
            draw_circle(bolt.pos.x, bolt.pos.y, bolt.size, bolt.color);
        }

        self.draw_player();
        self.draw_ui();
        render::draw_gamepad(&self.gamepad);

        if let Some(panel) = self.open_panel {
            render::draw_panel_overlay(panel);
        }
    }

    fn draw_player(&self) {
        let pos = self.player.position;
        let facing = self.player.facing();
        let side = Vec2::new(-facing.y, facing.x);
        let size = 28.0;

        let front = pos + facing * size;
        let left = pos - facing * size * 0.6 + side * size * 0.7;
        let right = pos - facing * size * 0.6 - side * size * 0.7;

        let body = if self.player.standing {
            Color::from_rgba(200, 200, 120, 255)
        } else {
            Color::from_rgba(100, 200, 255, 255)
        };
        draw_triangle(front, left, right, body);
        draw_triangle_lines(front, left, right, 2.0, WHITE);
    }

    fn draw_ui(&self) {
        let hud = format!(
            "HP {}/{}  MP {}/{}  potions {} / {}",
            self.health.get(),
            MAX_HEALTH,
            self.mana.get(),
            MAX_MANA,
            self.health_potions.get(),
            self.mana_potions.get(),
        );
        draw_text(&hud, 30.0, 40.0, 28.0, Color::from_rgba(200, 220, 255, 230));

        // Instructions hint
        if self.time < 5.0 {
            let hint = "Drag the pad to walk, tap the round buttons to act";
            let hint_width = measure_text(hint, None, 20, 1.0).width;
            let alpha = ((self.time * 2.0).sin() * 127.0 + 128.0) as u8;
            draw_text(
                hint,
                (screen_width() - hint_width) / 2.0,
                80.0,
                20.0,
                Color::from_rgba(255, 200, 100, alpha),
            );
        }
    }
}

/// Turn this frame's platform touches into gamepad events. Falls back to the
/// mouse on desktop.
fn collect_touch_events() -> Vec<TouchEvent> {
    let touches = touches();
    let mut events = Vec::with_capacity(touches.len());

    for touch in &touches {
        let phase = match touch.phase {
            PlatformPhase::Started => TouchPhase::Down,
            PlatformPhase::Moved => TouchPhase::Move,
            PlatformPhase::Ended => TouchPhase::Up,
            PlatformPhase::Cancelled => TouchPhase::Cancel,
            PlatformPhase::Stationary => continue,
        };
        // non-finite coordinates are logged and dropped
        if let Ok(event) = TouchEvent::from_float(touch.id, touch.position.x, touch.position.y, phase) {
            events.push(event);
        }
    }

    if touches.is_empty() {
        let (x, y) = mouse_position();
        let phase = if is_mouse_button_pressed(MouseButton::Left) {
            Some(TouchPhase::Down)
        } else if is_mouse_button_down(MouseButton::Left) {
            Some(TouchPhase::Move)
        } else if is_mouse_button_released(MouseButton::Left) {
            Some(TouchPhase::Up)
        } else {
            None
        };
        if let Some(phase) = phase {
            if let Ok(event) = TouchEvent::from_float(MOUSE_TOUCH_ID, x, y, phase) {
                events.push(event);
            }
        }
    }

    events
}
