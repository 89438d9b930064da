use macroquad::prelude::Vec2;

const SPEED: f32 = 260.0;

#[derive(Debug)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32, // in radians
    pub standing: bool,
}

impl Player {
    pub fn new(start_pos: Vec2) -> Self {
        Self {
            position: start_pos,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            standing: false,
        }
    }

    /// 🚶 Walk along the direction pad's deflection
    pub fn update(&mut self, movement: Vec2, dt: f32) {
        // Standing still turns in place but doesn't move
        self.velocity = if self.standing {
            Vec2::ZERO
        } else {
            movement * SPEED
        };
        self.position += self.velocity * dt;

        if movement != Vec2::ZERO {
            self.rotation = movement.y.atan2(movement.x);
        }
    }

    pub fn facing(&self) -> Vec2 {
        Vec2::new(self.rotation.cos(), self.rotation.sin())
    }
}
