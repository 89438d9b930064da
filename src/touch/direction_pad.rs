use crate::geometry::{Area, Circle, Displacement, Point};

/// Dead zone as a fraction of the pad radius when none is configured.
pub const DEFAULT_DEAD_ZONE_RATIO: f32 = 0.2;

/// Half-width of each cardinal's angular window, in degrees. Windows are
/// 135° wide, so neighbouring cardinals overlap in 45° diagonal sectors.
pub const CARDINAL_HALF_WINDOW_DEG: f64 = 67.5;

/// ✛ Touch direction pad.
///
/// `position` is the stick: it follows the finger but never leaves `area`.
/// The four flags are derived from where it sits relative to the center.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VirtualDirectionPad {
    pub area: Circle,
    pub position: Point,
    /// Offsets this close to the center (inclusive) set no flag
    pub dead_zone: i32,
    pub is_up_pressed: bool,
    pub is_down_pressed: bool,
    pub is_left_pressed: bool,
    pub is_right_pressed: bool,
}

impl VirtualDirectionPad {
    pub fn new(area: Circle, dead_zone_ratio: f32) -> Self {
        let dead_zone = (area.radius as f32 * dead_zone_ratio).round() as i32;
        Self {
            area,
            position: area.center,
            dead_zone,
            is_up_pressed: false,
            is_down_pressed: false,
            is_left_pressed: false,
            is_right_pressed: false,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.area.contains(point)
    }

    /// 🖱️ Move the stick toward a touch, clamped to the pad's radius
    pub fn update_position(&mut self, touch: Point) {
        let offset = self.clamp_to_area(touch - self.area.center);
        self.position = self.area.center + offset;

        if offset.length_squared() <= self.dead_zone_squared() {
            self.clear_flags();
            return;
        }

        // screen y grows downward, so flip it to get a conventional angle
        let angle = (-f64::from(offset.dy)).atan2(f64::from(offset.dx)).to_degrees();
        let up_center = 90.0;
        let window = CARDINAL_HALF_WINDOW_DEG;

        self.is_right_pressed = angle.abs() < window;
        self.is_left_pressed = angle.abs() > 180.0 - window;
        self.is_up_pressed = (angle - up_center).abs() < window;
        self.is_down_pressed = (angle + up_center).abs() < window;
    }

    /// Snap back to the center with no direction pressed.
    pub fn deactivate(&mut self) {
        self.position = self.area.center;
        self.clear_flags();
    }

    pub fn is_neutral(&self) -> bool {
        self.position == self.area.center
            && !(self.is_up_pressed
                || self.is_down_pressed
                || self.is_left_pressed
                || self.is_right_pressed)
    }

    /// 🎮 Stick deflection from -1.0 to 1.0 on both axes (y positive down)
    pub fn axis(&self) -> (f32, f32) {
        let offset = self.position - self.area.center;
        if self.area.radius <= 0 || offset.length_squared() <= self.dead_zone_squared() {
            return (0.0, 0.0);
        }

        let radius = self.area.radius as f32;
        (offset.dx as f32 / radius, offset.dy as f32 / radius)
    }

    fn dead_zone_squared(&self) -> i64 {
        let d = i64::from(self.dead_zone);
        d * d
    }

    fn clamp_to_area(&self, offset: Displacement) -> Displacement {
        if offset.length_squared() <= self.area.radius_squared() {
            return offset;
        }

        let scale = f64::from(self.area.radius) / offset.length();
        let dx = f64::from(offset.dx) * scale;
        let dy = f64::from(offset.dy) * scale;

        let rounded = Displacement::new(dx.round() as i32, dy.round() as i32);
        if rounded.length_squared() <= self.area.radius_squared() {
            rounded
        } else {
            Displacement::new(dx.trunc() as i32, dy.trunc() as i32)
        }
    }

    fn clear_flags(&mut self) {
        self.is_up_pressed = false;
        self.is_down_pressed = false;
        self.is_left_pressed = false;
        self.is_right_pressed = false;
    }
}
