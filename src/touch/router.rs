use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::error::{GamepadError, Result};
use crate::geometry::Point;

use super::gamepad::{ButtonId, Control, VirtualGamepad};

/// Largest coordinate magnitude accepted from the platform, in pixels
pub const MAX_TOUCH_COORDINATE: f32 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One contact reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub id: u64,
    pub position: Point,
    pub phase: TouchPhase,
}

impl TouchEvent {
    pub fn new(id: u64, position: Point, phase: TouchPhase) -> Self {
        Self { id, position, phase }
    }

    /// Build an event from platform float coordinates, rounding to pixels.
    pub fn from_float(id: u64, x: f32, y: f32, phase: TouchPhase) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            warn!("rejecting touch {id} at non-finite ({x}, {y})");
            return Err(GamepadError::NonFiniteCoordinate { x, y });
        }
        if x.abs() > MAX_TOUCH_COORDINATE || y.abs() > MAX_TOUCH_COORDINATE {
            warn!("rejecting touch {id} outside touch space ({x}, {y})");
            return Err(GamepadError::CoordinateOutOfRange { x, y });
        }
        let position = Point::new(x.round() as i32, y.round() as i32);
        Ok(Self::new(id, position, phase))
    }
}

/// A finger holding on to a control
#[derive(Debug, Clone, Copy)]
struct Claim {
    control: Control,
    position: Point,
}

/// 👆 Routes touches into the gamepad.
///
/// Each finger claims the control it went down on and keeps it until it
/// lifts. [`TouchRouter::process`] is one input cycle: it applies a batch of
/// events and then updates every button exactly once.
#[derive(Debug, Default)]
pub struct TouchRouter {
    claims: HashMap<u64, Claim>,
}

impl TouchRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fingers currently holding a control
    pub fn active_touches(&self) -> usize {
        self.claims.len()
    }

    pub fn process(&mut self, gamepad: &mut VirtualGamepad, events: &[TouchEvent]) {
        if !gamepad.is_active() {
            if !self.claims.is_empty() {
                debug!("gamepad inactive, dropping {} touch claims", self.claims.len());
                self.claims.clear();
            }
            return;
        }

        for event in events {
            self.apply(gamepad, event);
        }
        self.commit(gamepad);
    }

    /// Forget every finger, e.g. when the app loses focus.
    pub fn reset(&mut self) {
        self.claims.clear();
    }

    fn apply(&mut self, gamepad: &VirtualGamepad, event: &TouchEvent) {
        trace!("touch {} {:?} at {:?}", event.id, event.phase, event.position);

        match event.phase {
            TouchPhase::Down => match gamepad.hit_test(event.position) {
                Some(control) => {
                    debug!("touch {} claims {:?}", event.id, control);
                    self.claims.insert(
                        event.id,
                        Claim {
                            control,
                            position: event.position,
                        },
                    );
                }
                None => {
                    self.claims.remove(&event.id);
                }
            },
            TouchPhase::Move => {
                let Some(claim) = self.claims.get_mut(&event.id) else {
                    return;
                };
                claim.position = event.position;
                // buttons let go once the finger slides off them
                if let Control::Button(id) = claim.control {
                    if !gamepad.button(id).contains(event.position) {
                        debug!("touch {} slid off {:?}", event.id, id);
                        self.claims.remove(&event.id);
                    }
                }
            }
            TouchPhase::Up | TouchPhase::Cancel => {
                if let Some(claim) = self.claims.remove(&event.id) {
                    debug!("touch {} released {:?}", event.id, claim.control);
                }
            }
        }
    }

    fn commit(&self, gamepad: &mut VirtualGamepad) {
        for id in ButtonId::ALL {
            let touched = self.is_claimed(Control::Button(id)) && gamepad.button(id).is_usable();
            gamepad.update_button(id, touched);
        }

        // several fingers on the pad: the highest id steers
        let pad_touch = self
            .claims
            .iter()
            .filter(|(_, claim)| claim.control == Control::DirectionPad)
            .max_by_key(|(finger, _)| **finger)
            .map(|(_, claim)| claim.position);
        match pad_touch {
            Some(position) => gamepad.direction_pad.update_position(position),
            None => gamepad.direction_pad.deactivate(),
        }
    }

    fn is_claimed(&self, control: Control) -> bool {
        self.claims.values().any(|claim| claim.control == control)
    }
}
