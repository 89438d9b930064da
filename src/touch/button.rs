use std::fmt;
use std::rc::Rc;

use crate::geometry::{Area, Circle, Point, Rectangle};

/// Decides whether a button's press is honored right now.
///
/// Re-evaluated on every query so game context (no potion left, a panel
/// already open) can switch a button off without touching the gamepad.
#[derive(Clone, Default)]
pub enum Usability {
    #[default]
    Always,
    When(Rc<dyn Fn() -> bool>),
}

impl Usability {
    pub fn when(predicate: impl Fn() -> bool + 'static) -> Self {
        Usability::When(Rc::new(predicate))
    }

    pub fn evaluate(&self) -> bool {
        match self {
            Usability::Always => true,
            Usability::When(predicate) => predicate(),
        }
    }
}

impl fmt::Debug for Usability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Usability::Always => f.write_str("Always"),
            Usability::When(_) => f.write_str("When(..)"),
        }
    }
}

/// An on-screen button hit-tested against its area `A`.
#[derive(Debug, Clone, Default)]
pub struct VirtualButton<A: Area> {
    pub area: A,
    /// Is the button currently pressed?
    pub is_held: bool,
    /// Set on the cycle `is_held` flipped, until taken
    pub did_state_change: bool,
    usability: Usability,
}

/// Rectangular button of the menu panel
pub type MenuButton = VirtualButton<Rectangle>;

/// Round action button
pub type PadButton = VirtualButton<Circle>;

impl<A: Area> VirtualButton<A> {
    pub fn new(area: A) -> Self {
        Self {
            area,
            is_held: false,
            did_state_change: false,
            usability: Usability::Always,
        }
    }

    pub fn with_usability(mut self, usability: Usability) -> Self {
        self.usability = usability;
        self
    }

    pub fn set_usability(&mut self, usability: Usability) {
        self.usability = usability;
    }

    pub fn contains(&self, point: Point) -> bool {
        self.area.contains(point)
    }

    pub fn is_usable(&self) -> bool {
        self.usability.evaluate()
    }

    /// 👆 Record this cycle's touch state. Call at most once per cycle.
    pub fn update_state(&mut self, is_touched: bool) {
        self.did_state_change = is_touched != self.is_held;
        self.is_held = is_touched;
    }

    /// Returns the change edge and clears it, so only one consumer sees it.
    pub fn take_state_change(&mut self) -> bool {
        std::mem::take(&mut self.did_state_change)
    }

    /// Release the button, reporting the edge if it was held.
    pub fn deactivate(&mut self) {
        self.update_state(false);
    }
}
