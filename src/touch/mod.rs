//! 🕹️ Touch-driven virtual gamepad.
//!
//! Build a [`VirtualGamepad`] once with [`VirtualGamepad::initialize`], hand
//! `&mut` to a [`TouchRouter`] every input cycle and read the result through
//! the button/pad fields or a [`ControllerState`] snapshot.

pub mod button;
pub mod config;
pub mod direction_pad;
pub mod gamepad;
pub mod layout;
pub mod menu_panel;
pub mod router;
pub mod signals;

pub use button::{MenuButton, PadButton, Usability, VirtualButton};
pub use config::{GamepadConfig, MenuPanelConfig};
pub use direction_pad::VirtualDirectionPad;
pub use gamepad::{ButtonId, ButtonRef, Control, VirtualGamepad};
pub use layout::GamepadLayout;
pub use menu_panel::VirtualMenuPanel;
pub use router::{TouchEvent, TouchPhase, TouchRouter};
pub use signals::{poll_events, ControllerButton, ControllerEvent, ControllerState};
