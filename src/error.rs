use thiserror::Error;

#[derive(Debug, Error)]
pub enum GamepadError {
    #[error("failed to read gamepad config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid gamepad config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("dead zone ratio must be within 0.0..1.0, got {0}")]
    InvalidDeadZone(f32),

    #[error("dpi must be a finite number within 0.0..=4096.0, got {0}")]
    InvalidDpi(f32),

    #[error("screen {width}x{height} is too small for the virtual gamepad")]
    ScreenTooSmall { width: i32, height: i32 },

    #[error("touch coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f32, y: f32 },

    #[error("touch coordinate ({x}, {y}) is outside the touch space")]
    CoordinateOutOfRange { x: f32, y: f32 },

    #[error("menu panel {field} = {value} is out of range")]
    InvalidMenuPanel { field: &'static str, value: i32 },
}

pub type Result<T> = std::result::Result<T, GamepadError>;
