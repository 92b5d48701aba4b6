//! # Error Types
//!
//! Custom error types for the steering bridge using `thiserror`.

use thiserror::Error;

/// Main error type for the steering bridge
#[derive(Debug, Error)]
pub enum SteeringBridgeError {
    /// No joystick is connected
    #[error("no joystick detected")]
    JoystickNotFound,

    /// Joystick subsystem errors
    #[error("joystick error: {0}")]
    Joystick(String),

    /// Serial link errors
    #[error("serial port error: {0}")]
    Serial(String),
}

/// Result type alias for the steering bridge
pub type Result<T> = std::result::Result<T, SteeringBridgeError>;
