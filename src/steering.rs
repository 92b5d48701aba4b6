//! # Steering Classification Module
//!
//! Maps normalized steering-wheel axis readings to the discrete commands the
//! microcontroller understands.
//!
//! ## Mapping
//!
//! | Stage | Range | Description |
//! |-------|-------|-------------|
//! | Axis reading | -1.0 to 1.0 | Normalized wheel position from the input device |
//! | Steering angle | -450.0° to 450.0° | Reading scaled by the wheel's full lock |
//! | Command | LEFT / RIGHT / NEUTRAL | Thresholded at ±60° |
//!
//! The dead zone is the open interval (-60°, 60°): a turn command is issued
//! only once the wheel crosses 60° of lock in either direction, and the
//! thresholds themselves are inclusive.

use std::fmt;

/// Wheel angle in degrees at full lock (axis reading ±1.0).
pub const FULL_LOCK_DEGREES: f32 = 450.0;

/// Angle magnitude in degrees at which a turn command is issued.
pub const TURN_THRESHOLD_DEGREES: f32 = 60.0;

/// Discrete directional command sent to the microcontroller.
///
/// # Examples
///
/// ```
/// use steering_bridge::steering::SteeringCommand;
///
/// assert_eq!(SteeringCommand::classify(225.0), SteeringCommand::Right);
/// assert_eq!(SteeringCommand::classify(0.0), SteeringCommand::Neutral);
/// assert_eq!(SteeringCommand::Left.wire_line(), b"LEFT\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringCommand {
    /// Wheel turned at least 60° to the left.
    Left,
    /// Wheel turned at least 60° to the right.
    Right,
    /// Wheel inside the dead zone.
    Neutral,
}

impl SteeringCommand {
    /// Classifies a steering angle in degrees into a command.
    ///
    /// Thresholds are inclusive: exactly -60.0° is `Left` and exactly 60.0°
    /// is `Right`. Anything else, including non-finite input, is `Neutral`.
    ///
    /// # Examples
    ///
    /// ```
    /// use steering_bridge::steering::SteeringCommand;
    ///
    /// assert_eq!(SteeringCommand::classify(-60.0), SteeringCommand::Left);
    /// assert_eq!(SteeringCommand::classify(59.9), SteeringCommand::Neutral);
    /// ```
    #[must_use]
    pub fn classify(angle: f32) -> Self {
        if angle <= -TURN_THRESHOLD_DEGREES {
            SteeringCommand::Left
        } else if angle >= TURN_THRESHOLD_DEGREES {
            SteeringCommand::Right
        } else {
            SteeringCommand::Neutral
        }
    }

    /// Returns the ASCII token for this command.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SteeringCommand::Left => "LEFT",
            SteeringCommand::Right => "RIGHT",
            SteeringCommand::Neutral => "NEUTRAL",
        }
    }

    /// Returns the newline-terminated wire form written to the serial link.
    #[must_use]
    pub fn wire_line(&self) -> &'static [u8] {
        match self {
            SteeringCommand::Left => b"LEFT\n",
            SteeringCommand::Right => b"RIGHT\n",
            SteeringCommand::Neutral => b"NEUTRAL\n",
        }
    }
}

impl fmt::Display for SteeringCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scales a normalized axis reading to a steering angle in degrees.
///
/// # Examples
///
/// ```
/// use steering_bridge::steering::steering_angle;
///
/// assert_eq!(steering_angle(0.5), 225.0);
/// assert_eq!(steering_angle(-1.0), -450.0);
/// ```
#[must_use]
pub fn steering_angle(value: f32) -> f32 {
    value * FULL_LOCK_DEGREES
}
