//! # Steering Wheel Input Module
//!
//! Handles joystick detection and steering axis reads through `gilrs`.
//!
//! ## Axis Mapping
//!
//! Steering wheels report the rim position on their X axis, which gilrs
//! exposes as [`Axis::LeftStickX`] normalized to -1.0 (full left lock)
//! through 1.0 (full right lock).
//!
//! ## Event Pump
//!
//! gilrs only refreshes its cached gamepad state while events are being
//! pumped, so every axis read must be preceded by draining the event queue.
//! [`AxisSource::pump_events`] performs that drain; the control loop calls
//! it once per iteration before reading.

use gilrs::{Axis, Event, GamepadId, Gilrs};
use tracing::{debug, info, trace};

use crate::error::{Result, SteeringBridgeError};

/// Axis carrying the steering position.
pub const STEERING_AXIS: Axis = Axis::LeftStickX;

/// Source of normalized steering axis readings.
///
/// Implemented by [`SteeringWheel`] for real hardware and by a scripted mock
/// in tests.
pub trait AxisSource {
    /// Drain pending device events so the cached state is current.
    fn pump_events(&mut self);

    /// Current steering axis position, normalized to [-1.0, 1.0].
    fn steering_axis(&self) -> f32;
}

/// Steering wheel handle
///
/// Owns the gilrs context and the identity of the wheel selected at startup.
/// Dropping the handle tears the input subsystem down.
pub struct SteeringWheel {
    gilrs: Gilrs,
    gamepad_id: GamepadId,
    name: String,
}

impl SteeringWheel {
    /// Initialize the joystick subsystem and attach to the first wheel found.
    ///
    /// # Errors
    ///
    /// - [`SteeringBridgeError::Joystick`] if the subsystem cannot be
    ///   initialized
    /// - [`SteeringBridgeError::JoystickNotFound`] if no joystick is
    ///   connected
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use steering_bridge::wheel::SteeringWheel;
    ///
    /// let wheel = SteeringWheel::connect()?;
    /// println!("Using joystick: {}", wheel.name());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn connect() -> Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| {
            SteeringBridgeError::Joystick(format!("Failed to initialize joystick subsystem: {}", e))
        })?;

        debug!("Detected {} connected joystick(s)", gilrs.gamepads().count());

        let (gamepad_id, name) = match gilrs.gamepads().next() {
            Some((id, gamepad)) => (id, gamepad.name().to_string()),
            None => return Err(SteeringBridgeError::JoystickNotFound),
        };

        info!("Joystick initialized: {}", name);

        Ok(Self {
            gilrs,
            gamepad_id,
            name,
        })
    }

    /// Human-readable name of the attached wheel.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of joysticks currently connected.
    pub fn connected_count(&self) -> usize {
        self.gilrs.gamepads().count()
    }
}

impl AxisSource for SteeringWheel {
    fn pump_events(&mut self) {
        // Everything queued since the last poll, so the state read below
        // reflects the latest physical position.
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            trace!("Joystick event from {:?}: {:?}", id, event);
        }
    }

    fn steering_axis(&self) -> f32 {
        self.gilrs.gamepad(self.gamepad_id).value(STEERING_AXIS)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steering_axis_constant() {
        // Wheels report the rim on the X axis
        assert_eq!(STEERING_AXIS, Axis::LeftStickX);
    }

    // Integration test - only runs with a joystick connected
    #[test]
    #[ignore] // Run with: cargo test -- --ignored
    fn test_connect_with_real_hardware() {
        let mut wheel = SteeringWheel::connect().expect("no joystick connected");
        assert!(!wheel.name().is_empty());
        assert!(wheel.connected_count() >= 1);

        wheel.pump_events();
        let value = wheel.steering_axis();
        assert!((-1.0..=1.0).contains(&value), "axis out of range: {}", value);
    }
}
