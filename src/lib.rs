//! # Steering Bridge Library
//!
//! Relay steering-wheel position to a microcontroller over a serial link.
//!
//! This library provides the core functionality for polling a steering wheel
//! joystick axis, classifying the wheel angle into LEFT/RIGHT/NEUTRAL
//! commands, and forwarding each command change to the microcontroller.

pub mod error;
pub mod steering;
pub mod wheel;
pub mod serial;
pub mod bridge;
