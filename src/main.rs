//! # Steering Bridge
//!
//! Relay steering-wheel position to a microcontroller over a serial link.
//!
//! This application polls the wheel's steering axis, classifies the angle
//! into LEFT/RIGHT/NEUTRAL commands, and writes each command change to the
//! microcontroller.

use anyhow::Result;
use steering_bridge::bridge;
use steering_bridge::serial::McuSerial;
use steering_bridge::wheel::SteeringWheel;
use tracing::info;
use tracing_subscriber;

/// Main entry point for the Steering Bridge application
///
/// Initializes the application and runs the relay loop that polls the
/// steering wheel at 10Hz and forwards command changes to the
/// microcontroller.
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Connect to the first available joystick
///    - Open the serial connection to the microcontroller
///
/// 2. **Relay Loop**
///    - Poll the steering axis every 100ms
///    - Log the raw value and the scaled wheel angle
///    - Write LEFT/RIGHT/NEUTRAL to the serial link on command change
///    - Handle Ctrl+C for graceful shutdown
///
/// 3. **Graceful Shutdown**
///    - Stop polling
///    - Close the serial connection
///    - Clean exit
///
/// # Errors
///
/// Returns error if:
/// - No joystick is connected at startup
/// - The serial port cannot be opened
/// - A command write fails mid-loop
///
/// # Examples
///
/// Run the application:
/// ```bash
/// cargo run --release
/// ```
///
/// Expected output:
/// ```text
/// INFO steering_bridge: Steering Bridge v0.1.0 starting...
/// INFO steering_bridge::wheel: Joystick initialized: Thrustmaster T300RS
/// INFO steering_bridge::serial: Opened microcontroller link at /dev/ttyACM0
/// INFO steering_bridge::bridge: Steering value: 0.250 -> steering angle: 112.5°
/// INFO steering_bridge::bridge: Sent command: RIGHT
/// ```
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    info!("Steering Bridge v{} starting...", env!("CARGO_PKG_VERSION"));

    let mut wheel = SteeringWheel::connect()?;

    let serial = McuSerial::open().await?;
    info!("Microcontroller link ready at: {}", serial.device_path());
    info!("Press Ctrl+C to exit");

    bridge::run(&mut wheel, serial, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await?;

    info!("Steering bridge stopped");
    Ok(())
}
