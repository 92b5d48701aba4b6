//! # Steering Relay Loop
//!
//! The control loop that ties the wheel to the microcontroller.
//!
//! ## Per-Iteration Flow
//!
//! 1. Check the shutdown signal; stop if it has fired
//! 2. Drain pending joystick events so the cached state is current
//! 3. Read the steering axis and scale it to an angle
//! 4. Log the telemetry line (raw value and angle)
//! 5. Classify the angle into a command
//! 6. Forward the command to the sink only if it changed
//!
//! Iterations run every [`POLL_INTERVAL_MS`] milliseconds. Whatever way the
//! loop ends (shutdown signal or write error), the sink is closed exactly
//! once before [`run`] returns.

use crate::error::Result;
use crate::serial::sink::CommandSink;
use crate::steering::{steering_angle, SteeringCommand};
use crate::wheel::AxisSource;
use std::future::Future;
use tokio::time::{interval, Duration};
use tracing::info;

/// Interval between steering axis polls in milliseconds (10Hz).
pub const POLL_INTERVAL_MS: u64 = 100;

/// Forwards steering commands to a sink, suppressing duplicates.
///
/// Retains the last command actually written, which is the only state
/// carried between loop iterations. Starts empty, so the first command is
/// always written, even `Neutral`.
///
/// # Examples
///
/// ```no_run
/// use steering_bridge::bridge::CommandRelay;
/// use steering_bridge::serial::McuSerial;
/// use steering_bridge::steering::SteeringCommand;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let serial = McuSerial::open().await?;
///     let mut relay = CommandRelay::new(serial);
///
///     // The first command always writes; repeating it does not.
///     assert!(relay.forward(SteeringCommand::Neutral).await?);
///     assert!(!relay.forward(SteeringCommand::Neutral).await?);
///     Ok(())
/// }
/// ```
pub struct CommandRelay<S: CommandSink> {
    sink: S,
    last_sent: Option<SteeringCommand>,
}

impl<S: CommandSink> CommandRelay<S> {
    /// Creates a relay around `sink` with no command sent yet.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            last_sent: None,
        }
    }

    /// The last command written to the sink, if any.
    pub fn last_sent(&self) -> Option<SteeringCommand> {
        self.last_sent
    }

    /// Forward `command` if it differs from the last one sent.
    ///
    /// Returns `true` if a write happened. On a write error the last-sent
    /// state is left unchanged.
    pub async fn forward(&mut self, command: SteeringCommand) -> Result<bool> {
        if self.last_sent == Some(command) {
            return Ok(false);
        }

        self.sink.write_line(command.wire_line()).await?;
        self.last_sent = Some(command);
        Ok(true)
    }

    /// Close the underlying sink.
    pub async fn close(mut self) -> Result<()> {
        self.sink.close().await
    }
}

/// Run the steering relay loop until `shutdown` completes.
///
/// The wheel context stays owned by the caller; the sink is moved in so its
/// close runs on every exit path, including a mid-loop write error.
///
/// # Examples
///
/// ```no_run
/// use steering_bridge::bridge;
/// use steering_bridge::serial::McuSerial;
/// use steering_bridge::wheel::SteeringWheel;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let mut wheel = SteeringWheel::connect()?;
///     let serial = McuSerial::open().await?;
///
///     bridge::run(&mut wheel, serial, async {
///         let _ = tokio::signal::ctrl_c().await;
///     })
///     .await?;
///     Ok(())
/// }
/// ```
pub async fn run<W, S, F>(wheel: &mut W, sink: S, shutdown: F) -> Result<()>
where
    W: AxisSource,
    S: CommandSink,
    F: Future<Output = ()>,
{
    let mut relay = CommandRelay::new(sink);
    let mut ticker = interval(Duration::from_millis(POLL_INTERVAL_MS));
    tokio::pin!(shutdown);

    info!("Polling steering axis every {}ms", POLL_INTERVAL_MS);

    let result = loop {
        tokio::select! {
            // The shutdown branch is checked first on every iteration.
            biased;

            _ = &mut shutdown => {
                info!("Shutdown requested, stopping steering relay");
                break Ok(());
            }

            _ = ticker.tick() => {
                wheel.pump_events();
                let value = wheel.steering_axis();
                let angle = steering_angle(value);
                info!("Steering value: {:.3} -> steering angle: {:.1}°", value, angle);

                let command = SteeringCommand::classify(angle);
                match relay.forward(command).await {
                    Ok(true) => info!("Sent command: {}", command),
                    Ok(false) => {}
                    Err(e) => break Err(e),
                }
            }
        }
    };

    let close_result = relay.close().await;
    result.and(close_result)
}
