//! # Serial Communication Module
//!
//! Handles the serial link to the microcontroller.
//!
//! This module handles:
//! - Opening the fixed serial endpoint at 9600 baud, 8N1
//! - Pausing after open so the microcontroller can finish its reset
//!   (Arduino-style boards reset whenever the port is opened)
//! - Writing newline-terminated command lines
//! - Releasing the port on shutdown

use crate::error::{Result, SteeringBridgeError};
use crate::serial::sink::CommandSink;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::time::sleep;
use tokio_serial::SerialPortBuilderExt;
use tracing::{debug, info};

pub mod sink;

/// Serial device path of the microcontroller link.
pub const MCU_PORT_PATH: &str = "/dev/ttyACM0";

/// Baud rate the microcontroller listens at.
pub const MCU_BAUD_RATE: u32 = 9600;

/// Read timeout configured on the port.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Pause after opening so the microcontroller completes its reset.
pub const RESET_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Microcontroller serial port handle
///
/// Manages the connection over which steering commands are sent. The
/// underlying port is released when the handle is dropped.
pub struct McuSerial {
    /// Serial port handle
    port: tokio_serial::SerialStream,
    /// Device path (e.g., /dev/ttyACM0)
    device_path: String,
}

impl std::fmt::Debug for McuSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McuSerial")
            .field("device_path", &self.device_path)
            .finish_non_exhaustive()
    }
}

impl McuSerial {
    /// Open the microcontroller link at the fixed device path.
    ///
    /// Waits [`RESET_SETTLE_DELAY`] after a successful open so the first
    /// command is not written while the microcontroller is still resetting.
    ///
    /// # Errors
    ///
    /// Returns [`SteeringBridgeError::Serial`] if the port cannot be opened.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use steering_bridge::serial::McuSerial;
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let serial = McuSerial::open().await?;
    ///     println!("Connected to {}", serial.device_path());
    ///     Ok(())
    /// }
    /// ```
    pub async fn open() -> Result<Self> {
        Self::open_at(MCU_PORT_PATH).await
    }

    /// Open the microcontroller link at a specific device path.
    ///
    /// # Arguments
    ///
    /// * `path` - Device path (e.g., "/dev/ttyACM0")
    ///
    /// # Errors
    ///
    /// Returns [`SteeringBridgeError::Serial`] if the port cannot be opened.
    pub async fn open_at(path: &str) -> Result<Self> {
        debug!("Opening serial port {} at {} baud", path, MCU_BAUD_RATE);

        let port = tokio_serial::new(path, MCU_BAUD_RATE)
            .data_bits(tokio_serial::DataBits::Eight)
            .parity(tokio_serial::Parity::None)
            .stop_bits(tokio_serial::StopBits::One)
            .flow_control(tokio_serial::FlowControl::None)
            .timeout(READ_TIMEOUT)
            .open_native_async()
            .map_err(|e| SteeringBridgeError::Serial(format!("Failed to open {}: {}", path, e)))?;

        info!("Opened microcontroller link at {}", path);
        info!(
            "Waiting {}s for the microcontroller to reset",
            RESET_SETTLE_DELAY.as_secs()
        );
        sleep(RESET_SETTLE_DELAY).await;

        Ok(Self {
            port,
            device_path: path.to_string(),
        })
    }

    /// Get the device path of the opened serial port
    pub fn device_path(&self) -> &str {
        &self.device_path
    }
}

#[async_trait]
impl CommandSink for McuSerial {
    async fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.port
            .write_all(line)
            .await
            .map_err(|e| SteeringBridgeError::Serial(format!("Failed to write command: {}", e)))?;

        self.port
            .flush()
            .await
            .map_err(|e| SteeringBridgeError::Serial(format!("Failed to flush serial port: {}", e)))?;

        debug!("Wrote {} bytes to {}", line.len(), self.device_path);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.port
            .flush()
            .await
            .map_err(|e| SteeringBridgeError::Serial(format!("Failed to flush serial port: {}", e)))?;

        info!("Serial connection to {} closed", self.device_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MCU_PORT_PATH, "/dev/ttyACM0");
        assert_eq!(MCU_BAUD_RATE, 9600);
        assert_eq!(READ_TIMEOUT, Duration::from_secs(1));
        assert_eq!(RESET_SETTLE_DELAY, Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_open_at_invalid_path_returns_error() {
        let result = McuSerial::open_at("/dev/nonexistent_serial_device_12345").await;

        assert!(result.is_err());
        match result.unwrap_err() {
            SteeringBridgeError::Serial(msg) => {
                assert!(msg.contains("/dev/nonexistent_serial_device_12345"));
                assert!(msg.contains("Failed to open"));
            }
            other => panic!("Expected Serial error, got: {:?}", other),
        }
    }

    // Integration test - only runs if the microcontroller is connected
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_write_line_with_real_hardware() {
        let mut serial = McuSerial::open().await.expect("no microcontroller connected");

        serial
            .write_line(b"NEUTRAL\n")
            .await
            .expect("failed to write command");
        serial.close().await.expect("failed to close port");
    }
}
