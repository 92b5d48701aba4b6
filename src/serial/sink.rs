//! Trait abstraction for the command sink to enable testing

use crate::error::Result;
use async_trait::async_trait;

/// Byte-oriented sink for outbound steering commands
#[async_trait]
pub trait CommandSink: Send {
    /// Write one newline-terminated command line to the sink
    async fn write_line(&mut self, line: &[u8]) -> Result<()>;

    /// Flush and release the sink; called exactly once when the loop stops
    async fn close(&mut self) -> Result<()>;
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use crate::error::SteeringBridgeError;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// Mock command sink for testing
    #[derive(Clone)]
    pub struct MockCommandSink {
        pub written_lines: Arc<Mutex<Vec<Vec<u8>>>>,
        pub write_error: Arc<Mutex<Option<io::ErrorKind>>>,
        pub close_calls: Arc<Mutex<usize>>,
    }

    impl MockCommandSink {
        pub fn new() -> Self {
            Self {
                written_lines: Arc::new(Mutex::new(Vec::new())),
                write_error: Arc::new(Mutex::new(None)),
                close_calls: Arc::new(Mutex::new(0)),
            }
        }

        pub fn written_lines(&self) -> Vec<Vec<u8>> {
            self.written_lines.lock().unwrap().clone()
        }

        pub fn set_write_error(&self, error: io::ErrorKind) {
            *self.write_error.lock().unwrap() = Some(error);
        }

        pub fn close_calls(&self) -> usize {
            *self.close_calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl CommandSink for MockCommandSink {
        async fn write_line(&mut self, line: &[u8]) -> Result<()> {
            if let Some(error) = *self.write_error.lock().unwrap() {
                return Err(SteeringBridgeError::Serial(format!(
                    "Mock write error: {:?}",
                    error
                )));
            }
            self.written_lines.lock().unwrap().push(line.to_vec());
            Ok(())
        }

        async fn close(&mut self) -> Result<()> {
            *self.close_calls.lock().unwrap() += 1;
            Ok(())
        }
    }
}
