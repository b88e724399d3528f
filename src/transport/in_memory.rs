#![cfg(feature = "std")]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::protocol::{decode_frame, encode_frame, Message};
use crate::transport::Transport;

/// Largest frame accepted on either side.
const MAX_FRAME_SIZE: usize = 64 * 1024;

type Queue = Arc<Mutex<VecDeque<Vec<u8>>>>;

/// In-process transport; messages cross as encoded frames so both ends see
/// exactly what a byte stream would carry.
pub struct InMemoryTransport {
    recv_queue: Queue,
    send_queue: Queue,
}

impl InMemoryTransport {
    pub fn pair() -> (Self, Self) {
        let q1 = Arc::new(Mutex::new(VecDeque::new()));
        let q2 = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                recv_queue: q1.clone(),
                send_queue: q2.clone(),
            },
            Self {
                recv_queue: q2,
                send_queue: q1,
            },
        )
    }

    /// Push a raw frame, bypassing encoding.
    pub fn send_raw(&mut self, frame: Vec<u8>) -> anyhow::Result<()> {
        let mut queue = self
            .send_queue
            .lock()
            .map_err(|_| anyhow::anyhow!("Queue poisoned"))?;
        queue.push_back(frame);
        Ok(())
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let frame = encode_frame(&msg)?;
        if frame.len() > MAX_FRAME_SIZE {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                frame.len(),
                MAX_FRAME_SIZE
            ));
        }
        self.send_raw(frame)
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        loop {
            let frame = {
                let mut queue = self
                    .recv_queue
                    .lock()
                    .map_err(|_| anyhow::anyhow!("Queue poisoned"))?;
                queue.pop_front()
            };
            if let Some(frame) = frame {
                if frame.len() > MAX_FRAME_SIZE {
                    return Err(anyhow::anyhow!("Frame too large: {} bytes", frame.len()));
                }
                return decode_frame(&frame);
            }
            if Arc::strong_count(&self.recv_queue) == 1 {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }
}
