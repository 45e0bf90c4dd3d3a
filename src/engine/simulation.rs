use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::common::ChatMessage;
use crate::engine::hub::ChatHub;

const SENDERS: [&str; 3] = ["Ashh", "Bot_Support", "Aqdas"];

const PLAIN_BODIES: [&str; 5] = [
    "Hello there!",
    "Is anyone seeing this?",
    "I think I found a bug.",
    "Just testing the system.",
    "Nice work!",
];

const SYSTEM_BODIES: [&str; 4] = [
    "Server is restarting...",
    "System maintenance scheduled.",
    "New patch deployed.",
    "User session timed out.",
];

const STARTUP_DELAY: Duration = Duration::from_secs(2);
const MESSAGE_COUNT: usize = 5;

/// Background traffic generator: after a startup delay, synthesizes a fixed
/// number of random messages at randomized intervals and feeds them to the
/// hub, always timestamped. Stops early when the stop channel fires or its
/// sender is dropped.
pub struct Simulator {
    hub: Arc<ChatHub>,
    stop_receiver: mpsc::Receiver<()>,
}

impl Simulator {
    pub fn new(hub: Arc<ChatHub>, stop_receiver: mpsc::Receiver<()>) -> Self {
        Self { hub, stop_receiver }
    }

    pub async fn run(mut self) {
        log::info!("Simulation started");

        if self.wait(STARTUP_DELAY).await {
            log::info!("Simulation stopped before first message");
            return;
        }

        for _ in 0..MESSAGE_COUNT {
            let jitter = rand::thread_rng().gen_range(0..3000);
            if self.wait(Duration::from_millis(2000 + jitter)).await {
                log::info!("Simulation stopped");
                return;
            }
            self.hub.send_message(next_message());
        }

        log::info!("Simulation finished");
    }

    /// Returns true if a stop signal arrived during the wait.
    async fn wait(&mut self, delay: Duration) -> bool {
        tokio::select! {
            _ = sleep(delay) => false,
            _ = self.stop_receiver.recv() => true,
        }
    }
}

// Roughly one in five synthesized messages is a system notice.
fn next_message() -> ChatMessage {
    let mut rng = rand::thread_rng();
    let message = if rng.gen_range(0..10) < 2 {
        ChatMessage::create(
            "system",
            "SYSTEM",
            SYSTEM_BODIES[rng.gen_range(0..SYSTEM_BODIES.len())],
        )
    } else {
        ChatMessage::create(
            "text",
            SENDERS[rng.gen_range(0..SENDERS.len())],
            PLAIN_BODIES[rng.gen_range(0..PLAIN_BODIES.len())],
        )
    };
    message.with_timestamp()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::engine::hub::{DeliveryError, HubListener};

    struct Recorder {
        seen: Arc<Mutex<Vec<ChatMessage>>>,
    }

    impl HubListener for Recorder {
        fn on_message(&self, message: &ChatMessage) -> Result<(), DeliveryError> {
            self.seen.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    fn recording_hub() -> (Arc<ChatHub>, Arc<Mutex<Vec<ChatMessage>>>) {
        let hub = Arc::new(ChatHub::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        hub.attach(Box::new(Recorder { seen: seen.clone() }));
        (hub, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn full_run_delivers_fixed_count_all_timestamped() {
        let (hub, seen) = recording_hub();
        let (_stop_tx, stop_rx) = mpsc::channel(1);

        Simulator::new(hub, stop_rx).run().await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), MESSAGE_COUNT);
        assert!(seen.iter().all(|m| m.decorations().len() == 1));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_signal_ends_the_run_without_sending() {
        let (hub, seen) = recording_hub();
        let (stop_tx, stop_rx) = mpsc::channel(1);
        stop_tx.send(()).await.unwrap();

        Simulator::new(hub, stop_rx).run().await;

        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_stop_sender_also_cancels() {
        let (hub, seen) = recording_hub();
        let (stop_tx, stop_rx) = mpsc::channel::<()>(1);
        drop(stop_tx);

        Simulator::new(hub, stop_rx).run().await;

        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn synthesized_messages_come_from_the_fixed_vocabularies() {
        for _ in 0..50 {
            let message = next_message();
            assert_eq!(message.decorations().len(), 1);
            match message.sender() {
                "SYSTEM" => assert!(SYSTEM_BODIES.contains(&message.content())),
                sender => {
                    assert!(SENDERS.contains(&sender));
                    assert!(PLAIN_BODIES.contains(&message.content()));
                }
            }
        }
    }
}
