//! # Chat Room Example
//!
//! Shows a small chat room wired on top of an [`emitter::Emitter`]:
//! - A custom listener that tracks message metrics
//! - A one-shot welcome listener
//! - The built-in `LogListener` (needs `--features logging`)
//! - Ack listeners that confirm delivery through a channel
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example chat --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;

use emitter::{
    AckListenerFn, AckListenerRef, Emitter, EmitterConfig, Listen, ListenerFn, ListenerRef,
    LogListener, MissingAckPolicy,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Message {
    from: String,
    text: String,
}

impl Message {
    fn new(from: &str, text: &str) -> Self {
        Self {
            from: from.to_string(),
            text: text.to_string(),
        }
    }
}

/// Delivery receipt sent back through the ack handle.
#[derive(Debug)]
struct Receipt {
    by: &'static str,
    from: String,
}

struct MetricsListener {
    messages: AtomicU64,
    chars: AtomicU64,
}

impl MetricsListener {
    fn new() -> Self {
        Self {
            messages: AtomicU64::new(0),
            chars: AtomicU64::new(0),
        }
    }

    fn print_stats(&self) {
        println!();
        println!("Metrics:");
        println!(" ├─► Messages: {}", self.messages.load(Ordering::Relaxed));
        println!(" └─► Chars:    {}", self.chars.load(Ordering::Relaxed));
    }
}

impl Listen<Message> for MetricsListener {
    fn call(&self, msg: &Message) {
        self.messages.fetch_add(1, Ordering::Relaxed);
        self.chars.fetch_add(msg.text.len() as u64, Ordering::Relaxed);
    }

    fn name(&self) -> &str {
        "metrics"
    }
}

fn main() -> Result<(), emitter::EmitterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let room: Emitter<Message, mpsc::Sender<Receipt>> = Emitter::with_config(EmitterConfig {
        missing_ack: MissingAckPolicy::Reject,
        ..EmitterConfig::default()
    });

    let metrics = Arc::new(MetricsListener::new());
    let welcome: ListenerRef<Message> = ListenerFn::arc("welcome", |msg: &Message| {
        println!("[welcome] first message came from {}", msg.from);
    });

    room.on("message", Arc::clone(&metrics) as ListenerRef<Message>)
        .on("message", Arc::new(LogListener::new("chat-log")))
        .once("message", welcome);

    for device in ["phone", "laptop"] {
        let deliver: AckListenerRef<Message, mpsc::Sender<Receipt>> = AckListenerFn::arc(
            device,
            move |msg: &Message, ack: &mpsc::Sender<Receipt>| {
                let _ = ack.send(Receipt {
                    by: device,
                    from: msg.from.clone(),
                });
            },
        );
        room.on_ack("direct", deliver);
    }

    room.emit("message", &Message::new("ann", "hi all"))
        .emit("message", &Message::new("bob", "hey ann"));

    let (tx, rx) = mpsc::channel();
    room.emit_ack("direct", &Message::new("ann", "lunch?"), &tx)?;
    drop(tx);
    for receipt in rx {
        println!("[receipt] {} delivered message from {}", receipt.by, receipt.from);
    }

    if let Err(err) = room.emit_ack("nobody-listens", &Message::new("bob", "hello?"), &mpsc::channel().0) {
        println!("[strict] {} ({})", err, err.as_label());
    }

    metrics.print_stats();
    Ok(())
}
