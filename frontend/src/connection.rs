//! Actor+Relay compatible Connection adapter.
//!
//! Wraps the MoonZoon `Connection` so DownMsg handling runs inside a
//! stream loop instead of ad-hoc callbacks.

use futures::stream::StreamExt;
use shared::{DownMsg, UpMsg};
use zoon::*;

pub struct ConnectionAdapter {
    connection: Connection<UpMsg, DownMsg>,
}

impl ConnectionAdapter {
    pub fn new() -> (Self, impl futures::stream::Stream<Item = DownMsg>) {
        let (message_sender, message_stream) = futures::channel::mpsc::unbounded();

        let connection = Connection::new(move |down_msg, _| {
            let _ = message_sender.unbounded_send(down_msg);
        });

        let adapter = ConnectionAdapter { connection };
        (adapter, message_stream)
    }

    pub async fn send_up_msg(&self, up_msg: UpMsg) {
        if let Err(error) = self.connection.send_up_msg(up_msg).await {
            zoon::println!("Failed to send message: {:?}", error);
        }
    }
}

/// Create the adapter and spawn the DownMsg processing loop.
pub fn create_connection_message_handler() -> ConnectionAdapter {
    let (connection_adapter, mut down_msg_stream) = ConnectionAdapter::new();

    Task::start(async move {
        while let Some(down_msg) = down_msg_stream.next().await {
            handle_down_msg(down_msg);
        }
    });

    connection_adapter
}

fn handle_down_msg(down_msg: DownMsg) {
    match down_msg {
        DownMsg::EventAccepted => {}
        DownMsg::EventDropped { reason } => {
            zoon::println!("Analytics event dropped: {reason}");
        }
    }
}
