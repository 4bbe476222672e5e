//! Line-based console transport for local play.

use crate::gateway::{Gateway, InboundEvent};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};

const HELP: &str = "Type `start` for a new game, a cell like `12` (row, column) to move, `quit` to leave.";

/// Reads commands from stdin and prints the rendered replies.
#[instrument(skip(gateway))]
pub async fn run(gateway: Arc<Gateway>, user_id: String) -> anyhow::Result<()> {
    info!("Console session started");
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }

        let event = InboundEvent::new(user_id.clone(), line.to_string());
        match gateway.handle(&event) {
            Ok(Some(render)) => println!("{}\n", render.to_plain_text()),
            Ok(None) => println!("No game in progress. Type `start` to play.\n"),
            Err(e) => {
                warn!(error = %e, "Event rejected");
                println!("{e}\n{HELP}\n");
            }
        }
    }

    info!("Console session ended");
    Ok(())
}
