//! Terminal input loop and the renderer task.
//!
//! The input side owns the game and commits every move before anything is
//! shown. Messages then travel over a channel to the renderer, which may
//! linger on token movements without holding up the game.

use crate::config::CliConfig;
use crate::display::View;
use crate::protocol::{Command, DisplayMessage};
use crate::session::Session;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

/// Run a whole game at the terminal.
pub async fn run(config: CliConfig) -> anyhow::Result<()> {
    let mut session = Session::new(&config)?;
    info!(
        players = session.player_names().len(),
        seed = ?config.seed,
        rule = ?config.rule,
        "Starting Ular Tangga"
    );

    let (tx, rx) = mpsc::unbounded_channel::<DisplayMessage>();
    let view = View::new(session.player_names().to_vec());
    let delay = Duration::from_millis(config.animation_ms);
    let renderer = tokio::spawn(render_messages(rx, view, delay));

    send(&tx, session.welcome());
    if config.autoplay {
        autoplay(&mut session, &tx, config.max_turns);
    } else {
        interactive(&mut session, &tx).await?;
    }

    // Closing the channel lets the renderer drain and exit
    drop(tx);
    renderer.await?;

    Ok(())
}

fn send(tx: &UnboundedSender<DisplayMessage>, message: DisplayMessage) {
    let _ = tx.send(message);
}

fn send_all(tx: &UnboundedSender<DisplayMessage>, messages: Vec<DisplayMessage>) {
    for message in messages {
        send(tx, message);
    }
}

/// Roll for everyone until somebody wins or `max_turns` rolls have been made.
fn autoplay(session: &mut Session, tx: &UnboundedSender<DisplayMessage>, max_turns: u32) {
    let mut rolls = 0;
    while !session.game().is_finished() && rolls < max_turns {
        send_all(tx, session.handle(Command::Roll));
        rolls += 1;
    }

    if !session.game().is_finished() {
        warn!(max_turns, "Autoplay stopped before anyone won");
    }
    send_all(tx, session.handle(Command::Status));
}

/// Read commands from stdin until `quit` or end of input.
async fn interactive(
    session: &mut Session,
    tx: &UnboundedSender<DisplayMessage>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    send(tx, session.prompt());

    while let Some(line) = lines.next_line().await? {
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => send_all(tx, session.handle(command)),
            Err(e) => send(
                tx,
                DisplayMessage::Error {
                    message: e.to_string(),
                },
            ),
        }
        send(tx, session.prompt());
    }

    info!("Leaving the game");
    Ok(())
}

/// Print messages as they arrive, pausing after each token movement.
async fn render_messages(mut rx: UnboundedReceiver<DisplayMessage>, view: View, delay: Duration) {
    while let Some(message) = rx.recv().await {
        for line in view.render(&message) {
            println!("{}", line);
        }
        if message.is_movement() && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
