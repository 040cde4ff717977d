//! Room session: the watch stream and terminal input.

use futures_util::StreamExt;
use hiroba_server::infrastructure::dto::{http::UserDto, websocket::RoomStateMessage};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, protocol::Message},
};

use crate::{api::RoomApi, domain::normalize_comment, error::ClientError};

use super::{
    formatter::RoomFormatter,
    ui::{INPUT_PROMPT, redisplay_prompt},
};

/// Connect to the room state stream and redraw the screen on every snapshot.
///
/// Returns only with an error: `ConnectionError` when the stream could not be
/// opened, `ConnectionLost` once an open stream ends.
pub async fn run_watch_session(url: &str, my_name: &str) -> Result<(), ClientError> {
    let (mut ws_stream, _response) = connect_async(url).await.map_err(|e| match e {
        tungstenite::Error::Http(response) => ClientError::Rejected {
            status: response.status().as_u16(),
            message: format!("WebSocket upgrade refused by {}", url),
        },
        other => ClientError::ConnectionError(other.to_string()),
    })?;

    tracing::info!("Watching room state at {}", url);

    while let Some(message) = ws_stream.next().await {
        match message {
            Ok(Message::Text(text)) => match serde_json::from_str::<RoomStateMessage>(&text) {
                Ok(state) => {
                    print!("{}", RoomFormatter::format_room_state(&state, my_name));
                    redisplay_prompt();
                }
                Err(e) => {
                    tracing::warn!("Ignoring undecodable frame: {}", e);
                }
            },
            Ok(Message::Close(_)) => {
                tracing::info!("Server closed the room state stream");
                return Err(ClientError::ConnectionLost(
                    "server closed the stream".to_string(),
                ));
            }
            Err(e) => {
                tracing::warn!("WebSocket read error: {}", e);
                return Err(ClientError::ConnectionLost(e.to_string()));
            }
            _ => {}
        }
    }

    Err(ClientError::ConnectionLost("stream ended".to_string()))
}

/// Ask for a display name until a non-blank one is entered.
pub async fn prompt_name() -> Result<String, ClientError> {
    tokio::task::spawn_blocking(|| -> Result<String, ClientError> {
        let mut rl = DefaultEditor::new().map_err(|e| ClientError::Input(e.to_string()))?;

        loop {
            match rl.readline("Your Name: ") {
                Ok(line) => {
                    let name = line.trim();
                    if !name.is_empty() {
                        return Ok(name.to_string());
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    return Err(ClientError::Input("cancelled".to_string()));
                }
                Err(e) => return Err(ClientError::Input(e.to_string())),
            }
        }
    })
    .await
    .map_err(|e| ClientError::Task(e.to_string()))?
}

/// Spawn the blocking readline thread.
///
/// Each entered line is forwarded on the returned channel. Ctrl+C or Ctrl+D
/// ends the thread, which closes the channel.
pub fn spawn_input_thread() -> mpsc::UnboundedReceiver<String> {
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(INPUT_PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    input_rx
}

/// Send every entered line as a comment until the input channel closes.
///
/// Blank lines are skipped. A comment the server rejects is reported on
/// screen and the loop goes on; losing the server ends it.
pub async fn run_input_loop(
    api: RoomApi,
    user: UserDto,
    mut input_rx: mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    while let Some(line) = input_rx.recv().await {
        let Some(body) = normalize_comment(&line) else {
            continue;
        };

        match api.send_comment(&user, body).await {
            Ok(()) => {}
            Err(ClientError::Rejected { message, .. }) => {
                print!("{}", RoomFormatter::format_notice(&message));
                redisplay_prompt();
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
