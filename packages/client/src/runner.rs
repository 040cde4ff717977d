//! Client execution logic with reconnection support.

use std::time::Duration;

use hiroba_server::infrastructure::dto::http::{GenderDto, ProfileDto};
use tokio::task::JoinError;

use crate::{api::RoomApi, domain::should_attempt_reconnect, error::ClientError};

use super::session::{prompt_name, run_input_loop, run_watch_session, spawn_input_thread};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Join the room, run the session until the user quits, then leave.
///
/// # Arguments
///
/// * `base_url` - HTTP base URL of the server, e.g. `http://127.0.0.1:30000`
/// * `name` - Display name; prompted for when `None`
/// * `age` - Age sent with the profile
pub async fn run_client(
    base_url: String,
    name: Option<String>,
    age: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let api = RoomApi::new(base_url);

    let name = match name {
        Some(name) => name,
        None => prompt_name().await?,
    };

    let profile = ProfileDto {
        name,
        age,
        gender: GenderDto::Unspecified,
    };
    let user = api.join(&profile).await?;
    tracing::info!(
        "Joined as '{}' (id: {}, color: {})",
        user.profile.name,
        user.id,
        user.color
    );

    let mut watch_task = tokio::spawn(watch_with_reconnect(
        api.watch_url(),
        user.profile.name.clone(),
    ));
    let input_rx = spawn_input_thread();
    let mut input_task = tokio::spawn(run_input_loop(api.clone(), user.clone(), input_rx));

    // If any one of the tasks completes, abort the other
    let outcome = tokio::select! {
        result = &mut watch_task => {
            input_task.abort();
            task_outcome(result)
        }
        result = &mut input_task => {
            watch_task.abort();
            task_outcome(result)
        }
        _ = tokio::signal::ctrl_c() => {
            watch_task.abort();
            input_task.abort();
            Ok(())
        }
    };

    if let Err(e) = api.leave(&user).await {
        tracing::warn!("Failed to leave the room: {}", e);
    }
    println!("\nLeft the room.");

    outcome?;
    Ok(())
}

/// Keep the room state stream open, reconnecting after failures.
async fn watch_with_reconnect(url: String, my_name: String) -> Result<(), ClientError> {
    let mut reconnect_count = 0;

    loop {
        tracing::info!(
            "Connecting to {} (attempt {}/{})",
            url,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        let e = match run_watch_session(&url, &my_name).await {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };

        // The stream was up before it dropped; count attempts afresh
        if matches!(e, ClientError::ConnectionLost(_)) {
            reconnect_count = 0;
        }
        reconnect_count += 1;

        if !should_attempt_reconnect(&e, reconnect_count, MAX_RECONNECT_ATTEMPTS) {
            tracing::error!(
                "Giving up on the room state stream after {} attempt(s): {}",
                reconnect_count,
                e
            );
            return Err(e);
        }

        tracing::warn!(
            "{}; reconnecting in {} seconds... (attempt {}/{})",
            e,
            RECONNECT_INTERVAL_SECS,
            reconnect_count + 1,
            MAX_RECONNECT_ATTEMPTS
        );
        tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
    }
}

fn task_outcome(result: Result<Result<(), ClientError>, JoinError>) -> Result<(), ClientError> {
    result.unwrap_or_else(|e| Err(ClientError::Task(e.to_string())))
}
