use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::WrapErr;
use rpc::users::UpdateUserRequest;
use tokio_stream::StreamExt;
use tracing::info;
use userhub_client::{UserClient, server_addr};

/// Walks one user through create, get, list, update, stream and delete.
#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();
    init_tracing(&Environment::from_env());

    let addr = server_addr();
    info!(%addr, "Connecting to UserService");
    let mut client = UserClient::connect(addr.clone())
        .await
        .wrap_err_with(|| format!("Failed to connect to {addr}"))?;

    let created = client
        .create_user("Alice", "alice@example.com", "")
        .await
        .wrap_err("CreateUser failed")?;
    info!(id = created.id, email = %created.email, "Created user");

    let fetched = client
        .get_user(created.id)
        .await
        .wrap_err("GetUser failed")?;
    info!(id = fetched.id, name = %fetched.name, "Fetched user");

    let all = client.get_all_users().await.wrap_err("GetAllUsers failed")?;
    info!(count = all.len(), "Listed users");

    let updated = client
        .update_user(UpdateUserRequest {
            id: created.id,
            name: None,
            email: Some("alice.smith@example.com".to_string()),
            phone: None,
        })
        .await
        .wrap_err("UpdateUser failed")?;
    info!(id = updated.id, email = %updated.email, "Updated user");

    let mut stream = client.stream_users().await.wrap_err("StreamUsers failed")?;
    while let Some(user) = stream.next().await {
        let user = user.wrap_err("StreamUsers interrupted")?;
        info!(id = user.id, name = %user.name, "Streamed user");
    }

    client
        .delete_user(created.id)
        .await
        .wrap_err("DeleteUser failed")?;
    info!(id = created.id, "Deleted user");

    Ok(())
}
