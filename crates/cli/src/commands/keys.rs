use super::Context;
use crate::password;
use skeletonkey_core::{ServiceName, Username};
use std::process::ExitCode;

pub async fn set(context: &Context, username: &str, password_stdin: bool) -> eyre::Result<ExitCode> {
    let username = Username::new(username)?;
    let password = password::read(password_stdin).await?;
    context
        .registry
        .credentials()
        .set_skeleton_key(&context.tenant, &username, &password)
        .await?;

    println!("✓ Skeleton key stored for '{username}'");
    Ok(ExitCode::SUCCESS)
}

/// Exits with failure on a wrong password; gate failures surface as errors
pub async fn verify(
    context: &Context,
    username: &str,
    service: Option<&str>,
    password_stdin: bool,
) -> eyre::Result<ExitCode> {
    let username = Username::new(username)?;
    let service = service.map(ServiceName::new).transpose()?;
    let password = password::read(password_stdin).await?;

    let verifier = context.registry.verifier();
    let verified = match &service {
        Some(service) => {
            verifier
                .verify_skeleton_key_and_service(&context.tenant, service, &username, &password)
                .await?
        }
        None => {
            verifier
                .verify_skeleton_key(&context.tenant, &username, &password)
                .await?
        }
    };

    if verified {
        println!("✓ Skeleton key accepted for '{username}'");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("✗ Skeleton key rejected for '{username}'");
        Ok(ExitCode::FAILURE)
    }
}
