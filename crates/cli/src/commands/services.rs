use super::Context;
use skeletonkey_core::{ServiceName, Username};
use std::process::ExitCode;

pub async fn add(context: &Context, service: &str) -> eyre::Result<ExitCode> {
    let service = ServiceName::new(service)?;
    context
        .registry
        .entitlements()
        .set_available_service(&context.tenant, &service)
        .await?;

    println!("✓ Service '{service}' is available");
    Ok(ExitCode::SUCCESS)
}

pub async fn grant(context: &Context, username: &str, service: &str) -> eyre::Result<ExitCode> {
    let username = Username::new(username)?;
    let service = ServiceName::new(service)?;
    context
        .registry
        .entitlements()
        .set_skeleton_key_service(&context.tenant, &username, &service)
        .await?;

    println!("✓ '{username}' is entitled to '{service}'");
    Ok(ExitCode::SUCCESS)
}
