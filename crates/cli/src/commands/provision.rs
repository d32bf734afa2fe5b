use super::Context;
use std::path::Path;
use std::process::ExitCode;

pub async fn execute(context: &Context, services: &Path, keys: &Path) -> eyre::Result<ExitCode> {
    let report = context
        .registry
        .provisioner()
        .provision_from_files(&context.tenant, services, keys)
        .await?;

    println!(
        "✓ Provisioned {} services, {} skeleton keys and {} entitlements for '{}'",
        report.services, report.skeleton_keys, report.entitlements, context.tenant
    );
    Ok(ExitCode::SUCCESS)
}
