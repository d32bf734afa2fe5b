use super::Context;
use skeletonkey_cache::compose;
use std::process::ExitCode;
use std::time::Instant;

const PING_SEGMENT: &str = "ping";

/// `INCR tenant:ping` and report the counter and round-trip time
pub async fn execute(context: &Context) -> eyre::Result<ExitCode> {
    let client = context.registry.client();
    let key = compose(&[context.tenant.as_str(), PING_SEGMENT]);

    let started = Instant::now();
    let counter = client.incr(&key).await?;
    let elapsed = started.elapsed();

    println!(
        "✓ {} answered in {}ms (ping #{counter})",
        client.endpoint(),
        elapsed.as_millis()
    );
    Ok(ExitCode::SUCCESS)
}
