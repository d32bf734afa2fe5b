use crate::Cli;
use clap::Subcommand;
use skeletonkey_cache::MemoryGateway;
use skeletonkey_config::ConfigLoader;
use skeletonkey_core::{Error, TenantId, SKELETONKEY_TENANT_VAR};
use skeletonkey_store::Registry;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

pub mod keys;
pub mod ping;
pub mod provision;
pub mod services;

#[derive(Subcommand)]
pub enum Commands {
    /// Replay service and skeleton key manifests into the cache
    Provision {
        /// JSON array of service names
        #[arg(long, value_name = "FILE")]
        services: PathBuf,

        /// JSON object of username to {password, services}
        #[arg(long, value_name = "FILE")]
        keys: PathBuf,
    },

    /// Mark a service as available in the tenant
    AddService {
        service: String,
    },

    /// Store a user's skeleton key
    SetKey {
        username: String,

        /// Read the password from the first line of stdin
        #[arg(long)]
        password_stdin: bool,
    },

    /// Entitle a user's skeleton key to a service
    Grant {
        username: String,
        service: String,
    },

    /// Check a password, and optionally a service, against the cache
    Verify {
        username: String,

        /// Also require the key to be entitled to this available service
        #[arg(long)]
        service: Option<String>,

        /// Read the password from the first line of stdin
        #[arg(long)]
        password_stdin: bool,
    },

    /// Check that the cache gateway answers
    Ping,
}

/// Everything a command needs once flags, env and config are resolved
pub struct Context {
    pub registry: Registry,
    pub tenant: TenantId,
}

impl Context {
    pub fn resolve(cli: &Cli) -> eyre::Result<Self> {
        if cli.memory {
            let tenant = match cli.tenant.clone() {
                Some(tenant) => tenant,
                None => std::env::var(SKELETONKEY_TENANT_VAR).map_err(|_| {
                    Error::configuration(format!(
                        "no tenant configured (set {SKELETONKEY_TENANT_VAR} or --tenant)"
                    ))
                })?,
            };
            tracing::warn!("using an in-process cache, nothing outlives this command");
            return Ok(Self {
                registry: Registry::new(Arc::new(MemoryGateway::new())),
                tenant: TenantId::new(tenant)?,
            });
        }

        let mut loader = ConfigLoader::new();
        if let Some(path) = &cli.config {
            loader = loader.config_file(path);
        }
        if let Some(endpoint) = &cli.endpoint {
            loader = loader.endpoint(endpoint);
        }
        if let Some(tenant) = &cli.tenant {
            loader = loader.tenant(tenant);
        }
        let config = loader.load()?;
        tracing::debug!(endpoint = %config.endpoint, tenant = %config.tenant, "configuration resolved");

        Ok(Self {
            registry: Registry::from_config(&config)?,
            tenant: config.tenant,
        })
    }
}

impl Commands {
    pub async fn execute(self, context: &Context) -> eyre::Result<ExitCode> {
        match self {
            Commands::Provision { services, keys } => {
                provision::execute(context, &services, &keys).await
            }
            Commands::AddService { service } => services::add(context, &service).await,
            Commands::SetKey {
                username,
                password_stdin,
            } => keys::set(context, &username, password_stdin).await,
            Commands::Grant { username, service } => {
                services::grant(context, &username, &service).await
            }
            Commands::Verify {
                username,
                service,
                password_stdin,
            } => keys::verify(context, &username, service.as_deref(), password_stdin).await,
            Commands::Ping => ping::execute(context).await,
        }
    }
}
