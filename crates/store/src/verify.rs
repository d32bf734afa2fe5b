//! Skeleton key verification
//!
//! A request to use a service passes three gates in a fixed order:
//!
//! 1. the user's skeleton key is entitled to the service
//! 2. the service is available in the tenant
//! 3. the password matches the stored hash record
//!
//! The two flag lookups are cheap and run first; the hash comparison only
//! runs once both pass. A failed gate ends the decision with that gate's
//! [`DomainErrorKind`]. A wrong password is not an error: it is `Ok(false)`.

use crate::credentials::CredentialStore;
use crate::entitlements::EntitlementStore;
use skeletonkey_core::{DomainErrorKind, Error, Result, ServiceName, TenantId, Username};
use std::sync::Arc;
use zeroize::Zeroizing;

#[derive(Debug, Clone)]
pub struct Verifier {
    entitlements: EntitlementStore,
    credentials: CredentialStore,
}

impl Verifier {
    pub fn new(entitlements: EntitlementStore, credentials: CredentialStore) -> Self {
        Self {
            entitlements,
            credentials,
        }
    }

    /// Check a password against the stored skeleton key, ignoring services
    ///
    /// Fails with [`DomainErrorKind::SkeletonKeyDoesNotExist`] when the user
    /// has no record; a record that is not valid JSON is an encoding error.
    pub async fn verify_skeleton_key(
        &self,
        tenant: &TenantId,
        username: &Username,
        password: &str,
    ) -> Result<bool> {
        let record = self
            .credentials
            .hash_record(tenant, username)
            .await?
            .ok_or_else(|| {
                Error::domain(DomainErrorKind::SkeletonKeyDoesNotExist, username.as_str())
            })?;

        let hasher = Arc::clone(self.credentials.hasher());
        let password = Zeroizing::new(password.to_string());
        let matched = tokio::task::spawn_blocking(move || hasher.matches(&password, &record))
            .await
            .map_err(|e| Error::hashing(format!("verification task failed: {e}")))??;

        tracing::debug!(%tenant, %username, matched, "skeleton key checked");
        Ok(matched)
    }

    /// Run all three gates for `username` using `service`
    pub async fn verify_skeleton_key_and_service(
        &self,
        tenant: &TenantId,
        service: &ServiceName,
        username: &Username,
        password: &str,
    ) -> Result<bool> {
        let entitled = self
            .entitlements
            .get_skeleton_key_service(tenant, username, service)
            .await;
        if let Err(e) = gate(
            entitled,
            DomainErrorKind::SkeletonKeyServiceDoesNotExist,
            format!("{username}/{service}"),
        ) {
            tracing::debug!(%tenant, %username, %service, error = %e, "entitlement gate closed");
            return Err(e);
        }

        let available = self
            .entitlements
            .get_available_service(tenant, service)
            .await;
        if let Err(e) = gate(
            available,
            DomainErrorKind::AvailableServiceDoesNotExist,
            service.as_str(),
        ) {
            tracing::debug!(%tenant, %username, %service, error = %e, "availability gate closed");
            return Err(e);
        }

        self.verify_skeleton_key(tenant, username, password).await
    }
}

/// A flag read that is false or failed closes the gate
fn gate(lookup: Result<bool>, kind: DomainErrorKind, subject: impl Into<String>) -> Result<()> {
    match lookup {
        Ok(true) => Ok(()),
        Ok(false) => Err(Error::domain(kind, subject)),
        Err(cause) => Err(Error::domain_with_source(kind, subject, cause)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate() {
        assert!(gate(Ok(true), DomainErrorKind::AvailableServiceDoesNotExist, "s").is_ok());

        let err = gate(Ok(false), DomainErrorKind::AvailableServiceDoesNotExist, "s").unwrap_err();
        assert_eq!(
            err.domain_kind(),
            Some(DomainErrorKind::AvailableServiceDoesNotExist)
        );
        assert!(std::error::Error::source(&err).is_none());

        let cause = Error::unexpected_status("GET", 500);
        let err = gate(
            Err(cause),
            DomainErrorKind::SkeletonKeyServiceDoesNotExist,
            "alice/billing",
        )
        .unwrap_err();
        assert_eq!(
            err.domain_kind(),
            Some(DomainErrorKind::SkeletonKeyServiceDoesNotExist)
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
