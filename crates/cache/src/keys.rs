//! Flat cache key namespace
//!
//! The gateway has no namespace hierarchy, so every key is a delimiter-joined
//! path: `tenant:category:entity`. Segments are joined verbatim. Callers that
//! build keys from typed segments (`TenantId`, `ServiceName`, `Username`) get
//! injectivity for free because those types reject the delimiter.

use skeletonkey_core::{
    ServiceName, TenantId, Username, AVAILABLE_SERVICES, KEY_DELIMITER, SALTED_PASSWORD_HASH,
    SKELETON_KEY_SERVICES,
};
use std::fmt;

/// Join namespace segments with the key delimiter
pub fn compose<S: AsRef<str>>(segments: &[S]) -> String {
    let mut key = String::with_capacity(segments.iter().map(|s| s.as_ref().len() + 1).sum());
    for (index, segment) in segments.iter().enumerate() {
        if index > 0 {
            key.push(KEY_DELIMITER);
        }
        key.push_str(segment.as_ref());
    }
    key
}

/// The category segment of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCategory {
    AvailableServices,
    SaltedPasswordHash,
    SkeletonKeyServices,
}

impl KeyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyCategory::AvailableServices => AVAILABLE_SERVICES,
            KeyCategory::SaltedPasswordHash => SALTED_PASSWORD_HASH,
            KeyCategory::SkeletonKeyServices => SKELETON_KEY_SERVICES,
        }
    }
}

impl fmt::Display for KeyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully composed key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// `tenant:available_services:service`
    pub fn available_service(tenant: &TenantId, service: &ServiceName) -> Self {
        Self(compose(&[
            tenant.as_str(),
            KeyCategory::AvailableServices.as_str(),
            service.as_str(),
        ]))
    }

    /// `tenant:salted_password_hash:username`
    pub fn salted_password_hash(tenant: &TenantId, username: &Username) -> Self {
        Self(compose(&[
            tenant.as_str(),
            KeyCategory::SaltedPasswordHash.as_str(),
            username.as_str(),
        ]))
    }

    /// `tenant:skeleton_key_services:username:service`
    pub fn skeleton_key_service(
        tenant: &TenantId,
        username: &Username,
        service: &ServiceName,
    ) -> Self {
        Self(compose(&[
            tenant.as_str(),
            KeyCategory::SkeletonKeyServices.as_str(),
            username.as_str(),
            service.as_str(),
        ]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tenant(s: &str) -> TenantId {
        TenantId::new(s).unwrap()
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose(&["acme", "available_services", "billing"]), "acme:available_services:billing");
        assert_eq!(compose(&["solo"]), "solo");
        assert_eq!(compose::<&str>(&[]), "");
    }

    #[test]
    fn test_compose_does_not_escape() {
        assert_eq!(compose(&["a:b", "c"]), "a:b:c");
        assert_eq!(compose(&["a", "b:c"]), "a:b:c");
    }

    #[test]
    fn test_typed_keys() {
        let acme = tenant("acme");
        let billing = ServiceName::new("billing").unwrap();
        let alice = Username::new("alice").unwrap();

        assert_eq!(
            CacheKey::available_service(&acme, &billing).as_str(),
            "acme:available_services:billing"
        );
        assert_eq!(
            CacheKey::salted_password_hash(&acme, &alice).as_str(),
            "acme:salted_password_hash:alice"
        );
        assert_eq!(
            CacheKey::skeleton_key_service(&acme, &alice, &billing).to_string(),
            "acme:skeleton_key_services:alice:billing"
        );
    }

    #[test]
    fn test_categories_do_not_collide() {
        let acme = tenant("acme");
        let name = "shared";
        let service = ServiceName::new(name).unwrap();
        let user = Username::new(name).unwrap();

        assert_ne!(
            CacheKey::available_service(&acme, &service),
            CacheKey::salted_password_hash(&acme, &user)
        );
    }

    proptest! {
        #[test]
        fn prop_compose_is_injective(
            a in proptest::collection::vec("[^:]{0,6}", 3),
            b in proptest::collection::vec("[^:]{0,6}", 3),
        ) {
            prop_assume!(a != b);
            prop_assert_ne!(compose(&a), compose(&b));
        }

        #[test]
        fn prop_typed_keys_are_injective(
            t1 in "[^:]{1,6}", s1 in "[^:]{1,6}",
            t2 in "[^:]{1,6}", s2 in "[^:]{1,6}",
        ) {
            prop_assume!((t1.clone(), s1.clone()) != (t2.clone(), s2.clone()));
            let k1 = CacheKey::available_service(&tenant(&t1), &ServiceName::new(s1).unwrap());
            let k2 = CacheKey::available_service(&tenant(&t2), &ServiceName::new(s2).unwrap());
            prop_assert_ne!(k1, k2);
        }
    }
}
