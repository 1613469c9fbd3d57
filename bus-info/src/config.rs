//! Credentials from the environment.
//!
//! Each binary reads its own pair of variables:
//! `BI_APP_ID` / `BI_APP_KEY` for `whensthebus`,
//! `WTB_APP_ID` / `WTB_APP_KEY` for `whensthenexttenarrivals`.

use tracing::warn;

use crate::transportapi::ClientConfig;

/// Environment variable names holding one pair of app credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialVars {
    pub app_id: &'static str,
    pub app_key: &'static str,
}

/// Variables read by `whensthebus`.
pub const BUS_TIMES_VARS: CredentialVars = CredentialVars {
    app_id: "BI_APP_ID",
    app_key: "BI_APP_KEY",
};

/// Variables read by `whensthenexttenarrivals`.
pub const NEXT_ARRIVALS_VARS: CredentialVars = CredentialVars {
    app_id: "WTB_APP_ID",
    app_key: "WTB_APP_KEY",
};

/// TransportAPI app credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: String,
    pub app_key: String,
}

impl Credentials {
    /// Read credentials from the process environment.
    ///
    /// Unset variables become empty strings; the client rejects those with
    /// `MissingCredentials` rather than failing here.
    pub fn from_env(vars: CredentialVars) -> Self {
        Self::from_lookup(vars, |name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup(vars: CredentialVars, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name).unwrap_or_else(|| {
                warn!(var = name, "credential variable not set");
                String::new()
            })
        };

        Self {
            app_id: read(vars.app_id),
            app_key: read(vars.app_key),
        }
    }

    /// Client configuration using these credentials and default settings.
    pub fn into_config(self) -> ClientConfig {
        ClientConfig::new(self.app_id, self.app_key)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn binaries_use_distinct_variables() {
        assert_ne!(BUS_TIMES_VARS.app_id, NEXT_ARRIVALS_VARS.app_id);
        assert_ne!(BUS_TIMES_VARS.app_key, NEXT_ARRIVALS_VARS.app_key);
    }

    #[test]
    fn reads_named_pair() {
        let env = lookup(&[
            ("BI_APP_ID", "bi-id"),
            ("BI_APP_KEY", "bi-key"),
            ("WTB_APP_ID", "wtb-id"),
            ("WTB_APP_KEY", "wtb-key"),
        ]);

        let creds = Credentials::from_lookup(BUS_TIMES_VARS, &env);
        assert_eq!(creds.app_id, "bi-id");
        assert_eq!(creds.app_key, "bi-key");

        let creds = Credentials::from_lookup(NEXT_ARRIVALS_VARS, &env);
        assert_eq!(creds.app_id, "wtb-id");
        assert_eq!(creds.app_key, "wtb-key");
    }

    #[test]
    fn unset_becomes_empty() {
        let creds = Credentials::from_lookup(BUS_TIMES_VARS, lookup(&[("BI_APP_ID", "bi-id")]));
        assert_eq!(creds.app_id, "bi-id");
        assert_eq!(creds.app_key, "");
    }

    #[test]
    fn into_config_keeps_credentials() {
        let config = Credentials {
            app_id: "id".into(),
            app_key: "key".into(),
        }
        .into_config();

        assert_eq!(config.app_id, "id");
        assert_eq!(config.app_key, "key");
    }

    #[test]
    fn debug_redacts_key() {
        let creds = Credentials {
            app_id: "id".into(),
            app_key: "secret".into(),
        };
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
