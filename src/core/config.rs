use serde::{Deserialize, Serialize};

/// Target API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Sandbox,
    Production,
}

/// External e-invoicing configuration, owned by the caller's settings
/// module. The engine treats this as read-only input; it never stores
/// or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether e-invoicing is enabled for this company.
    pub enabled: bool,
    pub environment: Environment,
    /// MyInvois API client credentials.
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// The supplier's registered TIN, as configured in settings.
    pub supplier_tin: Option<String>,
    /// The supplier's registered business number.
    pub supplier_brn: Option<String>,
}

impl EngineConfig {
    /// True when both API credentials are configured and non-empty.
    pub fn has_credentials(&self) -> bool {
        self.client_id.as_deref().is_some_and(|v| !v.trim().is_empty())
            && self.client_secret.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            environment: Environment::Sandbox,
            client_id: None,
            client_secret: None,
            supplier_tin: None,
            supplier_brn: None,
        }
    }
}
