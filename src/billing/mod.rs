//! Subscription billing provider configuration
//!
//! The payments provider sells each plan tier / billing period pair as
//! an opaque "variant". This module holds the static configuration the
//! checkout collaborator needs: provider credentials and the variant id
//! table, read once from the process environment at startup and never
//! mutated afterwards.
//!
//! A missing value is not a load-time error; consuming a missing
//! variant id fails downstream with [`PlanNotConfigured`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Subscription plan tiers offered for sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanTier {
    Pro,
    Business,
}

impl PlanTier {
    pub const ALL: [PlanTier; 2] = [PlanTier::Pro, PlanTier::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Pro => "pro",
            PlanTier::Business => "business",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pro" => Ok(PlanTier::Pro),
            "business" => Ok(PlanTier::Business),
            other => Err(format!("unknown plan tier: '{}'", other)),
        }
    }
}

/// Billing periods a plan can be bought for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingPeriod {
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Yearly];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "monthly",
            BillingPeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BillingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(BillingPeriod::Monthly),
            "yearly" => Ok(BillingPeriod::Yearly),
            other => Err(format!("unknown billing period: '{}'", other)),
        }
    }
}

/// Error returned when consuming a variant id that was never configured
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no provider variant configured for plan '{tier}' ({period})")]
pub struct PlanNotConfigured {
    pub tier: PlanTier,
    pub period: BillingPeriod,
}

/// Static payments-provider configuration, read once at startup
#[derive(Clone)]
pub struct BillingConfig {
    api_key: Option<String>,
    store_id: Option<String>,
    signing_secret: Option<String>,
    variants: HashMap<(PlanTier, BillingPeriod), String>,
}

impl BillingConfig {
    /// Read the configuration from the process environment.
    ///
    /// Variables: `BILLING_API_KEY`, `BILLING_STORE_ID`,
    /// `BILLING_SIGNING_SECRET` and one
    /// `BILLING_VARIANT_{TIER}_{PERIOD}` per plan/period pair.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mut variants = HashMap::new();
        for tier in PlanTier::ALL {
            for period in BillingPeriod::ALL {
                let key = format!(
                    "BILLING_VARIANT_{}_{}",
                    tier.as_str().to_uppercase(),
                    period.as_str().to_uppercase()
                );
                if let Some(id) = non_empty(&key) {
                    variants.insert((tier, period), id);
                }
            }
        }

        let config = Self {
            api_key: non_empty("BILLING_API_KEY"),
            store_id: non_empty("BILLING_STORE_ID"),
            signing_secret: non_empty("BILLING_SIGNING_SECRET"),
            variants,
        };

        tracing::info!(
            credentials = config.has_credentials(),
            variants = config.variants.len(),
            "billing provider configuration loaded"
        );

        config
    }

    /// The provider API key, if configured
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The provider store identifier, if configured
    pub fn store_id(&self) -> Option<&str> {
        self.store_id.as_deref()
    }

    /// The webhook signing secret, if configured
    pub fn signing_secret(&self) -> Option<&str> {
        self.signing_secret.as_deref()
    }

    /// Whether all three provider credentials are present
    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some() && self.store_id.is_some() && self.signing_secret.is_some()
    }

    /// The provider variant id for a plan/period pair.
    ///
    /// Checkout-session creation calls this; a miss is the "plan not
    /// configured" condition.
    pub fn variant_id(&self, tier: PlanTier, period: BillingPeriod) -> Result<&str, PlanNotConfigured> {
        match self.variants.get(&(tier, period)) {
            Some(id) => Ok(id),
            None => {
                tracing::warn!(%tier, %period, "requested variant id is not configured");
                Err(PlanNotConfigured { tier, period })
            }
        }
    }
}

// The api key and signing secret must never end up in logs.
impl fmt::Debug for BillingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BillingConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("store_id", &self.store_id)
            .field(
                "signing_secret",
                &self.signing_secret.as_ref().map(|_| "[redacted]"),
            )
            .field("variants", &self.variants.len())
            .finish()
    }
}
