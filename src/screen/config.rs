use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::{Investor, InvestorId, SecError};

/// Number of holdings selected per investor when no override is given.
pub const DEFAULT_TOP_N: usize = 10;

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

#[derive(Deserialize)]
struct ScreenConfigDef {
    investors: Vec<Investor>,
    #[serde(default = "default_top_n")]
    top_n: usize,
}

/// The tracked investor set and ranking parameters for one screening run.
///
/// Investor order is significant: investors are aggregated, ranked and reported in the order
/// given here. A `ScreenConfig` is always valid; both the builder and deserialization reject
/// an empty investor list, duplicate ids and `top_n == 0`.
///
/// ```
/// # use sec13f_rs::ScreenConfig;
/// let config = ScreenConfig::from_json(r#"{
///     "investors": [
///         { "id": "1466153", "display_name": "Two Sigma" },
///         { "id": "860561", "display_name": "Spyglass Capital" }
///     ]
/// }"#).unwrap();
/// assert_eq!(config.top_n(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScreenConfigDef")]
pub struct ScreenConfig {
    investors: Vec<Investor>,
    top_n: usize,
}

impl TryFrom<ScreenConfigDef> for ScreenConfig {
    type Error = SecError;

    fn try_from(def: ScreenConfigDef) -> Result<Self, Self::Error> {
        Self::new(def.investors, def.top_n)
    }
}

impl ScreenConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`SecError::InvalidParams`] for an empty investor list, a repeated investor id,
    /// or a `top_n` of zero.
    pub fn new(investors: Vec<Investor>, top_n: usize) -> Result<Self, SecError> {
        if investors.is_empty() {
            return Err(SecError::InvalidParams("at least one investor is required".into()));
        }
        if top_n == 0 {
            return Err(SecError::InvalidParams("top_n must be at least 1".into()));
        }
        let mut seen = HashSet::new();
        for inv in &investors {
            if !seen.insert(&inv.id) {
                return Err(SecError::InvalidParams(format!(
                    "investor {} is listed more than once",
                    inv.id
                )));
            }
        }
        Ok(Self { investors, top_n })
    }

    pub fn builder() -> ScreenConfigBuilder {
        ScreenConfigBuilder::default()
    }

    /// Parses and validates a JSON config.
    pub fn from_json(s: &str) -> Result<Self, SecError> {
        serde_json::from_str(s).map_err(|e| SecError::InvalidParams(format!("config json: {e}")))
    }

    pub fn investors(&self) -> &[Investor] {
        &self.investors
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn display_name(&self, id: &InvestorId) -> Option<&str> {
        self.investors
            .iter()
            .find(|i| &i.id == id)
            .map(|i| i.display_name.as_str())
    }

    /// Position of an investor in the configured order.
    pub(crate) fn position(&self, id: &InvestorId) -> Option<usize> {
        self.investors.iter().position(|i| &i.id == id)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ScreenConfigBuilder {
    investors: Vec<Investor>,
    top_n: Option<usize>,
}

impl ScreenConfigBuilder {
    /// Appends a tracked investor.
    #[must_use]
    pub fn investor(mut self, id: impl Into<InvestorId>, display_name: impl Into<String>) -> Self {
        self.investors.push(Investor::new(id, display_name));
        self
    }

    /// Number of holdings to select per investor. Default: 10.
    #[must_use]
    pub const fn top_n(mut self, n: usize) -> Self {
        self.top_n = Some(n);
        self
    }

    pub fn build(self) -> Result<ScreenConfig, SecError> {
        ScreenConfig::new(self.investors, self.top_n.unwrap_or(DEFAULT_TOP_N))
    }
}
