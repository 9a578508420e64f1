use crate::core::models::bidder::MediaType;
use anyhow::bail;
use config::Config;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use tracing::info;
use url::Url;

/// Static metadata describing a bidder's capabilities and compliance
/// posture, as supplied under the bidder's `meta_info` config section
#[derive(Debug, Clone, Serialize, Deserialize, Default, Builder)]
#[serde(default)]
#[builder(default)]
pub struct MetaInfo {
    pub maintainer_email: String,
    /// Check imp media types against the declared sets before callouts
    pub validate_media_types: bool,
    pub app_media_types: HashSet<MediaType>,
    pub site_media_types: HashSet<MediaType>,
    /// Consent vendor identifiers, declaration order is preserved
    pub supported_vendors: Vec<String>,
    /// Global vendor list id for consent lookups
    pub vendor_id: u16,
}

/// Raw operator-supplied configuration for a single bidder, exactly as it
/// arrives from the deployment descriptor. Consumed read-only by
/// [`bidder_info::create`](crate::core::bidder_info::create); nothing in
/// this crate mutates it after load.
#[derive(Debug, Clone, Serialize, Deserialize, Default, Builder)]
#[serde(default)]
#[builder(default)]
pub struct BidderConfigurationProperties {
    pub enabled: bool,
    pub endpoint: String,
    pub pbs_enforces_gdpr: bool,
    pub pbs_enforces_ccpa: bool,
    pub modifying_vast_xml_allowed: bool,
    /// Absent when the operator omitted the whole section; required for
    /// the bidder to be usable
    pub meta_info: Option<MetaInfo>,
}

/// The full bidder configuration file: one properties section per bidder,
/// keyed by bidder code
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BiddersConfig {
    pub bidders: HashMap<String, BidderConfigurationProperties>,
}

impl BiddersConfig {
    pub fn load(path: &PathBuf) -> Result<BiddersConfig, anyhow::Error> {
        let cfg = Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .build()?;

        let parsed: BiddersConfig = cfg.try_deserialize()?;
        info!(bidders = parsed.bidders.len(), "Loaded bidder configuration");

        Ok(parsed)
    }

    /// Structural checks that belong to the loader rather than to the
    /// config-to-domain mapping, which stays a pure projection. Disabled
    /// bidders are skipped so dormant sections can stay half-filled.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        for (name, props) in &self.bidders {
            if !props.enabled {
                continue;
            }

            if Url::parse(&props.endpoint).is_err() {
                bail!(
                    "Bidder '{}' has an invalid endpoint url: '{}'",
                    name,
                    props.endpoint
                );
            }

            if let Some(meta) = &props.meta_info
                && meta.maintainer_email.trim().is_empty()
            {
                bail!("Bidder '{}' is missing a maintainer email", name);
            }
        }

        Ok(())
    }
}
