use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum::{AsRefStr, Display, EnumString};

/// Ad format category a bidder can serve
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Banner,
    Video,
    Audio,
    Native,
}

/// Validated runtime descriptor for a single configured bidder.
///
/// Built once at startup by [`bidder_info::create`](crate::core::bidder_info::create)
/// and then shared read-only (typically behind an `Arc`) across request
/// handling threads for the lifetime of the process configuration. There
/// are no setters and no interior mutability, so concurrent readers need
/// no locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidderInfo {
    enabled: bool,
    endpoint: String,
    maintainer_email: String,
    validate_media_types: bool,
    app_media_types: HashSet<MediaType>,
    site_media_types: HashSet<MediaType>,
    supported_vendors: Vec<String>,
    vendor_id: u16,
    pbs_enforces_gdpr: bool,
    pbs_enforces_ccpa: bool,
    modifying_vast_xml_allowed: bool,
}

impl BidderInfo {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        enabled: bool,
        endpoint: String,
        maintainer_email: String,
        validate_media_types: bool,
        app_media_types: HashSet<MediaType>,
        site_media_types: HashSet<MediaType>,
        supported_vendors: Vec<String>,
        vendor_id: u16,
        pbs_enforces_gdpr: bool,
        pbs_enforces_ccpa: bool,
        modifying_vast_xml_allowed: bool,
    ) -> Self {
        Self {
            enabled,
            endpoint,
            maintainer_email,
            validate_media_types,
            app_media_types,
            site_media_types,
            supported_vendors,
            vendor_id,
            pbs_enforces_gdpr,
            pbs_enforces_ccpa,
            modifying_vast_xml_allowed,
        }
    }

    /// Whether this bidder participates in auctions at all
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Bid endpoint url callouts are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn maintainer_email(&self) -> &str {
        &self.maintainer_email
    }

    /// Whether imp media types are checked against the declared sets
    /// before a callout is made
    pub fn validate_media_types(&self) -> bool {
        self.validate_media_types
    }

    pub fn app_media_types(&self) -> &HashSet<MediaType> {
        &self.app_media_types
    }

    pub fn site_media_types(&self) -> &HashSet<MediaType> {
        &self.site_media_types
    }

    /// Consent vendor identifiers, in declaration order
    pub fn supported_vendors(&self) -> &[String] {
        &self.supported_vendors
    }

    /// Global vendor list id used for consent lookups
    pub fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    pub fn pbs_enforces_gdpr(&self) -> bool {
        self.pbs_enforces_gdpr
    }

    pub fn pbs_enforces_ccpa(&self) -> bool {
        self.pbs_enforces_ccpa
    }

    /// Whether the exchange may rewrite this bidder's VAST for event injection
    pub fn modifying_vast_xml_allowed(&self) -> bool {
        self.modifying_vast_xml_allowed
    }
}
