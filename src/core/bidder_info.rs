use crate::app::config::BidderConfigurationProperties;
use crate::core::error::ConfigurationError;
use crate::core::models::bidder::BidderInfo;
use tracing::debug;

/// Flattens raw bidder configuration into the immutable [`BidderInfo`]
/// descriptor handed to the registry and routing layers.
///
/// This is a pure projection: every output field is taken verbatim from
/// the corresponding input field, nothing is defaulted, converted or
/// derived, and the input is left untouched. It runs once per bidder at
/// process startup, never on the request path.
///
/// # Errors
/// Returns [`ConfigurationError`] when the required `meta_info` section is
/// absent. No partial descriptor is produced; the caller is expected to
/// abort startup.
pub fn create(props: &BidderConfigurationProperties) -> Result<BidderInfo, ConfigurationError> {
    let meta = props
        .meta_info
        .as_ref()
        .ok_or_else(|| ConfigurationError::new("required meta_info section is absent"))?;

    let info = BidderInfo::new(
        props.enabled,
        props.endpoint.clone(),
        meta.maintainer_email.clone(),
        meta.validate_media_types,
        meta.app_media_types.clone(),
        meta.site_media_types.clone(),
        meta.supported_vendors.clone(),
        meta.vendor_id,
        props.pbs_enforces_gdpr,
        props.pbs_enforces_ccpa,
        props.modifying_vast_xml_allowed,
    );

    debug!(
        endpoint = info.endpoint(),
        vendor_id = info.vendor_id(),
        enabled = info.enabled(),
        "Built bidder info"
    );

    Ok(info)
}
