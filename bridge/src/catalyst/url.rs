//! Update endpoint selection for Catalyst Center interfaces.

use crate::config::{Config, InterfacePathMode};

/// Build the URL the description update is sent to.
///
/// Wireless interfaces live under the wireless-settings API family; everything
/// else uses the generic interface endpoint. A non-empty deployment mode is
/// carried as a `deploymentMode` query parameter, appended with `&` when the
/// URL already has a query string so future base paths stay free to carry
/// their own parameters.
pub fn build_update_url(config: &Config, interface_uuid: &str) -> String {
    let mut url = match config.interface_path {
        InterfacePathMode::Wireless => format!(
            "{}/dna/intent/api/v1/wirelessSettings/interfaces/{}",
            config.catalyst_host, interface_uuid
        ),
        InterfacePathMode::Generic => format!(
            "{}/dna/intent/api/v1/interface/{}",
            config.catalyst_host, interface_uuid
        ),
    };

    if !config.deployment_mode.is_empty() {
        let sep = if url.contains('?') { '&' } else { '?' };
        url.push(sep);
        url.push_str("deploymentMode=");
        url.push_str(&config.deployment_mode);
    }

    url
}
