//! Legacy service to app conversion

use crate::error::MigrationError;
use crate::ids::IdGenerator;
use crate::legacy::LegacyService;
use crate::model::{
    App, AppAppearance, AppBehaviour, AppIntegration, AppNetwork, AppShape, Area,
};

use super::layout::{grid_location, DEFAULT_APP_SIZE};
use super::status::{ok_status, StatusPolicy};

/// Convert one legacy service into an app
///
/// `index` is the service's zero-based position in the legacy list and the
/// only input to its grid location. `area` is resolved by the caller.
///
/// # Errors
/// Fails only when `policy` is [`StatusPolicy::Reject`] and a status string
/// is not a number.
pub fn map_service(
    service: &LegacyService,
    index: usize,
    area: Area,
    ids: &dyn IdGenerator,
    policy: StatusPolicy,
) -> Result<App, MigrationError> {
    let ok_status = ok_status(service, index, policy)?;

    let app = App {
        id: ids.next_id(),
        name: service.name.clone(),
        url: service.url.clone(),
        behaviour: AppBehaviour {
            is_opening_new_tab: service.new_tab.unwrap_or(true),
            external_url: service.opened_url.clone().unwrap_or_default(),
        },
        network: AppNetwork {
            enabled_status_checker: service.ping.unwrap_or(true),
            ok_status,
        },
        appearance: AppAppearance {
            icon_url: service.icon.clone(),
        },
        integration: AppIntegration::default(),
        area,
        shape: AppShape {
            location: grid_location(index),
            size: DEFAULT_APP_SIZE,
        },
    };

    tracing::debug!(
        id = %app.id,
        name = %app.name,
        index,
        area = app.area.id(),
        x = app.shape.location.x,
        y = app.shape.location.y,
        "mapped service"
    );
    Ok(app)
}
