//! Weather commands.

use crate::application::command::Command;
use crate::domain::{codes, Coordinates, NotificationCatalog, Notifications};

use super::dto::CurrentWeatherDto;

/// Fetch the current weather at a WGS84 point.
#[derive(Debug, Clone, Copy)]
pub struct GetCurrentWeatherCommand {
    pub latitude: f64,
    pub longitude: f64,
}

impl GetCurrentWeatherCommand {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl Command for GetCurrentWeatherCommand {
    type Output = CurrentWeatherDto;

    fn name() -> &'static str {
        "get_current_weather"
    }

    fn validate(&self, catalog: &NotificationCatalog) -> Notifications {
        let mut notifications = Notifications::new();
        if !Coordinates::latitude_in_range(self.latitude) {
            catalog.append(&mut notifications, codes::weather::INVALID_LATITUDE);
        }
        if !Coordinates::longitude_in_range(self.longitude) {
            catalog.append(&mut notifications, codes::weather::INVALID_LONGITUDE);
        }
        notifications
    }
}
