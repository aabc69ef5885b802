//! Action handler for the weather lookup command.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::command::{ensure_valid, ActionHandler, Command, CommandError};
use crate::domain::ports::CurrentWeatherService;
use crate::domain::NotificationCatalog;

use super::commands::GetCurrentWeatherCommand;
use super::dto::CurrentWeatherDto;
use super::mapper::CurrentWeatherMapper;

/// Resolves current weather via the external weather service.
pub struct GetCurrentWeatherActionHandler<S> {
    service: Arc<S>,
    mapper: CurrentWeatherMapper,
    catalog: Arc<NotificationCatalog>,
}

impl<S> GetCurrentWeatherActionHandler<S> {
    /// Wire the handler to its weather source.
    pub fn new(service: Arc<S>, catalog: Arc<NotificationCatalog>) -> Self {
        Self {
            service,
            mapper: CurrentWeatherMapper,
            catalog,
        }
    }
}

#[async_trait]
impl<S> ActionHandler<GetCurrentWeatherCommand> for GetCurrentWeatherActionHandler<S>
where
    S: CurrentWeatherService,
{
    async fn execute(
        &self,
        command: GetCurrentWeatherCommand,
    ) -> Result<CurrentWeatherDto, CommandError> {
        ensure_valid(&command, &self.catalog)?;

        let observation = self
            .service
            .current_weather_by_coordinates(command.coordinates())
            .await?;
        tracing::debug!(
            command = GetCurrentWeatherCommand::name(),
            condition = ?observation.condition,
            "observation resolved"
        );
        Ok(self.mapper.to_dto(&observation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::domain::ports::{MockCurrentWeatherService, WeatherServiceError};
    use crate::domain::{codes, Coordinates, CurrentWeather, WeatherCondition, Wind};

    fn catalog() -> Arc<NotificationCatalog> {
        Arc::new(NotificationCatalog::standard())
    }

    fn observation(coordinates: Coordinates) -> CurrentWeather {
        CurrentWeather {
            coordinates,
            condition: WeatherCondition::Clouds,
            description: "broken clouds".to_owned(),
            temperature: 17.2,
            humidity: 63,
            pressure: 1008,
            wind: Wind {
                speed: 3.1,
                degrees: 310.0,
            },
            rain: None,
            observed_at: chrono::Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn in_range_coordinates_resolve_through_the_service() {
        let mut service = MockCurrentWeatherService::new();
        service
            .expect_current_weather_by_coordinates()
            .withf(|c: &Coordinates| c.latitude == 51.5 && c.longitude == -0.12)
            .times(1)
            .return_once(|coordinates| Ok(observation(coordinates)));

        let handler = GetCurrentWeatherActionHandler::new(Arc::new(service), catalog());
        let dto = handler
            .execute(GetCurrentWeatherCommand {
                latitude: 51.5,
                longitude: -0.12,
            })
            .await
            .expect("lookup succeeds");

        assert_eq!(dto.condition, WeatherCondition::Clouds);
        assert_eq!(dto.latitude, 51.5);
    }

    #[tokio::test]
    async fn invalid_latitude_is_rejected_before_the_service_is_called() {
        let mut service = MockCurrentWeatherService::new();
        service.expect_current_weather_by_coordinates().times(0);

        let handler = GetCurrentWeatherActionHandler::new(Arc::new(service), catalog());
        let error = handler
            .execute(GetCurrentWeatherCommand {
                latitude: 120.0,
                longitude: 0.0,
            })
            .await
            .expect_err("must reject");

        let notifications = error.notifications().expect("rejection carries data");
        assert!(notifications.contains_code(codes::weather::INVALID_LATITUDE));
    }

    #[tokio::test]
    async fn service_failure_propagates_untouched() {
        let mut service = MockCurrentWeatherService::new();
        service
            .expect_current_weather_by_coordinates()
            .times(1)
            .return_once(|_| Err(WeatherServiceError::rate_limited("try later")));

        let handler = GetCurrentWeatherActionHandler::new(Arc::new(service), catalog());
        let error = handler
            .execute(GetCurrentWeatherCommand {
                latitude: 0.0,
                longitude: 0.0,
            })
            .await
            .expect_err("failure propagates");

        assert_eq!(
            error,
            CommandError::Weather(WeatherServiceError::rate_limited("try later"))
        );
    }
}
