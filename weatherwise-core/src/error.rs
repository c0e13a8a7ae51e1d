use thiserror::Error;

use crate::{location::LocationError, provider::ProviderError};

/// User-visible failures of a single widget action. The `Display` text is the
/// exact banner message. Every variant is terminal for the action that
/// produced it; none of them abort the process.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Please enter a city name")]
    EmptyInput,

    #[error("Failed to fetch weather data. Please try again.")]
    Fetch(#[source] ProviderError),

    #[error("Unable to get your location. Please search manually.")]
    LocationDenied,

    #[error("Location detection is not supported on this system.")]
    LocationUnsupported,
}

impl From<LocationError> for WidgetError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Denied => WidgetError::LocationDenied,
            LocationError::Unsupported => WidgetError::LocationUnsupported,
        }
    }
}

impl From<ProviderError> for WidgetError {
    fn from(err: ProviderError) -> Self {
        WidgetError::Fetch(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_message_is_exact() {
        assert_eq!(WidgetError::EmptyInput.to_string(), "Please enter a city name");
    }

    #[test]
    fn location_errors_map_to_their_banner() {
        let denied = WidgetError::from(LocationError::Denied);
        assert_eq!(denied.to_string(), "Unable to get your location. Please search manually.");

        let unsupported = WidgetError::from(LocationError::Unsupported);
        assert_eq!(
            unsupported.to_string(),
            "Location detection is not supported on this system."
        );
    }
}
