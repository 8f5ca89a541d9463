use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaceGuideError {
    #[error("Data error: {0}")]
    Data(#[from] placeguide_data::DataError),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Init Logging error: {0}")]
    InitLoggingError(#[from] tracing_subscriber::filter::ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlaceGuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: &PlaceGuideError) -> &'static str {
        match err {
            PlaceGuideError::Data(_) => "data",
            PlaceGuideError::ConfigError(_) => "config",
            PlaceGuideError::InitLoggingError(_) => "logging",
            PlaceGuideError::Other(_) => "other",
        }
    }

    #[test]
    fn test_sources_convert_into_variants() {
        let data: PlaceGuideError = placeguide_data::DataError::DownloadDisabled.into();
        assert_eq!(kind(&data), "data");

        let other: PlaceGuideError = anyhow::anyhow!("renderer went away").into();
        assert_eq!(kind(&other), "other");
        assert_eq!(other.to_string(), "renderer went away");

        let config = PlaceGuideError::ConfigError("zoom out of range".to_string());
        assert_eq!(kind(&config), "config");
    }
}
