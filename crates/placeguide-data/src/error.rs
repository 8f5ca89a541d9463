use thiserror::Error;

pub type Result<T> = std::result::Result<T, DataError>;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[cfg(feature = "download_data")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Place '{place_id}' uses category '{category}' which is not in the configured set")]
    UnknownCategory { place_id: String, category: String },
    #[error("Duplicate place id '{0}' in feed")]
    DuplicatePlaceId(String),
    #[error("Duplicate category '{0}' in category set")]
    DuplicateCategory(String),
    #[error("Feed URL provided but the download_data feature is disabled")]
    DownloadDisabled,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(err: &DataError) -> &'static str {
        match err {
            DataError::Io(_) => "io",
            DataError::Serde(_) => "serde",
            #[cfg(feature = "download_data")]
            DataError::Http(_) => "http",
            DataError::UnknownCategory { .. } => "unknown category",
            DataError::DuplicatePlaceId(_) => "duplicate id",
            DataError::DuplicateCategory(_) => "duplicate category",
            DataError::DownloadDisabled => "download disabled",
        }
    }

    #[test]
    fn test_sources_convert_into_variants() {
        let io: DataError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert_eq!(kind(&io), "io");

        let serde: DataError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert_eq!(kind(&serde), "serde");

        let err = DataError::UnknownCategory {
            place_id: "p".to_string(),
            category: "beaches".to_string(),
        };
        assert_eq!(kind(&err), "unknown category");
        assert!(err.to_string().contains("'beaches'"));
    }
}
