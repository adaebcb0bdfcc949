use thiserror::Error;

/// Failures reported by an [`ImageCodec`](super::ic_codec::ImageCodec).
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("{0}")]
    Open(String),

    #[error("{0}")]
    Save(String),
}

/// Why a single conversion attempt ended without an output file.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Please select an image and output folder.")]
    MissingInput,

    #[error("Cannot open image file.\n'{file_name}' might be corrupted or not a supported format.")]
    UnreadableImage { file_name: String, reason: String },

    #[error("{0}")]
    SaveFailed(String),
}

impl ConvertError {
    pub fn title(&self) -> &'static str {
        match self {
            ConvertError::MissingInput => "Input Missing",
            ConvertError::UnreadableImage { .. } | ConvertError::SaveFailed(_) => "Error",
        }
    }

    pub fn dialog_message(&self) -> String {
        match self {
            ConvertError::SaveFailed(cause) => format!("An unexpected error occurred:\n{}", cause),
            other => other.to_string(),
        }
    }

    /// Text for the status line. Missing input only raises the dialog.
    pub fn status_message(&self) -> Option<String> {
        match self {
            ConvertError::MissingInput => None,
            ConvertError::UnreadableImage { .. } => Some("Error: Invalid image file".to_string()),
            ConvertError::SaveFailed(cause) => Some(format!("Error: {}", cause)),
        }
    }

    /// Underlying codec message, when it is not already part of the text.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ConvertError::UnreadableImage { reason, .. } => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Missing input is a warning; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, ConvertError::MissingInput)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
