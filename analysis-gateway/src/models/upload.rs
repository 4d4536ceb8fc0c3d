use crate::error::RelayError;
use axum::extract::Multipart;
use reqwest::multipart::Part;

/// Form field the file is expected under, inbound and outbound.
pub const FILE_FIELD: &str = "file";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file received from a client, held only for the lifetime of one request.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Upload {
    /// Take the first `file` part of the form, skipping any other fields.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, RelayError> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| RelayError::Multipart(e.to_string()))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| RelayError::Multipart(e.to_string()))?
                .to_vec();

            return Ok(Self {
                file_name,
                content_type,
                data,
            });
        }

        Err(RelayError::MissingFile)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Outbound form part carrying the same bytes and original filename.
    pub fn into_part(self) -> Result<Part, RelayError> {
        let mime = self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);
        let part = Part::bytes(self.data)
            .mime_str(mime)
            .map_err(RelayError::Build)?;

        Ok(match self.file_name {
            Some(name) => part.file_name(name),
            None => part,
        })
    }
}
