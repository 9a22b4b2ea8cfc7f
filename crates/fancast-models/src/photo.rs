//! Embedded photo references (data URIs).

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{ModelError, ModelResult};

const DATA_URI_PREFIX: &str = "data:";
const BASE64_PARAM: &str = "base64";

/// A caller-supplied photo encoded as a data URI.
///
/// Format: `data:<media-type>[;<params>],<payload>`, e.g.
/// `data:image/jpeg;base64,/9j/4AAQ...`. The original string is kept so it
/// can be forwarded downstream unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoRef {
    uri: String,
    media_type_end: usize,
    header_end: usize,
}

impl PhotoRef {
    /// Parse and validate a data URI.
    pub fn parse(uri: impl Into<String>) -> ModelResult<Self> {
        let uri = uri.into();

        let Some(rest) = uri.strip_prefix(DATA_URI_PREFIX) else {
            return Err(ModelError::MalformedPhoto(
                "expected a data URI starting with 'data:'".to_string(),
            ));
        };
        let Some(comma) = rest.find(',') else {
            return Err(ModelError::MalformedPhoto(
                "missing ',' between header and payload".to_string(),
            ));
        };

        let header_end = DATA_URI_PREFIX.len() + comma;
        let media_type_end = DATA_URI_PREFIX.len() + rest[..comma].find(';').unwrap_or(comma);

        let photo = Self {
            uri,
            media_type_end,
            header_end,
        };
        photo.validate()?;
        Ok(photo)
    }

    fn validate(&self) -> ModelResult<()> {
        let media_type = self.media_type();
        let valid_media_type = match media_type.split_once('/') {
            Some((kind, subtype)) => {
                !kind.is_empty() && !subtype.is_empty() && !subtype.contains('/')
            }
            None => false,
        };
        if !valid_media_type {
            return Err(ModelError::MalformedPhoto(format!(
                "unrecognized media type '{}'",
                media_type
            )));
        }

        if self.payload().is_empty() {
            return Err(ModelError::MalformedPhoto("empty payload".to_string()));
        }

        if self.is_base64() && STANDARD.decode(self.payload()).is_err() {
            return Err(ModelError::MalformedPhoto(
                "payload is not valid base64".to_string(),
            ));
        }

        Ok(())
    }

    /// Media type declared in the header, e.g. `image/jpeg`.
    pub fn media_type(&self) -> &str {
        &self.uri[DATA_URI_PREFIX.len()..self.media_type_end]
    }

    /// Header parameters after the media type, e.g. `base64`.
    pub fn params(&self) -> &str {
        let params = &self.uri[self.media_type_end..self.header_end];
        params.strip_prefix(';').unwrap_or(params)
    }

    /// Encoded payload after the comma.
    pub fn payload(&self) -> &str {
        &self.uri[self.header_end + 1..]
    }

    pub fn is_base64(&self) -> bool {
        self.params().split(';').any(|p| p == BASE64_PARAM)
    }

    /// Rebuild the header from its parsed parts.
    pub fn header(&self) -> String {
        if self.params().is_empty() {
            format!("{}{}", DATA_URI_PREFIX, self.media_type())
        } else {
            format!("{}{};{}", DATA_URI_PREFIX, self.media_type(), self.params())
        }
    }

    /// The original data URI.
    pub fn as_str(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jpeg_data_uri() {
        let photo = PhotoRef::parse("data:image/jpeg;base64,AAAA").unwrap();
        assert_eq!(photo.media_type(), "image/jpeg");
        assert_eq!(photo.params(), "base64");
        assert_eq!(photo.payload(), "AAAA");
        assert!(photo.is_base64());
        assert_eq!(photo.as_str(), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn test_header_round_trip() {
        let headers = [
            "data:image/jpeg;base64",
            "data:image/png;base64",
            "data:image/webp;charset=utf-8;base64",
            "data:image/svg+xml",
        ];
        for header in headers {
            let uri = format!("{},AAAA", header);
            let photo = PhotoRef::parse(&uri).unwrap();
            assert_eq!(photo.header(), header);
            assert_eq!(format!("{},{}", photo.header(), photo.payload()), uri);
        }
    }

    #[test]
    fn test_payload_may_contain_commas_when_not_base64() {
        let photo = PhotoRef::parse("data:text/plain,a,b,c").unwrap();
        assert_eq!(photo.payload(), "a,b,c");
        assert!(!photo.is_base64());
    }

    #[test]
    fn test_rejects_malformed() {
        let cases = [
            "",
            "image/jpeg;base64,AAAA",
            "https://example.com/me.jpg",
            "data:image/jpeg;base64",
            "data:;base64,AAAA",
            "data:jpeg;base64,AAAA",
            "data:image/;base64,AAAA",
            "data:image/jpeg;base64,",
            "data:image/jpeg;base64,@@not base64@@",
        ];
        for case in cases {
            assert!(
                matches!(PhotoRef::parse(case), Err(ModelError::MalformedPhoto(_))),
                "expected malformed: {case:?}"
            );
        }
    }
}
