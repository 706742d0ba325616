//! Encoding selection.
//!
//! Three independent axes decide how a request travels:
//! body shape ([`EncodingMode`]), target host ([`Host`]) and an optional
//! [`ContentTypeTag`] for raw binary payloads. An operation declares what it
//! transmits with a [`Transfer`]; [`Transfer::directives`] maps that onto the
//! three axes.

use serde_json::Value;

use crate::dispatch::{FormPart, RequestBody};
use crate::error::{GreenApiError, Result};
use crate::utils::mime;

/// Form field carrying a local file path in path-based uploads.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingMode {
    #[default]
    StructuredBody,
    MultipartForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Host {
    #[default]
    DefaultHost,
    MediaHost,
}

/// MIME type and filename attached to a raw binary payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeTag {
    pub mime: String,
    pub file_name: String,
}

impl ContentTypeTag {
    /// Classify `content` by sniffing its bytes.
    ///
    /// `file_name_hint` only supplies the filename (its base name); it never
    /// affects the MIME type.
    pub fn detect(content: &[u8], file_name_hint: &str) -> Self {
        Self {
            mime: mime::sniff_mime(content),
            file_name: mime::file_name_of(file_name_hint, "file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodingDirectives {
    pub mode: EncodingMode,
    pub host: Host,
    pub content_type: Option<ContentTypeTag>,
}

impl EncodingDirectives {
    pub fn structured() -> Self {
        Self::default()
    }

    pub fn multipart(mut self) -> Self {
        self.mode = EncodingMode::MultipartForm;
        self
    }

    pub fn on_media_host(mut self) -> Self {
        self.host = Host::MediaHost;
        self
    }

    pub fn with_content_type(mut self, tag: ContentTypeTag) -> Self {
        self.content_type = Some(tag);
        self
    }
}

/// What an operation transmits.
#[derive(Debug, Clone, Copy)]
pub enum Transfer<'a> {
    /// A structured document on the default host.
    Document,
    /// A document whose `file` field names a local file to upload.
    FileByPath { host: Host },
    /// Bytes uploaded as-is, classified by content.
    RawBytes {
        content: &'a [u8],
        file_name: &'a str,
    },
}

impl Transfer<'_> {
    pub fn directives(&self) -> EncodingDirectives {
        match *self {
            Transfer::Document => EncodingDirectives::structured(),
            Transfer::FileByPath { host } => EncodingDirectives {
                host,
                ..EncodingDirectives::structured().multipart()
            },
            Transfer::RawBytes { content, file_name } => EncodingDirectives::structured()
                .multipart()
                .on_media_host()
                .with_content_type(ContentTypeTag::detect(content, file_name)),
        }
    }
}

/// Shape a serialized document into the body `directives` call for.
///
/// Structured bodies pass through untouched. Multipart bodies flatten the
/// document's top-level fields into form parts (one per field), with
/// [`FILE_FIELD`] turned into a path reference. Nested values are sent as
/// their JSON text.
pub fn shape_body(document: Value, directives: &EncodingDirectives) -> Result<RequestBody> {
    match directives.mode {
        EncodingMode::StructuredBody => Ok(RequestBody::Json(document)),
        EncodingMode::MultipartForm => {
            let Value::Object(fields) = document else {
                return Err(GreenApiError::Serialization(
                    "multipart body requires an object document".to_string(),
                ));
            };
            let parts = fields
                .into_iter()
                .map(|(name, value)| {
                    let text = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    if name == FILE_FIELD {
                        FormPart::path(name, text)
                    } else {
                        FormPart::text(name, text)
                    }
                })
                .collect();
            Ok(RequestBody::Form(parts))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::FormValue;
    use serde_json::json;

    const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    #[test]
    fn document_is_structured_on_default_host() {
        let d = Transfer::Document.directives();
        assert_eq!(d.mode, EncodingMode::StructuredBody);
        assert_eq!(d.host, Host::DefaultHost);
        assert!(d.content_type.is_none());
    }

    #[test]
    fn path_upload_is_multipart_on_requested_host() {
        let d = Transfer::FileByPath {
            host: Host::MediaHost,
        }
        .directives();
        assert_eq!(d.mode, EncodingMode::MultipartForm);
        assert_eq!(d.host, Host::MediaHost);
        assert!(d.content_type.is_none());

        let d = Transfer::FileByPath {
            host: Host::DefaultHost,
        }
        .directives();
        assert_eq!(d.host, Host::DefaultHost);
    }

    #[test]
    fn raw_bytes_compose_all_three_axes() {
        let d = Transfer::RawBytes {
            content: PNG,
            file_name: "/tmp/report.pdf",
        }
        .directives();
        assert_eq!(d.mode, EncodingMode::MultipartForm);
        assert_eq!(d.host, Host::MediaHost);
        let tag = d.content_type.unwrap();
        // Sniffed from content, not from the ".pdf" hint
        assert_eq!(tag.mime, "image/png");
        assert_eq!(tag.file_name, "report.pdf");
    }

    #[test]
    fn structured_shape_passes_document_through() {
        let doc = json!({"chatId": "1@c.us", "message": "hi"});
        let body = shape_body(doc.clone(), &EncodingDirectives::structured()).unwrap();
        assert_eq!(body, RequestBody::Json(doc));
    }

    #[test]
    fn multipart_shape_marks_file_field_as_path() {
        let doc = json!({"chatId": "1@c.us", "file": "/tmp/a.png", "fileName": "a.png"});
        let body = shape_body(doc, &EncodingDirectives::structured().multipart()).unwrap();
        let RequestBody::Form(parts) = body else {
            panic!("expected form body");
        };
        assert_eq!(parts.len(), 3);
        let file = parts.iter().find(|p| p.name == "file").unwrap();
        assert_eq!(file.value, FormValue::FilePath("/tmp/a.png".into()));
        let name = parts.iter().find(|p| p.name == "fileName").unwrap();
        assert_eq!(name.value, FormValue::Text("a.png".to_string()));
    }

    #[test]
    fn multipart_shape_rejects_non_objects() {
        let err = shape_body(json!([1, 2]), &EncodingDirectives::structured().multipart())
            .unwrap_err();
        assert!(matches!(err, GreenApiError::Serialization(_)));
    }
}
