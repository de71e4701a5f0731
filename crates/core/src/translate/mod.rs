mod dummy;
mod http;

use bytes::Bytes;
use futures::future::BoxFuture;

pub use dummy::DummyTranslationService;
pub use http::HttpTranslationService;

/// A file picked by the user, held in memory for the duration of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub bytes: Bytes,
}

impl FileUpload {
    pub fn new<S: Into<String>, B: Into<Bytes>>(name: S, bytes: B) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Size of the file content in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http error {0}: {1}")]
    HttpStatus(u16, String),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// The remote translation service, seen through the two calls the workflow
/// needs: the supported-language catalog and the file translation itself.
pub trait TranslationService: Send + Sync {
    /// Fetches the raw newline-separated language catalog.
    fn supported_languages(&self) -> BoxFuture<'_, Result<String, TranslateError>>;

    /// Submits the file for translation into `target_language` and resolves
    /// to the translated text.
    fn translate_file(
        &self,
        file: FileUpload,
        target_language: String,
    ) -> BoxFuture<'_, Result<String, TranslateError>>;
}
