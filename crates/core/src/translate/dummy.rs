use crate::translate::{FileUpload, TranslateError, TranslationService};
use futures::future::BoxFuture;
use futures::FutureExt;

/// Offline stand-in for the remote service: serves a fixed catalog and
/// echoes the uploaded file content back as the "translation".
#[derive(Clone)]
pub struct DummyTranslationService;

impl DummyTranslationService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyTranslationService {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationService for DummyTranslationService {
    fn supported_languages(&self) -> BoxFuture<'_, Result<String, TranslateError>> {
        async { Ok("English\nSpanish\nFrench\n".to_owned()) }.boxed()
    }

    fn translate_file(
        &self,
        file: FileUpload,
        _target_language: String,
    ) -> BoxFuture<'_, Result<String, TranslateError>> {
        async move { Ok(String::from_utf8_lossy(&file.bytes).into_owned()) }.boxed()
    }
}
