use crate::config::Endpoint;
use crate::translate::{FileUpload, TranslateError, TranslationService};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use url::Url;

/// `reqwest`-backed client for the translation service.
///
/// GET `{base}/languages.txt` serves the catalog; POST `{base}/translateFile`
/// accepts a multipart form with a binary `file` part and a `targetLanguage`
/// text part and responds with the translated text as plain text.
#[derive(Clone)]
pub struct HttpTranslationService {
    client: Client,
    base: Url,
}

impl HttpTranslationService {
    pub fn new(endpoint: &Endpoint) -> Self {
        Self {
            client: Client::new(),
            base: endpoint.url().clone(),
        }
    }

    async fn read_success_text(response: reqwest::Response) -> Result<String, TranslateError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranslateError::HttpStatus(status, body));
        }
        response.text().await.map_err(TranslateError::Http)
    }
}

impl TranslationService for HttpTranslationService {
    fn supported_languages(&self) -> BoxFuture<'_, Result<String, TranslateError>> {
        let this = self.clone();
        async move {
            let url = this.base.join("languages.txt")?;
            let response = this
                .client
                .get(url)
                .send()
                .await
                .map_err(TranslateError::Http)?;
            Self::read_success_text(response).await
        }
        .boxed()
    }

    fn translate_file(
        &self,
        file: FileUpload,
        target_language: String,
    ) -> BoxFuture<'_, Result<String, TranslateError>> {
        let this = self.clone();
        async move {
            let url = this.base.join("translateFile")?;

            let part = Part::bytes(file.bytes.to_vec()).file_name(file.name);
            let form = Form::new()
                .part("file", part)
                .text("targetLanguage", target_language);

            let response = this
                .client
                .post(url)
                .multipart(form)
                .send()
                .await
                .map_err(TranslateError::Http)?;
            Self::read_success_text(response).await
        }
        .boxed()
    }
}
