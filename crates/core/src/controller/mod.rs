use crate::catalog::{parse_language_list, PLACEHOLDER_LANGUAGE};
use crate::surface::ContentRenderer;
use crate::translate::{FileUpload, TranslationService};

pub const SECTION_REGION: &str = "section";
pub const ARTICLE_REGION: &str = "article";
pub const RESULTS_REGION: &str = "results";

const FILE_INFO_SUBTITLE: &str = "Selected file:";
const SUCCESS_SUBTITLE: &str = "Your file has been translated correctly";
const FAILURE_SUBTITLE: &str =
    "There has been an issue while carrying out the file's translation.";
const RESULT_ELEMENT_TAG: &str = "textarea";

/// The user's current inputs: the picked file and the chosen target language.
/// Mutated only through the controller's event entry points.
#[derive(Clone, Debug, Default)]
pub struct UploadSelection {
    pub selected_file: Option<FileUpload>,
    pub selected_language: Option<String>,
}

/// Owns the upload/translate workflow: populates the language choices, gates
/// submit-readiness, builds the outbound request, and renders the outcome.
///
/// The renderer is injected at construction and is the controller's only way
/// to touch the display surface. `submit` takes `&mut self`, so at most one
/// request is in flight at a time.
pub struct TranslationController<S> {
    service: S,
    renderer: ContentRenderer,
    languages: Vec<String>,
    selection: UploadSelection,
    submit_enabled: bool,
}

impl<S: TranslationService> TranslationController<S> {
    pub fn new(service: S, renderer: ContentRenderer) -> Self {
        Self {
            service,
            renderer,
            languages: vec![PLACEHOLDER_LANGUAGE.to_owned()],
            selection: UploadSelection::default(),
            submit_enabled: false,
        }
    }

    /// Options of the language control, placeholder first.
    pub fn language_options(&self) -> &[String] {
        &self.languages
    }

    pub fn selection(&self) -> &UploadSelection {
        &self.selection
    }

    /// Whether the submit control is currently enabled.
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn renderer(&self) -> &ContentRenderer {
        &self.renderer
    }

    /// Fetches the supported-language catalog once at startup and appends
    /// each entry after the placeholder, preserving source order. A failed
    /// fetch is logged and leaves the control with only the placeholder;
    /// there is no retry.
    pub async fn load_languages(&mut self) {
        match self.service.supported_languages().await {
            Ok(raw) => {
                self.languages.extend(parse_language_list(&raw));
                tracing::debug!(
                    count = self.languages.len() - 1,
                    "language catalog loaded"
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not fetch supported languages");
            }
        }
    }

    /// File-selection change event.
    pub fn select_file(&mut self, file: Option<FileUpload>) {
        self.selection.selected_file = file;
        self.evaluate_readiness();
    }

    /// Language-selection change event. Choosing the placeholder value
    /// clears the language choice.
    pub fn select_language(&mut self, value: &str) {
        self.selection.selected_language = if value == PLACEHOLDER_LANGUAGE {
            None
        } else {
            Some(value.to_owned())
        };
        self.evaluate_readiness();
    }

    /// Recomputes the submission invariant against the current selection:
    /// submit is enabled iff a file is picked and a non-placeholder language
    /// is chosen.
    pub fn evaluate_readiness(&mut self) {
        self.submit_enabled = self.selection.selected_file.is_some()
            && self
                .selection
                .selected_language
                .as_deref()
                .is_some_and(|lang| lang != PLACEHOLDER_LANGUAGE);
    }

    /// Renders the selected file's byte size into the "article" region,
    /// replacing prior status output. No-op when no file is selected.
    pub fn describe_selection(&mut self) {
        let Some(file) = &self.selection.selected_file else {
            return;
        };
        let size = file.size();
        self.renderer.clear(SECTION_REGION);
        self.renderer.clear(ARTICLE_REGION);
        self.renderer.append_subtitle(ARTICLE_REGION, FILE_INFO_SUBTITLE);
        self.renderer
            .append_paragraph(ARTICLE_REGION, &format!("File size: {size} bytes"));
    }

    /// Submits the selected file for translation and renders the outcome.
    ///
    /// Without a file this clears stale output and dispatches nothing. A
    /// settled dispatch renders either the translated text into "section" or
    /// a failure notice into "results"; the underlying error is logged, never
    /// rendered. Every path returns the controller to idle.
    pub async fn submit(&mut self) {
        let Some(file) = self.selection.selected_file.clone() else {
            self.renderer.clear(ARTICLE_REGION);
            self.renderer.clear(SECTION_REGION);
            return;
        };

        // The raw control value: the placeholder when nothing is chosen.
        let target_language = self
            .selection
            .selected_language
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_LANGUAGE.to_owned());

        match self.service.translate_file(file, target_language).await {
            Ok(text) => {
                self.renderer.clear(SECTION_REGION);
                self.renderer.append_subtitle(SECTION_REGION, SUCCESS_SUBTITLE);
                self.renderer.create_element(SECTION_REGION, RESULT_ELEMENT_TAG);
                self.renderer.fill_last_element(SECTION_REGION, &text);
            }
            Err(e) => {
                self.renderer.prepend_subtitle(RESULTS_REGION, FAILURE_SUBTITLE);
                tracing::error!(error = %e, "translation request failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Fragment, Surface};
    use crate::translate::TranslateError;
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct RecordingService {
        catalog: Arc<Mutex<Result<String, ()>>>,
        response: Arc<Mutex<Result<String, ()>>>,
        dispatches: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<(FileUpload, String)>>>,
    }

    impl RecordingService {
        fn with_catalog(raw: &str) -> Self {
            let service = Self::default();
            *service.catalog.lock().unwrap() = Ok(raw.to_owned());
            service
        }

        fn with_response(text: &str) -> Self {
            let service = Self::default();
            *service.response.lock().unwrap() = Ok(text.to_owned());
            service
        }

        fn failing() -> Self {
            Self::default()
        }
    }

    impl Default for RecordingService {
        fn default() -> Self {
            Self {
                catalog: Arc::new(Mutex::new(Err(()))),
                response: Arc::new(Mutex::new(Err(()))),
                dispatches: Arc::new(AtomicUsize::new(0)),
                last_request: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl TranslationService for RecordingService {
        fn supported_languages(&self) -> BoxFuture<'_, Result<String, TranslateError>> {
            let result = self.catalog.lock().unwrap().clone();
            async move {
                result.map_err(|_| TranslateError::HttpStatus(503, "unavailable".into()))
            }
            .boxed()
        }

        fn translate_file(
            &self,
            file: FileUpload,
            target_language: String,
        ) -> BoxFuture<'_, Result<String, TranslateError>> {
            self.dispatches.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some((file, target_language));
            let result = self.response.lock().unwrap().clone();
            async move {
                result.map_err(|_| TranslateError::HttpStatus(500, "translation failed".into()))
            }
            .boxed()
        }
    }

    fn controller(service: RecordingService) -> TranslationController<RecordingService> {
        let surface = Surface::with_regions(&[SECTION_REGION, ARTICLE_REGION, RESULTS_REGION]);
        TranslationController::new(service, ContentRenderer::new(surface))
    }

    fn sample_file() -> FileUpload {
        FileUpload::new("messages.properties", &b"greeting = Hello"[..])
    }

    #[test]
    fn readiness_requires_file_and_real_language() {
        let mut c = controller(RecordingService::default());
        assert!(!c.submit_enabled());

        c.select_file(Some(sample_file()));
        assert!(!c.submit_enabled());

        c.select_language("fr");
        assert!(c.submit_enabled());

        c.select_language(PLACEHOLDER_LANGUAGE);
        assert!(!c.submit_enabled());

        c.select_language("fr");
        c.select_file(None);
        assert!(!c.submit_enabled());
    }

    #[test]
    fn readiness_is_idempotent() {
        let mut c = controller(RecordingService::default());
        c.select_file(Some(sample_file()));
        c.select_language("fr");

        c.evaluate_readiness();
        assert!(c.submit_enabled());
        c.evaluate_readiness();
        assert!(c.submit_enabled());
    }

    #[tokio::test]
    async fn load_languages_appends_options_after_placeholder() {
        let mut c = controller(RecordingService::with_catalog("en\nfr\n\nde\n"));
        c.load_languages().await;

        assert_eq!(
            c.language_options(),
            [PLACEHOLDER_LANGUAGE, "en", "fr", "de"]
        );
    }

    #[tokio::test]
    async fn load_languages_failure_leaves_placeholder_only() {
        let mut c = controller(RecordingService::failing());
        c.load_languages().await;

        assert_eq!(c.language_options(), [PLACEHOLDER_LANGUAGE]);
    }

    #[tokio::test]
    async fn submit_without_file_clears_output_and_skips_dispatch() {
        let service = RecordingService::with_response("Bonjour");
        let mut c = controller(service.clone());
        c.renderer.append_paragraph(SECTION_REGION, "stale");
        c.renderer.append_paragraph(ARTICLE_REGION, "stale");

        c.submit().await;

        assert_eq!(service.dispatches.load(Ordering::SeqCst), 0);
        assert!(c.renderer().surface().region(SECTION_REGION).unwrap().is_empty());
        assert!(c.renderer().surface().region(ARTICLE_REGION).unwrap().is_empty());
    }

    #[tokio::test]
    async fn submit_dispatches_file_and_target_language_once() {
        let service = RecordingService::with_response("Bonjour");
        let mut c = controller(service.clone());
        c.select_file(Some(sample_file()));
        c.select_language("fr");

        c.submit().await;

        assert_eq!(service.dispatches.load(Ordering::SeqCst), 1);
        let (file, target) = service.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(file, sample_file());
        assert_eq!(target, "fr");
    }

    #[tokio::test]
    async fn successful_submit_renders_translated_text_in_section() {
        let mut c = controller(RecordingService::with_response("Bonjour"));
        c.select_file(Some(sample_file()));
        c.select_language("fr");

        c.submit().await;

        assert_eq!(
            c.renderer().surface().region(SECTION_REGION).unwrap(),
            [
                Fragment::Subtitle(SUCCESS_SUBTITLE.into()),
                Fragment::Element {
                    tag: RESULT_ELEMENT_TAG.into(),
                    text: "Bonjour".into(),
                },
            ]
        );
        assert!(c.renderer().surface().region(RESULTS_REGION).unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_submit_renders_only_the_failure_notice() {
        let mut c = controller(RecordingService::failing());
        c.select_file(Some(sample_file()));
        c.select_language("fr");

        c.submit().await;

        assert_eq!(
            c.renderer().surface().region(RESULTS_REGION).unwrap(),
            [Fragment::Subtitle(FAILURE_SUBTITLE.into())]
        );
        assert!(c.renderer().surface().region(SECTION_REGION).unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_submit_leaves_controller_ready_for_another_attempt() {
        let service = RecordingService::failing();
        let mut c = controller(service.clone());
        c.select_file(Some(sample_file()));
        c.select_language("fr");

        c.submit().await;
        assert!(c.submit_enabled());

        *service.response.lock().unwrap() = Ok("Bonjour".to_owned());
        c.submit().await;

        assert_eq!(service.dispatches.load(Ordering::SeqCst), 2);
        let section = c.renderer().surface().region(SECTION_REGION).unwrap();
        assert_eq!(section[0], Fragment::Subtitle(SUCCESS_SUBTITLE.into()));
    }

    #[test]
    fn describe_selection_shows_byte_size() {
        let mut c = controller(RecordingService::default());
        c.select_file(Some(sample_file()));
        c.describe_selection();

        assert_eq!(
            c.renderer().surface().region(ARTICLE_REGION).unwrap(),
            [
                Fragment::Subtitle(FILE_INFO_SUBTITLE.into()),
                Fragment::Paragraph("File size: 16 bytes".into()),
            ]
        );
    }

    #[test]
    fn describe_selection_without_file_renders_nothing() {
        let mut c = controller(RecordingService::default());
        c.describe_selection();

        assert!(c.renderer().surface().region(ARTICLE_REGION).unwrap().is_empty());
    }
}
