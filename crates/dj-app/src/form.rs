use std::time::Instant;
use log::{debug, warn};
use dj_core::{GenerationError, GenerationRequest};
use crate::clipboard::Clipboard;

pub const DEFAULT_RECORD_COUNT: u32 = 10;

const MSG_EMPTY_DESCRIPTION: &str = "Please enter a description for the JSON data.";
const MSG_INVALID_COUNT: &str = "Please enter a valid number of records greater than 0.";
const MSG_COPIED: &str = "JSON data copied to clipboard!";
const MSG_COPY_FAILED: &str = "Failed to copy JSON data. Please copy manually.";
const MSG_NOTHING_TO_COPY: &str = "No JSON data to copy.";
const MSG_UNEXPECTED: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    fn for_failure(err: &GenerationError) -> Self {
        let text = match err.detail() {
            Some(detail) => format!("Error: {detail}. Please try again with a clearer description."),
            None => MSG_UNEXPECTED.to_string(),
        };
        Self::new(NoticeKind::Error, text)
    }
}

/// How the last generation cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    Succeeded(String),
    Failed(GenerationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Loading { since: Instant },
    Settled {
        outcome: Outcome,
        notice: Option<Notice>,
    },
}

/// Form state and the event handlers that drive it.
///
/// Handlers never talk to the network: `on_generate_clicked` hands back a
/// validated request for the caller to dispatch, and the caller reports the
/// result through `on_generation_settled`.
#[derive(Debug)]
pub struct FormController {
    description: String,
    count_input: String,
    state: FormState,
}

impl Default for FormController {
    fn default() -> Self {
        Self {
            description: String::new(),
            count_input: DEFAULT_RECORD_COUNT.to_string(),
            state: FormState::Settled {
                outcome: Outcome::Idle,
                notice: None,
            },
        }
    }
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FormState::Loading { .. })
    }

    /// Text of the last successful generation, empty otherwise.
    pub fn result(&self) -> &str {
        match &self.state {
            FormState::Settled { outcome: Outcome::Succeeded(text), .. } => text,
            _ => "",
        }
    }

    pub fn last_error(&self) -> Option<&GenerationError> {
        match &self.state {
            FormState::Settled { outcome: Outcome::Failed(err), .. } => Some(err),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match &self.state {
            FormState::Settled { notice, .. } => notice.as_ref(),
            FormState::Loading { .. } => None,
        }
    }

    pub fn on_description_change(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    pub fn on_count_change(&mut self, text: impl Into<String>) {
        self.count_input = text.into();
    }

    /// Validate the form and, if it passes, enter `Loading` and return the
    /// request to send. Ignored while a call is already in flight.
    pub fn on_generate_clicked(&mut self) -> Option<GenerationRequest> {
        if self.is_loading() {
            debug!("Generate ignored while loading");
            return None;
        }

        if self.description.trim().is_empty() {
            self.show_notice(Notice::new(NoticeKind::Info, MSG_EMPTY_DESCRIPTION));
            return None;
        }

        let request = self
            .count_input
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|count| GenerationRequest::new(&self.description, count).ok());

        let Some(request) = request else {
            debug!("Rejected record count {:?}", self.count_input);
            self.count_input = DEFAULT_RECORD_COUNT.to_string();
            self.show_notice(Notice::new(NoticeKind::Info, MSG_INVALID_COUNT));
            return None;
        };

        self.state = FormState::Loading { since: Instant::now() };
        Some(request)
    }

    /// Apply the result of a generation call. Always applied, even if the
    /// call was superseded by a newer one.
    pub fn on_generation_settled(&mut self, result: Result<String, GenerationError>) {
        self.state = match result {
            Ok(text) => FormState::Settled {
                outcome: Outcome::Succeeded(text),
                notice: None,
            },
            Err(err) => {
                let notice = Notice::for_failure(&err);
                FormState::Settled {
                    outcome: Outcome::Failed(err),
                    notice: Some(notice),
                }
            }
        };
    }

    pub fn on_copy_clicked(&mut self, clipboard: &mut dyn Clipboard) {
        if self.is_loading() {
            return;
        }

        let notice = if self.result().is_empty() {
            Notice::new(NoticeKind::Info, MSG_NOTHING_TO_COPY)
        } else {
            match clipboard.write_text(self.result()) {
                Ok(()) => Notice::new(NoticeKind::Success, MSG_COPIED),
                Err(e) => {
                    warn!("Failed to copy text: {}", e);
                    Notice::new(NoticeKind::Error, MSG_COPY_FAILED)
                }
            }
        };
        self.show_notice(notice);
    }

    pub fn on_dismiss_notice(&mut self) {
        if let FormState::Settled { notice, .. } = &mut self.state {
            *notice = None;
        }
    }

    fn show_notice(&mut self, new_notice: Notice) {
        if let FormState::Settled { notice, .. } = &mut self.state {
            *notice = Some(new_notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use async_trait::async_trait;
    use dj_core::GenerationClient;
    use crate::error::AppError;
    use super::*;

    struct StubClient {
        reply: Result<String, GenerationError>,
        calls: Mutex<Vec<GenerationRequest>>,
    }

    impl StubClient {
        fn replying(reply: Result<String, GenerationError>) -> Self {
            Self { reply, calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<GenerationRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GenerationClient for StubClient {
        async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
            self.calls.lock().unwrap().push(request.clone());
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
        fail: bool,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), AppError> {
            if self.fail {
                return Err(AppError::Clipboard("denied".into()));
            }
            self.writes.push(text.to_string());
            Ok(())
        }
    }

    /// Drive one click through the client the way the app does.
    async fn click_generate(form: &mut FormController, client: &StubClient) {
        if let Some(request) = form.on_generate_clicked() {
            let result = client.generate(&request).await;
            form.on_generation_settled(result);
        }
    }

    fn filled(description: &str, count: &str) -> FormController {
        let mut form = FormController::new();
        form.on_description_change(description);
        form.on_count_change(count);
        form
    }

    #[test]
    fn test_defaults() {
        let form = FormController::new();
        assert_eq!(form.count_input(), "10");
        assert_eq!(form.result(), "");
        assert!(!form.is_loading());
        assert!(form.notice().is_none());
    }

    #[test]
    fn test_valid_click_enters_loading_with_cleared_result() {
        let mut form = filled("users", "2");
        form.on_generation_settled(Ok("[old]".into()));
        assert_eq!(form.result(), "[old]");

        let request = form.on_generate_clicked().unwrap();
        assert_eq!(request.count(), 2);
        assert!(form.is_loading());
        assert_eq!(form.result(), "");
        assert!(form.notice().is_none());
    }

    #[tokio::test]
    async fn test_invalid_counts_never_call_client() {
        for count in ["0", "-3", "abc", "", "2.5"] {
            let client = StubClient::replying(Ok("[]".into()));
            let mut form = filled("users", count);

            click_generate(&mut form, &client).await;

            assert!(client.calls().is_empty(), "count {count:?} reached the client");
            assert_eq!(form.count_input(), "10");
            assert!(!form.is_loading());
            assert_eq!(form.notice().unwrap().text, MSG_INVALID_COUNT);
        }
    }

    #[tokio::test]
    async fn test_blank_description_never_calls_client() {
        let client = StubClient::replying(Ok("[]".into()));
        let mut form = filled("  \n\t", "5");

        click_generate(&mut form, &client).await;

        assert!(client.calls().is_empty());
        assert_eq!(form.count_input(), "5");
        assert_eq!(form.notice().unwrap().text, MSG_EMPTY_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_success_stores_text_exactly() {
        let records = r#"[{"id":1,"name":"Ann"},{"id":2,"name":"Bo"},{"id":3,"name":"Cy"}]"#;
        let client = StubClient::replying(Ok(records.into()));
        let mut form = filled("id: integer, name: string", "3");

        click_generate(&mut form, &client).await;

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].count(), 3);
        assert_eq!(calls[0].description(), "id: integer, name: string");
        assert_eq!(form.result(), records);
        assert!(!form.is_loading());
        assert!(form.notice().is_none());
    }

    #[tokio::test]
    async fn test_untrimmed_output_is_kept() {
        let client = StubClient::replying(Ok("  ```json\n[1]\n```  ".into()));
        let mut form = filled("numbers", "1");

        click_generate(&mut form, &client).await;

        assert_eq!(form.result(), "  ```json\n[1]\n```  ");
    }

    #[tokio::test]
    async fn test_failure_shows_message_and_keeps_result_cleared() {
        let client = StubClient::replying(Err(GenerationError::Service {
            status: 429,
            message: "Resource has been exhausted".into(),
        }));
        let mut form = filled("users", "4");
        form.on_generation_settled(Ok("[previous]".into()));

        click_generate(&mut form, &client).await;

        assert!(!form.is_loading());
        assert_eq!(form.result(), "");
        let notice = form.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("Resource has been exhausted"));
        assert_eq!(form.last_error().map(|e| e.kind()), Some(dj_core::ErrorKind::Service));
    }

    #[tokio::test]
    async fn test_failure_without_detail_uses_generic_notice() {
        let client = StubClient::replying(Err(GenerationError::Transport(String::new())));
        let mut form = filled("users", "4");

        click_generate(&mut form, &client).await;

        assert_eq!(form.notice().unwrap().text, MSG_UNEXPECTED);
    }

    #[test]
    fn test_click_while_loading_is_ignored() {
        let mut form = filled("users", "4");
        assert!(form.on_generate_clicked().is_some());
        assert!(form.on_generate_clicked().is_none());
        assert!(form.is_loading());
    }

    #[test]
    fn test_late_result_overwrites_state() {
        let mut form = filled("users", "4");
        form.on_generate_clicked().unwrap();
        form.on_generation_settled(Ok("[second]".into()));

        // A slower, earlier call settling afterwards still wins.
        form.on_generation_settled(Err(GenerationError::Transport("timed out".into())));
        assert_eq!(form.result(), "");
        assert!(form.notice().unwrap().text.contains("timed out"));
    }

    #[test]
    fn test_copy_with_empty_result_writes_nothing() {
        let mut form = FormController::new();
        let mut clipboard = RecordingClipboard::default();

        form.on_copy_clicked(&mut clipboard);

        assert!(clipboard.writes.is_empty());
        assert_eq!(form.notice().unwrap().text, MSG_NOTHING_TO_COPY);
    }

    #[test]
    fn test_copy_writes_result_once() {
        let mut form = FormController::new();
        form.on_generation_settled(Ok("[{\"a\":1}]".into()));
        let mut clipboard = RecordingClipboard::default();

        form.on_copy_clicked(&mut clipboard);

        assert_eq!(clipboard.writes, vec!["[{\"a\":1}]".to_string()]);
        let notice = form.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, MSG_COPIED);
    }

    #[test]
    fn test_copy_failure_shows_notice() {
        let mut form = FormController::new();
        form.on_generation_settled(Ok("[1]".into()));
        let mut clipboard = RecordingClipboard { fail: true, ..Default::default() };

        form.on_copy_clicked(&mut clipboard);

        assert_eq!(form.notice().unwrap().text, MSG_COPY_FAILED);
        assert_eq!(form.result(), "[1]");
    }

    #[test]
    fn test_dismiss_clears_notice_only() {
        let mut form = FormController::new();
        form.on_generation_settled(Ok("[1]".into()));
        form.on_copy_clicked(&mut RecordingClipboard::default());
        assert!(form.notice().is_some());

        form.on_dismiss_notice();

        assert!(form.notice().is_none());
        assert_eq!(form.result(), "[1]");
    }
}
