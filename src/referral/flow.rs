use log::{error, info, warn};

use super::client::{ReferralError, ReferralTransport};
use super::form::{Field, FieldErrors, ReferralForm};
use super::models::{Course, ReferralRequest, ReferralResponse};

pub const SENT_MESSAGE: &str = "Your referral sent successfully";
pub const CHECK_INPUTS_MESSAGE: &str = "Check your inputs";
pub const FAILED_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the toaster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected(Option<String>),
    Failed,
}

impl Outcome {
    pub fn classify(result: &Result<ReferralResponse, ReferralError>) -> Outcome {
        match result {
            Ok(resp) if resp.is_accepted() => Outcome::Accepted,
            Ok(resp) => Outcome::Rejected(resp.message.clone().filter(|m| !m.trim().is_empty())),
            Err(_) => Outcome::Failed,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Outcome::Accepted => Notice::success(SENT_MESSAGE),
            Outcome::Rejected(Some(message)) => Notice::error(message.clone()),
            Outcome::Rejected(None) => Notice::error(CHECK_INPUTS_MESSAGE),
            Outcome::Failed => Notice::error(FAILED_MESSAGE),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitBlocked {
    /// A request is already outstanding.
    InProgress,
    Invalid(FieldErrors),
}

/// State of the refer-a-friend modal: visibility, form, and the in-progress flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferralFlow {
    visible: bool,
    in_progress: bool,
    form: ReferralForm,
}

impl ReferralFlow {
    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    pub fn form(&self) -> &ReferralForm {
        &self.form
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.form.reset();
        self.visible = false;
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        self.form.update_field(field, value);
    }

    pub fn update_courses<I>(&mut self, selection: I)
    where
        I: IntoIterator<Item = Course>,
    {
        self.form.update_courses(selection);
    }

    /// Validates and, when everything passes, raises the in-progress flag and hands back the body to send.
    pub fn begin_submit(&mut self) -> Result<ReferralRequest, SubmitBlocked> {
        if self.in_progress {
            return Err(SubmitBlocked::InProgress);
        }
        let request = self.form.validate().map_err(SubmitBlocked::Invalid)?;
        self.in_progress = true;
        Ok(request)
    }

    /// Ends a submission whatever happened on the wire: clears the flag, resets and closes.
    pub fn finish(&mut self, result: Result<ReferralResponse, ReferralError>) -> Notice {
        match &result {
            Ok(resp) if resp.is_accepted() => info!("Referral accepted"),
            Ok(_) => warn!("Referral rejected by backend"),
            Err(e) => error!("Referral failed: {}", e),
        }
        let outcome = Outcome::classify(&result);
        self.in_progress = false;
        self.close();
        outcome.notice()
    }

    /// One full attempt against `transport`. Returns `None` when nothing was sent.
    pub async fn submit<T>(&mut self, transport: &T) -> Option<Notice>
    where
        T: ReferralTransport + ?Sized,
    {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(blocked) => {
                info!("Referral not sent: {:?}", blocked);
                return None;
            }
        };
        let result = transport.send_referral(&request).await;
        Some(self.finish(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::cell::RefCell;

    enum Reply {
        Body(serde_json::Value),
        Down,
    }

    struct RecordingTransport {
        reply: Reply,
        sent: RefCell<Vec<serde_json::Value>>,
    }

    impl RecordingTransport {
        fn new(reply: Reply) -> Self {
            Self { reply, sent: RefCell::new(Vec::new()) }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl ReferralTransport for RecordingTransport {
        async fn send_referral(&self, request: &ReferralRequest) -> Result<ReferralResponse, ReferralError> {
            self.sent.borrow_mut().push(serde_json::to_value(request).unwrap());
            match &self.reply {
                Reply::Body(body) => Ok(serde_json::from_value(body.clone()).unwrap()),
                Reply::Down => Err(ReferralError::Request("connection refused".to_string())),
            }
        }
    }

    fn filled_flow() -> ReferralFlow {
        let mut flow = ReferralFlow::default();
        flow.open();
        flow.update_field(Field::ReferrerName, "Ada".to_string());
        flow.update_field(Field::ReferredName, "Grace".to_string());
        flow.update_field(Field::ReferredEmail, "grace@example.com".to_string());
        flow
    }

    fn assert_reset_and_closed(flow: &ReferralFlow) {
        assert!(!flow.is_open());
        assert!(!flow.in_progress());
        assert_eq!(flow.form(), &ReferralForm::default());
    }

    #[tokio::test]
    async fn empty_form_sends_nothing() {
        let transport = RecordingTransport::new(Reply::Body(json!({"status": true})));
        let mut flow = ReferralFlow::default();
        flow.open();

        assert_eq!(flow.submit(&transport).await, None);
        assert_eq!(transport.calls(), 0);
        assert!(flow.is_open());
        for field in Field::ALL {
            assert!(flow.form().errors().get(field).is_some_and(|m| !m.is_empty()));
        }
    }

    #[tokio::test]
    async fn malformed_email_sends_nothing() {
        let transport = RecordingTransport::new(Reply::Body(json!({"status": true})));
        let mut flow = filled_flow();
        flow.update_field(Field::ReferredEmail, "grace@example".to_string());

        assert_eq!(flow.submit(&transport).await, None);
        assert_eq!(transport.calls(), 0);
        assert_eq!(flow.form().errors().get(Field::ReferredEmail), Some("Invalid email address"));
    }

    #[tokio::test]
    async fn accepted_referral_notifies_success() {
        let transport = RecordingTransport::new(Reply::Body(json!({"status": true})));
        let mut flow = filled_flow();

        let notice = flow.submit(&transport).await;
        assert_eq!(notice, Some(Notice::success(SENT_MESSAGE)));
        assert_eq!(transport.calls(), 1);
        assert_reset_and_closed(&flow);
    }

    #[tokio::test]
    async fn rejected_referral_asks_to_check_inputs() {
        let transport = RecordingTransport::new(Reply::Body(json!({"status": false})));
        let mut flow = filled_flow();

        let notice = flow.submit(&transport).await;
        assert_eq!(notice, Some(Notice::error(CHECK_INPUTS_MESSAGE)));
        assert_reset_and_closed(&flow);
    }

    #[tokio::test]
    async fn rejection_message_from_backend_is_shown() {
        let transport = RecordingTransport::new(Reply::Body(json!({"status": false, "message": "Grace is already enrolled"})));
        let mut flow = filled_flow();

        let notice = flow.submit(&transport).await;
        assert_eq!(notice, Some(Notice::error("Grace is already enrolled")));
    }

    #[tokio::test]
    async fn transport_failure_notifies_generic_error() {
        let transport = RecordingTransport::new(Reply::Down);
        let mut flow = filled_flow();

        let notice = flow.submit(&transport).await;
        assert_eq!(notice, Some(Notice::error(FAILED_MESSAGE)));
        assert_eq!(transport.calls(), 1);
        assert_reset_and_closed(&flow);
    }

    #[tokio::test]
    async fn selected_courses_go_out_as_value_identifiers() {
        let transport = RecordingTransport::new(Reply::Body(json!({"status": true})));
        let mut flow = filled_flow();
        flow.update_courses([Course::Frontend, Course::DevOps]);

        flow.submit(&transport).await;
        let sent = transport.sent.borrow();
        assert_eq!(sent[0]["courses"], json!(["Frontend course", "DevOps course"]));
        assert_eq!(sent[0]["referredTo"], json!("Grace"));
    }

    #[test]
    fn close_discards_input() {
        let mut flow = filled_flow();
        flow.update_courses([Course::Web3]);
        flow.close();
        flow.open();

        assert!(flow.is_open());
        assert_eq!(flow.form(), &ReferralForm::default());
    }

    #[test]
    fn open_keeps_existing_input() {
        let mut flow = filled_flow();
        flow.open();
        assert_eq!(flow.form().referrer_name, "Ada");
    }

    #[test]
    fn second_submit_while_in_progress_is_blocked() {
        let mut flow = filled_flow();
        assert!(flow.begin_submit().is_ok());
        assert!(flow.in_progress());
        assert_eq!(flow.begin_submit(), Err(SubmitBlocked::InProgress));

        flow.finish(Ok(serde_json::from_value(json!({"status": true})).unwrap()));
        assert!(!flow.in_progress());
    }
}
