//! Consultation booking: the draft request typed into the contact form, its
//! presence validation and the WhatsApp hand-off built from it.

use std::collections::BTreeMap;

use chrono::Utc;
use log::{debug, info, warn};

use crate::config;

pub const GREETING: &str = "Ola Zander! Gostaria de agendar uma consulta.";
pub const NO_MESSAGE_PLACEHOLDER: &str = "Sem mensagem adicional";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Message,
}

impl Field {
    pub const REQUIRED: [Field; 5] = [Field::Name, Field::Email, Field::Phone, Field::Date, Field::Time];

    /// The `name` attribute of the matching form control.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "nome",
            Field::Email => "email",
            Field::Phone => "telefone",
            Field::Date => "data",
            Field::Time => "hora",
            Field::Message => "mensagem",
        }
    }

    // Date and time come from native pickers, so only the free-text
    // fields are trimmed before the presence check.
    fn is_blank(self, value: &str) -> bool {
        match self {
            Field::Date | Field::Time => value.is_empty(),
            _ => value.trim().is_empty(),
        }
    }

    /// `None` for the optional message, which can never be missing.
    fn required_message(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("Nome e obrigatorio"),
            Field::Email => Some("Email e obrigatorio"),
            Field::Phone => Some("Telefone e obrigatorio"),
            Field::Date => Some("Data e obrigatoria"),
            Field::Time => Some("Hora e obrigatoria"),
            Field::Message => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("{message}")]
    RequiredFieldMissing { field: Field, message: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OpenError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("popup was blocked")]
    Blocked,
    #[error("window.open failed: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub message: String,
}

impl BookingRequest {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Presence check only. Email, phone, date and time formats are whatever
    /// the browser controls accept.
    pub fn validate(&self) -> Result<(), Vec<BookingError>> {
        let missing: Vec<BookingError> = Field::REQUIRED
            .iter()
            .copied()
            .filter(|field| field.is_blank(self.get(*field)))
            .filter_map(|field| {
                field
                    .required_message()
                    .map(|message| BookingError::RequiredFieldMissing { field, message })
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    pub fn whatsapp_message(&self) -> String {
        let note = if self.message.is_empty() {
            NO_MESSAGE_PLACEHOLDER
        } else {
            self.message.as_str()
        };
        format!(
            "{}\n\nNome: {}\nEmail: {}\nTelefone: {}\nData desejada: {}\nHora desejada: {}\n\nMensagem: {}",
            GREETING, self.name, self.email, self.phone, self.date, self.time, note
        )
    }

    pub fn whatsapp_url(&self) -> String {
        whatsapp_url_with_text(&self.whatsapp_message())
    }
}

fn whatsapp_url_with_text(text: &str) -> String {
    format!("{}?text={}", config::whatsapp_base_url(), urlencoding::encode(text))
}

/// Deep link used by the floating button and the "Ajuda Profissional" CTA.
pub fn greeting_url() -> String {
    whatsapp_url_with_text(GREETING)
}

/// Field-level error messages shown next to the offending control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
    fn from_errors(errors: &[BookingError]) -> Self {
        let map = errors
            .iter()
            .map(|err| match err {
                BookingError::RequiredFieldMissing { field, .. } => (*field, err.to_string()),
            })
            .collect();
        FormErrors(map)
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn clear_field(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }
}

/// Capability to hand a URL to the platform. Swapped for a recorder in tests.
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenError>;
}

/// Opens the URL in a new browsing context through `window.open`.
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open(&self, url: &str) -> Result<(), OpenError> {
        let window = web_sys::window().ok_or(OpenError::NoWindow)?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(OpenError::Blocked),
            Err(e) => Err(OpenError::Rejected(format!("{:?}", e))),
        }
    }
}

pub trait Clock {
    fn now_ms(&self) -> i64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Sent { url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Hidden,
    Visible { remaining_ms: u32 },
}

/// In-memory state behind the contact form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    request: BookingRequest,
    errors: FormErrors,
    success_shown_at: Option<i64>,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_success_shown(&self) -> bool {
        self.success_shown_at.is_some()
    }

    /// Stores the value verbatim and drops any error for that field without
    /// re-validating it.
    pub fn update_field(&mut self, field: Field, value: String) {
        self.request.set(field, value);
        if self.errors.clear_field(field) {
            debug!("Cleared error for {}", field.input_name());
        }
    }

    pub fn reset(&mut self) {
        self.request = BookingRequest::default();
        self.errors = FormErrors::default();
    }

    pub fn submit(&mut self, opener: &dyn UrlOpener, clock: &dyn Clock) -> SubmitOutcome {
        self.errors = match self.request.validate() {
            Ok(()) => FormErrors::default(),
            Err(missing) => FormErrors::from_errors(&missing),
        };
        if !self.errors.is_empty() {
            info!("Booking form rejected, {} required field(s) missing", self.errors.len());
            return SubmitOutcome::Rejected;
        }

        let url = self.request.whatsapp_url();
        if let Err(e) = opener.open(&url) {
            warn!("Could not open WhatsApp link: {}", e);
        }

        info!("Booking form sent to WhatsApp");
        self.request = BookingRequest::default();
        // A new submission restarts the banner delay.
        self.success_shown_at = Some(clock.now_ms());
        SubmitOutcome::Sent { url }
    }

    /// Hides the success banner once its delay has elapsed and reports how
    /// long it still has to stay up otherwise.
    pub fn tick_banner(&mut self, clock: &dyn Clock) -> Banner {
        let Some(shown_at) = self.success_shown_at else {
            return Banner::Hidden;
        };
        let elapsed = clock.now_ms().saturating_sub(shown_at).max(0);
        let delay = i64::from(config::SUCCESS_BANNER_MS);
        if elapsed >= delay {
            self.success_shown_at = None;
            Banner::Hidden
        } else {
            Banner::Visible {
                remaining_ms: (delay - elapsed) as u32,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), OpenError> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct BlockedOpener;

    impl UrlOpener for BlockedOpener {
        fn open(&self, _url: &str) -> Result<(), OpenError> {
            Err(OpenError::Blocked)
        }
    }

    struct ManualClock(Cell<i64>);

    impl ManualClock {
        fn at(ms: i64) -> Self {
            ManualClock(Cell::new(ms))
        }

        fn advance(&self, ms: i64) {
            self.0.set(self.0.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> i64 {
            self.0.get()
        }
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.update_field(Field::Name, "Ana".to_string());
        form.update_field(Field::Email, "a@b.com".to_string());
        form.update_field(Field::Phone, "21999999999".to_string());
        form.update_field(Field::Date, "2025-03-01".to_string());
        form.update_field(Field::Time, "14:00".to_string());
        form
    }

    fn decoded_text(url: &str) -> String {
        let (base, text) = url.split_once("?text=").expect("url has a text parameter");
        assert_eq!(base, "https://wa.me/5521972560779");
        urlencoding::decode(text).expect("valid utf-8").into_owned()
    }

    #[test]
    fn empty_submit_reports_five_errors_and_opens_nothing() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(0);
        let mut form = BookingForm::new();

        assert_eq!(form.submit(&opener, &clock), SubmitOutcome::Rejected);

        assert_eq!(form.errors().len(), 5);
        assert!(!form.errors().contains(Field::Message));
        assert_eq!(form.errors().get(Field::Name), Some("Nome e obrigatorio"));
        assert_eq!(form.errors().get(Field::Date), Some("Data e obrigatoria"));
        assert_eq!(form.errors().get(Field::Time), Some("Hora e obrigatoria"));
        assert!(opener.opened.borrow().is_empty());
        assert!(!form.is_success_shown());
    }

    #[test]
    fn valid_submit_opens_encoded_link_with_placeholder_message() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(1_000);
        let mut form = filled_form();

        let outcome = form.submit(&opener, &clock);

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(outcome, SubmitOutcome::Sent { url: opened[0].clone() });
        assert!(!opened[0].contains(' '));
        assert!(opened[0].contains("a%40b.com"));

        let text = decoded_text(&opened[0]);
        assert!(text.starts_with(GREETING));
        for line in [
            "Nome: Ana",
            "Email: a@b.com",
            "Telefone: 21999999999",
            "Data desejada: 2025-03-01",
            "Hora desejada: 14:00",
            "Mensagem: Sem mensagem adicional",
        ] {
            assert!(text.contains(line), "missing {:?} in {:?}", line, text);
        }
        assert!(form.errors().is_empty());
        assert!(form.is_success_shown());
    }

    #[test]
    fn custom_message_replaces_placeholder() {
        let mut request = filled_form().request().clone();
        request.message = "Preciso de ajuda & orientação".to_string();

        let text = decoded_text(&request.whatsapp_url());

        assert!(text.ends_with("Mensagem: Preciso de ajuda & orientação"));
        assert!(!text.contains(NO_MESSAGE_PLACEHOLDER));
    }

    #[test]
    fn successful_submit_resets_every_field() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(0);
        let mut form = filled_form();
        form.update_field(Field::Message, "oi".to_string());

        form.submit(&opener, &clock);

        assert_eq!(form.request(), &BookingRequest::default());
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(0);
        let mut form = BookingForm::new();
        form.submit(&opener, &clock);

        form.update_field(Field::Email, "x".to_string());

        assert!(!form.errors().contains(Field::Email));
        assert_eq!(form.errors().len(), 4);
        assert!(form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Time));
    }

    #[test]
    fn clearing_is_optimistic_not_revalidation() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(0);
        let mut form = BookingForm::new();
        form.submit(&opener, &clock);

        form.update_field(Field::Name, "   ".to_string());

        assert!(!form.errors().contains(Field::Name));
    }

    #[test]
    fn whitespace_counts_as_blank_only_for_text_fields() {
        let mut request = BookingRequest {
            name: "  ".to_string(),
            email: "\t".to_string(),
            phone: " ".to_string(),
            date: " ".to_string(),
            time: " ".to_string(),
            message: String::new(),
        };

        let missing: Vec<Field> = request
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|BookingError::RequiredFieldMissing { field, .. }| field)
            .collect();
        assert_eq!(missing, vec![Field::Name, Field::Email, Field::Phone]);

        request.name = "Ana".to_string();
        request.email = "not an email".to_string();
        request.phone = "abc".to_string();
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn blocked_popup_still_counts_as_sent() {
        let clock = ManualClock::at(0);
        let mut form = filled_form();

        let outcome = form.submit(&BlockedOpener, &clock);

        assert!(matches!(outcome, SubmitOutcome::Sent { .. }));
        assert!(form.is_success_shown());
        assert_eq!(form.request(), &BookingRequest::default());
    }

    #[test]
    fn banner_clears_after_fixed_delay() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(10_000);
        let mut form = filled_form();
        form.submit(&opener, &clock);

        clock.advance(4_999);
        assert_eq!(form.tick_banner(&clock), Banner::Visible { remaining_ms: 1 });
        assert!(form.is_success_shown());

        clock.advance(1);
        assert_eq!(form.tick_banner(&clock), Banner::Hidden);
        assert!(!form.is_success_shown());
    }

    #[test]
    fn resubmitting_restarts_the_banner_delay() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(0);
        let mut form = filled_form();
        form.submit(&opener, &clock);

        clock.advance(3_000);
        form.update_field(Field::Name, "Bia".to_string());
        form.update_field(Field::Email, "b@c.com".to_string());
        form.update_field(Field::Phone, "21988887777".to_string());
        form.update_field(Field::Date, "2025-04-02".to_string());
        form.update_field(Field::Time, "09:30".to_string());
        form.submit(&opener, &clock);

        clock.advance(3_000);
        assert_eq!(form.tick_banner(&clock), Banner::Visible { remaining_ms: 2_000 });

        clock.advance(2_000);
        assert_eq!(form.tick_banner(&clock), Banner::Hidden);
        assert_eq!(opener.opened.borrow().len(), 2);
    }

    #[test]
    fn reset_clears_fields_and_errors_but_keeps_banner() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(0);
        let mut form = filled_form();
        form.submit(&opener, &clock);
        form.update_field(Field::Name, "Ana".to_string());
        form.submit(&opener, &clock);
        assert!(!form.errors().is_empty());

        form.reset();

        assert!(form.errors().is_empty());
        assert_eq!(form.request(), &BookingRequest::default());
        assert!(form.is_success_shown());
    }

    #[test]
    fn greeting_link_decodes_to_fixed_text() {
        assert_eq!(decoded_text(&greeting_url()), GREETING);
    }

    #[test]
    fn input_names_are_distinct() {
        let names: BTreeSet<&str> = Field::REQUIRED
            .iter()
            .copied()
            .chain([Field::Message])
            .map(Field::input_name)
            .collect();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn only_required_fields_have_a_missing_message() {
        for field in Field::REQUIRED {
            assert!(field.required_message().is_some(), "{:?}", field);
        }
        assert_eq!(Field::Message.required_message(), None);
    }

    #[test]
    fn rejection_follows_the_error_set() {
        let opener = RecordingOpener::default();
        let clock = ManualClock::at(0);
        let mut form = filled_form();
        form.update_field(Field::Time, String::new());

        assert_eq!(form.submit(&opener, &clock), SubmitOutcome::Rejected);
        assert!(!form.errors().is_empty());
        assert!(form.errors().contains(Field::Time));
        assert!(!form.errors().contains(Field::Date));

        form.update_field(Field::Time, "09:30".to_string());
        assert!(form.errors().is_empty());
        assert!(matches!(form.submit(&opener, &clock), SubmitOutcome::Sent { .. }));
        assert!(form.errors().is_empty());
    }
}
