//! Editable input forms. Each view with inputs owns one form, keyed by
//! [`FormId`]; the shell routes keystrokes to the focused field.

use crate::mock_data::{admin, extension, government, ngo, startup, Choice};
use crate::types::{Language, Role, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormId {
    ChatInput,
    ImagePath,
    PhoneNumber,
    FarmerFeedback,
    QueryResponse,
    RegionalAlert,
    TrainingUpload,
    StateFilter,
    Advisory,
    Program,
    Distribution,
    Integration,
    Announcement,
}

impl FormId {
    /// Notification raised after a successful submit, for forms whose
    /// submit only acknowledges.
    pub fn success_key(self) -> Option<&'static str> {
        match self {
            FormId::FarmerFeedback => Some("notify.feedback_thanks"),
            FormId::QueryResponse => Some("notify.response_sent"),
            FormId::RegionalAlert => Some("notify.alert_sent"),
            FormId::TrainingUpload => Some("notify.material_uploaded"),
            FormId::Advisory => Some("notify.advisory_published"),
            FormId::Program => Some("notify.program_scheduled"),
            FormId::Distribution => Some("notify.distribution_scheduled"),
            FormId::Integration => Some("notify.integration_saved"),
            FormId::Announcement => Some("notify.announcement_published"),
            FormId::ChatInput | FormId::ImagePath | FormId::PhoneNumber | FormId::StateFilter => None,
        }
    }
}

/// The form a role shows on a tab, if any.
pub fn form_for(role: Role, tab: Tab) -> Option<FormId> {
    if tab == Tab::Profile {
        return Some(FormId::PhoneNumber);
    }
    match (role, tab) {
        (Role::Farmer, Tab::Analysis) => Some(FormId::ImagePath),
        (Role::Farmer, Tab::Chatbot) => Some(FormId::ChatInput),
        (Role::Farmer, Tab::Feedback) => Some(FormId::FarmerFeedback),
        (Role::ExtensionOfficer, Tab::Monitoring) => Some(FormId::QueryResponse),
        (Role::ExtensionOfficer, Tab::Alerts) => Some(FormId::RegionalAlert),
        (Role::ExtensionOfficer, Tab::Training) => Some(FormId::TrainingUpload),
        (Role::Government, Tab::Analytics) => Some(FormId::StateFilter),
        (Role::Government, Tab::Advisories) => Some(FormId::Advisory),
        (Role::Ngo, Tab::Programs) => Some(FormId::Program),
        (Role::Ngo, Tab::Resources) => Some(FormId::Distribution),
        (Role::Startup, Tab::Integration) => Some(FormId::Integration),
        (Role::Startup, Tab::Testing) => Some(FormId::ImagePath),
        (Role::Admin, Tab::Users) => Some(FormId::Announcement),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice(&'static [Choice]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label_key: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub selected: usize,
    pub required: bool,
    pub secret: bool,
}

impl FormField {
    fn text(label_key: &'static str, required: bool) -> Self {
        Self {
            label_key,
            kind: FieldKind::Text,
            value: String::new(),
            selected: 0,
            required,
            secret: false,
        }
    }

    fn choice(label_key: &'static str, options: &'static [Choice]) -> Self {
        Self {
            kind: FieldKind::Choice(options),
            ..Self::text(label_key, false)
        }
    }

    fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// Submitted value: the typed text, or the selected option's value.
    pub fn value(&self) -> &str {
        match self.kind {
            FieldKind::Text => self.value.as_str(),
            FieldKind::Choice(options) => options.get(self.selected).map(|c| c.value).unwrap_or(""),
        }
    }

    /// What the field shows in the given language.
    pub fn display(&self, language: Language) -> String {
        match self.kind {
            FieldKind::Text if self.secret => "•".repeat(self.value.chars().count()),
            FieldKind::Text => self.value.clone(),
            FieldKind::Choice(options) => options
                .get(self.selected)
                .map(|c| format!("◂ {} ▸", c.label.get(language)))
                .unwrap_or_default(),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, FieldKind::Text) && self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub id: FormId,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Form {
    pub fn new(id: FormId) -> Self {
        let fields = match id {
            FormId::ChatInput => vec![FormField::text("farmer.ask_question", true)],
            FormId::ImagePath => vec![FormField::text("farmer.image_path", true)],
            FormId::PhoneNumber => vec![FormField::text("whatsapp.enter_phone", true)],
            FormId::FarmerFeedback => vec![FormField::text("farmer.feedback", true)],
            FormId::QueryResponse => vec![FormField::text("ext.response", true)],
            FormId::RegionalAlert => vec![
                FormField::choice("ext.select_region", extension::REGIONS),
                FormField::text("ext.alert_message", true),
            ],
            FormId::TrainingUpload => vec![
                FormField::choice("ext.material_type", extension::MATERIAL_TYPES),
                FormField::text("ext.material_title", true),
                FormField::text("ext.material_description", false),
            ],
            FormId::StateFilter => vec![FormField::choice("gov.select_state", government::STATES)],
            FormId::Advisory => vec![
                FormField::choice("gov.select_state", government::STATES),
                FormField::choice("gov.advisory_type", government::ADVISORY_TYPES),
                FormField::text("gov.advisory_content", true),
            ],
            FormId::Program => vec![
                FormField::text("ngo.program_name", true),
                FormField::text("ngo.target_farmers", true),
                FormField::text("ngo.program_description", false),
                FormField::text("ngo.date", false),
                FormField::text("ngo.location", false),
            ],
            FormId::Distribution => vec![
                FormField::choice("ngo.resource_type", ngo::RESOURCE_TYPES),
                FormField::text("ngo.quantity", true),
                FormField::text("ngo.distribution_center", true),
                FormField::text("ngo.distribution_date", false),
            ],
            FormId::Integration => vec![
                FormField::text("st.api_name", true),
                FormField::choice("st.api_type", startup::API_TYPES),
                FormField::text("st.api_endpoint", true),
                FormField::text("st.api_key", false).secret(),
                FormField::text("st.test_data", false),
            ],
            FormId::Announcement => vec![
                FormField::choice("adm.target_users", admin::AUDIENCES),
                FormField::text("adm.announcement_text", true),
            ],
        };
        Self {
            id,
            fields,
            focused: 0,
        }
    }

    #[cfg(test)]
    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_mut() {
            if field.kind == FieldKind::Text {
                field.value.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_mut() {
            field.value.pop();
        }
    }

    /// Steps a choice field forward or back, wrapping around.
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        let Some(field) = self.focused_mut() else {
            return false;
        };
        let FieldKind::Choice(options) = field.kind else {
            return false;
        };
        if options.is_empty() {
            return false;
        }
        field.selected = if forward {
            (field.selected + 1) % options.len()
        } else {
            (field.selected + options.len() - 1) % options.len()
        };
        true
    }

    /// First required field left blank, by label key.
    pub fn validate(&self) -> Result<(), &'static str> {
        match self.fields.iter().find(|f| f.required && f.is_blank()) {
            Some(field) => Err(field.label_key),
            None => Ok(()),
        }
    }

    #[cfg(test)]
    pub fn value_of(&self, label_key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label_key == label_key)
            .map(|f| f.value())
    }

    pub fn first_value(&self) -> &str {
        self.fields.first().map(|f| f.value()).unwrap_or("")
    }

    /// Empties text fields and resets choices; focus returns to the top.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.selected = 0;
        }
        self.focused = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut Form, text: &str) {
        for c in text.chars() {
            form.insert_char(c);
        }
    }

    #[test]
    fn test_required_field_blocks_submit() {
        let mut form = Form::new(FormId::Program);
        assert_eq!(form.validate(), Err("ngo.program_name"));

        type_str(&mut form, "Organic");
        assert_eq!(form.validate(), Err("ngo.target_farmers"));

        form.focus_next();
        type_str(&mut form, "  ");
        assert_eq!(form.validate(), Err("ngo.target_farmers"));
        form.backspace();
        form.backspace();
        type_str(&mut form, "40");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_choice_cycles_and_ignores_typing() {
        let mut form = Form::new(FormId::StateFilter);
        assert_eq!(form.first_value(), "all");
        form.insert_char('x');
        assert_eq!(form.first_value(), "all");

        assert!(form.cycle_choice(true));
        assert_eq!(form.first_value(), "punjab");
        assert!(form.cycle_choice(false));
        assert!(form.cycle_choice(false));
        assert_eq!(form.first_value(), "tamil nadu");
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_focus_wraps_and_clear_resets() {
        let mut form = Form::new(FormId::Announcement);
        form.focus_prev();
        assert_eq!(form.focused, 1);
        type_str(&mut form, "Rain tomorrow");
        form.focus_next();
        form.cycle_choice(true);
        assert_eq!(form.value_of("adm.target_users"), Some("farmers"));
        assert_eq!(form.value_of("adm.announcement_text"), Some("Rain tomorrow"));

        form.clear();
        assert_eq!(form.focused, 0);
        assert_eq!(form.value_of("adm.target_users"), Some("all"));
        assert_eq!(form.value_of("adm.announcement_text"), Some(""));
    }

    #[test]
    fn test_secret_field_is_masked() {
        let mut form = Form::new(FormId::Integration);
        form.focused = 3;
        type_str(&mut form, "abc");
        assert_eq!(form.fields[3].display(Language::En), "•••");
        assert_eq!(form.fields[1].display(Language::Hi), "◂ सेंसर डेटा ▸");
    }

    #[test]
    fn test_profile_form_for_every_role() {
        for role in Role::ALL {
            assert_eq!(form_for(role, Tab::Profile), Some(FormId::PhoneNumber));
            assert_eq!(form_for(role, Tab::Dashboard), None);
        }
        assert_eq!(form_for(Role::Startup, Tab::Testing), Some(FormId::ImagePath));
        assert_eq!(form_for(Role::Admin, Tab::Analysis), None);
    }
}
