use once_cell::sync::Lazy;
use regex::Regex;

use super::models::{Course, ReferralRequest};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ReferrerName,
    ReferredName,
    ReferredEmail,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::ReferrerName, Field::ReferredName, Field::ReferredEmail];

    /// Checks a single value against this field's rule, returning the message to show on failure.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let value = value.trim();
        match self {
            Field::ReferrerName | Field::ReferredName => {
                if value.is_empty() {
                    return Err("Name is required");
                }
            }
            Field::ReferredEmail => {
                if value.is_empty() {
                    return Err("Email is required");
                }
                if !EMAIL_RE.is_match(value) {
                    return Err("Invalid email address");
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub referrer_name: Option<&'static str>,
    pub referred_name: Option<&'static str>,
    pub referred_email: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        *self.slot(field)
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn slot(&self, field: Field) -> &Option<&'static str> {
        match field {
            Field::ReferrerName => &self.referrer_name,
            Field::ReferredName => &self.referred_name,
            Field::ReferredEmail => &self.referred_email,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::ReferrerName => &mut self.referrer_name,
            Field::ReferredName => &mut self.referred_name,
            Field::ReferredEmail => &mut self.referred_email,
        }
    }
}

/// Field values, per-field errors and course picks for one referral.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferralForm {
    pub referrer_name: String,
    pub referred_name: String,
    pub referred_email: String,
    courses: Vec<Course>,
    errors: FieldErrors,
}

impl ReferralForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::ReferrerName => &self.referrer_name,
            Field::ReferredName => &self.referred_name,
            Field::ReferredEmail => &self.referred_email,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn is_selected(&self, course: Course) -> bool {
        self.courses.contains(&course)
    }

    /// Sets one field. A field already showing an error is re-checked so the message tracks the input;
    /// a field without one stays quiet until the next submit.
    pub fn update_field(&mut self, field: Field, value: String) {
        let slot = self.errors.slot_mut(field);
        if slot.is_some() {
            *slot = field.check(&value).err();
        }
        match field {
            Field::ReferrerName => self.referrer_name = value,
            Field::ReferredName => self.referred_name = value,
            Field::ReferredEmail => self.referred_email = value,
        }
    }

    /// Replaces the selection, keeping first-seen order.
    pub fn update_courses<I>(&mut self, selection: I)
    where
        I: IntoIterator<Item = Course>,
    {
        self.courses.clear();
        for course in selection {
            if !self.courses.contains(&course) {
                self.courses.push(course);
            }
        }
    }

    /// Runs every rule. On failure the errors are stored on the form and also returned.
    pub fn validate(&mut self) -> Result<ReferralRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            *errors.slot_mut(field) = field.check(self.value(field)).err();
        }
        self.errors = errors.clone();

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ReferralRequest {
            name: self.referrer_name.trim().to_string(),
            referred_to: self.referred_name.trim().to_string(),
            email: self.referred_email.trim().to_string(),
            courses: self.courses.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = ReferralForm::default();
    }
}
