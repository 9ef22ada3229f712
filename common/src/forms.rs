//! Form state for every console form and its validation into a request.
//!
//! Forms hold raw input strings exactly as typed. `Form::validate` either
//! yields the request payload or the field errors to show inline; `submit`
//! only reaches the handler on success.

use crate::model::campaign::Campaign;
use crate::model::outreach::InvitationChannel;
use crate::requests::{
    CreateCampaignRequest, CreateSegmentRequest, InvitationRequest, LoginRequest, NewContact,
    RejectWithdrawalRequest, SendOutreachRequest,
};
use crate::validation::{self, FormErrors};

pub trait Form {
    type Output;

    fn validate(&self) -> Result<Self::Output, FormErrors>;
}

/// Validates `form` and passes the payload to `handler`; on failure the
/// handler is not called and the errors are returned.
pub fn submit<F, H>(form: &F, handler: H) -> Result<(), FormErrors>
where
    F: Form,
    H: FnOnce(F::Output),
{
    let output = form.validate()?;
    handler(output);
    Ok(())
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignForm {
    pub title: String,
    pub description: String,
    pub goal_amount: String,
    pub category: String,
    pub end_date: String,
}

impl CampaignForm {
    /// Prefills the form for editing an existing campaign.
    pub fn from_campaign(campaign: &Campaign) -> Self {
        Self {
            title: campaign.title.clone(),
            description: campaign.description.clone(),
            goal_amount: campaign.goal_amount.to_string(),
            category: campaign.category.clone().unwrap_or_default(),
            end_date: campaign
                .end_date
                .as_deref()
                .map(|date| date.chars().take(10).collect())
                .unwrap_or_default(),
        }
    }
}

impl Form for CampaignForm {
    type Output = CreateCampaignRequest;

    fn validate(&self) -> Result<CreateCampaignRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validation::required(&mut errors, "title", "Title", &self.title);
        validation::max_length(&mut errors, "title", "Title", &self.title, 120);
        validation::required(&mut errors, "description", "Description", &self.description);
        validation::validate_description(&mut errors, "description", &self.description);
        let goal = validation::positive_amount(&mut errors, "goal_amount", "Goal amount", &self.goal_amount);
        validation::required(&mut errors, "category", "Category", &self.category);

        errors.into_result(|| CreateCampaignRequest {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            goal_amount: goal.unwrap_or_default(),
            category: self.category.trim().to_string(),
            end_date: optional(&self.end_date),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentForm {
    pub name: String,
    pub description: String,
}

impl Form for SegmentForm {
    type Output = CreateSegmentRequest;

    fn validate(&self) -> Result<CreateSegmentRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validation::required(&mut errors, "name", "Name", &self.name);
        validation::validate_description(&mut errors, "description", &self.description);
        errors.into_result(|| CreateSegmentRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub email: String,
    pub name: String,
}

impl Form for ContactForm {
    type Output = NewContact;

    fn validate(&self) -> Result<NewContact, FormErrors> {
        let mut errors = FormErrors::new();
        validation::email(&mut errors, "email", &self.email);
        errors.into_result(|| NewContact {
            email: self.email.trim().to_lowercase(),
            name: optional(&self.name),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutreachForm {
    pub segment_id: String,
    pub campaign_id: String,
    pub subject: String,
    pub body: String,
}

impl Form for OutreachForm {
    type Output = SendOutreachRequest;

    fn validate(&self) -> Result<SendOutreachRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validation::required(&mut errors, "segment_id", "Segment", &self.segment_id);
        validation::required(&mut errors, "campaign_id", "Campaign", &self.campaign_id);
        validation::required(&mut errors, "subject", "Subject", &self.subject);
        validation::max_length(&mut errors, "subject", "Subject", &self.subject, 150);
        validation::required(&mut errors, "body", "Message", &self.body);
        errors.into_result(|| SendOutreachRequest {
            segment_id: self.segment_id.clone(),
            campaign_id: self.campaign_id.clone(),
            subject: self.subject.trim().to_string(),
            body: self.body.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvitationForm {
    pub campaign_id: String,
    pub channel: InvitationChannel,
    /// Comma, semicolon or newline separated list, as typed.
    pub recipients: String,
    pub message: String,
}

impl InvitationForm {
    pub fn recipient_list(&self) -> Vec<String> {
        self.recipients
            .split([',', ';', '\n'])
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Form for InvitationForm {
    type Output = InvitationRequest;

    fn validate(&self) -> Result<InvitationRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validation::required(&mut errors, "campaign_id", "Campaign", &self.campaign_id);
        let recipients = self.recipient_list();

        if self.channel == InvitationChannel::Email {
            if recipients.is_empty() {
                errors.add("recipients", "Add at least one recipient");
            } else if let Some(bad) = recipients.iter().find(|r| !validation::is_valid_email(r)) {
                errors.add("recipients", format!("Invalid email address: {bad}"));
            }
        }
        validation::required(&mut errors, "message", "Message", &self.message);
        validation::validate_description(&mut errors, "message", &self.message);

        errors.into_result(|| InvitationRequest {
            campaign_id: self.campaign_id.clone(),
            channel: self.channel,
            recipients,
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Form for LoginForm {
    type Output = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validation::email(&mut errors, "email", &self.email);
        validation::required(&mut errors, "password", "Password", &self.password);
        errors.into_result(|| LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RejectionForm {
    pub reason: String,
}

impl Form for RejectionForm {
    type Output = RejectWithdrawalRequest;

    fn validate(&self) -> Result<RejectWithdrawalRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validation::required(&mut errors, "reason", "Reason", &self.reason);
        validation::validate_description(&mut errors, "reason", &self.reason);
        errors.into_result(|| RejectWithdrawalRequest {
            reason: self.reason.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign_form() -> CampaignForm {
        CampaignForm {
            title: "School roof".to_string(),
            description: "Replace the roof before winter.".to_string(),
            goal_amount: "2500".to_string(),
            category: "education".to_string(),
            end_date: String::new(),
        }
    }

    #[test]
    fn test_required_field_blocks_submit() {
        let mut form = campaign_form();
        form.title = "   ".to_string();

        let mut called = false;
        let result = submit(&form, |_| called = true);

        assert!(!called);
        let errors = result.unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
    }

    #[test]
    fn test_valid_form_reaches_handler() {
        let mut received = None;
        submit(&campaign_form(), |request| received = Some(request)).unwrap();
        let request = received.unwrap();
        assert_eq!(request.goal_amount, 2500.0);
        assert_eq!(request.end_date, None);
    }

    #[test]
    fn test_long_description_rejected() {
        let mut form = campaign_form();
        form.description = "a".repeat(1001);
        let errors = form.validate().unwrap_err();
        assert!(errors.get("description").is_some());
    }

    #[test]
    fn test_contact_email_validated_and_normalised() {
        let bad = ContactForm { email: "a@b".to_string(), name: String::new() };
        assert_eq!(bad.validate().unwrap_err().get("email"), Some("Enter a valid email address"));

        let good = ContactForm { email: " Ada@Example.COM ".to_string(), name: " ".to_string() };
        let contact = good.validate().unwrap();
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.name, None);
    }

    #[test]
    fn test_invitation_recipients() {
        let form = InvitationForm {
            campaign_id: "c1".to_string(),
            channel: InvitationChannel::Email,
            recipients: "a@b.co; c@d.org\n\n bad@x".to_string(),
            message: "Join us".to_string(),
        };
        assert_eq!(form.recipient_list().len(), 3);
        assert_eq!(
            form.validate().unwrap_err().get("recipients"),
            Some("Invalid email address: bad@x")
        );

        let social = InvitationForm {
            channel: InvitationChannel::Twitter,
            recipients: String::new(),
            ..form
        };
        assert!(social.validate().is_ok());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_edit_form_prefills_from_campaign() {
        let campaign = Campaign {
            title: "Clinic".to_string(),
            description: "Beds".to_string(),
            goal_amount: 2500.0,
            category: Some("health".to_string()),
            end_date: Some("2026-12-01T00:00:00Z".to_string()),
            ..Campaign::default()
        };
        let form = CampaignForm::from_campaign(&campaign);
        assert_eq!(form.goal_amount, "2500");
        assert_eq!(form.end_date, "2026-12-01");
        assert_eq!(form.validate().unwrap().goal_amount, 2500.0);
    }
}
