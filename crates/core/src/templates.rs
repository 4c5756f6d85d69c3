//! Phishing email template catalog and rendering.

use std::collections::HashMap;

use crate::types::PhishingTemplate;

/// A named variable a template body may reference as `{{name}}`.
#[derive(Debug, Clone)]
pub struct TemplateVariable {
    pub name: &'static str,
    pub default_value: &'static str,
}

/// The full email content behind one of the named phishing templates,
/// plus the educational note shown alongside the preview.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
    pub template: PhishingTemplate,
    pub sender_name: &'static str,
    pub sender_email: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub variables: &'static [TemplateVariable],
    pub educational_note: &'static str,
}

/// A template rendered with concrete variable values.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub template: PhishingTemplate,
    pub sender: String,
    pub subject: String,
    pub body: String,
}

const GREETING_VARS: &[TemplateVariable] = &[TemplateVariable {
    name: "recipient_name",
    default_value: "Employee",
}];

static TEMPLATES: [EmailTemplate; 5] = [
    EmailTemplate {
        template: PhishingTemplate::PasswordReset,
        sender_name: "IT Department",
        sender_email: "it-noreply@company-portal.net",
        subject: "Urgent: Password Reset Required",
        body: "Dear {{recipient_name}},\n\n\
            Our security system has detected unusual login attempts to your account. \
            As a precautionary measure, we require you to reset your password immediately.\n\n\
            Please click the link below to reset your password:\n\
            https://company-portal.secure-login.net/reset\n\n\
            If you do not reset your password within 24 hours, your account will be \
            temporarily suspended.\n\n\
            Thank you,\nIT Security Team",
        variables: GREETING_VARS,
        educational_note: "This template contains several common phishing indicators: \
            urgency, threat of negative consequences, and a suspicious link that doesn't \
            match the organization's actual domain.",
    },
    EmailTemplate {
        template: PhishingTemplate::DocumentShare,
        sender_name: "SharePoint Online",
        sender_email: "no-reply@sharefile-documents.net",
        subject: "A document has been shared with you: Q3 Budget Review.xlsx",
        body: "Dear {{recipient_name}},\n\n\
            A colleague has shared the document \"Q3 Budget Review.xlsx\" with you. \
            The share link will expire in 48 hours.\n\n\
            Open the document here:\n\
            https://sharefile-documents.net/view/q3-budget-review\n\n\
            You will be asked to sign in with your work account to confirm access.\n\n\
            SharePoint Online Team",
        variables: GREETING_VARS,
        educational_note: "This template imitates a familiar collaboration service, uses \
            an expiring link to create time pressure, and asks for work credentials on a \
            domain the organization does not own.",
    },
    EmailTemplate {
        template: PhishingTemplate::PackageDelivery,
        sender_name: "Delivery Notifications",
        sender_email: "tracking@express-delivery-status.net",
        subject: "Delivery attempt failed: action required",
        body: "Dear {{recipient_name}},\n\n\
            We attempted to deliver a package to your address today, but no one was \
            available to receive it. A redelivery fee of $1.99 is required to schedule \
            a new attempt.\n\n\
            Confirm your delivery details here:\n\
            https://express-delivery-status.net/redeliver/1Z8842\n\n\
            Unclaimed packages are returned to the sender after 5 business days.\n\n\
            Customer Service",
        variables: GREETING_VARS,
        educational_note: "This template relies on curiosity about an unexpected package, \
            a small payment request that harvests card details, and a tracking domain \
            unrelated to any real carrier.",
    },
    EmailTemplate {
        template: PhishingTemplate::Invoice,
        sender_name: "Accounts Payable",
        sender_email: "billing@invoice-portal-secure.net",
        subject: "Overdue invoice INV-20391: payment required",
        body: "Dear {{recipient_name}},\n\n\
            Our records show invoice INV-20391 for $2,470.00 remains unpaid and is now \
            14 days overdue. To avoid service interruption and late fees, please review \
            and settle the invoice today.\n\n\
            View the invoice:\n\
            https://invoice-portal-secure.net/invoices/INV-20391\n\n\
            If payment has already been made, you may disregard this notice.\n\n\
            Accounts Payable",
        variables: GREETING_VARS,
        educational_note: "This template pressures the recipient with a fabricated debt \
            and late fees, and counts on finance staff opening invoice links without \
            verifying the sender through normal channels.",
    },
    EmailTemplate {
        template: PhishingTemplate::AccountVerification,
        sender_name: "Account Support",
        sender_email: "support@account-services-verify.net",
        subject: "Verify your account within 48 hours",
        body: "Dear {{recipient_name}},\n\n\
            As part of a routine security review, we were unable to verify the details \
            on your account. Accounts that remain unverified after 48 hours are \
            automatically deactivated.\n\n\
            Verify your account now:\n\
            https://account-services-verify.net/confirm\n\n\
            We apologize for any inconvenience.\n\n\
            Account Support Team",
        variables: GREETING_VARS,
        educational_note: "This template pairs a vague \"security review\" pretext with a \
            deactivation deadline, a combination real providers do not use, and links to \
            a look-alike verification domain.",
    },
];

/// Read-only catalog of the built-in phishing email templates.
pub struct TemplateCatalog;

impl TemplateCatalog {
    pub fn get(template: PhishingTemplate) -> &'static EmailTemplate {
        TEMPLATES
            .iter()
            .find(|t| t.template == template)
            .expect("catalog covers every template variant")
    }

    pub fn list() -> &'static [EmailTemplate] {
        &TEMPLATES
    }

    /// Render a template with the given variables. Missing variables fall
    /// back to their defaults.
    pub fn render(
        template: PhishingTemplate,
        variables: &HashMap<String, String>,
    ) -> RenderedEmail {
        let entry = Self::get(template);
        RenderedEmail {
            template,
            sender: format!("{} <{}>", entry.sender_name, entry.sender_email),
            subject: substitute(entry.subject, variables, entry.variables),
            body: substitute(entry.body, variables, entry.variables),
        }
    }
}

fn substitute(
    template_str: &str,
    variables: &HashMap<String, String>,
    var_defs: &[TemplateVariable],
) -> String {
    let mut result = template_str.to_string();
    for var_def in var_defs {
        let placeholder = format!("{{{{{}}}}}", var_def.name);
        let value = variables
            .get(var_def.name)
            .map(String::as_str)
            .unwrap_or(var_def.default_value);
        result = result.replace(&placeholder, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_all_templates() {
        assert_eq!(TemplateCatalog::list().len(), PhishingTemplate::ALL.len());
        for template in PhishingTemplate::ALL {
            assert_eq!(TemplateCatalog::get(template).template, template);
        }
    }

    #[test]
    fn test_render_with_defaults() {
        let rendered =
            TemplateCatalog::render(PhishingTemplate::PasswordReset, &HashMap::new());
        assert_eq!(rendered.sender, "IT Department <it-noreply@company-portal.net>");
        assert_eq!(rendered.subject, "Urgent: Password Reset Required");
        assert!(rendered.body.starts_with("Dear Employee,"));
        assert!(rendered.body.contains("company-portal.secure-login.net"));
        assert!(!rendered.body.contains("{{"));
    }

    #[test]
    fn test_render_with_variables() {
        let mut vars = HashMap::new();
        vars.insert("recipient_name".to_string(), "Sarah Johnson".to_string());
        let rendered = TemplateCatalog::render(PhishingTemplate::DocumentShare, &vars);
        assert!(rendered.body.starts_with("Dear Sarah Johnson,"));
    }
}
