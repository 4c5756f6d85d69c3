//! The two decoy pages: the landing page a simulated phishing link points
//! at, and the educational feedback page shown after the recipient "signs
//! in". No submitted value is read or stored anywhere; the form posts
//! straight to the feedback redirect.

use phishsim_core::types::PhishingTemplate;
use serde::Serialize;

/// A rendered decoy page.
#[derive(Debug, Clone, Serialize)]
pub struct DecoyPage {
    pub title: String,
    pub html: String,
}

/// Warning signs listed on the feedback page.
pub const WARNING_SIGNS: [&str; 4] = [
    "The URL in your browser was not from our official domain",
    "The email created a sense of urgency to prompt immediate action",
    "There were subtle grammatical or formatting errors in the message",
    "The request for your credentials was unexpected and not through normal channels",
];

fn landing_copy(template: PhishingTemplate) -> (&'static str, &'static str, &'static str) {
    match template {
        PhishingTemplate::PasswordReset => (
            "Account Security Alert",
            "Please verify your identity to continue",
            "Sign In",
        ),
        PhishingTemplate::DocumentShare => (
            "A document is waiting for you",
            "Sign in with your work account to view the shared document",
            "Open Document",
        ),
        PhishingTemplate::PackageDelivery => (
            "Delivery attempt failed",
            "Confirm your details to schedule redelivery",
            "Track Package",
        ),
        PhishingTemplate::Invoice => (
            "Invoice INV-20391",
            "Sign in to review and settle your outstanding invoice",
            "View Invoice",
        ),
        PhishingTemplate::AccountVerification => (
            "Account verification required",
            "Verify your account to avoid deactivation",
            "Verify Now",
        ),
    }
}

/// The credential-harvest decoy for a campaign. The form action points at
/// the feedback page; nothing typed into it leaves the browser.
pub fn landing_page(campaign_id: &str, template: PhishingTemplate) -> DecoyPage {
    let (headline, subtitle, button) = landing_copy(template);
    let action = format!("/landing/{}/feedback", escape(campaign_id));
    let html = format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{headline}</title>\n</head>\n<body class=\"decoy-landing\">\n\
         <main class=\"card\">\n\
         <h1>{headline}</h1>\n\
         <p class=\"subtitle\">{subtitle}</p>\n\
         <form method=\"get\" action=\"{action}\">\n\
         <label for=\"email\">Email</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" placeholder=\"name@example.com\">\n\
         <label for=\"password\">Password</label>\n\
         <input id=\"password\" name=\"password\" type=\"password\">\n\
         <button type=\"submit\">{button}</button>\n\
         </form>\n\
         </main>\n</body>\n</html>\n"
    );
    DecoyPage {
        title: headline.to_string(),
        html,
    }
}

/// The reveal shown once the recipient follows the decoy form through.
pub fn feedback_page(campaign_id: &str) -> DecoyPage {
    let signs: String = WARNING_SIGNS
        .iter()
        .map(|sign| format!("<li>{sign}</li>\n"))
        .collect();
    let html = format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>This was a phishing simulation</title>\n</head>\n\
         <body class=\"decoy-feedback\" data-campaign=\"{id}\">\n\
         <main class=\"card\">\n\
         <h1>This was a phishing simulation</h1>\n\
         <p class=\"subtitle\">You've just participated in a security awareness exercise</p>\n\
         <section class=\"why\">\n\
         <h2>Why did we do this?</h2>\n\
         <p>Phishing attacks are one of the most common ways organizations are \
         compromised. This simulation helps you recognize the warning signs of a real \
         phishing attempt.</p>\n\
         </section>\n\
         <h2>Warning signs you should have noticed:</h2>\n\
         <ul>\n{signs}</ul>\n\
         <section class=\"guidance\">\n\
         <h2>What to do in a real situation</h2>\n\
         <p>If you receive a suspicious email, don't click any links or download \
         attachments. Report it to your IT security team immediately.</p>\n\
         </section>\n\
         <nav>\n\
         <a href=\"/education\">View Security Resources</a>\n\
         <a href=\"/\">Return to Dashboard</a>\n\
         </nav>\n\
         </main>\n</body>\n</html>\n",
        id = escape(campaign_id),
    );
    DecoyPage {
        title: "This was a phishing simulation".to_string(),
        html,
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_has_credential_form() {
        let page = landing_page("campaign-1", PhishingTemplate::PasswordReset);
        assert_eq!(page.title, "Account Security Alert");
        assert!(page.html.contains("type=\"password\""));
        assert!(page.html.contains("action=\"/landing/campaign-1/feedback\""));
    }

    #[test]
    fn test_landing_varies_by_template() {
        let reset = landing_page("c", PhishingTemplate::PasswordReset);
        let invoice = landing_page("c", PhishingTemplate::Invoice);
        assert_ne!(reset.title, invoice.title);
    }

    #[test]
    fn test_feedback_lists_all_warning_signs() {
        let page = feedback_page("campaign-1");
        for sign in WARNING_SIGNS {
            assert!(page.html.contains(sign));
        }
        assert!(page.html.contains("href=\"/education\""));
    }

    #[test]
    fn test_campaign_id_is_escaped() {
        let page = landing_page("\"><script>", PhishingTemplate::PasswordReset);
        assert!(!page.html.contains("<script>"));
    }
}
