//! Proposal email dispatch
//!
//! Sends a plaintext notification to the configured curator when a term
//! proposal is submitted. Missing configuration degrades to a logged skip;
//! dispatch runs in a background task, so transport failures are logged at
//! the spawn site and never reach the submitting caller.

use annot_common::config::SmtpSettings;
use annot_common::models::ProposalRequest;
use annot_common::{Error, Result};
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{info, warn};

/// SMTP notifier for vocabulary term proposals
pub struct ProposalMailer {
    smtp: SmtpSettings,
}

impl ProposalMailer {
    pub fn new(smtp: SmtpSettings) -> Self {
        Self { smtp }
    }

    /// Send the proposal notification.
    ///
    /// No recipient or no credentials is a logged skip, not an error; only
    /// transport and address problems surface as `Err`.
    pub async fn send(&self, proposal: &ProposalRequest) -> Result<()> {
        let Some(recipient) = &self.smtp.proposal_recipient else {
            warn!("Proposal recipient not configured; skipping email dispatch");
            if let Ok(payload) = serde_json::to_string_pretty(proposal) {
                info!("Proposal payload received: {}", payload);
            }
            return Ok(());
        };
        let (Some(user), Some(password)) = (&self.smtp.user, &self.smtp.password) else {
            warn!("SMTP credentials not configured; cannot send proposal email");
            return Ok(());
        };

        let from: Mailbox = user
            .parse()
            .map_err(|e| Error::Mail(format!("invalid sender address: {}", e)))?;
        let to: Mailbox = recipient
            .parse()
            .map_err(|e| Error::Mail(format!("invalid recipient address: {}", e)))?;
        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(format!(
                "New Ontology Term Proposal: {}",
                proposal.term_details.label
            ))
            .body(proposal_body(proposal))
            .map_err(|e| Error::Mail(e.to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp.server)
            .map_err(|e| Error::Mail(e.to_string()))?
            .port(self.smtp.port)
            .credentials(Credentials::new(user.clone(), password.clone()))
            .build();

        transport
            .send(message)
            .await
            .map_err(|e| Error::Mail(e.to_string()))?;
        info!("Proposal email successfully sent to {}", recipient);
        Ok(())
    }
}

/// Plaintext notification body
fn proposal_body(proposal: &ProposalRequest) -> String {
    format!(
        "New Term Proposal Received via Annotation Gateway\n\
         --- Context ---\n\
         Target Vocabulary/Category: {}\n\
         --- Term Details ---\n\
         Label: {}\n\
         Description:\n{}\n\
         Evidence Source: {}\n\
         --- Submitter Information ---\n\
         Email: {}\n\
         ORCID: {}\n\
         Attribution Consent: {}\n",
        proposal.target_vocabulary,
        proposal.term_details.label,
        proposal.term_details.description,
        proposal
            .term_details
            .evidence_source
            .as_deref()
            .unwrap_or("None provided"),
        proposal.submitter_info.email,
        proposal
            .submitter_info
            .orcid_id
            .as_deref()
            .unwrap_or("None provided"),
        if proposal.submitter_info.attribution_consent {
            "Yes"
        } else {
            "No"
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use annot_common::models::{SubmitterInfo, TermDetails};

    fn proposal() -> ProposalRequest {
        ProposalRequest {
            target_vocabulary: "ECSO".to_string(),
            term_details: TermDetails {
                label: "Egg Mass Count".to_string(),
                description: "Count of amphibian egg masses observed.".to_string(),
                evidence_source: None,
            },
            submitter_info: SubmitterInfo {
                email: "researcher@example.org".to_string(),
                orcid_id: Some("0000-0002-1825-0097".to_string()),
                attribution_consent: true,
            },
        }
    }

    #[test]
    fn test_body_carries_proposal_details() {
        let body = proposal_body(&proposal());
        assert!(body.contains("Target Vocabulary/Category: ECSO"));
        assert!(body.contains("Label: Egg Mass Count"));
        assert!(body.contains("Evidence Source: None provided"));
        assert!(body.contains("ORCID: 0000-0002-1825-0097"));
        assert!(body.contains("Attribution Consent: Yes"));
    }

    #[tokio::test]
    async fn test_missing_recipient_is_a_silent_skip() {
        let mailer = ProposalMailer::new(SmtpSettings {
            proposal_recipient: None,
            ..SmtpSettings::default()
        });
        assert!(mailer.send(&proposal()).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_credentials_is_a_silent_skip() {
        let mailer = ProposalMailer::new(SmtpSettings {
            proposal_recipient: Some("curator@example.org".to_string()),
            user: None,
            password: None,
            ..SmtpSettings::default()
        });
        assert!(mailer.send(&proposal()).await.is_ok());
    }
}
