// Incident reporting
// Form state for the report tab and its submission rules

use crate::chat::Language;
use crate::directory::Coordinates;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidentKind {
    /// Physical harassment or teasing
    Physical,
    /// Social media stalking or cyberbullying
    Cyber,
    /// Photo morphing or misuse
    PhotoMisuse,
    /// Anything else
    Other,
}

impl IncidentKind {
    /// All kinds in display order
    pub const ALL: [IncidentKind; 4] = [
        IncidentKind::Physical,
        IncidentKind::Cyber,
        IncidentKind::PhotoMisuse,
        IncidentKind::Other,
    ];

    /// Selector title
    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (IncidentKind::Physical, Language::En) => "Physical Harassment/Teasing",
            (IncidentKind::Physical, Language::Hi) => "शारीरिक उत्पीड़न/छेड़छाड़",
            (IncidentKind::Cyber, Language::En) => "Social Media Stalking/Cyberbullying",
            (IncidentKind::Cyber, Language::Hi) => "सोशल मीडिया स्टॉकिंग/साइबर बदमाशी",
            (IncidentKind::PhotoMisuse, Language::En) => "Photo Morphing/Misuse",
            (IncidentKind::PhotoMisuse, Language::Hi) => "फोटो मॉर्फिंग/दुरुपयोग",
            (IncidentKind::Other, Language::En) => "Other Incident",
            (IncidentKind::Other, Language::Hi) => "अन्य घटना",
        }
    }

    /// One-line explanation under the title
    pub fn description(self, language: Language) -> &'static str {
        match (self, language) {
            (IncidentKind::Physical, Language::En) => {
                "Physical harassment, inappropriate touching, threats"
            }
            (IncidentKind::Physical, Language::Hi) => "शारीरिक छेड़छाड़, अनुचित स्पर्श, धमकी",
            (IncidentKind::Cyber, Language::En) => "Online stalking, vulgar messages, cyber bullying",
            (IncidentKind::Cyber, Language::Hi) => "ऑनलाइन स्टॉकिंग, अश्लील संदेश, साइबर बुलिंग",
            (IncidentKind::PhotoMisuse, Language::En) => "Photo misuse, fake profiles, morphing",
            (IncidentKind::PhotoMisuse, Language::Hi) => "फोटो का दुरुपयोग, फेक प्रोफाइल, मॉर्फिंग",
            (IncidentKind::Other, Language::En) => "Any other incident you want to report",
            (IncidentKind::Other, Language::Hi) => "कोई अन्य घटना जिसकी आप रिपोर्ट करना चाहते हैं",
        }
    }
}

/// Why a report could not be submitted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// No incident type selected
    #[error("Please select an incident type")]
    MissingKind,
    /// Description is empty after trimming
    #[error("Please provide a description of the incident")]
    EmptyDescription,
}

/// Acknowledgement of a submitted report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportReceipt {
    /// Reference the user can quote later
    pub reference: String,
    /// Type of the submitted incident
    pub kind: IncidentKind,
    /// When it was submitted
    pub submitted_at: DateTime<Utc>,
}

/// Report form being filled in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentReport {
    /// Selected incident type
    pub kind: Option<IncidentKind>,
    /// Free-text account of what happened
    pub description: String,
    /// Where it happened, if known
    pub location: Option<Coordinates>,
}

impl IncidentReport {
    /// Validate and submit the report, clearing the form on success
    ///
    /// Reports are acknowledged locally only; nothing is stored or sent.
    pub fn submit(&mut self) -> Result<ReportReceipt, ReportError> {
        let kind = self.kind.ok_or(ReportError::MissingKind)?;
        if self.description.trim().is_empty() {
            return Err(ReportError::EmptyDescription);
        }

        let receipt = ReportReceipt {
            reference: Uuid::new_v4().to_string(),
            kind,
            submitted_at: Utc::now(),
        };
        tracing::info!(
            reference = %receipt.reference,
            kind = ?kind,
            has_location = self.location.is_some(),
            description_len = self.description.len(),
            "Incident report submitted"
        );

        *self = Self::default();
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_kind() {
        let mut report = IncidentReport {
            description: "Someone followed me".to_string(),
            ..Default::default()
        };
        assert_eq!(report.submit(), Err(ReportError::MissingKind));
        assert_eq!(report.description, "Someone followed me");
    }

    #[test]
    fn test_submit_requires_description() {
        let mut report = IncidentReport {
            kind: Some(IncidentKind::Cyber),
            description: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(report.submit(), Err(ReportError::EmptyDescription));
        assert_eq!(report.kind, Some(IncidentKind::Cyber));
    }

    #[test]
    fn test_submit_resets_form() {
        let mut report = IncidentReport {
            kind: Some(IncidentKind::Physical),
            description: "Harassed at the bus stop".to_string(),
            location: Some(Coordinates::new(28.61, 77.20).unwrap()),
        };
        let receipt = report.submit().unwrap();

        assert_eq!(receipt.kind, IncidentKind::Physical);
        assert!(!receipt.reference.is_empty());
        assert_eq!(report, IncidentReport::default());
    }
}
