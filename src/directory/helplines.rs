// Emergency helpline directory
// Hard-coded; not derived from any live source

use crate::chat::Language;

/// A single helpline number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helpline {
    /// Service name
    pub name: &'static str,
    /// Number to dial
    pub number: &'static str,
    /// What the service handles
    pub description: &'static str,
    /// Short tags (availability, cost, ...)
    pub features: &'static [&'static str],
}

impl Helpline {
    /// `tel:` link for the number
    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.number)
    }
}

/// Grouping shown as one card in the helplines tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Nationwide emergency numbers
    NationalEmergency,
    /// Women-specific helplines
    WomenHelplines,
    /// Local teams and specialised units
    LocalSupport,
}

impl CategoryKind {
    /// Category heading
    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (CategoryKind::NationalEmergency, Language::En) => "National Emergency",
            (CategoryKind::NationalEmergency, Language::Hi) => "राष्ट्रीय आपातकाल",
            (CategoryKind::WomenHelplines, Language::En) => "Women Helplines",
            (CategoryKind::WomenHelplines, Language::Hi) => "महिला हेल्पलाइन",
            (CategoryKind::LocalSupport, Language::En) => "Local Support",
            (CategoryKind::LocalSupport, Language::Hi) => "स्थानीय सहायता",
        }
    }
}

/// A category and its helplines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelplineCategory {
    /// Which category
    pub kind: CategoryKind,
    /// Numbers in display order
    pub entries: &'static [Helpline],
}

const DIRECTORY: &[HelplineCategory] = &[
    HelplineCategory {
        kind: CategoryKind::NationalEmergency,
        entries: &[
            Helpline {
                name: "Emergency Services",
                number: "112",
                description: "Police, Fire, Medical Emergency",
                features: &["24x7", "Free", "Multi-language"],
            },
            Helpline {
                name: "Police",
                number: "100",
                description: "Police Emergency",
                features: &["24x7", "Free"],
            },
        ],
    },
    HelplineCategory {
        kind: CategoryKind::WomenHelplines,
        entries: &[
            Helpline {
                name: "Women Helpline",
                number: "1098",
                description: "Women & Child Helpline",
                features: &["24x7", "Free", "Confidential"],
            },
            Helpline {
                name: "Women Safety",
                number: "181",
                description: "Women Safety Helpline",
                features: &["24x7", "Free", "Multi-language"],
            },
            Helpline {
                name: "Domestic Violence",
                number: "1091",
                description: "Women Power Helpline",
                features: &["24x7", "Free"],
            },
        ],
    },
    HelplineCategory {
        kind: CategoryKind::LocalSupport,
        entries: &[
            Helpline {
                name: "She Team",
                number: "9490616555",
                description: "Local Women Safety Team",
                features: &["WhatsApp", "SMS"],
            },
            Helpline {
                name: "Cyber Crime",
                number: "1930",
                description: "Cyber Crime Helpline",
                features: &["24x7", "Online Support"],
            },
        ],
    },
];

/// The full helpline directory, in display order
pub fn directory() -> &'static [HelplineCategory] {
    DIRECTORY
}

/// Look up a helpline by its number
pub fn find_by_number(number: &str) -> Option<&'static Helpline> {
    DIRECTORY
        .iter()
        .flat_map(|category| category.entries.iter())
        .find(|helpline| helpline.number == number)
}
