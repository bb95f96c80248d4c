//! System prompts
//!
//! Exactly two fixed prompts exist, one per supported language. Both embed
//! the same four emergency numbers and tell the model to send anyone in
//! immediate danger to 112.

use serde::Serialize;

/// Supported response languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
}

impl Language {
    /// Resolve a client-supplied language tag.
    ///
    /// Only `"hi"` selects Hindi; any other value, including a missing one,
    /// falls back to English.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("hi") => Language::Hi,
            _ => Language::En,
        }
    }

    /// Short tag used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

/// English system prompt
pub const ENGLISH_SYSTEM_PROMPT: &str = "You are a women's safety assistant. You are empathetic, helpful, and knowledgeable. You provide safety tips, emergency contact information, legal rights, and guidance.

Key emergency numbers:
- Police: 100
- Women Helpline: 1098
- Emergency: 112
- Cyber Crime: 1930

If someone is in immediate danger, always advise them to call 112 immediately.
Keep your responses concise, practical, and supportive. Respond in English.";

/// Hindi system prompt
pub const HINDI_SYSTEM_PROMPT: &str = "आप एक महिला सुरक्षा सहायक हैं। आप सहानुभूतिपूर्ण, सहायक और जानकार हैं। आप सुरक्षा सुझाव, आपातकालीन संपर्क जानकारी, कानूनी अधिकार और मार्गदर्शन प्रदान करते हैं।

मुख्य आपातकालीन नंबर:
- पुलिस: 100
- महिला हेल्पलाइन: 1098
- आपातकाल: 112
- साइबर अपराध: 1930

अगर कोई तत्काल खतरे में है, तो उन्हें तुरंत 112 पर कॉल करने के लिए कहें।
अपने उत्तर संक्षिप्त, व्यावहारिक और सहायक रखें। हिंदी में उत्तर दें।";

/// Select the system prompt for a language
pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::En => ENGLISH_SYSTEM_PROMPT,
        Language::Hi => HINDI_SYSTEM_PROMPT,
    }
}
