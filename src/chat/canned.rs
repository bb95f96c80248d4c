// Canned chat text
// Welcome, fallback, alert and quick-help strings for both languages

use crate::chat::models::Language;

/// Greeting seeded into every new conversation
pub fn welcome_message(language: Language) -> &'static str {
    match language {
        Language::En => "Hello! I'm your safety assistant. I can provide safety tips, legal information, and guidance. For emergencies, immediately call 112 or 1098.",
        Language::Hi => "नमस्ते! मैं आपकी सुरक्षा सहायक हूं। मैं आपको सुरक्षा सुझाव, कानूनी जानकारी और मार्गदर्शन प्रदान कर सकती हूं। आपातकाल के लिए तुरंत 112 या 1098 पर कॉल करें।",
    }
}

/// Assistant message shown when the gateway round trip fails
pub fn fallback_message(language: Language) -> &'static str {
    match language {
        Language::En => "I'm having trouble connecting right now. If you are in danger, please call 112 (Emergency) or 1098 (Women Helpline) immediately.",
        Language::Hi => "मुझे अभी कनेक्ट करने में समस्या हो रही है। यदि आप खतरे में हैं, तो कृपया तुरंत 112 (आपातकाल) या 1098 (महिला हेल्पलाइन) पर कॉल करें।",
    }
}

/// Title and description of the alert raised for emergency messages
pub fn emergency_alert(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::En => (
            "Emergency detected",
            "If you are in immediate danger, call 112 (Emergency) or 1098 (Women Helpline) now.",
        ),
        Language::Hi => (
            "आपातकाल का पता चला",
            "यदि आप तत्काल खतरे में हैं, तो अभी 112 (आपातकाल) या 1098 (महिला हेल्पलाइन) पर कॉल करें।",
        ),
    }
}

/// Description of the generic error notification
pub const SEND_FAILED: &str = "Failed to send message. Please try again.";

/// One predefined prompt offered next to the chat input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickHelpOption {
    /// Button label
    pub label: &'static str,
    /// Message sent when the button is pressed
    pub message: &'static str,
}

/// The four quick-help prompts for a language
pub fn quick_help_options(language: Language) -> [QuickHelpOption; 4] {
    match language {
        Language::En => [
            QuickHelpOption {
                label: "Emergency Contact",
                message: "I need emergency contact numbers",
            },
            QuickHelpOption {
                label: "Safety Tips",
                message: "I need safety tips and advice",
            },
            QuickHelpOption {
                label: "Legal Guidance",
                message: "I need information about my legal rights",
            },
            QuickHelpOption {
                label: "Report Guidance",
                message: "How do I report an incident?",
            },
        ],
        Language::Hi => [
            QuickHelpOption {
                label: "आपातकालीन संपर्क",
                message: "मुझे आपातकालीन स्थिति में संपर्क नंबर चाहिए",
            },
            QuickHelpOption {
                label: "सुरक्षा सुझाव",
                message: "मुझे सुरक्षा के लिए सुझाव चाहिए",
            },
            QuickHelpOption {
                label: "कानूनी मार्गदर्शन",
                message: "मुझे कानूनी अधिकारों के बारे में जानकारी चाहिए",
            },
            QuickHelpOption {
                label: "रिपोर्ट मार्गदर्शन",
                message: "मुझे घटना की रिपोर्ट कैसे करनी है?",
            },
        ],
    }
}
