// Emergency detection
// Case-insensitive substring match against a fixed bilingual keyword list

/// Keywords that flag a message as describing an emergency (lowercase)
///
/// Matching is by substring with no word-boundary checks, so any word that
/// contains a keyword also matches.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    // English
    "emergency",
    "danger",
    "help me",
    "save me",
    "attack",
    "assault",
    "stalking",
    "stalker",
    "followed",
    "following me",
    "harass",
    "molest",
    "rape",
    "kidnap",
    "abuse",
    "threat",
    "scared",
    "unsafe",
    // Hindi
    "आपातकाल",
    "खतरा",
    "खतरे",
    "बचाओ",
    "मदद करो",
    "पीछा",
    "डर",
    "छेड़छाड़",
    "हमला",
    "उत्पीड़न",
];

/// Returns true iff any emergency keyword is a case-insensitive substring of
/// `text`
pub fn detect_emergency(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EMERGENCY_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
