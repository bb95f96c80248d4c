// Application state management
// Contains the active tab, language, chat panel and form state

use crate::chat::Language;
use crate::directory::{nearest_safe_zones, Coordinates, RankedZone, SAMPLE_SAFE_ZONES};
use crate::report::{IncidentReport, ReportError, ReportReceipt};

/// How many safe zones the navigation tab lists
pub const NEAREST_ZONE_LIMIT: usize = 4;

/// Top-level tabs of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// Current location and nearby police stations
    #[default]
    Location,
    /// Emergency helpline directory
    Helplines,
    /// Incident report form
    Report,
    /// Safe zones ranked by distance
    Navigation,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 4] = [Tab::Location, Tab::Helplines, Tab::Report, Tab::Navigation];

    /// Tab caption
    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (Tab::Location, Language::En) => "📍 Location",
            (Tab::Location, Language::Hi) => "📍 स्थान",
            (Tab::Helplines, Language::En) => "📞 Helplines",
            (Tab::Helplines, Language::Hi) => "📞 हेल्पलाइन",
            (Tab::Report, Language::En) => "📝 Report",
            (Tab::Report, Language::Hi) => "📝 रिपोर्ट",
            (Tab::Navigation, Language::En) => "🧭 Safe Zones",
            (Tab::Navigation, Language::Hi) => "🧭 सुरक्षित क्षेत्र",
        }
    }
}

/// Chat popup state
#[derive(Debug, Clone, Default)]
pub struct ChatPanelState {
    /// Whether the chat window is shown
    pub open: bool,
    /// Text being typed
    pub input: String,
}

/// Raw text of the latitude/longitude fields
#[derive(Debug, Clone, Default)]
pub struct LocationInput {
    /// Latitude field
    pub lat: String,
    /// Longitude field
    pub lng: String,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Tab shown in the central panel
    pub active_tab: Tab,
    /// Display and request language
    pub language: Language,
    /// Chat popup
    pub chat_panel: ChatPanelState,
    /// Location form fields
    pub location_input: LocationInput,
    /// Last accepted position
    pub current_location: Option<Coordinates>,
    /// Why the last location entry was rejected
    pub location_error: Option<String>,
    /// Report form
    pub report: IncidentReport,
    /// Acknowledgement of the most recent report
    pub last_receipt: Option<ReportReceipt>,
    /// Why the last report submission was rejected
    pub report_error: Option<String>,
}

impl AppState {
    /// Create a new application state in the given language
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// Switch the central panel to `tab`
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Flip between English and Hindi, returning the new language
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Parse the location fields
    ///
    /// On success the position becomes current and is attached to the report
    /// form. On failure the previous position is kept and the error recorded.
    pub fn apply_location_input(&mut self) -> bool {
        match Coordinates::parse(&self.location_input.lat, &self.location_input.lng) {
            Ok(position) => {
                tracing::debug!(lat = position.lat, lng = position.lng, "Location updated");
                self.current_location = Some(position);
                self.report.location = Some(position);
                self.location_error = None;
                true
            }
            Err(e) => {
                self.location_error = Some(e.to_string());
                false
            }
        }
    }

    /// Safe zones nearest to the current location, empty when unknown
    pub fn nearest_zones(&self) -> Vec<RankedZone<'static>> {
        match self.current_location {
            Some(origin) => nearest_safe_zones(origin, &SAMPLE_SAFE_ZONES, NEAREST_ZONE_LIMIT),
            None => Vec::new(),
        }
    }

    /// Submit the report form and remember the outcome
    pub fn submit_report(&mut self) -> Result<ReportReceipt, ReportError> {
        match self.report.submit() {
            Ok(receipt) => {
                // The form resets; keep the known location attached
                self.report.location = self.current_location;
                self.last_receipt = Some(receipt.clone());
                self.report_error = None;
                Ok(receipt)
            }
            Err(e) => {
                self.report_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Open the chat popup
    pub fn open_chat(&mut self) {
        self.chat_panel.open = true;
    }

    /// Close the chat popup; the conversation is kept
    pub fn close_chat(&mut self) {
        self.chat_panel.open = false;
    }
}
