use super::{Choice, Status};
use crate::types::Localized;

#[derive(Debug, Clone, Copy)]
pub struct UsagePoint {
    pub month: &'static str,
    pub users: u64,
    pub api_calls: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct FeedbackScore {
    pub category: Localized,
    /// Out of five, in tenths.
    pub score_tenths: u32,
    pub responses: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Integration {
    pub name: &'static str,
    pub status: Status,
    pub calls: &'static str,
    pub uptime: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CollaborationRequest {
    pub organization: &'static str,
    pub kind: Localized,
    pub status: Status,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub route: &'static str,
    pub summary: Localized,
}

pub const API_INTEGRATIONS: u32 = 12;
pub const ACTIVE_USERS: &str = "5.2K";
pub const FEEDBACK_SCORE: &str = "4.2";
pub const TESTING_PROGRAMS: u32 = 8;

pub const USAGE: [UsagePoint; 6] = [
    UsagePoint { month: "Jan", users: 1_200, api_calls: 45_000 },
    UsagePoint { month: "Feb", users: 1_800, api_calls: 67_000 },
    UsagePoint { month: "Mar", users: 2_400, api_calls: 89_000 },
    UsagePoint { month: "Apr", users: 3_200, api_calls: 112_000 },
    UsagePoint { month: "May", users: 4_100, api_calls: 145_000 },
    UsagePoint { month: "Jun", users: 5_200, api_calls: 178_000 },
];

pub const FEEDBACK: [FeedbackScore; 4] = [
    FeedbackScore { category: Localized::new("Usability", "उपयोगिता"), score_tenths: 42, responses: 145 },
    FeedbackScore { category: Localized::new("Performance", "प्रदर्शन"), score_tenths: 38, responses: 132 },
    FeedbackScore { category: Localized::new("Features", "सुविधाएं"), score_tenths: 45, responses: 167 },
    FeedbackScore { category: Localized::new("Integration", "एकीकरण"), score_tenths: 40, responses: 89 },
];

pub const INTEGRATIONS: [Integration; 3] = [
    Integration { name: "Soil Sensor API", status: Status::Active, calls: "12.5K", uptime: "99.2%" },
    Integration { name: "Weather Data API", status: Status::Active, calls: "8.9K", uptime: "98.7%" },
    Integration { name: "Market Price API", status: Status::Testing, calls: "2.1K", uptime: "97.3%" },
];

pub const COLLABORATIONS: [CollaborationRequest; 2] = [
    CollaborationRequest {
        organization: "Punjab Agricultural University",
        kind: Localized::new("Research Partnership", "अनुसंधान साझेदारी"),
        status: Status::Pending,
        date: "2024-03-15",
    },
    CollaborationRequest {
        organization: "Maharashtra NGO Collective",
        kind: Localized::new("Field Testing", "क्षेत्र परीक्षण"),
        status: Status::Approved,
        date: "2024-03-12",
    },
];

pub const ENDPOINTS: [Endpoint; 3] = [
    Endpoint {
        route: "GET /api/v1/farmers",
        summary: Localized::new("Get farmer data", "किसान डेटा प्राप्त करें"),
    },
    Endpoint {
        route: "POST /api/v1/analysis",
        summary: Localized::new("Submit crop analysis", "फसल विश्लेषण भेजें"),
    },
    Endpoint {
        route: "GET /api/v1/recommendations",
        summary: Localized::new("Get AI recommendations", "AI सुझाव प्राप्त करें"),
    },
];

pub const API_TYPES: &[Choice] = &[
    Choice::new("sensor", Localized::new("Sensor Data", "सेंसर डेटा")),
    Choice::new("weather", Localized::new("Weather", "मौसम")),
    Choice::new("market", Localized::new("Market", "बाजार")),
    Choice::new("analytics", Localized::new("Analytics", "विश्लेषण")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_grows_month_over_month() {
        for pair in USAGE.windows(2) {
            assert!(pair[1].users > pair[0].users);
            assert!(pair[1].api_calls > pair[0].api_calls);
        }
    }

    #[test]
    fn test_feedback_scores_are_out_of_five() {
        assert!(FEEDBACK.iter().all(|entry| entry.score_tenths <= 50));
    }
}
