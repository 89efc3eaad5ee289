use crate::types::{Localized, Priority};

#[derive(Debug, Clone, Copy)]
pub enum RecommendationKind {
    Crop,
    Fertilizer,
    Pest,
}

#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: Localized,
    pub description: Localized,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy)]
pub enum AlertKind {
    Weather,
    Pest,
    Market,
}

#[derive(Debug, Clone, Copy)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: Localized,
    pub time: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy)]
pub struct MarketPrice {
    pub crop: Localized,
    pub price: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy)]
pub struct CommunityPost {
    pub author: &'static str,
    pub time: &'static str,
    pub expert: bool,
    pub content: Localized,
    pub likes: u32,
    pub replies: u32,
}

pub const WEATHER_SUMMARY: &str = "25°C • Sunny";

pub const ACTIVE_CROPS: u32 = 3;
pub const NEW_ALERTS: u32 = 2;
pub const COMMUNITY_POSTS: u32 = 12;

pub const RECOMMENDATIONS: [Recommendation; 3] = [
    Recommendation {
        kind: RecommendationKind::Crop,
        title: Localized::new("Wheat Sowing Time", "गेहूं की बुआई का समय"),
        description: Localized::new(
            "Next week is ideal for wheat sowing",
            "अगले सप्ताह गेहूं की बुआई के लिए आदर्श समय है",
        ),
        priority: Priority::High,
    },
    Recommendation {
        kind: RecommendationKind::Fertilizer,
        title: Localized::new("Nitrogen Fertilizer", "नाइट्रोजन उर्वरक"),
        description: Localized::new(
            "Your soil needs nitrogen supplementation",
            "आपकी मिट्टी में नाइट्रोजन की कमी है",
        ),
        priority: Priority::Medium,
    },
    Recommendation {
        kind: RecommendationKind::Pest,
        title: Localized::new("Pest Control", "कीट नियंत्रण"),
        description: Localized::new(
            "Watch for pest infestation in pigeon pea this season",
            "इस मौसम में अरहर में कीट का प्रकोप हो सकता है",
        ),
        priority: Priority::Low,
    },
];

pub const ALERTS: [Alert; 3] = [
    Alert {
        kind: AlertKind::Weather,
        message: Localized::new("Rain expected tomorrow", "कल बारिश की संभावना है"),
        time: "2 hours ago",
    },
    Alert {
        kind: AlertKind::Pest,
        message: Localized::new("Pest alert in your region", "आपके क्षेत्र में कीट की रिपोर्ट"),
        time: "4 hours ago",
    },
    Alert {
        kind: AlertKind::Market,
        message: Localized::new("Wheat prices have increased", "गेहूं की कीमत बढ़ी है"),
        time: "1 day ago",
    },
];

pub const MARKET_PRICES: [MarketPrice; 3] = [
    MarketPrice {
        crop: Localized::new("Wheat", "गेहूं"),
        price: "₹2,150/quintal",
        change: "+5%",
        trend: Trend::Up,
    },
    MarketPrice {
        crop: Localized::new("Rice", "चावल"),
        price: "₹1,850/quintal",
        change: "-2%",
        trend: Trend::Down,
    },
    MarketPrice {
        crop: Localized::new("Maize", "मक्का"),
        price: "₹1,650/quintal",
        change: "+3%",
        trend: Trend::Up,
    },
];

pub const COMMUNITY: [CommunityPost; 2] = [
    CommunityPost {
        author: "Suresh Patel",
        time: "2 hours ago",
        expert: false,
        content: Localized::new(
            "Yellow spots appearing on my wheat crop. Any suggestions?",
            "मेरी गेहूं की फसल में पीले धब्बे दिख रहे हैं। कोई सुझाव?",
        ),
        likes: 12,
        replies: 5,
    },
    CommunityPost {
        author: "Dr. Priya Sharma",
        time: "4 hours ago",
        expert: true,
        content: Localized::new(
            "Use organic pesticides this season. Reduce chemical usage.",
            "इस मौसम में जैविक कीटनाशक का उपयोग करें। रासायनिक का कम उपयोग करें।",
        ),
        likes: 34,
        replies: 12,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_carry_sign_matching_trend() {
        for entry in MARKET_PRICES {
            match entry.trend {
                Trend::Up => assert!(entry.change.starts_with('+')),
                Trend::Down => assert!(entry.change.starts_with('-')),
            }
        }
    }

    #[test]
    fn test_alert_count_matches_alert_list() {
        assert!(ALERTS.len() as u32 >= NEW_ALERTS);
        assert!(COMMUNITY.iter().any(|post| post.expert));
    }
}
