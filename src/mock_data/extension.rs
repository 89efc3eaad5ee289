use super::{Activity, Choice};
use crate::types::{Localized, Priority};

#[derive(Debug, Clone, Copy)]
pub struct FarmerQuery {
    pub farmer: &'static str,
    pub query: Localized,
    pub time: &'static str,
    pub priority: Priority,
    pub region: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RegionalStat {
    pub region: &'static str,
    pub farmers: u64,
    pub queries: u32,
    pub alerts: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct TrainingMaterial {
    pub title: Localized,
    pub kind: Localized,
    pub views: u32,
}

pub const TOTAL_FARMERS: u64 = 7_500;
pub const ACTIVE_QUERIES: u32 = 144;
pub const ALERTS_SENT: u32 = 35;
pub const TRAINING_UPLOADS: u32 = 18;

pub const QUERIES: [FarmerQuery; 2] = [
    FarmerQuery {
        farmer: "Raj Kumar",
        query: Localized::new("Yellow spots appearing on my wheat", "मेरे गेहूं में पीले धब्बे दिख रहे हैं"),
        time: "2 hours ago",
        priority: Priority::High,
        region: "Punjab",
    },
    FarmerQuery {
        farmer: "Suresh Patel",
        query: Localized::new("Which fertilizer should I use?", "कौन सी खाद डालनी चाहिए?"),
        time: "4 hours ago",
        priority: Priority::Medium,
        region: "Gujarat",
    },
];

pub const REGIONAL_STATS: [RegionalStat; 3] = [
    RegionalStat { region: "Punjab", farmers: 2_500, queries: 45, alerts: 12 },
    RegionalStat { region: "Gujarat", farmers: 1_800, queries: 32, alerts: 8 },
    RegionalStat { region: "Maharashtra", farmers: 3_200, queries: 67, alerts: 15 },
];

pub const ACTIVITIES: [Activity; 2] = [
    Activity {
        text: Localized::new(
            "Uploaded training video on pest control",
            "कीट नियंत्रण पर प्रशिक्षण वीडियो अपलोड किया",
        ),
        time: "1 hour ago",
    },
    Activity {
        text: Localized::new("Sent weather alert to Punjab region", "पंजाब में मौसम चेतावनी भेजी"),
        time: "3 hours ago",
    },
];

pub const MATERIALS: [TrainingMaterial; 3] = [
    TrainingMaterial {
        title: Localized::new("Pest Control Techniques", "कीट नियंत्रण तकनीक"),
        kind: Localized::new("Video", "वीडियो"),
        views: 245,
    },
    TrainingMaterial {
        title: Localized::new("Organic Fertilizer Usage", "जैविक खाद का उपयोग"),
        kind: Localized::new("Document", "दस्तावेज़"),
        views: 189,
    },
    TrainingMaterial {
        title: Localized::new("Soil Testing Guide", "मिट्टी परीक्षण गाइड"),
        kind: Localized::new("Infographic", "इन्फोग्राफिक"),
        views: 156,
    },
];

pub const REGIONS: &[Choice] = &[
    Choice::new("punjab", Localized::same("Punjab")),
    Choice::new("gujarat", Localized::same("Gujarat")),
    Choice::new("maharashtra", Localized::same("Maharashtra")),
    Choice::new("all", Localized::new("All Regions", "सभी क्षेत्र")),
];

pub const MATERIAL_TYPES: &[Choice] = &[
    Choice::new("video", Localized::new("Video", "वीडियो")),
    Choice::new("document", Localized::new("Document", "दस्तावेज़")),
    Choice::new("infographic", Localized::new("Infographic", "इन्फोग्राफिक")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regional_farmers_add_up_to_total() {
        let sum: u64 = REGIONAL_STATS.iter().map(|stat| stat.farmers).sum();
        assert_eq!(sum, TOTAL_FARMERS);
    }

    #[test]
    fn test_queries_come_from_known_regions() {
        for query in QUERIES {
            assert!(REGIONAL_STATS.iter().any(|stat| stat.region == query.region));
        }
    }
}
