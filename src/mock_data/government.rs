use super::Choice;
use crate::utils::matches_filter;
use crate::types::Localized;

#[derive(Debug, Clone, Copy)]
pub struct AdoptionStat {
    pub state: &'static str,
    pub adoption: u64,
    pub farmers: u64,
    pub yield_improvement: u32,
    /// Out of five, in tenths.
    pub satisfaction_tenths: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct YieldPoint {
    pub month: &'static str,
    pub improvement: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    Healthy,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy)]
pub struct CropHealthShare {
    pub band: HealthBand,
    pub name: Localized,
    pub value: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct SustainabilityMetric {
    pub metric: Localized,
    pub value: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: u64,
    pub growth: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct Advisory {
    pub title: Localized,
    pub date: &'static str,
    pub kind: Localized,
    pub reach: &'static str,
}

pub const TOTAL_FARMERS: &str = "1.16M";
pub const ACTIVE_SCHEMES: u32 = 28;
pub const ADVISORIES_ISSUED: u32 = 156;
pub const IMPACT_SCORE: &str = "8.7";

/// Per-state yield and satisfaction figures are fixed so the table does not
/// change between frames.
pub const ADOPTION: [AdoptionStat; 5] = [
    AdoptionStat { state: "Punjab", adoption: 78, farmers: 25_000, yield_improvement: 24, satisfaction_tenths: 43 },
    AdoptionStat { state: "Gujarat", adoption: 65, farmers: 18_000, yield_improvement: 17, satisfaction_tenths: 38 },
    AdoptionStat { state: "Maharashtra", adoption: 82, farmers: 32_000, yield_improvement: 29, satisfaction_tenths: 46 },
    AdoptionStat { state: "Karnataka", adoption: 71, farmers: 22_000, yield_improvement: 21, satisfaction_tenths: 41 },
    AdoptionStat { state: "Tamil Nadu", adoption: 69, farmers: 19_500, yield_improvement: 15, satisfaction_tenths: 36 },
];

pub const YIELD_TREND: [YieldPoint; 6] = [
    YieldPoint { month: "Jan", improvement: 12 },
    YieldPoint { month: "Feb", improvement: 15 },
    YieldPoint { month: "Mar", improvement: 18 },
    YieldPoint { month: "Apr", improvement: 22 },
    YieldPoint { month: "May", improvement: 25 },
    YieldPoint { month: "Jun", improvement: 28 },
];

pub const CROP_HEALTH: [CropHealthShare; 3] = [
    CropHealthShare { band: HealthBand::Healthy, name: Localized::new("Healthy", "स्वस्थ"), value: 68 },
    CropHealthShare { band: HealthBand::Warning, name: Localized::new("Warning", "चेतावनी"), value: 22 },
    CropHealthShare { band: HealthBand::Critical, name: Localized::new("Critical", "गंभीर"), value: 10 },
];

pub const SUSTAINABILITY: [SustainabilityMetric; 4] = [
    SustainabilityMetric { metric: Localized::new("Water Savings", "पानी की बचत"), value: 25 },
    SustainabilityMetric { metric: Localized::new("Chemical Reduction", "रसायन कमी"), value: 18 },
    SustainabilityMetric { metric: Localized::new("Carbon Footprint", "कार्बन फुटप्रिंट"), value: -15 },
    SustainabilityMetric { metric: Localized::new("Soil Health", "मिट्टी स्वास्थ्य"), value: 32 },
];

pub const SUMMARY: [SummaryCard; 3] = [
    SummaryCard { title: "gov.registered_farmers", value: 25_467, growth: 12 },
    SummaryCard { title: "gov.active_users", value: 18_934, growth: 8 },
    SummaryCard { title: "gov.crop_analyses", value: 5_678, growth: 15 },
];

pub const ADVISORIES: [Advisory; 2] = [
    Advisory {
        title: Localized::new("Pre-Monsoon Preparation", "मानसून पूर्व तैयारी"),
        date: "2024-03-15",
        kind: Localized::new("Weather", "मौसम"),
        reach: "2.5M farmers",
    },
    Advisory {
        title: Localized::new("PM-KISAN Scheme Update", "PM-KISAN योजना अपडेट"),
        date: "2024-03-12",
        kind: Localized::new("Scheme", "योजना"),
        reach: "1.8M farmers",
    },
];

/// State filter options; the first entry keeps every row.
pub const STATES: &[Choice] = &[
    Choice::new("all", Localized::new("All States", "सभी राज्य")),
    Choice::new("punjab", Localized::same("Punjab")),
    Choice::new("gujarat", Localized::same("Gujarat")),
    Choice::new("maharashtra", Localized::same("Maharashtra")),
    Choice::new("karnataka", Localized::same("Karnataka")),
    Choice::new("tamil nadu", Localized::same("Tamil Nadu")),
];

pub const ADVISORY_TYPES: &[Choice] = &[
    Choice::new("weather", Localized::new("Weather", "मौसम")),
    Choice::new("pest", Localized::new("Pest", "कीट")),
    Choice::new("scheme", Localized::new("Scheme", "योजना")),
    Choice::new("general", Localized::new("General", "सामान्य")),
];

/// Rows of the detailed table for a state filter value; `all` keeps every row.
pub fn adoption_for(filter: &str) -> Vec<&'static AdoptionStat> {
    ADOPTION
        .iter()
        .filter(|stat| filter == "all" || matches_filter(stat.state, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_health_shares_sum_to_hundred() {
        let total: u16 = CROP_HEALTH.iter().map(|share| share.value).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_adoption_filter() {
        assert_eq!(adoption_for("all").len(), ADOPTION.len());
        let punjab = adoption_for("punjab");
        assert_eq!(punjab.len(), 1);
        assert_eq!(punjab[0].state, "Punjab");
        assert!(adoption_for("atlantis").is_empty());
        for choice in &STATES[1..] {
            assert_eq!(adoption_for(choice.value).len(), 1, "{}", choice.value);
        }
    }

    #[test]
    fn test_satisfaction_is_out_of_five() {
        assert!(ADOPTION.iter().all(|stat| stat.satisfaction_tenths <= 50));
    }
}
