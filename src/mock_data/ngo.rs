use super::{Activity, Choice, Status};
use crate::types::Localized;

#[derive(Debug, Clone, Copy)]
pub struct ImpactMetric {
    pub metric: Localized,
    pub value: u32,
    pub target: u32,
}

impl ImpactMetric {
    /// Progress towards the target, capped at 100.
    pub fn percent_of_target(&self) -> u16 {
        if self.target == 0 {
            return 100;
        }
        ((self.value * 100) / self.target).min(100) as u16
    }

    pub fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.value)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TrainingProgram {
    pub name: Localized,
    pub date: &'static str,
    pub participants: u32,
    pub location: &'static str,
    pub status: Status,
}

#[derive(Debug, Clone, Copy)]
pub struct Distribution {
    pub resource: Localized,
    pub quantity: &'static str,
    pub beneficiaries: u32,
    pub date: &'static str,
    pub status: Status,
}

pub const FARMERS_ONBOARDED: u64 = 1_247;
pub const TRAINING_PROGRAMS: u32 = 24;
pub const RESOURCES_DISTRIBUTED: u64 = 5_678;
pub const IMPACT_SCORE: &str = "8.2";

pub const IMPACT: [ImpactMetric; 4] = [
    ImpactMetric { metric: Localized::new("Yield Improvement", "उत्पादन में सुधार"), value: 32, target: 40 },
    ImpactMetric { metric: Localized::new("Income Increase", "आय वृद्धि"), value: 28, target: 35 },
    ImpactMetric { metric: Localized::new("Sustainability Adoption", "स्थिरता अपनाव"), value: 45, target: 50 },
    ImpactMetric { metric: Localized::new("Women Empowerment", "महिला सशक्तिकरण"), value: 38, target: 45 },
];

pub const PROGRAMS: [TrainingProgram; 2] = [
    TrainingProgram {
        name: Localized::new("Organic Farming Training", "जैविक खेती प्रशिक्षण"),
        date: "2024-03-20",
        participants: 45,
        location: "Village Community Center",
        status: Status::Upcoming,
    },
    TrainingProgram {
        name: Localized::new("Women Farmer Empowerment", "महिला किसान सशक्तिकरण"),
        date: "2024-03-15",
        participants: 32,
        location: "District Hall",
        status: Status::Completed,
    },
];

pub const DISTRIBUTIONS: [Distribution; 2] = [
    Distribution {
        resource: Localized::new("Seed Distribution", "बीज वितरण"),
        quantity: "500 kg",
        beneficiaries: 125,
        date: "2024-03-10",
        status: Status::Completed,
    },
    Distribution {
        resource: Localized::new("Irrigation Equipment", "सिंचाई उपकरण"),
        quantity: "25 units",
        beneficiaries: 50,
        date: "2024-03-18",
        status: Status::Scheduled,
    },
];

pub const ACTIVITIES: [Activity; 2] = [
    Activity {
        text: Localized::new(
            "Trained 45 farmers in organic farming",
            "45 किसानों को जैविक खेती का प्रशिक्षण दिया",
        ),
        time: "2 hours ago",
    },
    Activity {
        text: Localized::new(
            "Distributed seeds to 125 farmer families",
            "125 किसान परिवारों में बीज वितरित किए",
        ),
        time: "1 day ago",
    },
];

pub const RESOURCE_TYPES: &[Choice] = &[
    Choice::new("seeds", Localized::new("Seeds", "बीज")),
    Choice::new("fertilizer", Localized::new("Fertilizer", "उर्वरक")),
    Choice::new("equipment", Localized::new("Equipment", "उपकरण")),
    Choice::new("tools", Localized::new("Tools", "औजार")),
];

pub fn upcoming_programs() -> impl Iterator<Item = &'static TrainingProgram> {
    PROGRAMS.iter().filter(|program| program.status == Status::Upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_progress() {
        let yield_metric = &IMPACT[0];
        assert_eq!(yield_metric.percent_of_target(), 80);
        assert_eq!(yield_metric.remaining(), 8);
        let overshoot = ImpactMetric { metric: Localized::same("x"), value: 60, target: 50 };
        assert_eq!(overshoot.percent_of_target(), 100);
        assert_eq!(overshoot.remaining(), 0);
    }

    #[test]
    fn test_upcoming_programs_only() {
        let upcoming: Vec<_> = upcoming_programs().collect();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name.en, "Organic Farming Training");
    }
}
