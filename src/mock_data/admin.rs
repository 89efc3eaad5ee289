use super::{Activity, Choice, Status};
use crate::types::Localized;

#[derive(Debug, Clone, Copy)]
pub struct GrowthPoint {
    pub month: &'static str,
    pub farmers: u64,
    pub officers: u64,
    pub government: u64,
    pub ngo: u64,
    pub startup: u64,
    pub admin: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct PerformancePoint {
    pub time: &'static str,
    pub cpu: u32,
    pub memory: u32,
    pub disk: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct UserTypeCount {
    pub kind: Localized,
    pub count: u64,
    /// Share of all users, in tenths of a percent.
    pub share_tenths: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct ContentReport {
    pub kind: Localized,
    pub reporter: &'static str,
    pub reported: &'static str,
    pub status: Status,
    pub date: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy)]
pub struct SystemAlert {
    pub alert: Localized,
    pub severity: Severity,
    pub time: &'static str,
}

pub const TOTAL_USERS: &str = "96.4K";
pub const USER_GROWTH_NOTE: &str = "+12.5%";
pub const SYSTEM_UPTIME: &str = "99.8%";
pub const ACTIVE_REPORTS: u32 = 23;
pub const SERVER_HEALTH: &str = "92%";

pub const PENDING_REPORTS: u32 = 23;
pub const REVIEWED_TODAY: u32 = 47;
pub const REMOVED_CONTENT: u32 = 12;

pub const USER_GROWTH: [GrowthPoint; 6] = [
    GrowthPoint { month: "Jan", farmers: 15_000, officers: 250, government: 45, ngo: 120, startup: 35, admin: 12 },
    GrowthPoint { month: "Feb", farmers: 22_000, officers: 310, government: 52, ngo: 145, startup: 42, admin: 15 },
    GrowthPoint { month: "Mar", farmers: 35_000, officers: 380, government: 58, ngo: 178, startup: 48, admin: 18 },
    GrowthPoint { month: "Apr", farmers: 48_000, officers: 425, government: 63, ngo: 205, startup: 55, admin: 22 },
    GrowthPoint { month: "May", farmers: 67_000, officers: 498, government: 71, ngo: 234, startup: 62, admin: 25 },
    GrowthPoint { month: "Jun", farmers: 89_000, officers: 567, government: 78, ngo: 267, startup: 71, admin: 28 },
];

pub const SYSTEM_PERFORMANCE: [PerformancePoint; 6] = [
    PerformancePoint { time: "00:00", cpu: 45, memory: 62, disk: 78 },
    PerformancePoint { time: "04:00", cpu: 38, memory: 58, disk: 79 },
    PerformancePoint { time: "08:00", cpu: 72, memory: 84, disk: 81 },
    PerformancePoint { time: "12:00", cpu: 65, memory: 79, disk: 82 },
    PerformancePoint { time: "16:00", cpu: 58, memory: 71, disk: 83 },
    PerformancePoint { time: "20:00", cpu: 42, memory: 65, disk: 84 },
];

pub const USERS_BY_TYPE: [UserTypeCount; 6] = [
    UserTypeCount { kind: Localized::new("Farmers", "किसान"), count: 89_000, share_tenths: 923 },
    UserTypeCount { kind: Localized::new("Extension Officers", "विस्तार अधिकारी"), count: 567, share_tenths: 6 },
    UserTypeCount { kind: Localized::new("Government", "सरकारी"), count: 78, share_tenths: 1 },
    UserTypeCount { kind: Localized::new("NGOs", "एनजीओ"), count: 267, share_tenths: 3 },
    UserTypeCount { kind: Localized::new("Startups", "स्टार्टअप"), count: 71, share_tenths: 1 },
    UserTypeCount { kind: Localized::new("Admins", "व्यवस्थापक"), count: 28, share_tenths: 0 },
];

pub const REPORTS: [ContentReport; 2] = [
    ContentReport {
        kind: Localized::new("Inappropriate Content", "अनुचित सामग्री"),
        reporter: "User #1234",
        reported: "Community Post",
        status: Status::Pending,
        date: "2024-03-20",
    },
    ContentReport {
        kind: Localized::new("Spam", "स्पैम"),
        reporter: "User #5678",
        reported: "Training Video",
        status: Status::Reviewed,
        date: "2024-03-19",
    },
];

pub const ACTIVITIES: [Activity; 3] = [
    Activity {
        text: Localized::new("1,247 new farmers registered", "1,247 नए किसान पंजीकृत हुए"),
        time: "2 hours ago",
    },
    Activity {
        text: Localized::new("System backup completed", "सिस्टम बैकअप पूरा हुआ"),
        time: "4 hours ago",
    },
    Activity {
        text: Localized::new("15 content reports reviewed", "15 सामग्री रिपोर्ट की समीक्षा की गई"),
        time: "6 hours ago",
    },
];

pub const SYSTEM_ALERTS: [SystemAlert; 2] = [
    SystemAlert {
        alert: Localized::new("High CPU usage (85%)", "उच्च CPU उपयोग (85%)"),
        severity: Severity::Warning,
        time: "30 minutes ago",
    },
    SystemAlert {
        alert: Localized::new("Slow database connections", "डेटाबेस कनेक्शन धीमा"),
        severity: Severity::Info,
        time: "2 hours ago",
    },
];

pub const USER_TYPES: &[Choice] = &[
    Choice::new("farmer", Localized::new("Farmer", "किसान")),
    Choice::new("officer", Localized::new("Officer", "अधिकारी")),
    Choice::new("government", Localized::new("Government", "सरकारी")),
    Choice::new("ngo", Localized::same("NGO")),
    Choice::new("startup", Localized::same("Startup")),
];

pub const AUDIENCES: &[Choice] = &[
    Choice::new("all", Localized::new("All Users", "सभी उपयोगकर्ता")),
    Choice::new("farmers", Localized::new("Farmers Only", "केवल किसान")),
    Choice::new("officers", Localized::new("Officers Only", "केवल अधिकारी")),
];

impl GrowthPoint {
    pub fn total(&self) -> u64 {
        self.farmers + self.officers + self.government + self.ngo + self.startup + self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_growth_matches_user_counts() {
        let latest = USER_GROWTH[USER_GROWTH.len() - 1];
        assert_eq!(latest.farmers, USERS_BY_TYPE[0].count);
        assert_eq!(latest.admin, USERS_BY_TYPE[5].count);
        assert_eq!(latest.total(), 90_011);
    }

    #[test]
    fn test_performance_is_percent() {
        for point in SYSTEM_PERFORMANCE {
            assert!(point.cpu <= 100 && point.memory <= 100 && point.disk <= 100);
        }
    }
}
