//! Literal datasets standing in for a data service. Nothing here is stored
//! or shared; views read the constants directly on every frame.

pub mod admin;
pub mod extension;
pub mod farmer;
pub mod government;
pub mod ngo;
pub mod startup;

use crate::types::{Language, Localized, Role, Session};

#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub text: Localized,
    pub time: &'static str,
}

/// Lifecycle badge shared by programs, distributions, integrations and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Upcoming,
    Completed,
    Scheduled,
    Active,
    Testing,
    Pending,
    Approved,
    Reviewed,
}

impl Status {
    pub fn label(self) -> Localized {
        match self {
            Status::Upcoming => Localized::new("Upcoming", "आगामी"),
            Status::Completed => Localized::new("Completed", "पूर्ण"),
            Status::Scheduled => Localized::new("Scheduled", "निर्धारित"),
            Status::Active => Localized::new("active", "सक्रिय"),
            Status::Testing => Localized::new("testing", "परीक्षण"),
            Status::Pending => Localized::new("pending", "लंबित"),
            Status::Approved => Localized::new("approved", "स्वीकृत"),
            Status::Reviewed => Localized::new("reviewed", "समीक्षित"),
        }
    }

    /// Finished or live entries; drives the badge colour.
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            Status::Completed | Status::Active | Status::Approved | Status::Reviewed
        )
    }
}

/// A selectable form option: submitted value plus localized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: Localized,
}

impl Choice {
    pub const fn new(value: &'static str, label: Localized) -> Self {
        Self { value, label }
    }
}

/// One entry of the landing page role picker.
#[derive(Debug, Clone, Copy)]
pub struct RoleCard {
    pub role: Role,
    pub title: Localized,
    pub description: Localized,
    pub features: [Localized; 4],
    pub popular: bool,
}

pub const ROLE_CARDS: [RoleCard; 6] = [
    RoleCard {
        role: Role::Farmer,
        title: Localized::new("Small & Marginal Farmers", "छोटे और सीमांत किसान"),
        description: Localized::new(
            "Get personalized farming guidance, crop analysis, and real-time weather alerts",
            "व्यक्तिगत कृषि मार्गदर्शन, फसल विश्लेषण और तत्काल मौसम अलर्ट प्राप्त करें",
        ),
        features: [
            Localized::new("Crop Analysis", "फसल विश्लेषण"),
            Localized::new("Weather Alerts", "मौसम चेतावनी"),
            Localized::new("Voice Assistant", "आवाज सहायक"),
            Localized::new("Market Prices", "बाजार भाव"),
        ],
        popular: true,
    },
    RoleCard {
        role: Role::ExtensionOfficer,
        title: Localized::new("Agricultural Extension Officers", "कृषि विस्तार अधिकारी"),
        description: Localized::new(
            "Support farmers with expert advice, monitor regional trends, and push alerts",
            "किसानों को विशेषज्ञ सलाह दें, क्षेत्रीय रुझान देखें और अलर्ट भेजें",
        ),
        features: [
            Localized::new("Expert Dashboard", "विशेषज्ञ डैशबोर्ड"),
            Localized::new("Farmer Monitoring", "किसान निगरानी"),
            Localized::new("Regional Alerts", "क्षेत्रीय अलर्ट"),
            Localized::new("Training Tools", "प्रशिक्षण उपकरण"),
        ],
        popular: false,
    },
    RoleCard {
        role: Role::Government,
        title: Localized::new("Government Agriculture Departments", "सरकारी कृषि विभाग"),
        description: Localized::new(
            "Access regional data, analyze adoption rates, and push policy initiatives",
            "क्षेत्रीय डेटा एक्सेस करें, अपनाव दर का विश्लेषण करें और नीति पहल करें",
        ),
        features: [
            Localized::new("Regional Analytics", "क्षेत्रीय विश्लेषण"),
            Localized::new("Policy Tools", "नीति उपकरण"),
            Localized::new("Usage Metrics", "उपयोग मेट्रिक्स"),
            Localized::new("Impact Assessment", "प्रभाव आकलन"),
        ],
        popular: false,
    },
    RoleCard {
        role: Role::Ngo,
        title: Localized::new("NGOs & Cooperatives", "एनजीओ और सहकारी समितियां"),
        description: Localized::new(
            "Help farmers onboard, track community impact, and organize training sessions",
            "किसानों को जोड़ने में मदद करें, सामुदायिक प्रभाव ट्रैक करें और प्रशिक्षण आयोजित करें",
        ),
        features: [
            Localized::new("Community Management", "समुदायिक प्रबंधन"),
            Localized::new("Impact Tracking", "प्रभाव ट्रैकिंग"),
            Localized::new("Resource Distribution", "संसाधन वितरण"),
            Localized::new("Training Sessions", "प्रशिक्षण सत्र"),
        ],
        popular: false,
    },
    RoleCard {
        role: Role::Startup,
        title: Localized::new("Agri-Tech Startups", "एग्री-टेक स्टार्टअप"),
        description: Localized::new(
            "Integrate your tools, analyze user feedback, and collaborate with experts",
            "अपने उपकरण एकीकृत करें, उपयोगकर्ता फीडबैक का विश्लेषण करें और विशेषज्ञों के साथ सहयोग करें",
        ),
        features: [
            Localized::new("API Integration", "API एकीकरण"),
            Localized::new("User Analytics", "उपयोगकर्ता विश्लेषण"),
            Localized::new("Collaboration Tools", "सहयोग उपकरण"),
            Localized::new("Product Testing", "उत्पाद परीक्षण"),
        ],
        popular: false,
    },
    RoleCard {
        role: Role::Admin,
        title: Localized::new("Admins (Your Team)", "व्यवस्थापक (आपकी टीम)"),
        description: Localized::new(
            "Manage users, moderate content, monitor system performance, and push updates",
            "उपयोगकर्ताओं का प्रबंधन करें, सामग्री की निगरानी करें, सिस्टम प्रदर्शन देखें और अपडेट करें",
        ),
        features: [
            Localized::new("User Management", "उपयोगकर्ता प्रबंधन"),
            Localized::new("Content Moderation", "सामग्री निगरानी"),
            Localized::new("System Monitoring", "सिस्टम निगरानी"),
            Localized::new("Feature Updates", "फीचर अपडेट"),
        ],
        popular: false,
    },
];

pub fn role_card(role: Role) -> &'static RoleCard {
    match role {
        Role::Farmer => &ROLE_CARDS[0],
        Role::ExtensionOfficer => &ROLE_CARDS[1],
        Role::Government => &ROLE_CARDS[2],
        Role::Ngo => &ROLE_CARDS[3],
        Role::Startup => &ROLE_CARDS[4],
        Role::Admin => &ROLE_CARDS[5],
    }
}

pub const USER_NAME: Localized = Localized::new("Ram Kumar", "राम कुमार");

/// The demo user synthesized when a role is picked on the landing page.
pub fn mock_user(role: Role, language: Language) -> Session {
    Session {
        user_id: 1,
        display_name: USER_NAME.get(language).to_string(),
        phone_number: "+91 9876543210".to_string(),
        role,
        location_label: "Punjab, India".to_string(),
        language_preference: language,
        farm_size: "5 acres".to_string(),
        crops: vec!["wheat".into(), "rice".into(), "sugarcane".into()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_cards_cover_every_role() {
        for role in Role::ALL {
            assert_eq!(role_card(role).role, role);
        }
        assert_eq!(ROLE_CARDS.iter().filter(|card| card.popular).count(), 1);
    }

    #[test]
    fn test_mock_user_is_localized() {
        let user = mock_user(Role::Ngo, Language::Hi);
        assert_eq!(user.display_name, "राम कुमार");
        assert_eq!(user.role, Role::Ngo);
        assert_eq!(mock_user(Role::Ngo, Language::En).display_name, "Ram Kumar");
    }
}
