use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::Language;

/// `(key, english, hindi)`. Order only matters for readability.
const ENTRIES: &[(&str, &str, &str)] = &[
    // Application
    ("app.name", "KrishiMitra", "कृषिमित्र"),
    ("app.tagline", "Smart Farming Assistant", "स्मार्ट फार्मिंग सहायक"),
    // Landing
    ("landing.tagline", "Smart Farming Assistant for Everyone", "सभी के लिए स्मार्ट फार्मिंग सहायक"),
    ("landing.subtitle", "Empowering the entire agricultural ecosystem with AI-powered insights", "AI-संचालित अंतर्दृष्टि के साथ पूरे कृषि पारिस्थितिकी तंत्र को सशक्त बनाना"),
    ("landing.choose_role", "Choose Your Role", "अपनी भूमिका चुनें"),
    ("landing.demo_login", "Demo Login - Pick any user type to continue", "डेमो लॉगिन - जारी रखने के लिए कोई भी उपयोगकर्ता प्रकार चुनें"),
    ("landing.features", "Key Features", "मुख्य विशेषताएं"),
    ("landing.get_started", "Get Started", "शुरू करें"),
    ("landing.popular", "Most Popular", "सबसे लोकप्रिय"),
    ("landing.trusted_by", "Trusted by 10,000+ farmers across India", "भारत भर के 10,000+ किसानों द्वारा भरोसा"),
    ("landing.footer", "Committed to making every farmer successful", "प्रत्येक किसान को सफल बनाने के लिए प्रतिबद्ध"),
    ("landing.help", "↑↓ choose role • Enter get started • l language • q quit", "↑↓ भूमिका चुनें • Enter शुरू करें • l भाषा • q बाहर"),
    // Navigation
    ("tab.dashboard", "Dashboard", "डैशबोर्ड"),
    ("tab.analysis", "Crop Analysis", "फसल विश्लेषण"),
    ("tab.community", "Community", "समुदाय"),
    ("tab.chatbot", "Chatbot", "चैटबॉट"),
    ("tab.feedback", "Feedback", "फीडबैक"),
    ("tab.profile", "Profile", "प्रोफ़ाइल"),
    ("tab.monitoring", "Monitoring", "निगरानी"),
    ("tab.alerts", "Alerts", "अलर्ट"),
    ("tab.training", "Training", "प्रशिक्षण"),
    ("tab.analytics", "Analytics", "विश्लेषण"),
    ("tab.advisories", "Advisories", "सलाह"),
    ("tab.impact", "Impact", "प्रभाव"),
    ("tab.programs", "Programs", "कार्यक्रम"),
    ("tab.resources", "Resources", "संसाधन"),
    ("tab.integration", "Integration", "एकीकरण"),
    ("tab.testing", "Testing", "परीक्षण"),
    ("tab.users", "Users", "उपयोगकर्ता"),
    ("tab.content", "Content", "सामग्री"),
    ("tab.system", "System", "सिस्टम"),
    // Header and footer
    ("header.logout", "Logout", "लॉग आउट"),
    ("header.dark_mode", "Dark Mode", "डार्क मोड"),
    ("header.light_mode", "Light Mode", "लाइट मोड"),
    ("header.voice", "Voice", "आवाज"),
    ("header.listening", "Listening...", "सुन रहे हैं..."),
    ("help.main", "Tab next • 1-6 jump • e edit • v voice • l language • d theme • o logout • q quit", "Tab अगला • 1-6 टैब • e लिखें • v आवाज • l भाषा • d थीम • o लॉग आउट • q बाहर"),
    ("help.editing", "Enter submit • Tab next field • ←→ choose • Esc done", "Enter भेजें • Tab अगला फ़ील्ड • ←→ चुनें • Esc पूरा"),
    // Notifications
    ("notify.logged_in", "Successfully logged in", "सफलतापूर्वक लॉगिन हुए"),
    ("notify.logged_out", "Successfully logged out", "सफलतापूर्वक लॉग आउट हुए"),
    ("notify.dark_on", "Dark mode enabled", "डार्क मोड चालू"),
    ("notify.light_on", "Light mode enabled", "लाइट मोड चालू"),
    ("notify.voice_unsupported", "Voice recognition not supported", "आवाज पहचान समर्थित नहीं है"),
    ("notify.voice_failed", "Voice recognition failed", "आवाज पहचान विफल रही"),
    ("notify.phone_required", "Please enter a valid phone number", "कृपया सही फोन नंबर डालें"),
    ("notify.whatsapp_connected", "Connected to WhatsApp!", "व्हाट्सऐप से जुड़ गया!"),
    ("notify.test_sent", "Test message sent", "टेस्ट मैसेज भेजा गया"),
    ("notify.whatsapp_disconnected", "Disconnected from WhatsApp", "व्हाट्सऐप से डिस्कनेक्ट हो गया"),
    ("notify.field_required", "Please fill in", "कृपया भरें"),
    ("notify.not_image", "Please choose an image file", "कृपया एक छवि फ़ाइल चुनें"),
    ("notify.image_unreadable", "Could not read the image", "छवि पढ़ी नहीं जा सकी"),
    ("notify.feedback_thanks", "Thank you for your feedback!", "आपके फीडबैक के लिए धन्यवाद!"),
    ("notify.response_sent", "Response sent to farmer", "किसान को उत्तर भेजा गया"),
    ("notify.alert_sent", "Regional alert sent", "क्षेत्रीय अलर्ट भेजा गया"),
    ("notify.material_uploaded", "Training material uploaded", "प्रशिक्षण सामग्री अपलोड हुई"),
    ("notify.advisory_published", "Advisory published", "सलाह प्रकाशित हुई"),
    ("notify.program_scheduled", "Program scheduled", "कार्यक्रम निर्धारित हुआ"),
    ("notify.distribution_scheduled", "Distribution scheduled", "वितरण निर्धारित हुआ"),
    ("notify.integration_saved", "Integration saved", "एकीकरण सहेजा गया"),
    ("notify.announcement_published", "Announcement published", "घोषणा प्रकाशित हुई"),
    ("notify.install_accepted", "App installed", "ऐप इंस्टॉल हो गया"),
    ("notify.install_failed", "Could not install the app", "ऐप इंस्टॉल नहीं हो सका"),
    // Banners
    ("banner.offline", "You are offline. Some features may be limited.", "आप ऑफ़लाइन हैं। कुछ सुविधाएं सीमित हो सकती हैं।"),
    ("banner.restored", "Connection restored. All features are now available.", "कनेक्शन बहाल। सभी सुविधाएं अब उपलब्ध हैं।"),
    ("banner.install", "Install KrishiMitra for quick offline access to farming tools and recommendations.", "खेती के उपकरणों और सुझावों तक त्वरित पहुंच के लिए कृषिमित्र इंस्टॉल करें।"),
    ("banner.install_keys", "I install • L later", "I इंस्टॉल • L बाद में"),
    // Shared
    ("common.welcome", "Welcome", "स्वागत"),
    ("common.active", "Active", "सक्रिय"),
    ("common.recent_activities", "Recent Activities", "हाल की गतिविधियां"),
    ("common.edit_hint", "Press e to fill in the form", "फ़ॉर्म भरने के लिए e दबाएं"),
    ("common.select", "Select", "चुनें"),
    ("common.too_small", "Terminal too small, please resize", "टर्मिनल बहुत छोटा है, कृपया आकार बढ़ाएं"),
    // Farmer
    ("farmer.todays_weather", "Today's Weather", "आज का मौसम"),
    ("farmer.personalized_suggestions", "Personalized Suggestions", "व्यक्तिगत सुझाव"),
    ("farmer.recent_alerts", "Recent Alerts", "हाल की चेतावनी"),
    ("farmer.active_crops", "Active Crops", "सक्रिय फसलें"),
    ("farmer.new_alerts", "New Alerts", "नई अलर्ट"),
    ("farmer.community_posts", "Community Posts", "सामुदायिक पोस्ट"),
    ("farmer.market_prices", "Market Prices", "बाजार भाव"),
    ("farmer.upload_image", "Upload Image", "छवि अपलोड करें"),
    ("farmer.image_path", "Image path", "छवि का पथ"),
    ("farmer.image_hint", "Press e and type the path of a crop photo", "e दबाएं और फसल की फोटो का पथ लिखें"),
    ("farmer.analyzing", "Analyzing...", "विश्लेषण कर रहे हैं..."),
    ("farmer.crop_health", "Crop Health", "फसल स्वास्थ्य"),
    ("farmer.detected_issue", "Detected Issue", "पहचान की गई समस्या"),
    ("farmer.confidence", "Confidence", "विश्वसनीयता"),
    ("farmer.recommendations", "Recommendations", "सुझाव"),
    ("farmer.uploaded", "Uploaded", "अपलोड की गई"),
    ("farmer.expert", "Expert", "विशेषज्ञ"),
    ("farmer.likes", "likes", "पसंद"),
    ("farmer.replies", "replies", "जवाब"),
    ("farmer.ask_question", "Ask a question...", "प्रश्न पूछें..."),
    ("farmer.chat_empty", "Ask anything about your crops, weather or market prices.", "अपनी फसल, मौसम या बाजार भाव के बारे में कुछ भी पूछें।"),
    ("farmer.you", "You", "आप"),
    ("farmer.assistant", "Assistant", "सहायक"),
    ("farmer.feedback", "Your feedback", "आपका फीडबैक"),
    ("farmer.feedback_placeholder", "Share your experience with the app...", "ऐप के साथ अपना अनुभव साझा करें..."),
    ("farmer.submit_feedback", "Submit Feedback", "फीडबैक सबमिट करें"),
    // Recommendation engine
    ("ai.title", "AI-Powered Recommendations", "AI-संचालित सुझाव"),
    ("ai.analyzing", "Analyzing your farm data...", "आपके खेत का डेटा विश्लेषण कर रहे हैं..."),
    ("ai.confidence", "Confidence Level", "विश्वसनीयता स्तर"),
    ("ai.factors", "Key Factors Analyzed", "मुख्य विश्लेषित कारक"),
    ("ai.weather", "Weather Patterns", "मौसम पैटर्न"),
    ("ai.soil", "Soil Conditions", "मिट्टी की स्थिति"),
    ("ai.market", "Market Trends", "बाजार ट्रेंड्स"),
    ("ai.seasonal", "Seasonal Patterns", "मौसमी पैटर्न"),
    ("ai.water_availability", "Water Availability", "पानी की उपलब्धता"),
    ("ai.priority", "Priority", "प्राथमिकता"),
    ("ai.expected", "Expected", "अपेक्षित"),
    ("ai.implementation", "Implementation", "कार्यान्वयन"),
    // Profile and WhatsApp
    ("profile.title", "Profile", "प्रोफ़ाइल"),
    ("profile.name", "Name", "नाम"),
    ("profile.phone", "Phone", "फोन"),
    ("profile.location", "Location", "स्थान"),
    ("profile.role", "Role", "भूमिका"),
    ("profile.language", "Language", "भाषा"),
    ("profile.farm", "Farm", "खेत"),
    ("whatsapp.title", "WhatsApp Integration", "व्हाट्सऐप एकीकरण"),
    ("whatsapp.subtitle", "Get farming tips and alerts on WhatsApp", "व्हाट्सऐप पर खेती की जानकारी और अलर्ट पाएं"),
    ("whatsapp.enter_phone", "Enter your WhatsApp number", "अपना व्हाट्सऐप नंबर डालें"),
    ("whatsapp.connect", "Connect WhatsApp", "व्हाट्सऐप कनेक्ट करें"),
    ("whatsapp.connecting", "Connecting...", "कनेक्ट हो रहा है..."),
    ("whatsapp.connected", "Connected to WhatsApp", "व्हाट्सऐप से जुड़ा हुआ"),
    ("whatsapp.keys", "t send test message • x disconnect", "t टेस्ट मैसेज भेजें • x डिस्कनेक्ट करें"),
    ("whatsapp.sub_weather", "Daily weather updates at 7 AM", "मौसम अपडेट्स रोज सुबह 7 बजे"),
    ("whatsapp.sub_crop", "Crop recommendations twice a week", "फसल की सलाह हफ्ते में दो बार"),
    ("whatsapp.sub_pest", "Instant pest alerts", "तत्काल कीट चेतावनी"),
    ("whatsapp.test_message", "Hello from KrishiMitra! 🌱 Your farming assistant is now connected.", "कृषिमित्र की तरफ से नमस्ते! 🌱 आपका कृषि सहायक अब कनेक्ट हो गया है।"),
    // Extension officer
    ("ext.welcome", "Welcome, Expert", "स्वागत, विशेषज्ञ"),
    ("ext.subtitle", "Agricultural Extension Officer", "कृषि विस्तार अधिकारी"),
    ("ext.total_farmers", "Total Farmers", "कुल किसान"),
    ("ext.active_queries", "Active Queries", "सक्रिय प्रश्न"),
    ("ext.alerts_sent", "Alerts Sent", "भेजे गए अलर्ट"),
    ("ext.training_uploads", "Training Uploads", "प्रशिक्षण अपलोड"),
    ("ext.regional_data", "Regional Data", "क्षेत्रीय डेटा"),
    ("ext.region", "Region", "क्षेत्र"),
    ("ext.queries", "Queries", "प्रश्न"),
    ("ext.alerts", "Alerts", "अलर्ट"),
    ("ext.farmer_queries", "Farmer Queries", "किसान प्रश्न"),
    ("ext.response", "Your response", "आपका उत्तर"),
    ("ext.respond", "Respond to Query", "प्रश्न का उत्तर दें"),
    ("ext.send_alert", "Send Regional Alert", "क्षेत्रीय अलर्ट भेजें"),
    ("ext.select_region", "Select Region", "क्षेत्र चुनें"),
    ("ext.alert_message", "Alert Message", "अलर्ट संदेश"),
    ("ext.upload_training", "Upload Training Material", "प्रशिक्षण सामग्री अपलोड करें"),
    ("ext.material_type", "Training Material Type", "प्रशिक्षण सामग्री का प्रकार"),
    ("ext.material_title", "Title", "शीर्षक"),
    ("ext.material_description", "Description", "विवरण"),
    ("ext.recent_materials", "Recent Training Materials", "हाल की प्रशिक्षण सामग्री"),
    ("ext.views", "views", "बार देखा गया"),
    // Government
    ("gov.welcome", "Welcome, Government Official", "स्वागत, सरकारी अधिकारी"),
    ("gov.subtitle", "Agriculture Department Dashboard", "कृषि विभाग डैशबोर्ड"),
    ("gov.official", "Official", "आधिकारिक"),
    ("gov.total_farmers", "Total Farmers", "कुल किसान"),
    ("gov.active_schemes", "Active Schemes", "सक्रिय योजनाएं"),
    ("gov.advisories_issued", "Advisories Issued", "जारी सलाह"),
    ("gov.impact_score", "Impact Score", "प्रभाव स्कोर"),
    ("gov.crop_adoption", "Crop Adoption Rates", "फसल अपनाने की दर"),
    ("gov.crop_health_status", "Crop Health Status", "फसल स्वास्थ्य स्थिति"),
    ("gov.yield_improvement", "Yield Improvement", "उत्पादन में सुधार"),
    ("gov.sustainability", "Sustainability Metrics", "स्थिरता मेट्रिक्स"),
    ("gov.environmental_impact", "Environmental Impact", "पर्यावरणीय प्रभाव"),
    ("gov.regional_trends", "Regional Trends", "क्षेत्रीय ट्रेंड"),
    ("gov.select_state", "Select State", "राज्य चुनें"),
    ("gov.registered_farmers", "Total Registered Farmers", "कुल पंजीकृत किसान"),
    ("gov.active_users", "Active Users", "सक्रिय उपयोगकर्ता"),
    ("gov.crop_analyses", "Crop Analyses", "फसल विश्लेषण"),
    ("gov.from_last_month", "from last month", "पिछले महीने से"),
    ("gov.detailed_stats", "Detailed Statistics", "विस्तृत आंकड़े"),
    ("gov.state", "State", "राज्य"),
    ("gov.farmers", "Farmers", "किसान"),
    ("gov.adoption", "Adoption %", "अपनाव दर"),
    ("gov.satisfaction", "Satisfaction Score", "संतुष्टि स्कोर"),
    ("gov.issue_advisory", "Issue New Advisory", "नई सलाह जारी करें"),
    ("gov.advisory_type", "Advisory Type", "सलाह का प्रकार"),
    ("gov.advisory_content", "Advisory Content", "सलाह सामग्री"),
    ("gov.publish", "Publish Advisory", "सलाह प्रकाशित करें"),
    ("gov.recent_advisories", "Recent Advisories", "हाल की सलाह"),
    ("gov.reach", "Reach", "पहुंच"),
    // NGO
    ("ngo.welcome", "Welcome, Community Partner", "स्वागत, सामुदायिक साझेदार"),
    ("ngo.subtitle", "NGO & Cooperative Dashboard", "एनजीओ और सहकारी डैशबोर्ड"),
    ("ngo.farmers_onboarded", "Farmers Onboarded", "जुड़े किसान"),
    ("ngo.training_programs", "Training Programs", "प्रशिक्षण कार्यक्रम"),
    ("ngo.resources_distributed", "Resources Distributed", "वितरित संसाधन"),
    ("ngo.impact_score", "Community Impact Score", "सामुदायिक प्रभाव स्कोर"),
    ("ngo.impact_metrics", "Impact Metrics", "प्रभाव मेट्रिक्स"),
    ("ngo.to_target", "to target", "लक्ष्य तक"),
    ("ngo.upcoming_programs", "Upcoming Training Programs", "आगामी प्रशिक्षण कार्यक्रम"),
    ("ngo.participants", "participants", "प्रतिभागी"),
    ("ngo.create_program", "Create New Program", "नया कार्यक्रम बनाएं"),
    ("ngo.program_name", "Program Name", "कार्यक्रम का नाम"),
    ("ngo.target_farmers", "Target Farmers", "लक्षित किसान"),
    ("ngo.program_description", "Program Description", "कार्यक्रम विवरण"),
    ("ngo.date", "Date", "तारीख"),
    ("ngo.location", "Location", "स्थान"),
    ("ngo.schedule_program", "Schedule Program", "कार्यक्रम निर्धारित करें"),
    ("ngo.all_programs", "All Training Programs", "सभी प्रशिक्षण कार्यक्रम"),
    ("ngo.new_distribution", "Schedule New Distribution", "नया वितरण निर्धारित करें"),
    ("ngo.resource_type", "Resource Type", "संसाधन प्रकार"),
    ("ngo.quantity", "Quantity", "मात्रा"),
    ("ngo.distribution_center", "Distribution Center", "वितरण केंद्र"),
    ("ngo.distribution_date", "Distribution Date", "वितरण तारीख"),
    ("ngo.schedule_distribution", "Schedule Distribution", "वितरण निर्धारित करें"),
    ("ngo.distribution_history", "Distribution History", "वितरण इतिहास"),
    ("ngo.beneficiaries", "beneficiaries", "लाभार्थी"),
    // Startup
    ("st.welcome", "Welcome, Innovators", "स्वागत, इनोवेटर्स"),
    ("st.subtitle", "Agri-Tech Startup Dashboard", "एग्री-टेक स्टार्टअप डैशबोर्ड"),
    ("st.beta", "Beta", "बीटा"),
    ("st.api_integrations", "API Integrations", "API एकीकरण"),
    ("st.active_users", "Active Users", "सक्रिय उपयोगकर्ता"),
    ("st.feedback_score", "Feedback Score", "फीडबैक स्कोर"),
    ("st.testing_programs", "Testing Programs", "परीक्षण कार्यक्रम"),
    ("st.usage_analytics", "Usage Analytics", "उपयोग विश्लेषण"),
    ("st.users", "Users", "उपयोगकर्ता"),
    ("st.api_calls", "API Calls", "API कॉल"),
    ("st.user_feedback", "User Feedback", "उपयोगकर्ता फीडबैक"),
    ("st.responses", "responses", "प्रतिक्रियाएं"),
    ("st.active_integrations", "Active Integrations", "सक्रिय एकीकरण"),
    ("st.calls", "calls", "कॉल"),
    ("st.uptime", "uptime", "अपटाइम"),
    ("st.integrate_api", "Integrate New API", "नया API एकीकृत करें"),
    ("st.api_name", "API Name", "API नाम"),
    ("st.api_type", "API Type", "API प्रकार"),
    ("st.api_endpoint", "API Endpoint", "API एंडपॉइंट"),
    ("st.api_key", "API Key", "API कुंजी"),
    ("st.test_data", "Test Data", "परीक्षण डेटा"),
    ("st.api_documentation", "API Documentation", "API दस्तावेज़"),
    ("st.performance_metrics", "Performance Metrics", "प्रदर्शन मेट्रिक्स"),
    ("st.collaboration_requests", "Collaboration Requests", "सहयोग अनुरोध"),
    ("st.product_testing", "Product Testing", "उत्पाद परीक्षण"),
    // Admin
    ("adm.welcome", "Welcome, System Admin", "स्वागत, सिस्टम एडमिन"),
    ("adm.subtitle", "Platform Administration Dashboard", "प्लेटफ़ॉर्म प्रशासन डैशबोर्ड"),
    ("adm.super_admin", "Super Admin", "सुपर एडमिन"),
    ("adm.total_users", "Total Users", "कुल उपयोगकर्ता"),
    ("adm.system_uptime", "System Uptime", "सिस्टम अपटाइम"),
    ("adm.active_reports", "Active Reports", "सक्रिय रिपोर्ट"),
    ("adm.server_health", "Server Health", "सर्वर स्वास्थ्य"),
    ("adm.user_growth", "User Growth", "उपयोगकर्ता वृद्धि"),
    ("adm.system_performance", "System Performance", "सिस्टम प्रदर्शन"),
    ("adm.system_alerts", "System Alerts", "सिस्टम अलर्ट"),
    ("adm.user_statistics", "User Statistics", "उपयोगकर्ता आंकड़े"),
    ("adm.user_actions", "User Actions", "उपयोगकर्ता कार्य"),
    ("adm.user_type", "User Type", "उपयोगकर्ता प्रकार"),
    ("adm.user_id", "User ID", "उपयोगकर्ता ID"),
    ("adm.target_users", "Target Users", "लक्षित उपयोगकर्ता"),
    ("adm.announcement_text", "Announcement Text", "घोषणा टेक्स्ट"),
    ("adm.create_announcement", "Create Announcement", "घोषणा बनाएं"),
    ("adm.moderation_queue", "Content Moderation Queue", "सामग्री निगरानी कतार"),
    ("adm.reporter", "Reporter", "रिपोर्टर"),
    ("adm.content", "Content", "सामग्री"),
    ("adm.pending_reports", "Pending Reports", "लंबित रिपोर्ट"),
    ("adm.reviewed_today", "Reviewed Today", "आज की समीक्षा"),
    ("adm.removed_content", "Removed Content", "निष्कासित सामग्री"),
    ("adm.time", "Time", "समय"),
    ("adm.cpu", "CPU", "CPU"),
    ("adm.memory", "Memory", "मेमोरी"),
    ("adm.disk", "Disk", "डिस्क"),
    ("adm.status", "Status", "स्थिति"),
    ("adm.actions_list", "View profile • Suspend account • Reset password • Send message", "प्रोफ़ाइल देखें • खाता निलंबित करें • पासवर्ड रीसेट करें • संदेश भेजें"),
    // Priorities
    ("priority.high", "high", "उच्च"),
    ("priority.medium", "medium", "मध्यम"),
    ("priority.low", "low", "निम्न"),
];

fn table() -> &'static HashMap<&'static str, [&'static str; 2]> {
    static TABLE: OnceLock<HashMap<&'static str, [&'static str; 2]>> = OnceLock::new();
    TABLE.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|&(key, en, hi)| (key, [en, hi]))
            .collect()
    })
}

fn slot(language: Language) -> usize {
    match language {
        Language::En => 0,
        Language::Hi => 1,
    }
}

/// Raw lookup with no fallback. Blank entries count as missing.
pub fn lookup(key: &str, language: Language) -> Option<&'static str> {
    table()
        .get(key)
        .map(|texts| texts[slot(language)])
        .filter(|text| !text.trim().is_empty())
}

/// Resolves a key, falling back to English and finally to the key itself.
pub fn resolve(key: &'static str, language: Language) -> &'static str {
    if let Some(text) = lookup(key, language) {
        return text;
    }
    if let Some(text) = lookup(key, Language::En) {
        log::warn!("missing '{}' translation for '{}', using English", language.code(), key);
        return text;
    }
    log::warn!("unknown translation key '{}'", key);
    key
}

#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn t(&self, key: &'static str) -> &'static str {
        resolve(key, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_translated() {
        for &(key, _, _) in ENTRIES {
            for language in Language::ALL {
                assert!(
                    lookup(key, language).is_some(),
                    "'{}' is blank for {}",
                    key,
                    language.code()
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(table().len(), ENTRIES.len());
    }

    #[test]
    fn test_resolve_per_language() {
        assert_eq!(resolve("tab.dashboard", Language::En), "Dashboard");
        assert_eq!(resolve("tab.dashboard", Language::Hi), "डैशबोर्ड");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(lookup("does.not.exist", Language::En), None);
        assert_eq!(resolve("does.not.exist", Language::Hi), "does.not.exist");
    }

    #[test]
    fn test_translator_follows_language() {
        let hindi = Translator::new(Language::Hi);
        assert_eq!(hindi.t("header.logout"), "लॉग आउट");
        assert_eq!(Translator::new(Language::En).t("header.logout"), "Logout");
    }
}
