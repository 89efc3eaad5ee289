use crate::types::{AiRecommendation, Language, Localized, Priority, RecommendationBatch};

pub const OVERALL_CONFIDENCE: u8 = 91;

/// Factors the engine claims to weigh, with their display keys.
pub const FACTORS: [(&str, &str); 4] = [
    ("weather", "ai.weather"),
    ("soil", "ai.soil"),
    ("market", "ai.market"),
    ("seasonal", "ai.seasonal"),
];

pub fn factor_key(factor: &str) -> &'static str {
    match factor {
        "weather" => "ai.weather",
        "soil" => "ai.soil",
        "market" => "ai.market",
        "seasonal" => "ai.seasonal",
        "water_availability" => "ai.water_availability",
        _ => "ai.factors",
    }
}

struct Template {
    category: &'static str,
    title: Localized,
    description: Localized,
    confidence: u8,
    priority: Priority,
    factors: &'static [&'static str],
    expected_outcome: &'static str,
    implementation: Localized,
}

const TEMPLATES: [Template; 3] = [
    Template {
        category: "crop_planning",
        title: Localized::new("Maize Sowing Recommendation", "मक्का की बुआई की सिफारिश"),
        description: Localized::new(
            "Based on your soil and weather conditions, maize sowing is most suitable",
            "आपकी मिट्टी और मौसम के अनुसार मक्का की बुआई सबसे उपयुक्त है",
        ),
        confidence: 94,
        priority: Priority::High,
        factors: &["weather", "soil", "market"],
        expected_outcome: "15% increase",
        implementation: Localized::new("Sow within next 7 days", "अगले 7 दिनों में बुआई करें"),
    },
    Template {
        category: "fertilizer",
        title: Localized::new("Organic Fertilizer Usage", "जैविक उर्वरक का उपयोग"),
        description: Localized::new(
            "Compost and vermicompost will improve soil quality",
            "कंपोस्ट और वर्मी कंपोस्ट का उपयोग मिट्टी की गुणवत्ता सुधारेगा",
        ),
        confidence: 87,
        priority: Priority::Medium,
        factors: &["soil", "seasonal"],
        expected_outcome: "8% cost reduction",
        implementation: Localized::new("Implement immediately", "तत्काल लागू करें"),
    },
    Template {
        category: "irrigation",
        title: Localized::new("Drip Irrigation System", "ड्रिप सिंचाई सिस्टम"),
        description: Localized::new(
            "Drip irrigation is the best option for water conservation",
            "पानी की बचत के लिए ड्रिप सिंचाई सबसे अच्छा विकल्प है",
        ),
        confidence: 91,
        priority: Priority::High,
        factors: &["weather", "water_availability"],
        expected_outcome: "25% water savings",
        implementation: Localized::new("Setup this month", "इस महीने सेटअप करें"),
    },
];

/// The batch the engine "computes" for a farmer profile.
pub fn generate(language: Language) -> RecommendationBatch {
    let recommendations = TEMPLATES
        .iter()
        .zip(1u32..)
        .map(|(template, id)| AiRecommendation {
            id,
            category: template.category,
            title: template.title.get(language).to_string(),
            description: template.description.get(language).to_string(),
            confidence: template.confidence,
            priority: template.priority,
            factors: template.factors.to_vec(),
            expected_outcome: template.expected_outcome,
            implementation: template.implementation.get(language).to_string(),
        })
        .collect();

    RecommendationBatch {
        language,
        overall_confidence: OVERALL_CONFIDENCE,
        recommendations,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationState {
    pub loading: bool,
    pub batch: Option<RecommendationBatch>,
}

impl RecommendationState {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    pub fn complete(&mut self, batch: RecommendationBatch) {
        self.loading = false;
        self.batch = Some(batch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_english_batch() {
        let batch = generate(Language::En);
        assert_eq!(batch.overall_confidence, 91);
        let confidences: Vec<u8> = batch.recommendations.iter().map(|r| r.confidence).collect();
        assert_eq!(confidences, vec![94, 87, 91]);
        assert_eq!(batch.recommendations[0].title, "Maize Sowing Recommendation");
        assert_eq!(batch.recommendations[2].factors, vec!["weather", "water_availability"]);
        assert_eq!(batch.recommendations[1].priority, Priority::Medium);
    }

    #[test]
    fn test_generate_hindi_batch() {
        let batch = generate(Language::Hi);
        assert_eq!(batch.language, Language::Hi);
        assert_eq!(batch.recommendations[2].title, "ड्रिप सिंचाई सिस्टम");
        assert_eq!(batch.recommendations[0].implementation, "अगले 7 दिनों में बुआई करें");
    }

    #[test]
    fn test_every_factor_has_a_label() {
        for rec in generate(Language::En).recommendations {
            for factor in rec.factors {
                assert_ne!(factor_key(factor), "ai.factors", "{}", factor);
            }
        }
        assert!(FACTORS.iter().all(|(id, key)| factor_key(id) == *key));
    }
}
