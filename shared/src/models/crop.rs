//! Crop profiles and the static advisory catalog

use serde::{Deserialize, Serialize};

/// How much forecast rain a crop tolerates before suitability is penalized
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RainTolerance {
    High,
    Medium,
    Low,
}

/// A crop's ideal growing envelope plus bilingual display text
///
/// Entries are authored with `ideal_temp_min <= ideal_temp_max` and
/// `ideal_humidity_min <= ideal_humidity_max`; see
/// [`crate::validation::validate_crop_profile`].
#[derive(Debug, Clone, Serialize)]
pub struct CropProfile {
    pub name: &'static str,
    pub name_hi: &'static str,
    pub ideal_temp_min: f64,
    pub ideal_temp_max: f64,
    pub ideal_humidity_min: f64,
    pub ideal_humidity_max: f64,
    pub rain_tolerance: RainTolerance,
    pub reason_en: &'static str,
    pub reason_hi: &'static str,
    pub advice_en: &'static str,
    pub advice_hi: &'static str,
}

/// The static crop catalog, ordered
///
/// Catalog order is significant: recommendations with equal suitability keep
/// this order in the ranked output.
pub const CROP_PROFILES: [CropProfile; 6] = [
    CropProfile {
        name: "Rice",
        name_hi: "धान",
        ideal_temp_min: 20.0,
        ideal_temp_max: 37.0,
        ideal_humidity_min: 60.0,
        ideal_humidity_max: 95.0,
        rain_tolerance: RainTolerance::High,
        reason_en: "Thrives in warm, humid conditions with good rainfall.",
        reason_hi: "गर्म, नम मौसम और अच्छी बारिश में अच्छा उगता है।",
        advice_en: "Ensure waterlogged paddy fields. Monitor for pest attacks after rain.",
        advice_hi: "खेत में पानी भरा रखें। बारिश के बाद कीटों पर नज़र रखें।",
    },
    CropProfile {
        name: "Wheat",
        name_hi: "गेहूं",
        ideal_temp_min: 10.0,
        ideal_temp_max: 25.0,
        ideal_humidity_min: 30.0,
        ideal_humidity_max: 70.0,
        rain_tolerance: RainTolerance::Low,
        reason_en: "Best in cool, dry conditions with moderate moisture.",
        reason_hi: "ठंडे, शुष्क मौसम में मध्यम नमी के साथ सबसे अच्छा।",
        advice_en: "Irrigate at crown root stage. Avoid excess water.",
        advice_hi: "जड़ों की अवस्था में सिंचाई करें। अधिक पानी से बचें।",
    },
    CropProfile {
        name: "Maize",
        name_hi: "मक्का",
        ideal_temp_min: 18.0,
        ideal_temp_max: 32.0,
        ideal_humidity_min: 40.0,
        ideal_humidity_max: 80.0,
        rain_tolerance: RainTolerance::Medium,
        reason_en: "Grows well in warm weather with moderate rainfall.",
        reason_hi: "गर्म मौसम और मध्यम बारिश में अच्छा उगता है।",
        advice_en: "Provide adequate drainage. Apply nitrogen fertilizer at knee-high stage.",
        advice_hi: "अच्छी जल निकासी रखें। घुटने की ऊंचाई पर नाइट्रोजन डालें।",
    },
    CropProfile {
        name: "Mustard",
        name_hi: "सरसों",
        ideal_temp_min: 10.0,
        ideal_temp_max: 25.0,
        ideal_humidity_min: 30.0,
        ideal_humidity_max: 60.0,
        rain_tolerance: RainTolerance::Low,
        reason_en: "Prefers cool, dry weather with low humidity.",
        reason_hi: "ठंडे, शुष्क मौसम और कम नमी में अच्छा होता है।",
        advice_en: "Irrigate at flowering stage. Watch for aphid attacks.",
        advice_hi: "फूल आने पर सिंचाई करें। माहू कीट पर नज़र रखें।",
    },
    CropProfile {
        name: "Pulses",
        name_hi: "दालें",
        ideal_temp_min: 15.0,
        ideal_temp_max: 30.0,
        ideal_humidity_min: 40.0,
        ideal_humidity_max: 70.0,
        rain_tolerance: RainTolerance::Medium,
        reason_en: "Suitable for moderate temperature and humidity.",
        reason_hi: "मध्यम तापमान और नमी के लिए उपयुक्त।",
        advice_en: "Use Rhizobium culture for seed treatment. Minimal irrigation needed.",
        advice_hi: "बीज उपचार के लिए राइज़ोबियम का उपयोग करें। कम सिंचाई की जरूरत।",
    },
    CropProfile {
        name: "Seasonal Vegetables",
        name_hi: "मौसमी सब्ज़ियाँ",
        ideal_temp_min: 15.0,
        ideal_temp_max: 35.0,
        ideal_humidity_min: 50.0,
        ideal_humidity_max: 85.0,
        rain_tolerance: RainTolerance::Medium,
        reason_en: "Versatile crops that adapt to various conditions.",
        reason_hi: "विभिन्न मौसम में उगने वाली फसलें।",
        advice_en: "Use raised beds for drainage. Apply organic compost regularly.",
        advice_hi: "जल निकासी के लिए ऊँची क्यारियाँ बनाएं। जैविक खाद नियमित डालें।",
    },
];

/// The full crop catalog in authoring order
pub fn crop_catalog() -> &'static [CropProfile] {
    &CROP_PROFILES
}
