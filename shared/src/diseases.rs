//! Reference table of crop diseases and the weather that favours them
//!
//! The table is static and read-only; lookups need no synchronisation.

use crate::models::{
    ConditionFactor, DiseaseDefinition,
    EnvironmentalVariable::{Humidity, LeafWetness, Rainfall, Temperature},
    SpecialCondition,
};

/// Crops with disease data, in table order
pub fn supported_crops() -> &'static [&'static str] {
    &["rice", "wheat", "tomato", "potato", "cotton", "maize", "onion", "sugarcane"]
}

/// Ordered disease definitions for a crop (case-insensitive)
pub fn diseases_for(crop: &str) -> Option<&'static [DiseaseDefinition]> {
    let normalized = crop.to_lowercase();
    let diseases: &'static [DiseaseDefinition] = match normalized.as_str() {
        "rice" => &RICE,
        "wheat" => &WHEAT,
        "tomato" => &TOMATO,
        "potato" => &POTATO,
        "cotton" => &COTTON,
        "maize" => &MAIZE,
        "onion" => &ONION,
        "sugarcane" => &SUGARCANE,
        _ => return None,
    };
    Some(diseases)
}

/// Whether the crop has disease data
pub fn is_supported_crop(crop: &str) -> bool {
    diseases_for(crop).is_some()
}

static RICE: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Rice Blast",
        pathogen: "Magnaporthe oryzae",
        factors: &[
            ConditionFactor::range(Temperature, 20.0, 28.0, 32.0),
            ConditionFactor::range(Humidity, 85.0, 95.0, 100.0),
            ConditionFactor::range(LeafWetness, 9.0, 16.0, 24.0),
            ConditionFactor::range(Rainfall, 5.0, 15.0, 30.0),
        ],
        symptoms: &[
            "Diamond-shaped lesions with gray centers on leaves",
            "Infected nodes turn blackish and break easily",
            "Panicle neck may break, causing empty grains",
        ],
        preventive_measures: &[
            "Use resistant varieties",
            "Apply balanced fertilization (avoid excess nitrogen)",
            "Maintain good field drainage",
            "Apply fungicides containing tricyclazole or isoprothiolane at early disease onset",
        ],
        affected_crops: &["Rice"],
        icon: "leaf-off",
    },
    DiseaseDefinition {
        name: "Bacterial Leaf Blight",
        pathogen: "Xanthomonas oryzae pv. oryzae",
        factors: &[
            ConditionFactor::range(Temperature, 25.0, 30.0, 34.0),
            ConditionFactor::range(Humidity, 70.0, 85.0, 100.0),
            ConditionFactor::range(Rainfall, 10.0, 20.0, 40.0),
        ],
        symptoms: &[
            "Water-soaked yellowish stripes on leaf margins",
            "Lesions turn white to yellow and then gray",
            "Entire leaves may become blighted and die",
        ],
        preventive_measures: &[
            "Use resistant varieties",
            "Avoid clipping of seedling leaves during transplanting",
            "Ensure proper spacing between plants",
            "Apply copper-based bactericides during early stages",
        ],
        affected_crops: &["Rice"],
        icon: "bacteria",
    },
];

static WHEAT: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Wheat Rust (Leaf Rust)",
        pathogen: "Puccinia triticina",
        factors: &[
            ConditionFactor::range(Temperature, 15.0, 20.0, 25.0),
            ConditionFactor::range(Humidity, 60.0, 80.0, 100.0),
            ConditionFactor::range(LeafWetness, 6.0, 12.0, 24.0),
        ],
        symptoms: &[
            "Orange-brown pustules on leaves and stems",
            "Circular to oval pustules on upper leaf surface",
            "Severe infections cause leaf yellowing and death",
        ],
        preventive_measures: &[
            "Plant resistant varieties",
            "Early sowing to avoid favorable disease conditions",
            "Apply fungicides with propiconazole or tebuconazole",
            "Crop rotation with non-host crops",
        ],
        affected_crops: &["Wheat"],
        icon: "alert-circle",
    },
    DiseaseDefinition {
        name: "Powdery Mildew",
        pathogen: "Blumeria graminis f. sp. tritici",
        factors: &[
            ConditionFactor::range(Temperature, 15.0, 22.0, 28.0),
            ConditionFactor::range(Humidity, 50.0, 70.0, 90.0),
            // Dry spells with high humidity
            ConditionFactor::flag(SpecialCondition::LowRainfall),
        ],
        symptoms: &[
            "White powdery patches on leaves and stems",
            "Patches turn gray-brown with age",
            "Severe infections cause leaf yellowing and premature death",
        ],
        preventive_measures: &[
            "Use resistant varieties",
            "Avoid dense planting",
            "Apply sulfur-based fungicides or triadimefon",
            "Balanced fertilization (avoid excess nitrogen)",
        ],
        affected_crops: &["Wheat", "Barley"],
        icon: "snowflake",
    },
];

static TOMATO: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Late Blight",
        pathogen: "Phytophthora infestans",
        factors: &LATE_BLIGHT_FACTORS,
        symptoms: &[
            "Dark, water-soaked lesions on leaves",
            "White fuzzy growth on undersides of leaves",
            "Brown lesions on stems and fruits",
        ],
        preventive_measures: &LATE_BLIGHT_MEASURES,
        affected_crops: &["Tomato", "Potato"],
        icon: "cloud-rain",
    },
    DiseaseDefinition {
        name: "Early Blight",
        pathogen: "Alternaria solani",
        factors: &[
            ConditionFactor::range(Temperature, 24.0, 29.0, 35.0),
            ConditionFactor::range(Humidity, 60.0, 75.0, 90.0),
            ConditionFactor::range(LeafWetness, 6.0, 10.0, 24.0),
        ],
        symptoms: &[
            "Dark brown lesions with concentric rings on leaves",
            "Lesions often have yellow halos",
            "Older leaves are affected first",
        ],
        preventive_measures: &[
            "Crop rotation with non-solanaceous crops",
            "Remove and destroy infected plant debris",
            "Apply fungicides containing azoxystrobin or chlorothalonil",
            "Maintain adequate plant nutrition",
        ],
        affected_crops: &["Tomato", "Potato", "Eggplant"],
        icon: "target",
    },
];

static POTATO: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Late Blight",
        pathogen: "Phytophthora infestans",
        factors: &LATE_BLIGHT_FACTORS,
        symptoms: &[
            "Dark, water-soaked lesions on leaves",
            "White fuzzy growth on undersides of leaves",
            "Brown lesions on stems and tubers",
        ],
        preventive_measures: &LATE_BLIGHT_MEASURES,
        affected_crops: &["Potato", "Tomato"],
        icon: "cloud-rain",
    },
    DiseaseDefinition {
        name: "Black Scurf",
        pathogen: "Rhizoctonia solani",
        factors: &[
            ConditionFactor::range(Temperature, 15.0, 22.0, 28.0),
            ConditionFactor::flag(SpecialCondition::CoolSoil),
        ],
        symptoms: &[
            "Black, irregular sclerotia on tuber surface",
            "Reddish-brown lesions on underground stems and stolons",
            "Stunted plants with aerial tubers",
        ],
        preventive_measures: &[
            "Plant certified disease-free seed tubers",
            "Allow soil to warm before planting",
            "Crop rotation with non-host crops",
            "Seed treatment with fungicides",
        ],
        affected_crops: &["Potato"],
        icon: "disc",
    },
];

static COTTON: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Cotton Leaf Curl Virus",
        pathogen: "Cotton leaf curl virus (CLCuV)",
        factors: &[
            ConditionFactor::range(Temperature, 25.0, 30.0, 35.0),
            ConditionFactor::range(Humidity, 60.0, 75.0, 90.0),
            ConditionFactor::flag(SpecialCondition::Whiteflies),
        ],
        symptoms: &[
            "Upward or downward curling of leaves",
            "Thickened veins and enations on undersides of leaves",
            "Stunted growth and reduced yield",
        ],
        preventive_measures: &[
            "Use resistant varieties",
            "Control whitefly populations with appropriate insecticides",
            "Early sowing to avoid peak whitefly populations",
            "Remove and destroy infected plants",
        ],
        affected_crops: &["Cotton"],
        icon: "bug",
    },
    DiseaseDefinition {
        name: "Bacterial Blight",
        pathogen: "Xanthomonas citri pv. malvacearum",
        factors: &[
            ConditionFactor::range(Temperature, 25.0, 30.0, 35.0),
            ConditionFactor::range(Humidity, 80.0, 90.0, 100.0),
            ConditionFactor::range(Rainfall, 10.0, 20.0, 40.0),
        ],
        symptoms: &[
            "Angular, water-soaked lesions on leaves",
            "Lesions turn brown with yellow halos",
            "Black lesions on stems and bolls",
        ],
        preventive_measures: &[
            "Use resistant varieties",
            "Use acid-delinted seeds",
            "Crop rotation with non-host crops",
            "Apply copper-based bactericides",
        ],
        affected_crops: &["Cotton"],
        icon: "bacteria",
    },
];

static MAIZE: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Northern Corn Leaf Blight",
        pathogen: "Exserohilum turcicum",
        factors: &[
            ConditionFactor::range(Temperature, 18.0, 24.0, 27.0),
            ConditionFactor::range(Humidity, 80.0, 90.0, 100.0),
            ConditionFactor::range(LeafWetness, 6.0, 12.0, 18.0),
        ],
        symptoms: &[
            "Long, elliptical gray-green lesions on leaves",
            "Lesions turn tan-brown with age",
            "Severe infections cause significant leaf blighting",
        ],
        preventive_measures: &[
            "Plant resistant hybrids",
            "Crop rotation with non-host crops",
            "Apply fungicides containing azoxystrobin or pyraclostrobin",
            "Proper field sanitation",
        ],
        affected_crops: &["Maize", "Corn"],
        icon: "leaf",
    },
    DiseaseDefinition {
        name: "Common Rust",
        pathogen: "Puccinia sorghi",
        factors: &[
            ConditionFactor::range(Temperature, 16.0, 22.0, 25.0),
            ConditionFactor::range(Humidity, 70.0, 85.0, 100.0),
            ConditionFactor::range(LeafWetness, 6.0, 10.0, 24.0),
        ],
        symptoms: &[
            "Small, circular to elongated cinnamon-brown pustules on leaves",
            "Pustules appear on both leaf surfaces",
            "Severe infections cause leaf yellowing and death",
        ],
        preventive_measures: &[
            "Plant resistant hybrids",
            "Early planting to avoid favorable disease conditions",
            "Apply fungicides containing azoxystrobin or pyraclostrobin",
            "Proper field sanitation",
        ],
        affected_crops: &["Maize", "Corn"],
        icon: "alert-circle",
    },
];

static ONION: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Purple Blotch",
        pathogen: "Alternaria porri",
        factors: &[
            ConditionFactor::range(Temperature, 21.0, 25.0, 30.0),
            ConditionFactor::range(Humidity, 80.0, 90.0, 100.0),
            ConditionFactor::range(LeafWetness, 8.0, 12.0, 24.0),
        ],
        symptoms: &[
            "Small, water-soaked lesions that turn brown to purple",
            "Lesions develop concentric rings",
            "Affected leaves may die from the tip downward",
        ],
        preventive_measures: &[
            "Crop rotation with non-allium crops",
            "Proper plant spacing for good air circulation",
            "Apply fungicides containing chlorothalonil or mancozeb",
            "Avoid overhead irrigation",
        ],
        affected_crops: &["Onion", "Garlic"],
        icon: "target",
    },
    DiseaseDefinition {
        name: "Downy Mildew",
        pathogen: "Peronospora destructor",
        factors: &[
            ConditionFactor::range(Temperature, 10.0, 15.0, 22.0),
            ConditionFactor::range(Humidity, 80.0, 95.0, 100.0),
            ConditionFactor::range(LeafWetness, 6.0, 12.0, 24.0),
            ConditionFactor::range(Rainfall, 5.0, 15.0, 30.0),
        ],
        symptoms: &[
            "Pale, elongated patches on leaves",
            "Grayish-violet fuzzy growth on lesions",
            "Affected leaves may yellow and collapse",
        ],
        preventive_measures: &[
            "Plant resistant varieties",
            "Crop rotation with non-allium crops",
            "Apply fungicides containing mancozeb or metalaxyl",
            "Improve air circulation by proper spacing",
        ],
        affected_crops: &["Onion", "Garlic", "Leek"],
        icon: "droplets",
    },
];

static SUGARCANE: [DiseaseDefinition; 2] = [
    DiseaseDefinition {
        name: "Red Rot",
        pathogen: "Colletotrichum falcatum",
        factors: &[
            ConditionFactor::range(Temperature, 25.0, 30.0, 35.0),
            ConditionFactor::range(Humidity, 80.0, 90.0, 100.0),
            ConditionFactor::range(Rainfall, 10.0, 20.0, 40.0),
        ],
        symptoms: &[
            "Reddening of internal stalk tissues",
            "White patches in the reddened areas",
            "Drying of leaves and wilting of plants",
        ],
        preventive_measures: &[
            "Use resistant varieties",
            "Use healthy seed cane for planting",
            "Hot water treatment of seed cane (50°C for 2 hours)",
            "Proper field sanitation",
        ],
        affected_crops: &["Sugarcane"],
        icon: "flame",
    },
    DiseaseDefinition {
        name: "Smut",
        pathogen: "Sporisorium scitamineum",
        factors: &[
            ConditionFactor::range(Temperature, 25.0, 30.0, 35.0),
            ConditionFactor::range(Humidity, 70.0, 80.0, 90.0),
            // More severe under drought
            ConditionFactor::flag(SpecialCondition::Drought),
        ],
        symptoms: &[
            "Black whip-like structures emerging from the growing point",
            "Stunted growth and tillering",
            "Narrow, erect leaves",
        ],
        preventive_measures: &[
            "Plant resistant varieties",
            "Use healthy seed cane for planting",
            "Hot water treatment of seed cane (52°C for 30 minutes)",
            "Remove and destroy infected plants",
        ],
        affected_crops: &["Sugarcane"],
        icon: "wind",
    },
];

const LATE_BLIGHT_FACTORS: [ConditionFactor; 4] = [
    ConditionFactor::range(Temperature, 10.0, 18.0, 24.0),
    ConditionFactor::range(Humidity, 80.0, 90.0, 100.0),
    ConditionFactor::range(LeafWetness, 8.0, 12.0, 24.0),
    ConditionFactor::range(Rainfall, 5.0, 15.0, 30.0),
];

const LATE_BLIGHT_MEASURES: [&str; 4] = [
    "Use resistant varieties",
    "Improve air circulation by proper spacing",
    "Apply fungicides containing chlorothalonil or mancozeb preventively",
    "Avoid overhead irrigation",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_crop_has_two_diseases() {
        let total: usize = supported_crops()
            .iter()
            .map(|crop| diseases_for(crop).map(|d| d.len()).unwrap_or(0))
            .sum();
        assert_eq!(total, 16);
        for crop in supported_crops() {
            assert_eq!(diseases_for(crop).map(|d| d.len()), Some(2), "{}", crop);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(diseases_for("RICE").is_some());
        assert!(diseases_for("Sugarcane").is_some());
        assert!(diseases_for("banana").is_none());
        assert!(!is_supported_crop(""));
    }

    #[test]
    fn test_padded_crop_name_is_unsupported() {
        assert!(diseases_for(" tomato ").is_none());
        assert!(diseases_for("rice ").is_none());
        assert!(!is_supported_crop("\twheat"));
    }

    #[test]
    fn test_ranges_are_ordered() {
        for crop in supported_crops() {
            for disease in diseases_for(crop).unwrap_or(&[]) {
                assert!(!disease.factors.is_empty());
                assert!(disease.preventive_measures.len() >= 3);
                for factor in disease.factors {
                    if let ConditionFactor::Range { range, .. } = factor {
                        assert!(range.min <= range.optimal && range.optimal <= range.max);
                        assert!(range.half_width() > 0.0, "{}", disease.name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_table_order_is_preserved() {
        let rice = diseases_for("rice").unwrap();
        assert_eq!(rice[0].name, "Rice Blast");
        assert_eq!(rice[1].name, "Bacterial Leaf Blight");
        let potato = diseases_for("potato").unwrap();
        assert_eq!(potato[0].affected_crops, &["Potato", "Tomato"]);
    }
}
