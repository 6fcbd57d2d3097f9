//! Research and extension adapter: ICAR varieties, KVK centers and publications

use chrono::NaiveDate;
use shared::{
    Advisory, AdvisoryPriority, CropCategory, CropVariety, CultivationPractice, ExtensionProgram,
    FertilizerDose, KvkCenter, KvkContact, KvkExtensionBundle, ProgramStatus, ProgramType,
    Publication, ResearchRecord, ResearchSummary, Technology, VarietyCharacteristics,
    WaterRequirement,
};

use super::fallback::fetch_or_synthesize;
use crate::external::IcarClient;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[derive(Clone)]
pub struct ResearchService {
    client: IcarClient,
}

impl ResearchService {
    pub fn new(client: IcarClient) -> Self {
        Self { client }
    }

    pub async fn crop_varieties(&self, crop: &str) -> Vec<ResearchRecord> {
        fetch_or_synthesize(
            "ICAR varieties",
            self.client.varieties(crop),
            || Self::synthetic_varieties(crop),
        )
        .await
    }

    pub async fn kvk_data(&self, district: &str, state: &str) -> KvkExtensionBundle {
        fetch_or_synthesize(
            "KVK extension data",
            self.client.kvk_center(district, state),
            || Self::synthetic_kvk(district, state),
        )
        .await
    }

    /// Publications for a crop. Unavailable upstream yields an empty list.
    pub async fn research_publications(&self, crop: &str, year: Option<i32>) -> Vec<Publication> {
        fetch_or_synthesize(
            "ICAR publications",
            self.client.publications(crop, year),
            Vec::new,
        )
        .await
    }

    pub fn synthetic_varieties(crop: &str) -> Vec<ResearchRecord> {
        vec![ResearchRecord {
            crop_variety: CropVariety {
                name: format!("{} Variety 1", crop),
                scientific_name: format!("{} scientificus", crop),
                category: CropCategory::Cereal,
                developed_by: "ICAR-IARI, New Delhi".to_string(),
                release_year: 2020,
            },
            characteristics: VarietyCharacteristics {
                yield_potential: 4500,
                maturity_days: 120,
                resistant_to: strings(&["Blast", "Brown spot", "Bacterial blight"]),
                suitable_for: strings(&["IGP", "Eastern region", "Coastal areas"]),
                water_requirement: WaterRequirement::Medium,
                soil_type: strings(&["Alluvial", "Clay loam", "Sandy loam"]),
            },
            cultivation: CultivationPractice {
                sowing_time: "June-July".to_string(),
                harvest_time: "October-November".to_string(),
                spacing: "20 x 15 cm".to_string(),
                seed_rate: "25-30 kg/ha".to_string(),
                fertilizers: [
                    ("Nitrogen", "120 kg/ha", "Split application"),
                    ("Phosphorus", "60 kg/ha", "Basal"),
                    ("Potassium", "40 kg/ha", "Basal"),
                ]
                .iter()
                .map(|&(nutrient, quantity, timing)| FertilizerDose {
                    nutrient: nutrient.to_string(),
                    quantity: quantity.to_string(),
                    timing: timing.to_string(),
                })
                .collect(),
            },
            research: ResearchSummary {
                trials: 45,
                locations: strings(&["Delhi", "Punjab", "Haryana", "UP", "Bihar"]),
                avg_yield: 4200,
                best_practices: strings(&[
                    "Direct seeded rice technique",
                    "Integrated nutrient management",
                    "Water-saving irrigation",
                ]),
                publications: vec![Publication {
                    title: "Performance evaluation of new rice variety".to_string(),
                    authors: strings(&["Dr. A. Kumar", "Dr. B. Singh"]),
                    year: 2023,
                    doi: Some("10.1000/xyz123".to_string()),
                }],
            },
        }]
    }

    pub fn synthetic_kvk(district: &str, state: &str) -> KvkExtensionBundle {
        KvkExtensionBundle {
            kvk_center: KvkCenter {
                name: format!("KVK {}", district),
                district: district.to_string(),
                state: state.to_string(),
                established: 1995,
                contact: KvkContact {
                    phone: "+91-11-25842493".to_string(),
                    email: format!("kvk.{}@icar.gov.in", district.to_lowercase()),
                    address: format!("KVK Campus, {}, {}", district, state),
                },
            },
            programs: vec![
                ExtensionProgram {
                    id: "prog-001".to_string(),
                    title: "Integrated Pest Management Training".to_string(),
                    program_type: ProgramType::Training,
                    crop: "Rice".to_string(),
                    start_date: date(2024, 3, 15),
                    end_date: date(2024, 3, 17),
                    participants: 25,
                    status: ProgramStatus::Upcoming,
                    description: "Comprehensive training on IPM practices for rice cultivation"
                        .to_string(),
                },
                ExtensionProgram {
                    id: "prog-002".to_string(),
                    title: "Organic Farming Demonstration".to_string(),
                    program_type: ProgramType::Demonstration,
                    crop: "Wheat".to_string(),
                    start_date: date(2024, 2, 1),
                    end_date: date(2024, 5, 30),
                    participants: 50,
                    status: ProgramStatus::Ongoing,
                    description: "Field demonstration of organic wheat cultivation practices"
                        .to_string(),
                },
            ],
            advisories: vec![Advisory {
                id: "adv-001".to_string(),
                title: "Kharif Season Advisory".to_string(),
                crop: "Rice".to_string(),
                season: "Kharif 2024".to_string(),
                content: "Recommended practices for rice cultivation during kharif season..."
                    .to_string(),
                published_date: date(2024, 6, 1),
                valid_until: date(2024, 11, 30),
                priority: AdvisoryPriority::High,
            }],
            technologies: vec![Technology {
                name: "System of Rice Intensification (SRI)".to_string(),
                description: "Water-saving rice cultivation technique".to_string(),
                applicable_crops: strings(&["Rice"]),
                adoption_rate: 35.5,
                cost_benefit: "20-30% increase in yield with 40% less water".to_string(),
                contact_expert: "Dr. Rice Expert, KVK".to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ResearchService {
        ResearchService::new(IcarClient::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1",
            "http://127.0.0.1:1",
        ))
    }

    #[test]
    fn test_synthetic_variety_named_after_crop() {
        let records = ResearchService::synthetic_varieties("Wheat");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].crop_variety.name, "Wheat Variety 1");
        assert_eq!(records[0].cultivation.fertilizers.len(), 3);
        assert_eq!(records[0].research.avg_yield, 4200);
    }

    #[test]
    fn test_synthetic_kvk_uses_lowercase_district_in_email() {
        let bundle = ResearchService::synthetic_kvk("Ludhiana", "Punjab");
        assert_eq!(bundle.kvk_center.name, "KVK Ludhiana");
        assert_eq!(bundle.kvk_center.contact.email, "kvk.ludhiana@icar.gov.in");
        assert_eq!(bundle.kvk_center.contact.address, "KVK Campus, Ludhiana, Punjab");
        assert_eq!(bundle.programs[0].status, ProgramStatus::Upcoming);
        assert_eq!(bundle.programs[1].status, ProgramStatus::Ongoing);
        assert_eq!(bundle.advisories[0].id, "adv-001");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_publications_are_empty() {
        let publications = service().research_publications("rice", Some(2023)).await;
        assert!(publications.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_upstream_yields_synthetic_kvk() {
        let bundle = service().kvk_data("Pune", "Maharashtra").await;
        assert_eq!(bundle.kvk_center.district, "Pune");
    }
}
