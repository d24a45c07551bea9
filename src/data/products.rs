// Pharmacy product catalog, served by both the Products screen and the
// REST API.

use std::sync::OnceLock;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchStatus {
    Valid,
    NearExpiry,
    Expired,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: &'static str,
    pub product_id: &'static str,
    pub batch_number: &'static str,
    pub quantity: u32,
    pub expiry_date: &'static str,
    pub vendor: &'static str,
    pub received_date: &'static str,
    pub status: BatchStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Unit price in cents; serialized as-is, display formatting is the
    /// consumer's concern.
    pub price_cents: u32,
    pub stock: u32,
    pub batches: Vec<Batch>,
}

pub fn all() -> &'static [Product] {
    static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();
    PRODUCTS.get_or_init(|| {
        vec![
            Product {
                id: "1",
                name: "Paracetamol 500mg",
                manufacturer: "ABC Pharma",
                description: "Pain reliever and fever reducer",
                category: "Analgesic",
                price_cents: 599,
                stock: 1500,
                batches: vec![
                    Batch {
                        id: "b1",
                        product_id: "1",
                        batch_number: "PCT-2023-001",
                        quantity: 500,
                        expiry_date: "2024-12-31",
                        vendor: "MediCorp",
                        received_date: "2023-01-15",
                        status: BatchStatus::NearExpiry,
                    },
                    Batch {
                        id: "b2",
                        product_id: "1",
                        batch_number: "PCT-2023-002",
                        quantity: 1000,
                        expiry_date: "2025-06-30",
                        vendor: "PharmaPlus",
                        received_date: "2023-02-20",
                        status: BatchStatus::Valid,
                    },
                ],
            },
            Product {
                id: "2",
                name: "Amoxicillin 250mg",
                manufacturer: "HealWell Labs",
                description: "Broad-spectrum penicillin antibiotic",
                category: "Antibiotic",
                price_cents: 1249,
                stock: 640,
                batches: vec![
                    Batch {
                        id: "b3",
                        product_id: "2",
                        batch_number: "AMX-2023-014",
                        quantity: 640,
                        expiry_date: "2025-03-31",
                        vendor: "MediCorp",
                        received_date: "2023-04-02",
                        status: BatchStatus::Valid,
                    },
                ],
            },
            Product {
                id: "3",
                name: "Cetirizine 10mg",
                manufacturer: "ABC Pharma",
                description: "Non-drowsy antihistamine for allergy relief",
                category: "Antihistamine",
                price_cents: 449,
                stock: 980,
                batches: vec![
                    Batch {
                        id: "b4",
                        product_id: "3",
                        batch_number: "CTZ-2022-118",
                        quantity: 180,
                        expiry_date: "2024-08-31",
                        vendor: "PharmaPlus",
                        received_date: "2022-10-11",
                        status: BatchStatus::Expired,
                    },
                    Batch {
                        id: "b5",
                        product_id: "3",
                        batch_number: "CTZ-2023-031",
                        quantity: 800,
                        expiry_date: "2025-09-30",
                        vendor: "PharmaPlus",
                        received_date: "2023-05-27",
                        status: BatchStatus::Valid,
                    },
                ],
            },
            Product {
                id: "4",
                name: "Omeprazole 20mg",
                manufacturer: "HealWell Labs",
                description: "Proton pump inhibitor for acid reflux",
                category: "Gastrointestinal",
                price_cents: 899,
                stock: 420,
                batches: vec![
                    Batch {
                        id: "b6",
                        product_id: "4",
                        batch_number: "OMP-2023-007",
                        quantity: 420,
                        expiry_date: "2026-01-31",
                        vendor: "MediCorp",
                        received_date: "2023-06-14",
                        status: BatchStatus::Valid,
                    },
                ],
            },
        ]
    })
}

pub fn product_by_id(id: &str) -> Option<&'static Product> {
    all().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_by_id_finds_known_product() {
        let product = product_by_id("1").expect("product 1 should exist");
        assert_eq!(product.name, "Paracetamol 500mg");
        assert_eq!(product.batches.len(), 2);
    }

    #[test]
    fn product_by_id_returns_none_for_unknown() {
        assert!(product_by_id("999").is_none());
    }

    #[test]
    fn batches_reference_their_product() {
        for product in all() {
            for batch in &product.batches {
                assert_eq!(batch.product_id, product.id);
            }
        }
    }

    #[test]
    fn product_serializes_camel_case() {
        let json = serde_json::to_value(product_by_id("2").unwrap()).unwrap();
        assert_eq!(json["priceCents"], 1249);
        assert_eq!(json["batches"][0]["batchNumber"], "AMX-2023-014");
        assert_eq!(json["batches"][0]["status"], "valid");
    }
}
