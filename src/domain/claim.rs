//! Claim sample data
//!
//! The console works on a single, fixed claim. Every detail surface (header,
//! tabs, panels) reads from the [`Claim`] built by [`Claim::sample`].

use serde::{Deserialize, Serialize};

/// A label/value pair rendered by the field blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Reference to an inspection photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// An issue found during inspection, with all photos taken for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionIssue {
    pub title: String,
    pub description: String,
    pub images: Vec<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedAction {
    pub action: String,
    pub status: String,
    pub requested_on: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedClaim {
    pub number: String,
    pub reason: String,
    pub status: String,
}

/// A note that exists before the reviewer opens the claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededNote {
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub number: String,
    pub order_number: String,
    pub customer: String,
    pub status: String,
    pub opened_on: String,
    pub delivery: Vec<Field>,
    pub invoice: Vec<Field>,
    pub product: Vec<Field>,
    pub product_details: Vec<Field>,
    pub inspection: Vec<Field>,
    pub inspection_issues: Vec<InspectionIssue>,
    pub ordered_actions: Vec<OrderedAction>,
    pub linked_claims: Vec<LinkedClaim>,
    pub notes: Vec<SeededNote>,
}

impl Claim {
    /// Header fields shown above the tabs
    pub fn summary(&self) -> Vec<Field> {
        vec![
            Field::new("Claim", &self.number),
            Field::new("Order", &self.order_number),
            Field::new("Customer", &self.customer),
            Field::new("Status", &self.status),
            Field::new("Opened", &self.opened_on),
        ]
    }

    pub fn issue(&self, index: usize) -> Option<&InspectionIssue> {
        self.inspection_issues.get(index)
    }

    pub fn sample() -> Self {
        Self {
            number: "CLM-2024-00187".to_string(),
            order_number: "ORD-558213".to_string(),
            customer: "Jordan Ellis".to_string(),
            status: "Under Review".to_string(),
            opened_on: "Feb 27, 2024".to_string(),
            delivery: vec![
                Field::new("Carrier", "Northline Freight"),
                Field::new("Tracking", "NLF-77420931"),
                Field::new("Shipped", "Feb 19, 2024"),
                Field::new("Delivered", "Feb 23, 2024"),
                Field::new("Address", "42 Harbor View Rd, Portland, OR 97205"),
                Field::new("Signed by", "J. Ellis"),
            ],
            invoice: vec![
                Field::new("Invoice", "INV-2024-03311"),
                Field::new("Issued", "Feb 18, 2024"),
                Field::new("Subtotal", "$1,249.00"),
                Field::new("Shipping", "$89.00"),
                Field::new("Tax", "$0.00"),
                Field::new("Total", "$1,338.00"),
                Field::new("Payment", "Visa ending 4412"),
            ],
            product: vec![
                Field::new("Product", "Halden Oak Dining Table"),
                Field::new("SKU", "HDT-OAK-180"),
                Field::new("Quantity", "1"),
                Field::new("Unit price", "$1,249.00"),
            ],
            product_details: vec![
                Field::new("Material", "Solid white oak, matte lacquer"),
                Field::new("Dimensions", "180 x 90 x 75 cm"),
                Field::new("Weight", "48 kg"),
                Field::new("Assembly", "Legs attach with 8 bolts"),
                Field::new("Warranty", "5 years structural"),
            ],
            inspection: vec![
                Field::new("Inspector", "Maya Okafor"),
                Field::new("Inspected", "Mar 1, 2024"),
                Field::new("Method", "On-site visit"),
                Field::new("Result", "Damage confirmed"),
            ],
            inspection_issues: vec![
                InspectionIssue {
                    title: "Scratched tabletop".to_string(),
                    description: "Two parallel scratches near the long edge, 12 cm and 9 cm."
                        .to_string(),
                    images: vec![
                        ImageRef::new("inspections/187/top-01.jpg", "Scratches, wide view"),
                        ImageRef::new("inspections/187/top-02.jpg", "Scratches, close-up"),
                    ],
                },
                InspectionIssue {
                    title: "Cracked leg joint".to_string(),
                    description: "Rear left leg bracket split along the grain.".to_string(),
                    images: vec![
                        ImageRef::new("inspections/187/leg-01.jpg", "Leg bracket, side"),
                        ImageRef::new("inspections/187/leg-02.jpg", "Leg bracket, underside"),
                        ImageRef::new("inspections/187/leg-03.jpg", "Crack measurement"),
                    ],
                },
                InspectionIssue {
                    title: "Crushed carton corner".to_string(),
                    description: "Outer packaging crushed at the corner matching the leg damage."
                        .to_string(),
                    images: vec![ImageRef::new(
                        "inspections/187/box-01.jpg",
                        "Carton corner",
                    )],
                },
            ],
            ordered_actions: vec![
                OrderedAction {
                    action: "Ship replacement leg bracket".to_string(),
                    status: "Dispatched".to_string(),
                    requested_on: "Mar 2, 2024".to_string(),
                },
                OrderedAction {
                    action: "Schedule refinishing technician".to_string(),
                    status: "Pending".to_string(),
                    requested_on: "Mar 2, 2024".to_string(),
                },
                OrderedAction {
                    action: "Partial refund of shipping".to_string(),
                    status: "Approved".to_string(),
                    requested_on: "Mar 3, 2024".to_string(),
                },
            ],
            linked_claims: vec![
                LinkedClaim {
                    number: "CLM-2024-00121".to_string(),
                    reason: "Same carrier route".to_string(),
                    status: "Closed".to_string(),
                },
                LinkedClaim {
                    number: "CLM-2024-00190".to_string(),
                    reason: "Same product batch".to_string(),
                    status: "Open".to_string(),
                },
            ],
            notes: vec![SeededNote {
                content: "Test Notes".to_string(),
                created_at: "Mar 3, 3:58 PM".to_string(),
            }],
        }
    }
}

impl Default for Claim {
    fn default() -> Self {
        Self::sample()
    }
}
