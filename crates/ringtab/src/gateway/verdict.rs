//! Wire types exchanged with the analysis service.

use serde::{Deserialize, Serialize};

use crate::table::{RingTableDocument, TableKind};

/// The payload submitted for analysis: the element list and both tables in
/// canonical element order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub elements: Vec<String>,
    pub add: Vec<Vec<String>>,
    pub mul: Vec<Vec<String>>,
}

impl From<&RingTableDocument> for AnalysisRequest {
    fn from(doc: &RingTableDocument) -> Self {
        Self {
            elements: doc.elements().as_slice().to_vec(),
            add: doc.table(TableKind::Addition).rows().to_vec(),
            mul: doc.table(TableKind::Multiplication).rows().to_vec(),
        }
    }
}

/// The structured verdict returned by the analysis service.
///
/// Each property comes as a boolean flag, usually paired with a textual
/// contradiction that is only meaningful when the flag is false. Image
/// payloads are base64-encoded PNGs. The wire spells `is_divison_ring`;
/// the misspelling is kept on the wire for compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisVerdict {
    #[serde(default)]
    pub is_add_closed: bool,
    #[serde(default)]
    pub is_add_closed_contradiction: String,
    #[serde(default)]
    pub is_add_associative: bool,
    #[serde(default)]
    pub is_add_associative_contradiction: String,
    #[serde(default)]
    pub has_add_identity: bool,
    #[serde(default)]
    pub add_identity: String,
    #[serde(default)]
    pub is_add_inverse: bool,
    #[serde(default)]
    pub is_add_inverse_contradiction: String,
    #[serde(default)]
    pub is_add_commutative: bool,
    #[serde(default)]
    pub is_add_commutative_contradiction: String,

    #[serde(default)]
    pub is_add_group: bool,

    #[serde(default)]
    pub is_mul_closed: bool,
    #[serde(default)]
    pub is_mul_closed_contradiction: String,
    #[serde(default)]
    pub is_mul_associative: bool,
    #[serde(default)]
    pub is_mul_associative_contradiction: String,
    #[serde(default)]
    pub is_distributive: bool,
    #[serde(default)]
    pub is_distributive_contradiction: String,

    #[serde(default)]
    pub is_ring: bool,
    #[serde(default)]
    pub is_ring_contradiction: String,

    #[serde(default)]
    pub is_mul_commutative: bool,
    #[serde(default)]
    pub is_mul_commutative_contradiction: String,
    #[serde(default)]
    pub is_commutative_ring: bool,
    #[serde(default)]
    pub is_commutative_ring_contradiction: String,

    #[serde(default)]
    pub has_mul_identity: bool,
    #[serde(default)]
    pub mul_identity: String,
    #[serde(default)]
    pub has_mul_zero_divisors: bool,
    #[serde(default)]
    pub has_mul_zero_divisors_contradiction: String,

    #[serde(default)]
    pub is_integral_domain: bool,
    #[serde(default)]
    pub is_integral_domain_contradiction: String,

    #[serde(default)]
    pub is_mul_inverse: bool,
    #[serde(default)]
    pub is_mul_inverse_contradiction: String,

    #[serde(default)]
    pub is_field: bool,
    #[serde(default)]
    pub is_field_contradiction: String,
    #[serde(default, rename = "is_divison_ring")]
    pub is_division_ring: bool,
    #[serde(default, rename = "is_divison_ring_contradiction")]
    pub is_division_ring_contradiction: String,

    /// Free-text summary produced by the service.
    #[serde(default)]
    pub insight: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_heatmap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mul_heatmap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_divisor_graph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_graph: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colormap: Option<String>,
}
