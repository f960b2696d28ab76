//! Static mitigation/adaptation catalog and the per-cell recommender.
//!
//! The catalog is read-only reference data compiled into the binary; the
//! recommender matches a cell's tensor against it with fixed rules and
//! returns at most three deduplicated entries.

use serde::{Serialize, Serializer};

use crate::tensor::{ContextTensor, LandUse};

/// Catalog schema version; bump when entries change shape or meaning.
pub const CATALOG_VERSION: u32 = 1;

/// Total risk above which defensive actions are recommended.
const HIGH_RISK_CUTOFF: f64 = 70.0;

/// Most actions recommended per cell.
const MAX_ACTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActionCategory {
    Mitigation,
    Adaptation,
}

/// Bucketed implementation duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeline {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Timeline {
    pub fn label(self) -> &'static str {
        match self {
            Self::ShortTerm => "0-2 yrs",
            Self::MediumTerm => "2-5 yrs",
            Self::LongTerm => "5-10 yrs",
        }
    }
}

impl Serialize for Timeline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: &'static str,
    pub category: ActionCategory,
    /// Display hint for the renderer.
    pub icon: &'static str,
    pub title: &'static str,
    pub measures: &'static [&'static str],
    /// Indicative cost, millions of currency units.
    pub cost_estimate: f64,
    pub timeline: Timeline,
}

const WATER_TRANSPORT: ActionItem = ActionItem {
    id: "water-transport",
    category: ActionCategory::Adaptation,
    icon: "ferry",
    title: "Water-based transport network",
    measures: &[
        "Ferry and water-bus corridors over permanent water",
        "Floating jetties rated for seasonal level swings",
        "Integration with land transit at edge nodes",
    ],
    cost_estimate: 120.0,
    timeline: Timeline::MediumTerm,
};

const URBAN_FLOOD_MANAGEMENT: ActionItem = ActionItem {
    id: "urban-flood-management",
    category: ActionCategory::Adaptation,
    icon: "waves",
    title: "Urban flood management",
    measures: &[
        "Retention basins and blue-green drainage corridors",
        "Pump capacity upgrades in low-lying districts",
        "Early-warning level gauges on primary canals",
    ],
    cost_estimate: 250.0,
    timeline: Timeline::MediumTerm,
};

const COASTAL_DEFENSE: ActionItem = ActionItem {
    id: "coastal-defense",
    category: ActionCategory::Adaptation,
    icon: "shield",
    title: "Coastal defense works",
    measures: &[
        "Sea-wall reinforcement on exposed frontage",
        "Mangrove and wetland buffer restoration",
        "Managed retreat planning for lowest-lying blocks",
    ],
    cost_estimate: 480.0,
    timeline: Timeline::LongTerm,
};

const REFORESTATION_BUFFER: ActionItem = ActionItem {
    id: "reforestation-buffer",
    category: ActionCategory::Mitigation,
    icon: "tree",
    title: "Reforestation buffer zones",
    measures: &[
        "Native-species planting on degraded slopes",
        "Riparian buffer strips along drainage lines",
        "Community forestry stewardship contracts",
    ],
    cost_estimate: 60.0,
    timeline: Timeline::LongTerm,
};

const FOOD_SECURITY: ActionItem = ActionItem {
    id: "food-security",
    category: ActionCategory::Adaptation,
    icon: "wheat",
    title: "Food security program",
    measures: &[
        "Drought-tolerant crop variety rollout",
        "Distributed cold storage and grain reserves",
        "Smallholder irrigation efficiency upgrades",
    ],
    cost_estimate: 90.0,
    timeline: Timeline::ShortTerm,
};

const HEAT_ACTION_PLAN: ActionItem = ActionItem {
    id: "heat-action-plan",
    category: ActionCategory::Adaptation,
    icon: "thermometer",
    title: "Urban heat action plan",
    measures: &[
        "Cool-roof and shade-tree coverage targets",
        "Cooling centers with heatwave trigger protocol",
        "Outdoor-work hour restrictions during alerts",
    ],
    cost_estimate: 45.0,
    timeline: Timeline::ShortTerm,
};

const GRID_DECENTRALIZATION: ActionItem = ActionItem {
    id: "grid-decentralization",
    category: ActionCategory::Mitigation,
    icon: "bolt",
    title: "Distributed energy grid",
    measures: &[
        "Rooftop solar with district microgrids",
        "Battery storage at substation level",
        "Islandable critical-facility circuits",
    ],
    cost_estimate: 320.0,
    timeline: Timeline::MediumTerm,
};

/// The full catalog, in stable id order.
const CATALOG: [ActionItem; 7] = [
    WATER_TRANSPORT,
    URBAN_FLOOD_MANAGEMENT,
    COASTAL_DEFENSE,
    REFORESTATION_BUFFER,
    FOOD_SECURITY,
    HEAT_ACTION_PLAN,
    GRID_DECENTRALIZATION,
];

/// All catalog entries.
pub fn catalog() -> &'static [ActionItem] {
    &CATALOG
}

/// Look up a catalog entry by id.
pub fn find_action(id: &str) -> Option<&'static ActionItem> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Recommend at most three actions for a cell.
///
/// Branches run in a fixed order: the water branch, otherwise the high-risk
/// branch, then the land-use branch independently of either. Duplicate ids
/// keep their first occurrence, then the list is truncated.
pub fn recommend(tensor: &ContextTensor) -> Vec<ActionItem> {
    let geo = &tensor.dimensions.geography;
    let mut picks: Vec<ActionItem> = Vec::new();

    if geo.is_water_body {
        picks.push(WATER_TRANSPORT);
        picks.push(URBAN_FLOOD_MANAGEMENT);
    } else if tensor.scores.total_risk > HIGH_RISK_CUTOFF {
        picks.push(COASTAL_DEFENSE);
        picks.push(URBAN_FLOOD_MANAGEMENT);
    }

    match geo.land_use {
        LandUse::Rural => {
            picks.push(REFORESTATION_BUFFER);
            picks.push(FOOD_SECURITY);
        }
        LandUse::Urban => {
            picks.push(HEAT_ACTION_PLAN);
            picks.push(GRID_DECENTRALIZATION);
        }
        LandUse::Suburban | LandUse::Waterbody => {}
    }

    let mut out: Vec<ActionItem> = Vec::with_capacity(MAX_ACTIONS);
    for item in picks {
        if !out.iter().any(|a| a.id == item.id) {
            out.push(item);
        }
    }
    out.truncate(MAX_ACTIONS);
    out
}
