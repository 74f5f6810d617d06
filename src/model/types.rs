use serde::Serialize;

/// Coarse category a raw mutation-type string collapses into. Drives
/// palette selection; finer-grained raw strings only matter through
/// their priority when group counts tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MainType {
    Missense,
    InFrame,
    Truncating,
    Fusion,
    Other,
}

impl MainType {
    pub fn canonical_name(self) -> &'static str {
        match self {
            MainType::Missense => "missense",
            MainType::InFrame => "in_frame",
            MainType::Truncating => "truncating",
            MainType::Fusion => "fusion",
            MainType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MutationTypeStyle {
    pub id: &'static str,
    pub main_type: MainType,
    /// Lower wins when main-type groups tie on member count.
    pub priority: u8,
}

pub const OTHER_PRIORITY: u8 = 5;

const MUTATION_TYPE_TABLE: &[MutationTypeStyle] = &[
    MutationTypeStyle {
        id: "missense_mutation",
        main_type: MainType::Missense,
        priority: 1,
    },
    MutationTypeStyle {
        id: "missense",
        main_type: MainType::Missense,
        priority: 1,
    },
    MutationTypeStyle {
        id: "missense_variant",
        main_type: MainType::Missense,
        priority: 1,
    },
    MutationTypeStyle {
        id: "in_frame_ins",
        main_type: MainType::InFrame,
        priority: 2,
    },
    MutationTypeStyle {
        id: "in_frame_del",
        main_type: MainType::InFrame,
        priority: 2,
    },
    MutationTypeStyle {
        id: "inframe_insertion",
        main_type: MainType::InFrame,
        priority: 2,
    },
    MutationTypeStyle {
        id: "inframe_deletion",
        main_type: MainType::InFrame,
        priority: 2,
    },
    MutationTypeStyle {
        id: "nonsense_mutation",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "nonstop_mutation",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "stop_gained",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "frame_shift_ins",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "frame_shift_del",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "frameshift",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "frameshift_variant",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "splice_site",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "splice_region",
        main_type: MainType::Truncating,
        priority: 3,
    },
    MutationTypeStyle {
        id: "fusion",
        main_type: MainType::Fusion,
        priority: 4,
    },
    MutationTypeStyle {
        id: "silent",
        main_type: MainType::Other,
        priority: OTHER_PRIORITY,
    },
    MutationTypeStyle {
        id: "synonymous_variant",
        main_type: MainType::Other,
        priority: OTHER_PRIORITY,
    },
    MutationTypeStyle {
        id: "other",
        main_type: MainType::Other,
        priority: OTHER_PRIORITY,
    },
];

/// Lowercases, trims and joins whitespace runs with `_` so that MAF
/// variants like "Missense Mutation" and "missense_mutation" hit the
/// same table row.
pub fn normalize_type(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Resolves a raw mutation-type string against the fixed table.
/// Unrecognized strings fall into the "other" row.
pub fn classify(raw: &str) -> MutationTypeStyle {
    let normalized = normalize_type(raw);
    for style in MUTATION_TYPE_TABLE {
        if style.id == normalized {
            return *style;
        }
    }
    MutationTypeStyle {
        id: "other",
        main_type: MainType::Other,
        priority: OTHER_PRIORITY,
    }
}

pub fn is_fusion(raw: &str) -> bool {
    normalize_type(raw) == "fusion"
}

pub fn mutation_type_table() -> &'static [MutationTypeStyle] {
    MUTATION_TYPE_TABLE
}
