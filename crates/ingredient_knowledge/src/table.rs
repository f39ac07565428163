use crate::skin::Compatibility;

#[derive(Debug)]
pub struct GoalBenefit {
    pub goal: &'static str,
    pub effectiveness: u8,
    pub reason: &'static str,
    pub compatibility: Option<Compatibility>,
}

#[derive(Debug)]
pub struct IngredientEntry {
    pub name: &'static str,
    pub benefits: &'static [GoalBenefit],
}

impl IngredientEntry {
    pub fn benefit_for(&self, goal: &str) -> Option<&'static GoalBenefit> {
        self.benefits.iter().find(|b| b.goal == goal)
    }
}

const fn compat(
    oily: u8,
    combination: u8,
    normal: u8,
    sensitive: u8,
    dry: u8,
) -> Option<Compatibility> {
    Some(Compatibility {
        oily,
        dry,
        combination,
        sensitive,
        normal,
    })
}

const fn benefit(
    goal: &'static str,
    effectiveness: u8,
    reason: &'static str,
    compatibility: Option<Compatibility>,
) -> GoalBenefit {
    GoalBenefit {
        goal,
        effectiveness,
        reason,
        compatibility,
    }
}

pub const REDUCE_ACNE: &str = "Reduce Acne";
pub const SKIN_BRIGHTENING: &str = "Skin Brightening";
pub const ANTI_AGING: &str = "Anti-Aging";
pub const REDUCE_SCARS: &str = "Reduce Scars";
pub const HYDRATION: &str = "Hydration";
pub const OIL_CONTROL: &str = "Oil Control";

/// Goals offered to users when they set up their profile.
pub const PREDEFINED_GOALS: [&str; 6] = [
    REDUCE_ACNE,
    SKIN_BRIGHTENING,
    ANTI_AGING,
    REDUCE_SCARS,
    HYDRATION,
    OIL_CONTROL,
];

// Compatibility columns below read oily, combination, normal, sensitive, dry.
pub static INGREDIENT_KNOWLEDGE: &[IngredientEntry] = &[
    IngredientEntry {
        name: "Niacinamide",
        benefits: &[
            benefit(
                REDUCE_ACNE,
                90,
                "Reduces inflammation, regulates sebum production, and minimizes pores",
                compat(95, 90, 85, 80, 75),
            ),
            benefit(
                SKIN_BRIGHTENING,
                85,
                "Inhibits melanin transfer to skin cells, fading dark spots and hyperpigmentation",
                compat(90, 90, 90, 85, 85),
            ),
            benefit(
                OIL_CONTROL,
                88,
                "Regulates sebum production without over-drying",
                compat(95, 90, 70, 75, 40),
            ),
            benefit(
                ANTI_AGING,
                75,
                "Stimulates collagen production and improves skin elasticity",
                compat(80, 85, 85, 80, 85),
            ),
        ],
    },
    IngredientEntry {
        name: "Salicylic Acid",
        benefits: &[
            benefit(
                REDUCE_ACNE,
                95,
                "Penetrates pores to unclog them, kills acne-causing bacteria",
                compat(98, 92, 75, 50, 40),
            ),
            benefit(
                OIL_CONTROL,
                92,
                "Exfoliates inside pores and reduces excess oil",
                compat(95, 88, 65, 45, 35),
            ),
            benefit(
                REDUCE_SCARS,
                70,
                "Promotes cell turnover to fade acne marks over time",
                compat(80, 75, 65, 55, 50),
            ),
        ],
    },
    IngredientEntry {
        name: "Hyaluronic Acid",
        benefits: &[
            benefit(
                HYDRATION,
                98,
                "Holds up to 1000x its weight in water, provides intense hydration",
                compat(90, 95, 98, 92, 100),
            ),
            benefit(
                ANTI_AGING,
                82,
                "Plumps fine lines and improves skin texture",
                compat(85, 88, 90, 85, 95),
            ),
        ],
    },
    IngredientEntry {
        name: "Vitamin C",
        benefits: &[
            benefit(
                SKIN_BRIGHTENING,
                92,
                "Inhibits tyrosinase enzyme, reduces melanin production",
                compat(90, 90, 92, 70, 85),
            ),
            benefit(
                ANTI_AGING,
                88,
                "Boosts collagen synthesis and protects from UV damage",
                compat(85, 90, 90, 75, 88),
            ),
            benefit(
                REDUCE_SCARS,
                75,
                "Fades post-inflammatory hyperpigmentation",
                compat(80, 80, 78, 65, 75),
            ),
        ],
    },
    IngredientEntry {
        name: "Retinol",
        benefits: &[
            benefit(
                ANTI_AGING,
                95,
                "Increases cell turnover, boosts collagen, reduces fine lines",
                compat(92, 90, 88, 60, 70),
            ),
            benefit(
                REDUCE_ACNE,
                85,
                "Prevents clogged pores and accelerates skin renewal",
                compat(90, 85, 75, 50, 60),
            ),
            benefit(
                REDUCE_SCARS,
                80,
                "Promotes collagen production and fades hyperpigmentation",
                compat(85, 82, 78, 55, 65),
            ),
        ],
    },
    IngredientEntry {
        name: "Glycerin",
        benefits: &[benefit(
            HYDRATION,
            90,
            "Draws moisture into skin, maintains skin barrier",
            compat(88, 92, 95, 90, 98),
        )],
    },
    IngredientEntry {
        name: "Panthenol",
        benefits: &[
            benefit(
                HYDRATION,
                85,
                "Attracts and retains moisture, soothes irritation",
                compat(85, 88, 90, 95, 92),
            ),
            benefit(
                REDUCE_ACNE,
                65,
                "Anti-inflammatory properties calm redness",
                compat(70, 70, 65, 75, 60),
            ),
        ],
    },
    IngredientEntry {
        name: "Azelaic Acid",
        benefits: &[
            benefit(
                REDUCE_ACNE,
                88,
                "Kills acne bacteria, reduces inflammation, unclogs pores",
                compat(92, 90, 80, 75, 70),
            ),
            benefit(
                SKIN_BRIGHTENING,
                85,
                "Inhibits melanin production, evens skin tone",
                compat(88, 88, 85, 80, 78),
            ),
        ],
    },
    IngredientEntry {
        name: "Benzoyl Peroxide",
        benefits: &[benefit(
            REDUCE_ACNE,
            93,
            "Kills P. acnes bacteria, reduces inflammation",
            compat(95, 88, 70, 40, 30),
        )],
    },
    IngredientEntry {
        name: "Ceramides",
        benefits: &[
            benefit(
                HYDRATION,
                92,
                "Restores skin barrier, prevents moisture loss",
                compat(75, 88, 92, 95, 98),
            ),
            benefit(
                ANTI_AGING,
                70,
                "Strengthens skin barrier, improves resilience",
                compat(70, 80, 85, 88, 92),
            ),
        ],
    },
    IngredientEntry {
        name: "Peptides",
        benefits: &[benefit(
            ANTI_AGING,
            85,
            "Stimulates collagen and elastin production",
            compat(80, 85, 88, 82, 90),
        )],
    },
    IngredientEntry {
        name: "Alpha Arbutin",
        benefits: &[benefit(
            SKIN_BRIGHTENING,
            88,
            "Inhibits tyrosinase, fades hyperpigmentation gently",
            compat(85, 88, 90, 92, 88),
        )],
    },
    IngredientEntry {
        name: "Tea Tree Oil",
        benefits: &[benefit(
            REDUCE_ACNE,
            80,
            "Natural antimicrobial, reduces acne lesions",
            compat(90, 80, 70, 50, 40),
        )],
    },
];
