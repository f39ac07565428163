use skin_analysis::{
    Analyzer, NO_FUNCTIONAL_WARNING, Priority, RecommendationKind, SkinType, UserContext, UserGoal,
    UserProfile, extract_ingredient_section,
};

fn with_skin(skin: SkinType) -> UserContext {
    UserContext {
        profile: UserProfile {
            skin_type: Some(skin),
            ..UserProfile::default()
        },
        ..UserContext::default()
    }
}

#[test]
fn allergy_drops_exactly_thirty() {
    let analyzer = Analyzer::default();
    let label = "water, fragrance, glycerin";
    let clean = analyzer.analyze(label, &UserContext::default());
    let allergic = analyzer.analyze(
        label,
        &UserContext {
            allergies: vec!["fragrance".to_string()],
            ..UserContext::default()
        },
    );

    assert_eq!(clean.suitability_score - allergic.suitability_score, 30);
    assert!(allergic.warnings.iter().any(|w| w.contains("fragrance")));
}

#[test]
fn unrecognised_label_takes_category_penalty() {
    let result = Analyzer::default().analyze("unknown1, unknown2", &UserContext::default());
    assert!(result.categories.is_empty());
    assert_eq!(result.suitability_score, 25);
    assert!(result.warnings.iter().any(|w| w == NO_FUNCTIONAL_WARNING));
}

#[test]
fn niacinamide_for_oily_acne() {
    let mut ctx = with_skin(SkinType::Oily);
    ctx.goals = vec![UserGoal::new("Reduce Acne", Priority::PRIMARY)];
    let result = Analyzer::default().analyze("Aqua, Niacinamide", &ctx);

    let adjusted =
        ingredient_knowledge::lookup_benefit("niacinamide", "Reduce Acne", Some(SkinType::Oily))
            .expect("known ingredient")
            .effectiveness;
    assert_eq!(result.goal_effectiveness[0].score, adjusted);
    assert_eq!(result.goal_score, adjusted);
}

#[test]
fn weak_primary_goal_yields_one_missing_recommendation() {
    let mut ctx = UserContext::default();
    ctx.goals = vec![
        UserGoal::new("Skin Brightening", Priority::PRIMARY),
        UserGoal::new("Hydration", Priority::SECONDARY),
    ];
    let result = Analyzer::default().analyze("water, glycerin, squalane", &ctx);

    let missing = result
        .recommendations
        .iter()
        .filter(|r| r.kind == RecommendationKind::Missing)
        .collect::<Vec<_>>();
    assert_eq!(missing.len(), 1);
    assert!(!missing[0].ingredients.is_empty() && missing[0].ingredients.len() <= 2);
}

#[test]
fn ocr_text_feeds_the_pipeline() {
    let ocr = "DAILY GEL\nIngredients: Aqua, Glycerin, Niacinamide, \
               Centella Asiatica Extract.\nMade in Korea";
    let section = extract_ingredient_section(ocr);
    let result = Analyzer::default().analyze(&section, &UserContext::default());

    assert_eq!(
        result.extracted_ingredients,
        vec!["aqua", "glycerin", "niacinamide", "centella asiatica extract"]
    );
    assert_eq!(result.categories.len(), 3);
    assert_eq!(result.suitability_score, 85);
}
