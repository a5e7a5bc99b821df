use ods_assessment::assessment::{
    AnswerSet, AssessmentCatalog, DimensionId, DontKnowPolicy, FixedBenchmark, MaturityTier,
    Question, ScoringConfig, ScoringEngine, SimulatedBenchmark,
};

const OPTION_VALUES: [f64; 6] = [0.0, 1.0, 2.0, 3.0, -1.0, 0.1];

fn engine(catalog: &AssessmentCatalog) -> ScoringEngine<'_> {
    ScoringEngine::new(catalog, ScoringConfig::default())
}

fn first_questions(
    catalog: &AssessmentCatalog,
    dimension: DimensionId,
    n: usize,
) -> Vec<&Question> {
    catalog.questions_for(dimension).into_iter().take(n).collect()
}

/// Every assignment of `values` to `n` questions, as base-`values.len()` digits.
fn grids(values: &[f64], n: usize) -> impl Iterator<Item = Vec<f64>> + '_ {
    let combinations = values.len().pow(n as u32);
    (0..combinations).map(move |mut code| {
        (0..n)
            .map(|_| {
                let value = values[code % values.len()];
                code /= values.len();
                value
            })
            .collect()
    })
}

fn expected_percentage(values: &[f64]) -> u8 {
    let scored: Vec<u32> = values
        .iter()
        .filter(|value| (0.0..=3.0).contains(*value) && value.fract() == 0.0)
        .map(|value| *value as u32)
        .chain(values.iter().filter(|value| **value == 0.1).map(|_| 0))
        .collect();
    let sum: u32 = scored.iter().sum();
    let max = 3 * scored.len() as u32;
    if max == 0 {
        0
    } else {
        ((200 * sum + max) / (2 * max)) as u8
    }
}

#[test]
fn dimension_scores_match_rounded_ratio_for_every_small_grid() {
    let catalog = AssessmentCatalog::standard();
    let engine = engine(&catalog);
    let dimension = catalog.dimension(DimensionId::Planeta).expect("planeta");
    let questions = first_questions(&catalog, DimensionId::Planeta, 4);

    for grid in grids(&OPTION_VALUES, questions.len()) {
        let answers: AnswerSet = questions
            .iter()
            .zip(&grid)
            .map(|(question, value)| (question.id.clone(), *value))
            .collect();
        let score = engine
            .score_dimension(dimension, &questions, &answers)
            .expect("scores");

        assert!(score.score <= 100);
        assert_eq!(score.score, expected_percentage(&grid), "grid {grid:?}");
        assert!(catalog.tier_for(score.score).contains(score.score));
        assert!(score.opportunities.len() <= 3);
    }
}

#[test]
fn not_applicable_answers_score_like_missing_ones() {
    let catalog = AssessmentCatalog::standard();
    let engine = engine(&catalog);
    let dimension = catalog.dimension(DimensionId::Alianzas).expect("alianzas");
    let questions = first_questions(&catalog, DimensionId::Alianzas, 5);

    for grid in grids(&[0.0, 1.0, 2.0, 3.0, -1.0], questions.len()) {
        let with_sentinels: AnswerSet = questions
            .iter()
            .zip(&grid)
            .map(|(question, value)| (question.id.clone(), *value))
            .collect();
        let without_sentinels: AnswerSet = questions
            .iter()
            .zip(&grid)
            .filter(|(_, value)| **value >= 0.0)
            .map(|(question, value)| (question.id.clone(), *value))
            .collect();

        let left = engine
            .score_dimension(dimension, &questions, &with_sentinels)
            .expect("scores");
        let right = engine
            .score_dimension(dimension, &questions, &without_sentinels)
            .expect("scores");
        assert_eq!(left.score, right.score);
        assert_eq!(left.raw_score, right.raw_score);
        assert_eq!(left.opportunities, right.opportunities);
    }
}

#[test]
fn excluded_dont_know_matches_missing_answer() {
    let catalog = AssessmentCatalog::standard();
    let engine = ScoringEngine::new(
        &catalog,
        ScoringConfig {
            dont_know: DontKnowPolicy::Exclude,
        },
    );
    let dimension = catalog.dimension(DimensionId::Personas).expect("personas");
    let questions = first_questions(&catalog, DimensionId::Personas, 3);

    for grid in grids(&[0.0, 2.0, 3.0, 0.1], questions.len()) {
        let full: AnswerSet = questions
            .iter()
            .zip(&grid)
            .map(|(question, value)| (question.id.clone(), *value))
            .collect();
        let trimmed: AnswerSet = questions
            .iter()
            .zip(&grid)
            .filter(|(_, value)| **value != 0.1)
            .map(|(question, value)| (question.id.clone(), *value))
            .collect();

        let left = engine.score_dimension(dimension, &questions, &full).expect("scores");
        let right = engine
            .score_dimension(dimension, &questions, &trimmed)
            .expect("scores");
        assert_eq!(left.score, right.score, "grid {grid:?}");
    }
}

#[test]
fn every_percentage_falls_in_exactly_one_band() {
    let catalog = AssessmentCatalog::standard();
    for score in 0..=100u8 {
        let matching: Vec<_> = catalog
            .tiers()
            .iter()
            .filter(|band| band.contains(score))
            .collect();
        assert_eq!(matching.len(), 1, "score {score}");
        assert_eq!(catalog.tier_for(score).tier, matching[0].tier);
    }
    assert_eq!(catalog.tier_for(25).tier, MaturityTier::Inicial);
    assert_eq!(catalog.tier_for(26).tier, MaturityTier::Proceso);
    assert_eq!(catalog.tier_for(80).tier, MaturityTier::Avanzado);
    assert_eq!(catalog.tier_for(81).tier, MaturityTier::Lider);
}

#[test]
fn all_not_applicable_and_all_top_answers_hit_the_extremes() {
    let catalog = AssessmentCatalog::standard();
    let engine = engine(&catalog);

    let not_applicable: AnswerSet = catalog
        .questions()
        .iter()
        .map(|question| (question.id.clone(), -1.0))
        .collect();
    let result = engine.assess(&not_applicable).expect("assesses");
    for entry in &result.dimensions {
        assert_eq!(entry.score, 0);
        assert_eq!(entry.maturity, MaturityTier::Inicial);
        assert_eq!(
            Some(entry.recommendation.as_str()),
            catalog.recommendation(entry.dimension_id, MaturityTier::Inicial)
        );
        assert!(entry.opportunities.is_empty());
    }
    assert_eq!(result.global.global_score, 0);

    let top: AnswerSet = catalog
        .questions()
        .iter()
        .map(|question| (question.id.clone(), 3.0))
        .collect();
    let result = engine.assess(&top).expect("assesses");
    assert!(result.dimensions.iter().all(|entry| entry.score == 100));
    assert_eq!(result.global.global_score, 100);
    assert_eq!(result.global.global_maturity, MaturityTier::Lider);
}

#[test]
fn opportunities_follow_catalog_order_and_only_low_answers() {
    let catalog = AssessmentCatalog::standard();
    let engine = engine(&catalog);
    let questions = catalog.questions_for(DimensionId::Prosperidad);
    let answers: AnswerSet = questions
        .iter()
        .enumerate()
        .map(|(index, question)| (question.id.clone(), OPTION_VALUES[index % 6]))
        .collect();

    let result = engine.assess(&answers).expect("assesses");
    let prosperidad = result
        .dimension(DimensionId::Prosperidad)
        .expect("prosperidad");
    assert_eq!(prosperidad.opportunities.len(), 3);

    let positions: Vec<usize> = prosperidad
        .opportunities
        .iter()
        .map(|opportunity| {
            questions
                .iter()
                .position(|question| question.id == opportunity.question_id)
                .expect("opportunity comes from the dimension")
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    for opportunity in &prosperidad.opportunities {
        let value = answers.get(&opportunity.question_id).expect("answered");
        assert!(value == 0.0 || value == 1.0 || value == 0.1);
    }
}

#[test]
fn fixed_seed_gives_identical_json() {
    let catalog = AssessmentCatalog::standard();
    let engine = engine(&catalog);
    let answers: AnswerSet = catalog
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| (question.id.clone(), OPTION_VALUES[index % 4]))
        .collect();

    let first = engine
        .assess_with_benchmark(&answers, &mut SimulatedBenchmark::seeded(2024))
        .expect("assesses");
    let second = engine
        .assess_with_benchmark(&answers, &mut SimulatedBenchmark::seeded(2024))
        .expect("assesses");
    assert_eq!(
        serde_json::to_vec(&first).expect("serializes"),
        serde_json::to_vec(&second).expect("serializes")
    );

    let fixed = engine
        .assess_with_benchmark(&answers, &mut FixedBenchmark(50))
        .expect("assesses");
    assert_eq!(fixed.global, first.global);
    assert!(fixed.dimensions.iter().all(|entry| entry.benchmark == Some(50)));
}
