use crate::infra::{benchmark_source, parse_date, parse_dimension};
use chrono::{Local, NaiveDate};
use clap::Args;
use ods_assessment::assessment::company::{
    COMPANY_SIZE_OPTIONS, LOCATION_OPTIONS, ROLE_OPTIONS, SECTOR_OPTIONS,
};
use ods_assessment::assessment::{
    AnswerSet, AnswerValue, AssessmentCatalog, AssessmentReport, AssessmentStep, CompanyProfile,
    DimensionId, InMemorySessionStore, JsonFileSessionStore, ScoringEngine, SessionStore,
};
use ods_assessment::config::AppConfig;
use ods_assessment::error::AppError;
use ods_assessment::telemetry;
use std::path::PathBuf;
use tracing::info;

/// Answer values cycled through by the scripted session.
const DEMO_ANSWER_PATTERN: [f64; 8] = [3.0, 2.0, 2.0, 1.0, 3.0, 0.0, -1.0, 0.1];

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer file, either a JSON object or a CSV with `question_id,value`
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Seed for the simulated sector averages (defaults to ODS_BENCHMARK_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Leave the simulated sector averages out of the report
    #[arg(long)]
    pub(crate) no_benchmark: bool,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
    /// Business name shown in the report header
    #[arg(long)]
    pub(crate) business_name: Option<String>,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Only list the questions of this dimension
    #[arg(long, value_parser = parse_dimension)]
    pub(crate) dimension: Option<DimensionId>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Seed for the simulated sector averages
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Save the session after every step to ODS_ANSWERS_PATH
    #[arg(long)]
    pub(crate) persist: bool,
    /// Report date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn load_cli_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        seed,
        no_benchmark,
        json,
        business_name,
        today,
    } = args;

    let config = load_cli_config()?;
    let catalog = config.assessment.catalog()?;
    let answer_set = AnswerSet::from_path(&answers)?;
    answer_set.warn_unknown_questions(&catalog);
    info!(path = %answers.display(), answers = answer_set.len(), "answers imported");

    let engine = ScoringEngine::new(&catalog, config.assessment.scoring);
    let result = if no_benchmark {
        engine.assess(&answer_set)?
    } else {
        let mut benchmark = benchmark_source(seed.or(config.assessment.benchmark_seed));
        engine.assess_with_benchmark(&answer_set, &mut benchmark)?
    };

    let company = business_name.map(|name| CompanyProfile {
        business_name: Some(name),
        ..CompanyProfile::default()
    });
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = AssessmentReport::build(&result, company, today);

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let config = load_cli_config()?;
    let catalog = config.assessment.catalog()?;
    render_catalog(&catalog, args.dimension);
    Ok(())
}

fn render_catalog(catalog: &AssessmentCatalog, only: Option<DimensionId>) {
    println!("Cuestionario de Autodiagnóstico ODS");
    println!("Opciones de respuesta:");
    for option in catalog.options() {
        println!("  {:>4}  {}", option.value, option.label);
    }
    println!("Niveles de madurez:");
    for band in catalog.tiers() {
        println!("  {:>3}-{:<3} {}", band.min, band.max, band.label);
    }

    for dimension in catalog.dimensions() {
        if only.is_some_and(|id| id != dimension.id) {
            continue;
        }
        let questions = catalog.questions_for(dimension.id);
        println!(
            "\n{} [{}] ({} preguntas, {})",
            dimension.title,
            dimension.id,
            questions.len(),
            dimension.icon().label()
        );
        for question in questions {
            println!("  {:<5} {}", question.id, question.text);
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        seed,
        persist,
        today,
    } = args;

    let config = load_cli_config()?;
    let catalog = config.assessment.catalog()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let store: Box<dyn SessionStore> = if persist {
        println!(
            "Guardando la sesión en {}",
            config.assessment.answers_path.display()
        );
        Box::new(JsonFileSessionStore::new(&config.assessment.answers_path))
    } else {
        Box::new(InMemorySessionStore::default())
    };

    println!("Autodiagnóstico ODS: sesión de demostración");
    let mut session = store.load_or_new(&catalog);
    if session.step() != AssessmentStep::Welcome {
        println!("- Descartando sesión previa (paso '{}')", session.step());
        session.reset();
    }

    session.start()?;
    store.save(&session)?;
    session.continue_to_company_info()?;
    store.save(&session)?;

    session.submit_company(demo_company())?;
    store.save(&session)?;
    println!("- Empresa registrada: {}", session.company().display_name());

    while session.step() == AssessmentStep::Assessment {
        let Some(dimension) = session.current_dimension(&catalog) else {
            break;
        };
        let dimension_id = dimension.id;
        let offset = session.current_section_index();
        let question_ids: Vec<String> = catalog
            .questions_for(dimension_id)
            .into_iter()
            .map(|question| question.id.clone())
            .collect();

        for (index, question_id) in question_ids.iter().enumerate() {
            let value = DEMO_ANSWER_PATTERN[(index + offset) % DEMO_ANSWER_PATTERN.len()];
            session.answer(&catalog, question_id, value)?;
        }

        if let Some(progress) = session.section_progress(&catalog) {
            let not_applicable = question_ids
                .iter()
                .filter_map(|id| session.answers().get(id))
                .filter(|raw| AnswerValue::from_raw(*raw) == Some(AnswerValue::NotApplicable))
                .count();
            println!(
                "- Sección {}: {}/{} respondidas ({}%), {} no aplica",
                dimension_id, progress.answered, progress.total, progress.percent, not_applicable
            );
        }

        session.next_section(&catalog)?;
        store.save(&session)?;
    }

    let engine = ScoringEngine::new(&catalog, config.assessment.scoring);
    let mut benchmark = benchmark_source(seed.or(config.assessment.benchmark_seed));
    let result = session.results_with_benchmark(&engine, &mut benchmark)?;
    let report = AssessmentReport::build(&result, Some(session.company().clone()), today);

    println!();
    print!("{}", report.render_text());
    Ok(())
}

fn demo_company() -> CompanyProfile {
    CompanyProfile {
        business_name: Some("Conservas Atlánticas S.L.".to_string()),
        size: COMPANY_SIZE_OPTIONS[1].to_string(),
        sector: SECTOR_OPTIONS[2].to_string(),
        location: LOCATION_OPTIONS[1].to_string(),
        role: ROLE_OPTIONS[1].to_string(),
    }
}
