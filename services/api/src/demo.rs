use crate::infra::{catalog_from_config, load_answers};
use clap::Args;
use nailcare_advisor::config::AppConfig;
use nailcare_advisor::error::AppError;
use nailcare_advisor::workflows::diagnosis::{
    score_with_trail, AnswerSet, AnswerValue, CatalogProduct, ConfiguredCatalog, DiagnosisService,
    ProductCategory, QuestionBank, QuestionDimension, QuestionnaireSession, RecommendationResult,
    SelectionMode, SessionError, StaticCatalog,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// JSON file mapping question ids to selected option values
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Catalog fixture (JSON array of products). Defaults to the configured catalog.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the raw JSON result instead of the formatted report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Catalog fixture to use instead of the built-in demo catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_questions() {
    let bank = QuestionBank::standard();
    println!("Nail care questionnaire ({} questions)", bank.len());

    for dimension in QuestionDimension::ordered() {
        println!("\n{}", dimension.label());
        for question in bank.questions_for_dimension(dimension) {
            let mode = match question.mode {
                SelectionMode::Single => "choose one",
                SelectionMode::Multiple => "choose any",
            };
            println!("- [{}] {} ({mode})", question.id, question.prompt);
            for option in &question.options {
                println!("    {:<12} {}", option.value, option.label);
            }
        }
    }
}

pub(crate) async fn run_diagnose(args: DiagnoseArgs) -> Result<(), AppError> {
    let DiagnoseArgs {
        answers,
        catalog,
        json,
    } = args;

    let answers = load_answers(&answers)?;
    let catalog = match catalog {
        Some(path) => ConfiguredCatalog::Static(StaticCatalog::from_path(path)?),
        None => catalog_from_config(&AppConfig::load()?.catalog)?,
    };

    let service = DiagnosisService::new(Arc::new(catalog));
    let result = service.submit(&answers).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for line in score_report(&answers) {
            println!("{line}");
        }
        render_result(&result);
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = match args.catalog {
        Some(path) => StaticCatalog::from_path(path)?,
        None => StaticCatalog::new(demo_catalog()),
    };
    let bank = Arc::new(QuestionBank::standard());
    let service = DiagnosisService::with_bank(Arc::clone(&bank), Arc::new(catalog));

    println!("Nail care advisor demo");

    for shopper in demo_shoppers() {
        println!("\n=== {} ===", shopper.name);
        let mut session = QuestionnaireSession::new(Arc::clone(&bank));
        if let Err(err) = walk(&mut session, &shopper.overrides) {
            println!("Could not complete questionnaire: {err}");
            continue;
        }

        match session.begin_submission() {
            Ok(pending) => match pending.resolve(&service).await {
                Ok(result) => render_result(&result),
                Err(err) => println!("Submission failed: {err}"),
            },
            Err(err) => println!("Submission failed: {err}"),
        }
    }

    println!("\n=== Restart while recommendations load ===");
    let mut session = QuestionnaireSession::new(Arc::clone(&bank));
    if walk(&mut session, &[]).is_ok() {
        if let Ok(pending) = session.begin_submission() {
            session.restart();
            match pending.resolve(&service).await {
                Err(SessionError::Superseded) => {
                    println!("Stale result discarded; the questionnaire starts over.")
                }
                Ok(_) => println!("Unexpected: stale result was applied"),
                Err(err) => println!("Submission failed: {err}"),
            }
        }
    }

    let empty = DiagnosisService::with_bank(bank, Arc::new(StaticCatalog::default()));
    let result = empty.recommend(&AnswerSet::new()).await;
    println!("\n=== Empty catalog ===");
    render_result(&result);

    Ok(())
}

struct DemoShopper {
    name: &'static str,
    overrides: Vec<(&'static str, &'static str)>,
}

fn demo_shoppers() -> Vec<DemoShopper> {
    vec![
        DemoShopper {
            name: "Gel regular who peels polish",
            overrides: vec![
                ("condition-1", "brittle"),
                ("condition-2", "often"),
                ("habits-4", "peel"),
            ],
        },
        DemoShopper {
            name: "Winter-dry hands",
            overrides: vec![
                ("condition-3", "dry"),
                ("habits-1", "weekly"),
                ("habits-2", "oil"),
            ],
        },
        DemoShopper {
            name: "Patient grower",
            overrides: vec![("appearance-1", "very-slow")],
        },
        DemoShopper {
            name: "Low-maintenance routine",
            overrides: Vec::new(),
        },
    ]
}

/// Answer every question with its mildest option unless overridden.
fn walk(
    session: &mut QuestionnaireSession,
    overrides: &[(&'static str, &'static str)],
) -> Result<(), SessionError> {
    while let Some(question) = session.current_question() {
        let chosen = overrides
            .iter()
            .find(|(question_id, _)| *question_id == question.id)
            .map(|(_, value)| *value)
            .unwrap_or(question.options[0].value);

        let value = match question.mode {
            SelectionMode::Single => AnswerValue::single(chosen),
            SelectionMode::Multiple => AnswerValue::multiple([chosen]),
        };
        session.answer(value)?;
    }
    Ok(())
}

/// Totals followed by every answer that moved a score.
fn score_report(answers: &AnswerSet) -> Vec<String> {
    let (scores, trail) = score_with_trail(answers);
    let mut lines = vec![format!(
        "Scores: brittleness {}, dryness {}, damage {}, growth deficiency {}",
        scores.brittleness, scores.dryness, scores.damage, scores.growth_deficiency
    )];
    lines.extend(trail.iter().map(|entry| {
        format!(
            "  {} = {} -> {} +{}",
            entry.question_id,
            entry.value,
            entry.dimension.label(),
            entry.weight
        )
    }));
    lines
}

fn render_result(result: &RecommendationResult) {
    let diagnosis = &result.diagnosis;
    println!("{} ({})", diagnosis.condition, diagnosis.severity);
    println!("{}", diagnosis.description);

    println!("\nWhat to do");
    for recommendation in &diagnosis.recommendations {
        println!("- {recommendation}");
    }

    if result.recommended_products.is_empty() {
        println!("\nRecommended products: none available, browse the full catalog instead");
    } else {
        println!("\nRecommended products");
        for product in &result.recommended_products {
            let category = product.category_name().unwrap_or("Uncategorized");
            let featured = if product.featured { " *featured*" } else { "" };
            println!(
                "- {} | {} | ${:.2}{featured}",
                product.name, category, product.price
            );
        }
    }
}

fn demo_product(
    id: &str,
    name: &str,
    description: Option<&str>,
    price: f64,
    category: &str,
    featured: bool,
) -> CatalogProduct {
    CatalogProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: description.map(str::to_string),
        price,
        image: None,
        images: vec![format!("/images/products/{id}.jpg")],
        featured,
        category: Some(ProductCategory {
            id: None,
            name: category.to_string(),
        }),
    }
}

pub(crate) fn demo_catalog() -> Vec<CatalogProduct> {
    vec![
        demo_product(
            "lq-101",
            "Cherry Red Lacquer",
            Some("High-shine classic red"),
            9.0,
            "Lacquers",
            true,
        ),
        demo_product("tc-201", "Glitter Top Coat", None, 11.0, "Finishes", true),
        demo_product(
            "tr-301",
            "Keratin Repair Serum",
            Some("Intensive strengthening treatment for split, peeling nails"),
            24.5,
            "Treatments",
            false,
        ),
        demo_product(
            "oil-401",
            "Almond Cuticle Oil",
            Some("Softens and nourishes"),
            14.0,
            "Cuticle Care",
            true,
        ),
        demo_product("bc-501", "Ridge-Filling Base Coat", None, 12.0, "Base & Top", false),
        demo_product(
            "hc-601",
            "Shea Hand Cream",
            Some("Deep hydration for dry hands and cuticles"),
            16.0,
            "Hand Care",
            false,
        ),
        demo_product("gr-701", "Biotin Growth Drops", None, 21.0, "Treatments", false),
        demo_product(
            "ac-801",
            "Pro Nail File Set",
            Some("Glass files for a smooth edge"),
            7.5,
            "Tools",
            false,
        ),
    ]
}
