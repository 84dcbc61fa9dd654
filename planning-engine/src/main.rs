use planning_engine::calc::OptimizationConstraints;
use planning_engine::{EngineConfig, ScenarioBook, cleanup_old_logs, print_banner, setup_environment};
use shared::models::{ScenarioCreate, ServiceStyle};
use shared::util::format_currency;

/// Rotated log files are kept this many days
const LOG_RETENTION_DAYS: i64 = 14;

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    let log = setup_environment()?;
    if let Some(dir) = log.dir.as_deref() {
        cleanup_old_logs(std::path::Path::new(dir), LOG_RETENTION_DAYS)?;
    }

    print_banner();

    // 2. Configuration
    let config = EngineConfig::from_env();
    tracing::info!(
        include_seasonality = config.include_seasonality,
        rounding = ?config.rounding,
        "Planning engine starting"
    );

    // 3. One scenario per service-style preset
    let mut book = ScenarioBook::new(config)?;
    let mut ids = Vec::new();
    for style in ServiceStyle::ALL {
        let scenario = book.create(ScenarioCreate {
            name: style.name().to_string(),
            outlet_id: "demo-outlet".to_string(),
            service_style: style,
            parameters: None,
        })?;

        let calc = &scenario.calculations;
        println!(
            "{:<16} seats {:>4}  staff {:>3} (FOH {:>2} / BOH {:>2})  labor {}/month  revenue {}/month  labor {:.2}%",
            scenario.name,
            calc.seating_capacity,
            calc.total_staff,
            calc.total_foh,
            calc.total_boh,
            format_currency("SAR", calc.labor_cost),
            format_currency("SAR", calc.monthly_revenue),
            calc.labor_percentage,
        );
        let pl = book.profit_loss(&scenario.id)?;
        let optimized = book.optimize_staffing(&scenario.id, &OptimizationConstraints::default())?;
        println!(
            "{:<16} profit {}/month ({:.2}%)  optimized staff {:>3}  saves {}/month",
            "",
            format_currency("SAR", pl.profit),
            pl.profit_margin,
            optimized.optimized_headcount.total(),
            format_currency("SAR", optimized.cost_savings),
        );
        ids.push((style, scenario.id));
    }

    // 4. Compare every style against Casual Dining
    let (_, base_id) = ids
        .iter()
        .find(|(style, _)| *style == ServiceStyle::CasualDining)
        .ok_or_else(|| anyhow::anyhow!("Casual Dining scenario missing"))?;
    for (_, id) in ids.iter().filter(|(_, id)| id != base_id) {
        let comparison = book.compare(base_id, id)?;
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    }

    Ok(())
}
