//! Basic usage example for the taguchi-doe library.
//!
//! Walks through a complete injection-moulding experiment on an L9 array:
//! catalogue lookup, factor definition, response entry, analysis, and the
//! report context handed to downstream report generation.

use taguchi_doe::catalogue::get_by_name;
use taguchi_doe::doe::{analyze, interaction_column, ExperimentData, Factor, MetricType};
use taguchi_doe::report::ReportContext;

fn main() {
    println!("Taguchi DOE - Basic Analysis Example\n");

    // Select a standard 3-level array for four factors.
    let l9 = get_by_name("L9").expect("L9 is in the catalogue");
    println!("Array: {}", l9.name());
    println!("  Runs: {}", l9.runs());
    println!("  Factors: {}\n", l9.factors());

    // Define the control factors, one per array column.
    let factors = vec![
        Factor::new(
            "f-0",
            "Melt temperature",
            vec!["200C".into(), "220C".into(), "240C".into()],
        ),
        Factor::new(
            "f-1",
            "Injection pressure",
            vec!["60 bar".into(), "80 bar".into(), "100 bar".into()],
        ),
        Factor::new(
            "f-2",
            "Cooling time",
            vec!["10s".into(), "20s".into(), "30s".into()],
        ),
        Factor::new(
            "f-3",
            "Hold pressure",
            vec!["30 bar".into(), "40 bar".into(), "50 bar".into()],
        ),
    ];

    // One measured response per run: part shrinkage in percent, to be
    // minimized.
    let mut data = ExperimentData::new("L9", MetricType::SmallerIsBetter, factors, l9.runs());
    data.objective = "Minimize part shrinkage".to_string();
    data.responses = vec![1.82, 1.41, 1.95, 1.22, 1.68, 1.74, 1.51, 1.63, 1.30];

    let result = analyze(&data, &l9).expect("well-formed experiment");

    println!("S/N ratios per run:");
    for (run, sn) in result.sn_ratios.iter().enumerate() {
        println!("  run {}: {:>7.3} dB", run + 1, sn);
    }
    println!();

    println!("ANOVA contributions:");
    for entry in &result.anova {
        println!(
            "  {:<20} df={} SS={:>7.3} contribution={:>6.2}%",
            entry.source, entry.degrees_of_freedom, entry.sum_of_squares, entry.contribution_percent
        );
    }
    println!();

    println!("Optimal settings:");
    for setting in &result.optimal_settings {
        println!("  {:<20} -> {}", setting.factor, setting.label);
    }
    println!();

    // The serializable bundle a report generator consumes.
    let context = ReportContext::new(&data, &result);
    println!("Report context for '{}' covers {} factors.", context.oa_id, context.factor_names.len());

    // Structural confounding query on a two-level array.
    let l4 = get_by_name("L4").expect("L4 is in the catalogue");
    let signal = interaction_column(&l4, 0, 1).expect("columns in range");
    println!("\nL4 interaction of columns 1 and 2: {signal:?} (matches column 3)");
}
