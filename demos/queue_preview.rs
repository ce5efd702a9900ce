//! Queue message preview example
//!
//! This example demonstrates:
//! - Building a MessageEngine with metrics
//! - Loading a queue's message conditions from YAML
//! - Previewing the message every waiting patient would receive
//! - Surfacing condition conflicts before sending

use clinicq_runtime::Metrics;
use clinicq_sdk::{MessageEngineBuilder, Patient, ResolutionReason};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clinicq_sdk=info".parse()?),
        )
        .init();

    println!("=== Queue Message Preview ===\n");

    let engine = MessageEngineBuilder::new()
        .estimated_minutes_per_session(12)
        .enable_metrics(true)
        .build()?;

    let queue = engine.load_queue_config("demos/queues/dental.yaml")?;
    println!("Queue: {} ({} conditions)\n", queue.queue_name, queue.conditions.len());

    let patients = vec![
        Patient::new("p-07", "خالد", 7),
        Patient::new("p-10", "أحمد", 10),
        Patient::new("p-12", "سارة", 12),
        Patient::new("p-13", "منى", 13),
        Patient::new("p-18", "ليلى", 18),
        Patient::anonymous("p-25", 25),
    ];
    let current_queue_position = 10;

    let preview = engine.preview(&queue, &patients, current_queue_position);

    for resolution in &preview.resolutions {
        let text = resolution.resolved_template.as_deref().unwrap_or("-");
        let matched = resolution.matched_condition_id.as_deref().unwrap_or("-");
        println!(
            "  {:<6} offset {:>3}  {:<9} [{}] {}",
            resolution.patient_id,
            resolution.offset,
            format!("{:?}", resolution.reason),
            matched,
            text
        );
    }

    println!(
        "\nSummary: {} to send, {} excluded, {} without a template",
        preview.summary.messages(),
        preview.summary.excluded,
        preview.summary.no_match
    );

    if let Some(conflicts) = &preview.conflicts {
        if conflicts.has_conflict {
            println!("\nWarning ({:?}): {}", conflicts.severity, conflicts.message);
        }
    }

    for issue in &preview.validation_issues {
        println!("Validation: {}", issue);
    }

    let no_match: Vec<&str> = preview
        .resolutions
        .iter()
        .filter(|r| r.reason == ResolutionReason::NoMatch)
        .map(|r| r.patient_id.as_str())
        .collect();
    if !no_match.is_empty() {
        println!("Patients skipped: {}", no_match.join(", "));
    }

    if let Some(metrics) = engine.metrics() {
        println!("\nMetrics:");
        println!("  Resolutions: {}", metrics.counter("resolutions_total").get());
        println!(
            "  Blank templates skipped: {}",
            metrics
                .counter("conditions_skipped_matched_blank_template")
                .get()
        );
    }

    println!("\nJSON for the sending screen:");
    println!("{}", serde_json::to_string_pretty(&preview.summary)?);

    Ok(())
}
