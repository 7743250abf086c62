mod cli;
mod config;
mod pipeline;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use decision_log::{DecisionEntry, DecisionEvent, DecisionSink, Verdict};
use entity_extract::{EntityExtractor, ExtractError, HeuristicExtractor};
use policy_engine::store::{shared, MemoryStore};
use policy_engine::{loader, EqualityChecker, Guard, Inquiry, PolicyError};

use crate::cli::{Cli, Command};

/// Process-wide collaborators, constructed once at startup and passed by
/// reference into each command. Nothing here lives in ambient globals.
struct App {
    extractor: Arc<dyn EntityExtractor>,
    guard: Guard,
    sink: DecisionSink,
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

/// Record which pipeline stage a compile-path failure came from.
async fn record_failure(app: &App, err: &anyhow::Error) {
    let (event, component) = if err.downcast_ref::<ExtractError>().is_some() {
        (DecisionEvent::ExtractionFailed, "extractor")
    } else if err.downcast_ref::<PolicyError>().is_some() {
        (DecisionEvent::CompileRejected, "compiler")
    } else {
        return;
    };

    app.sink
        .record(DecisionEntry::new(
            event,
            component,
            serde_json::json!({"error": format!("{err:#}")}),
        ))
        .await;
}

/// `compile` subcommand: statement in, stored policy + exchange XML out.
async fn run_compile(app: &App, id: &str, text: &str) -> Result<serde_json::Value> {
    let (bundle, compiled) =
        match pipeline::compile_into(&app.guard, app.extractor.as_ref(), id, text) {
            Ok(artifacts) => artifacts,
            Err(err) => {
                record_failure(app, &err).await;
                return Err(err);
            }
        };

    app.sink
        .record(DecisionEntry::new(
            DecisionEvent::PolicyCompiled,
            "compiler",
            serde_json::json!({"policy_id": id}),
        ))
        .await;
    app.sink
        .record(DecisionEntry::new(
            DecisionEvent::PolicyStored,
            "store",
            serde_json::json!({"policy_id": id}),
        ))
        .await;

    Ok(serde_json::json!({
        "policy_id": compiled.policy.id,
        "entities": bundle,
        "xacml_policy": compiled.document,
    }))
}

/// `check` subcommand: judge one inquiry against the seeded store.
async fn run_check(app: &App, inquiry: Inquiry) -> Result<serde_json::Value> {
    let (decision, matched) = app.guard.evaluate_with_match(&inquiry);

    app.sink
        .record(
            DecisionEntry::new(
                DecisionEvent::InquiryEvaluated,
                "guard",
                serde_json::json!({
                    "subject": inquiry.subject,
                    "action": inquiry.action,
                    "resource": inquiry.resource,
                }),
            )
            .with_verdict(Verdict {
                decision: decision.as_str().to_string(),
                matched_policy: matched.clone(),
            }),
        )
        .await;

    Ok(serde_json::json!({
        "decision": decision,
        "matched_policy": matched,
        "enforcement": decision.enforcement_str(),
    }))
}

/// `simulate` subcommand: the classic self-referential demonstration.
async fn run_simulate(app: &App, text: &str) -> Result<serde_json::Value> {
    let sim = match pipeline::simulate(app.extractor.as_ref(), text) {
        Ok(sim) => sim,
        Err(err) => {
            record_failure(app, &err).await;
            return Err(err);
        }
    };

    app.sink
        .record(
            DecisionEntry::new(
                DecisionEvent::InquiryEvaluated,
                "guard",
                serde_json::json!({"mode": "simulate"}),
            )
            .with_verdict(Verdict {
                decision: sim.decision.as_str().to_string(),
                matched_policy: sim.matched_policy,
            }),
        )
        .await;

    Ok(serde_json::json!({
        "entities": sim.bundle,
        "xacml_policy": sim.document,
        "enforcement": sim.decision.enforcement_str(),
    }))
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Parse CLI args, then load config and merge overrides.
    let cli = Cli::parse();
    let mut cfg = config::load(&cli.config)?;

    if let Some(ref policies) = cli.policies {
        cfg.policy_file = policies.clone();
    }
    if let Some(ref log) = cli.decision_log {
        cfg.logging.decision_log_path = log.clone();
    }

    // 2. Init tracing-subscriber with JSON format.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();

    info!(
        config_file = %cli.config.display(),
        policy_file = %cfg.policy_file.display(),
        "lexguard starting"
    );

    // 3. Start the decision log.
    let (sink, sink_handle) = DecisionSink::start(&cfg.logging.decision_log_path)
        .await
        .context("failed to start decision log")?;

    sink.record(DecisionEntry::new(
        DecisionEvent::ProcessStarted,
        "lexguard",
        serde_json::json!({"version": env!("CARGO_PKG_VERSION")}),
    ))
    .await;

    // 4. Construct the extractor once; it is shared for the process lifetime.
    let extractor: Arc<dyn EntityExtractor> = Arc::new(
        HeuristicExtractor::new().context("failed to initialize entity extractor")?,
    );

    // 5. Seed the shared store from the policy file, if one exists.
    let mut store = MemoryStore::new();
    if cfg.policy_file.exists() {
        let policies =
            loader::load_policies(&cfg.policy_file).context("failed to load policy file")?;
        let count = policies.len();
        for policy in policies {
            store.add(policy)?;
        }
        info!(count, policy_file = %cfg.policy_file.display(), "store seeded");
        sink.record(DecisionEntry::new(
            DecisionEvent::StoreSeeded,
            "store",
            serde_json::json!({"count": count}),
        ))
        .await;
    } else {
        warn!(
            policy_file = %cfg.policy_file.display(),
            "policy file not found; starting with an empty store"
        );
    }

    let guard = Guard::new(shared(store), Arc::new(EqualityChecker));

    let app = App {
        extractor,
        guard,
        sink: sink.clone(),
    };

    // 6. Dispatch the subcommand.
    let result = match &cli.command {
        Command::Compile { id, text } => run_compile(&app, id, text).await,
        Command::Check {
            subject,
            action,
            resource,
            condition,
        } => run_check(&app, Inquiry::new(subject, action, resource, condition)).await,
        Command::Simulate { text } => run_simulate(&app, text).await,
    };

    sink.record(DecisionEntry::new(
        DecisionEvent::ProcessStopped,
        "lexguard",
        serde_json::json!({"ok": result.is_ok()}),
    ))
    .await;

    // 7. Drain the decision log before reporting.
    drop(app);
    drop(sink);
    let _ = sink_handle.await;

    // A core failure becomes a generic failure response carrying the error
    // text; never a partial result.
    match result {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(err) => {
            println!(
                "{}",
                serde_json::json!({"error": format!("{err:#}")})
            );
            std::process::exit(1);
        }
    }
}
