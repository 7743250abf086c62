//! The compile and evaluation flows behind the CLI subcommands, kept free
//! of I/O so they can be exercised end to end in tests.

use std::sync::Arc;

use anyhow::{Context, Result};

use entity_extract::{EntityBundle, EntityExtractor};
use policy_engine::store::{shared, MemoryStore};
use policy_engine::{compile, CompiledPolicy, Decision, EqualityChecker, Guard, Inquiry};

/// Outcome of the self-referential demonstration flow.
#[derive(Debug)]
pub struct Simulation {
    pub bundle: EntityBundle,
    pub document: String,
    pub decision: Decision,
    pub matched_policy: Option<String>,
}

/// Extract entities from `text` and compile them under `id`, storing the
/// policy into the guard's shared store.
///
/// Returns the bundle and both compilation artifacts so the caller can
/// report them.
pub fn compile_into(
    guard: &Guard,
    extractor: &dyn EntityExtractor,
    id: &str,
    text: &str,
) -> Result<(EntityBundle, CompiledPolicy)> {
    let bundle = extractor
        .extract(text)
        .context("entity extraction failed")?;
    let compiled = compile(id, &bundle)?;
    guard.store().write().add(compiled.policy.clone())?;
    Ok((bundle, compiled))
}

/// The classic end-to-end demonstration: compile the statement into a fresh
/// single-policy store, build the inquiry from the same compiled rules, and
/// judge it.  Under equality matching this allows whenever compilation
/// succeeds.
pub fn simulate(extractor: &dyn EntityExtractor, text: &str) -> Result<Simulation> {
    let bundle = extractor
        .extract(text)
        .context("entity extraction failed")?;
    let compiled = compile("policy-1", &bundle)?;
    let policy = compiled.policy.clone();

    let store = shared(MemoryStore::new());
    store.write().add(compiled.policy)?;
    let guard = Guard::new(store, Arc::new(EqualityChecker));

    let inquiry = Inquiry::new(
        policy.subject_rule.as_str(),
        policy.action_rule.as_str(),
        policy.resource_rule.as_str(),
        policy.condition_rule.as_str(),
    );
    let (decision, matched_policy) = guard.evaluate_with_match(&inquiry);

    Ok(Simulation {
        bundle,
        document: compiled.document,
        decision,
        matched_policy,
    })
}
