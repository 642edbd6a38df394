//! The expansion pipeline.
//!
//! A single linear pass: every mutation rule contributes to one growing
//! candidate set owned by the in-flight invocation. The rules are pure
//! mappings over (seeds, profile, rule table), execute in a fixed
//! sequence, and keep no state between runs, so identical inputs always
//! produce identical output.

use std::collections::HashSet;

use tracing::debug;

use crate::core::profile::TargetProfile;
use crate::core::rules::RuleTable;
use crate::mutators::case::expand_case;
use crate::mutators::facts::combine_facts;
use crate::mutators::leet::augment_leet;
use crate::mutators::numeric::augment_numeric;
use crate::mutators::symbol::augment_symbols;

/// Run every mutation rule over the seeds and profile, returning the
/// unsanitized union of their contributions.
///
/// The raw seeds themselves are not part of the result; the caller decides
/// whether to union them in before sanitation.
pub fn expand(seeds: &[String], profile: &TargetProfile, rules: &RuleTable) -> HashSet<String> {
    let mut candidates = HashSet::new();

    expand_case(seeds, &mut candidates);
    let after_case = candidates.len();

    augment_numeric(seeds, rules, &mut candidates);
    augment_symbols(seeds, rules, &mut candidates);
    augment_leet(seeds, rules, &mut candidates);
    let after_augmenters = candidates.len();

    combine_facts(profile, rules, &mut candidates);

    debug!(
        seeds = seeds.len(),
        case = after_case,
        augmented = after_augmenters - after_case,
        facts = candidates.len() - after_augmenters,
        total = candidates.len(),
        "expansion complete"
    );

    candidates
}
