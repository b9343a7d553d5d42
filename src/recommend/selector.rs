//! Recommendation selection strategies.
//!
//! Two interchangeable strategies share the category-share logic: the
//! rule-based one ranks catalog actions by their base weekly impact, the
//! context-weighted one adjusts those impacts for the household profile
//! before ranking and also reports runner-up actions.

use super::catalog::{self, CatalogEntry};
use super::models::{
    Action, Alternative, Category, DietPreference, EmissionBreakdown, HouseholdContext,
    LocationType, RecommendationResult, Strategy, VehicleType,
};

/// Share-of-footprint trigger thresholds. Tunable policy constants, not
/// derived optima.
const TRANSPORT_THRESHOLD: f64 = 0.40;
const DIET_THRESHOLD: f64 = 0.35;
const ENERGY_THRESHOLD: f64 = 0.35;

/// Confidence for the nothing-logged-yet case.
const MIN_CONFIDENCE: f64 = 0.1;
/// Confidence when no category crosses its threshold.
const BALANCED_CONFIDENCE: f64 = 0.4;

/// Footprint (kg) under which a balanced profile is worth maintaining
/// rather than reducing.
const LOW_FOOTPRINT_KG: f64 = 15.0;

/// Select the highest-leverage behaviour change for a breakdown. Total for
/// every well-formed breakdown, the all-zero case included.
pub fn select(
    breakdown: &EmissionBreakdown,
    context: Option<&HouseholdContext>,
    strategy: Strategy,
) -> RecommendationResult {
    match strategy {
        Strategy::RuleBased => rule_based(breakdown),
        Strategy::ContextWeighted => context_weighted(breakdown, context),
    }
}

/// Category whose share crosses its trigger threshold, with the share and
/// threshold that fired. Transport is checked first, then diet, then
/// energy.
fn triggered_category(breakdown: &EmissionBreakdown) -> Option<(Category, f64, f64)> {
    let (transport, diet, energy) = breakdown.shares();
    if transport > TRANSPORT_THRESHOLD {
        Some((Category::Transport, transport, TRANSPORT_THRESHOLD))
    } else if diet > DIET_THRESHOLD {
        Some((Category::Diet, diet, DIET_THRESHOLD))
    } else if energy > ENERGY_THRESHOLD {
        Some((Category::Energy, energy, ENERGY_THRESHOLD))
    } else {
        None
    }
}

/// Confidence grows with the margin over the trigger threshold.
fn margin_confidence(share: f64, threshold: f64) -> f64 {
    (0.5 + 2.0 * (share - threshold)).clamp(0.0, 1.0)
}

fn alternative_confidence(primary: f64, rank: usize) -> f64 {
    primary * 0.75_f64.powi(rank as i32 + 1)
}

fn reasoning(category: Category, share: f64, context_applied: bool) -> String {
    let mut text = format!(
        "Your {} emissions make up {:.0}% of your recent footprint, the largest share above its action threshold.",
        category.label(),
        share * 100.0
    );
    if context_applied {
        text.push_str(" Impact estimates are adjusted for your household profile.");
    }
    text
}

fn highest_impact_in(category: Category) -> &'static CatalogEntry {
    let mut best: Option<&'static CatalogEntry> = None;
    for entry in catalog::CATALOG {
        if entry.category != category {
            continue;
        }
        match best {
            Some(b) if b.base_weekly_impact_kg >= entry.base_weekly_impact_kg => {}
            _ => best = Some(entry),
        }
    }
    best.unwrap_or_else(|| catalog::entry(Action::GeneralReduction))
}

fn result_from(
    entry: &CatalogEntry,
    confidence: f64,
    reasoning: String,
    estimated_weekly_impact_kg: f64,
    alternatives: Vec<Alternative>,
    user_context_applied: bool,
) -> RecommendationResult {
    RecommendationResult {
        action: entry.action,
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        category: entry.category,
        confidence,
        reasoning,
        estimated_weekly_impact_kg,
        alternatives,
        difficulty: entry.difficulty,
        user_context_applied,
    }
}

fn zero_footprint(context_applied: bool) -> RecommendationResult {
    let entry = catalog::entry(Action::GeneralReduction);
    result_from(
        entry,
        MIN_CONFIDENCE,
        "No emissions recorded yet; log a few activities to get a targeted recommendation."
            .to_string(),
        entry.base_weekly_impact_kg,
        Vec::new(),
        context_applied,
    )
}

fn balanced(breakdown: &EmissionBreakdown, context_applied: bool) -> RecommendationResult {
    let (action, reasoning) = if breakdown.total_kg() < LOW_FOOTPRINT_KG {
        (
            Action::MaintainGoodHabits,
            "Your footprint is low and evenly spread across categories; keep your current habits.",
        )
    } else {
        (
            Action::GeneralReduction,
            "No single category dominates your footprint; spread small reductions across all of them.",
        )
    };

    let entry = catalog::entry(action);
    result_from(
        entry,
        BALANCED_CONFIDENCE,
        reasoning.to_string(),
        entry.base_weekly_impact_kg,
        Vec::new(),
        context_applied,
    )
}

fn rule_based(breakdown: &EmissionBreakdown) -> RecommendationResult {
    if breakdown.total_kg() == 0.0 {
        return zero_footprint(false);
    }

    let Some((category, share, threshold)) = triggered_category(breakdown) else {
        return balanced(breakdown, false);
    };

    let entry = highest_impact_in(category);
    result_from(
        entry,
        margin_confidence(share, threshold),
        reasoning(category, share, false),
        entry.base_weekly_impact_kg,
        Vec::new(),
        false,
    )
}

/// Context-adjusted weekly impact; `None` excludes the action outright.
fn adjusted_impact(entry: &CatalogEntry, context: Option<&HouseholdContext>) -> Option<f64> {
    let Some(ctx) = context else {
        return Some(entry.base_weekly_impact_kg);
    };

    let mut impact = entry.base_weekly_impact_kg;
    match entry.category {
        Category::Transport => {
            // Car-centric actions are pointless without a car.
            if ctx.vehicle_type == Some(VehicleType::None) {
                return None;
            }
            match ctx.location_type {
                // Urban households have transit available, so carpooling
                // loses ground to it.
                Some(LocationType::Urban) if entry.action == Action::CarpoolMore => {
                    impact *= 0.75;
                }
                // Rural areas rarely have usable transit.
                Some(LocationType::Rural)
                    if entry.action == Action::SwitchToPublicTransit =>
                {
                    return None;
                }
                _ => {}
            }
        }
        Category::Diet => {
            let meat_action =
                matches!(entry.action, Action::MeatlessMonday | Action::ReduceRedMeat);
            if meat_action
                && matches!(
                    ctx.diet_preference,
                    Some(DietPreference::Vegetarian | DietPreference::Vegan)
                )
            {
                return None;
            }
        }
        Category::Energy => {
            if ctx.renewable_energy == Some(true) {
                impact *= 0.5;
            }
        }
        Category::General => {}
    }
    Some(impact)
}

fn context_weighted(
    breakdown: &EmissionBreakdown,
    context: Option<&HouseholdContext>,
) -> RecommendationResult {
    let context_applied = context.is_some();
    if breakdown.total_kg() == 0.0 {
        return zero_footprint(context_applied);
    }

    let Some((category, share, threshold)) = triggered_category(breakdown) else {
        return balanced(breakdown, context_applied);
    };

    let mut ranked: Vec<(&CatalogEntry, f64)> = catalog::CATALOG
        .iter()
        .filter(|e| e.category == category)
        .filter_map(|e| adjusted_impact(e, context).map(|impact| (e, impact)))
        .collect();

    // Context can exclude an entire category; rank the rest of the catalog
    // instead.
    if ranked.is_empty() {
        ranked = catalog::CATALOG
            .iter()
            .filter(|e| e.category != category)
            .filter_map(|e| adjusted_impact(e, context).map(|impact| (e, impact)))
            .collect();
    }
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let Some(&(top, top_impact)) = ranked.first() else {
        return balanced(breakdown, context_applied);
    };

    let confidence = margin_confidence(share, threshold);
    let alternatives = ranked
        .iter()
        .skip(1)
        .take(3)
        .enumerate()
        .map(|(rank, &(entry, _))| Alternative {
            action: entry.action,
            confidence: alternative_confidence(confidence, rank),
        })
        .collect();

    result_from(
        top,
        confidence,
        reasoning(category, share, context_applied),
        top_impact,
        alternatives,
        context_applied,
    )
}
