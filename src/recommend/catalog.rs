//! Fixed catalog of recommendable behaviour changes.

use super::models::{Action, Category, Difficulty};

/// One recommendable action with its estimated weekly savings.
#[derive(Debug)]
pub struct CatalogEntry {
    pub action: Action,
    pub category: Category,
    pub base_weekly_impact_kg: f64,
    pub difficulty: Difficulty,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        action: Action::CarpoolMore,
        category: Category::Transport,
        base_weekly_impact_kg: 4.0,
        difficulty: Difficulty::Hard,
        title: "Carpool more often",
        description: "Share rides on your regular commute instead of driving alone.",
    },
    CatalogEntry {
        action: Action::SwitchToPublicTransit,
        category: Category::Transport,
        base_weekly_impact_kg: 3.5,
        difficulty: Difficulty::Hard,
        title: "Switch to public transit",
        description: "Replace car trips with bus or rail where routes line up.",
    },
    CatalogEntry {
        action: Action::BikeShortTrips,
        category: Category::Transport,
        base_weekly_impact_kg: 2.5,
        difficulty: Difficulty::Medium,
        title: "Bike short trips",
        description: "Cycle trips under 5 km instead of driving them.",
    },
    CatalogEntry {
        action: Action::MeatlessMonday,
        category: Category::Diet,
        base_weekly_impact_kg: 1.8,
        difficulty: Difficulty::Medium,
        title: "Try Meatless Monday",
        description: "Go meat-free one day a week.",
    },
    CatalogEntry {
        action: Action::ReduceRedMeat,
        category: Category::Diet,
        base_weekly_impact_kg: 2.0,
        difficulty: Difficulty::Medium,
        title: "Reduce red meat",
        description: "Swap some beef and lamb meals for poultry or plants.",
    },
    CatalogEntry {
        action: Action::BuyLocalProduce,
        category: Category::Diet,
        base_weekly_impact_kg: 0.8,
        difficulty: Difficulty::Easy,
        title: "Buy local produce",
        description: "Prefer seasonal, locally grown food to cut transport emissions.",
    },
    CatalogEntry {
        action: Action::InstallSmartThermostat,
        category: Category::Energy,
        base_weekly_impact_kg: 2.2,
        difficulty: Difficulty::Medium,
        title: "Install a smart thermostat",
        description: "Automate heating and cooling around your actual schedule.",
    },
    CatalogEntry {
        action: Action::SwitchToLedBulbs,
        category: Category::Energy,
        base_weekly_impact_kg: 0.6,
        difficulty: Difficulty::Easy,
        title: "Switch to LED bulbs",
        description: "Replace remaining incandescent bulbs with LEDs.",
    },
    CatalogEntry {
        action: Action::GeneralReduction,
        category: Category::General,
        base_weekly_impact_kg: 1.0,
        difficulty: Difficulty::Easy,
        title: "Small reductions everywhere",
        description: "Trim a little from each category rather than overhauling one.",
    },
    CatalogEntry {
        action: Action::MaintainGoodHabits,
        category: Category::General,
        base_weekly_impact_kg: 0.0,
        difficulty: Difficulty::Easy,
        title: "Keep it up",
        description: "Your footprint is already low; maintain your current habits.",
    },
];

/// Catalog entry for an action.
pub fn entry(action: Action) -> &'static CatalogEntry {
    CATALOG
        .iter()
        .find(|e| e.action == action)
        .unwrap_or(&CATALOG[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_has_an_entry() {
        let actions = [
            Action::CarpoolMore,
            Action::SwitchToPublicTransit,
            Action::BikeShortTrips,
            Action::MeatlessMonday,
            Action::ReduceRedMeat,
            Action::BuyLocalProduce,
            Action::InstallSmartThermostat,
            Action::SwitchToLedBulbs,
            Action::GeneralReduction,
            Action::MaintainGoodHabits,
        ];

        for action in actions {
            assert_eq!(entry(action).action, action);
        }
    }

    #[test]
    fn impacts_are_non_negative() {
        for entry in CATALOG {
            assert!(entry.base_weekly_impact_kg >= 0.0);
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
        }
    }
}
