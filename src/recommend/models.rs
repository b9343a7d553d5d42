//! Data types for behaviour recommendations.

use serde::{Deserialize, Serialize};

/// Recommendable actions, keyed by the labels the dashboard already knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Action {
    #[serde(rename = "Carpool_More")]
    CarpoolMore,
    #[serde(rename = "Switch_to_Public_Transit")]
    SwitchToPublicTransit,
    #[serde(rename = "Bike_Short_Trips")]
    BikeShortTrips,
    #[serde(rename = "Meatless_Monday")]
    MeatlessMonday,
    #[serde(rename = "Reduce_Red_Meat")]
    ReduceRedMeat,
    #[serde(rename = "Buy_Local_Produce")]
    BuyLocalProduce,
    #[serde(rename = "Install_Smart_Thermostat")]
    InstallSmartThermostat,
    #[serde(rename = "Switch_to_LED_Bulbs")]
    SwitchToLedBulbs,
    #[serde(rename = "General_Reduction")]
    GeneralReduction,
    #[serde(rename = "Maintain_Good_Habits")]
    MaintainGoodHabits,
}

/// Footprint category an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Diet,
    Energy,
    General,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Diet => "diet",
            Category::Energy => "energy",
            Category::General => "general",
        }
    }
}

/// How much behaviour change an action asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Recent emission totals per category, in kg CO2e.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmissionBreakdown {
    pub transport_kg: f64,
    pub diet_kg: f64,
    pub energy_kg: f64,
}

impl EmissionBreakdown {
    /// Negative components are treated as zero.
    pub fn total_kg(&self) -> f64 {
        self.transport_kg.max(0.0) + self.diet_kg.max(0.0) + self.energy_kg.max(0.0)
    }

    /// Category shares of the total; all zeros when the total is zero.
    pub fn shares(&self) -> (f64, f64, f64) {
        let total = self.total_kg();
        if total == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (
            self.transport_kg.max(0.0) / total,
            self.diet_kg.max(0.0) / total,
            self.energy_kg.max(0.0) / total,
        )
    }
}

/// Household profile used by the context-weighted strategy.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HouseholdContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_type: Option<HomeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_preference: Option<DietPreference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renewable_energy: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Urban,
    Suburban,
    Rural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    None,
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HomeType {
    Apartment,
    House,
    Shared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    Omnivore,
    Pescatarian,
    Vegetarian,
    Vegan,
}

/// Selection strategy; mirrors the basic and enhanced prediction flows the
/// dashboard exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    RuleBased,
    ContextWeighted,
}

/// Request payload for recommendations.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendRequest {
    pub breakdown: EmissionBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<HouseholdContext>,
    #[serde(default)]
    pub strategy: Strategy,
}

/// Runner-up action with its own confidence.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Alternative {
    pub action: Action,
    pub confidence: f64,
}

/// Response payload for recommendations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecommendationResult {
    pub action: Action,
    /// Catalog title and description, ready for display.
    pub title: String,
    pub description: String,
    pub category: Category,
    /// In [0, 1]; how decisively the breakdown points at this action.
    pub confidence: f64,
    pub reasoning: String,
    pub estimated_weekly_impact_kg: f64,
    pub alternatives: Vec<Alternative>,
    pub difficulty: Difficulty,
    pub user_context_applied: bool,
}
