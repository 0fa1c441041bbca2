//! The emission factor table.
//!
//! Fixed business data: multipliers are not configurable at runtime.

/// A categorical lookup with a fallback for unrecognised keys.
#[derive(Debug, Clone, Copy)]
pub struct FactorMap {
  entries: &'static [(&'static str, f64)],
  default: f64,
}

impl FactorMap {
  pub const fn new(entries: &'static [(&'static str, f64)], default: f64) -> Self {
    Self { entries, default }
  }

  /// The factor for `key`, or the map's default when `key` is unknown.
  pub fn get_or_default(&self, key: &str) -> f64 {
    self
      .entries
      .iter()
      .find(|(k, _)| *k == key)
      .map(|(_, v)| *v)
      .unwrap_or(self.default)
  }
}

/// Every multiplier used by the scoring engine.
#[derive(Debug, Clone, Copy)]
pub struct EmissionFactors {
  /// kg CO2 per km, keyed by transport mode.
  pub transport:   FactorMap,
  /// kg CO2 per unit of monthly electricity spend.
  pub electricity: f64,
  /// kg CO2 per day, keyed by diet type.
  pub diet:        FactorMap,
  /// Multiplier on electricity emissions, keyed by home size.
  pub housing:     FactorMap,
  /// kg CO2 per km flown.
  pub flights:     f64,
  /// Average km per flight.
  pub flight_km:   f64,
  /// kg CO2 absorbed per tree per year.
  pub tree_offset: f64,
}

pub const STANDARD: EmissionFactors = EmissionFactors {
  transport:   FactorMap::new(
    &[
      ("car", 0.21),
      ("bus", 0.08),
      ("train", 0.04),
      ("bicycle", 0.0),
      ("walking", 0.0),
      ("motorcycle", 0.15),
    ],
    0.21,
  ),
  electricity: 0.5,
  diet:        FactorMap::new(
    &[
      ("meat_heavy", 3.3),
      ("meat_moderate", 2.5),
      ("vegetarian", 1.7),
      ("vegan", 1.5),
    ],
    2.5,
  ),
  housing:     FactorMap::new(
    &[
      ("small", 1.2),
      ("medium", 1.5),
      ("large", 2.0),
      ("very_large", 2.5),
    ],
    1.5,
  ),
  flights:     0.25,
  flight_km:   1000.0,
  tree_offset: 22.0,
};

/// Bonus for recycling habits; anything other than `always`/`sometimes`
/// earns nothing.
pub fn recycling_credit(habit: &str) -> f64 {
  match habit {
    "always" => -200.0,
    "sometimes" => -100.0,
    _ => 0.0,
  }
}
