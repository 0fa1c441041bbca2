//! The scoring engine: lifestyle answers in, annual kg CO2 estimate out.
//!
//! Everything except tip selection is a pure function of the input and the
//! factor table. Tips are drawn from a caller-supplied [`Rng`].

use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  factors::{EmissionFactors, STANDARD, recycling_credit},
  lifestyle::LifestyleInput,
};

/// Totals at or below this are categorised as [`Category::Good`].
pub const GOOD_THRESHOLD: f64 = 4000.0;

const GOOD_TIPS: &[&str] = &[
  "Keep up the great work!",
  "You're doing amazing!",
  "Excellent carbon footprint!",
];

const BAD_TIPS: &[&str] = &[
  "Use public transport more often.",
  "Reduce meat consumption.",
  "Plant more trees to offset emissions.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Good,
  Bad,
}

impl Category {
  pub fn from_total(total: f64) -> Self {
    if total <= GOOD_THRESHOLD { Self::Good } else { Self::Bad }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Good => "good",
      Self::Bad => "bad",
    }
  }

  /// The fixed tip list for this category.
  pub fn tips(self) -> &'static [&'static str] {
    match self {
      Self::Good => GOOD_TIPS,
      Self::Bad => BAD_TIPS,
    }
  }
}

/// Per-component contributions, in kg CO2 per year. Credits are negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
  pub transport:   f64,
  pub electricity: f64,
  pub diet:        f64,
  pub housing:     f64,
  pub flights:     f64,
  pub offset:      f64,
  pub recycling:   f64,
}

impl Breakdown {
  pub fn compute(input: &LifestyleInput, factors: &EmissionFactors) -> Self {
    let transport =
      input.weekly_distance * 52.0 * factors.transport.get_or_default(&input.transport_mode);
    let electricity = input.electricity_bill * 12.0 * factors.electricity;
    let diet = factors.diet.get_or_default(&input.diet_type) * 365.0;
    let housing = electricity * factors.housing.get_or_default(&input.home_size);
    let flights = f64::from(input.flights_per_year) * factors.flight_km * factors.flights;
    let offset = -(f64::from(input.trees_planted) * factors.tree_offset);
    let recycling = recycling_credit(&input.recycling_habits);

    Self { transport, electricity, diet, housing, flights, offset, recycling }
  }

  fn components(&self) -> [(&'static str, f64); 7] {
    [
      ("transport", self.transport),
      ("electricity", self.electricity),
      ("diet", self.diet),
      ("housing", self.housing),
      ("flights", self.flights),
      ("offset", self.offset),
      ("recycling", self.recycling),
    ]
  }

  /// Sum of all components, floored at zero.
  ///
  /// Finite inputs can still overflow (or hit `inf * 0 = NaN`), so a
  /// non-finite component or sum is a validation error.
  pub fn total(&self) -> Result<f64> {
    let mut sum = 0.0;
    for (name, value) in self.components() {
      if !value.is_finite() {
        return Err(Error::Validation(format!("{name} emissions out of range")));
      }
      sum += value;
    }
    if !sum.is_finite() {
      return Err(Error::Validation("total emissions out of range".into()));
    }
    Ok(sum.max(0.0))
  }
}

/// The outcome of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
  pub total_score: f64,
  pub category:    Category,
  pub tip:         String,
  pub breakdown:   Breakdown,
}

/// Score `input` against the standard factor table.
pub fn score<R: Rng + ?Sized>(input: &LifestyleInput, rng: &mut R) -> Result<ScoreResult> {
  score_with(input, &STANDARD, rng)
}

/// Score `input` against an explicit factor table.
pub fn score_with<R: Rng + ?Sized>(
  input: &LifestyleInput,
  factors: &EmissionFactors,
  rng: &mut R,
) -> Result<ScoreResult> {
  let breakdown = Breakdown::compute(input, factors);
  let total_score = breakdown.total()?;
  let category = Category::from_total(total_score);
  let tip = category
    .tips()
    .choose(rng)
    .copied()
    .unwrap_or_default()
    .to_owned();

  Ok(ScoreResult { total_score, category, tip, breakdown })
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-6 }

  fn sample() -> LifestyleInput {
    LifestyleInput {
      weekly_distance:  100.0,
      transport_mode:   "car".into(),
      electricity_bill: 100.0,
      diet_type:        "meat_moderate".into(),
      home_size:        "medium".into(),
      flights_per_year: 2,
      recycling_habits: "sometimes".into(),
      trees_planted:    10,
    }
  }

  #[test]
  fn worked_example_is_good() {
    let b = Breakdown::compute(&sample(), &STANDARD);
    assert!(close(b.transport, 1092.0));
    assert!(close(b.electricity, 600.0));
    assert!(close(b.diet, 912.5));
    assert!(close(b.housing, 900.0));
    assert!(close(b.flights, 500.0));
    assert!(close(b.offset, -220.0));
    assert!(close(b.recycling, -100.0));

    let r = score(&sample(), &mut StdRng::seed_from_u64(7)).unwrap();
    assert!(close(r.total_score, 3684.5), "total: {}", r.total_score);
    assert_eq!(r.category, Category::Good);
    assert!(GOOD_TIPS.contains(&r.tip.as_str()));
  }

  #[test]
  fn no_recycling_no_trees_is_bad() {
    let mut input = sample();
    input.recycling_habits = "never".into();
    input.trees_planted = 0;

    let r = score(&input, &mut StdRng::seed_from_u64(7)).unwrap();
    assert!(close(r.total_score, 4004.5), "total: {}", r.total_score);
    assert_eq!(r.category, Category::Bad);
    assert!(BAD_TIPS.contains(&r.tip.as_str()));
  }

  #[test]
  fn threshold_is_inclusive() {
    assert_eq!(Category::from_total(4000.0), Category::Good);
    assert_eq!(Category::from_total(4000.01), Category::Bad);
  }

  #[test]
  fn offsets_never_drive_total_negative() {
    let input = LifestyleInput {
      weekly_distance:  0.0,
      transport_mode:   "walking".into(),
      electricity_bill: 0.0,
      diet_type:        "vegan".into(),
      home_size:        "small".into(),
      flights_per_year: 0,
      recycling_habits: "always".into(),
      trees_planted:    500,
    };
    let r = score(&input, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(r.total_score, 0.0);
    assert_eq!(r.category, Category::Good);
  }

  #[test]
  fn unknown_categories_use_defaults() {
    let mut input = sample();
    input.transport_mode = "hovercraft".into();
    input.diet_type = "carnivore".into();
    input.home_size = "castle".into();

    let known = score(&sample(), &mut StdRng::seed_from_u64(3)).unwrap();
    let unknown = score(&input, &mut StdRng::seed_from_u64(3)).unwrap();
    assert!(close(known.total_score, unknown.total_score));
  }

  #[test]
  fn same_seed_same_result() {
    let a = score(&sample(), &mut StdRng::seed_from_u64(42)).unwrap();
    let b = score(&sample(), &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn total_and_category_independent_of_rng() {
    for seed in 0..16 {
      let r = score(&sample(), &mut StdRng::seed_from_u64(seed)).unwrap();
      assert!(close(r.total_score, 3684.5));
      assert_eq!(r.category, Category::Good);
    }
  }

  #[test]
  fn overflowing_car_inputs_are_rejected() {
    let mut input = sample();
    input.weekly_distance = 1e308;
    input.electricity_bill = 1e308;
    assert!(input.validate().is_ok());

    let err = score(&input, &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err:?}");
  }

  #[test]
  fn overflow_times_zero_factor_is_not_scored_as_good() {
    let mut input = sample();
    input.transport_mode = "bicycle".into();
    input.weekly_distance = 1e308;
    input.electricity_bill = 0.0;
    assert!(input.validate().is_ok());

    let err = score(&input, &mut StdRng::seed_from_u64(1)).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err:?}");
  }

  #[test]
  fn finite_components_overflowing_in_sum_are_rejected() {
    let b = Breakdown {
      transport:   f64::MAX,
      electricity: f64::MAX,
      diet:        0.0,
      housing:     0.0,
      flights:     0.0,
      offset:      0.0,
      recycling:   0.0,
    };
    assert!(matches!(b.total(), Err(Error::Validation(_))));
  }
}
