//! What-if simulator.
//!
//! Applies the recycling and processing levers to canonical records,
//! producing a parallel record set with the same shape.

use catch_core::config::SimulationConfig;
use catch_core::{quality_from_scores, round2, CanonicalRecord, Keyed, Levers};
use tracing::{debug, warn};

/// Applies lever percentages to canonical records.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Create a simulator with the given lever coefficients.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Simulate every record, order preserved.
    ///
    /// With both levers at zero the input is returned as an unmodified copy.
    pub fn simulate(&self, records: &[CanonicalRecord], levers: Levers) -> Vec<CanonicalRecord> {
        if levers.is_zero() {
            debug!(count = records.len(), "levers at rest, copying baseline");
            return records.to_vec();
        }

        let simulated: Vec<CanonicalRecord> = records
            .iter()
            .map(|r| self.simulate_record(r, levers))
            .collect();
        debug!(
            count = simulated.len(),
            recycling = levers.recycling_pct,
            processing = levers.processing_pct,
            "simulated record set"
        );
        simulated
    }

    /// Simulate a single record.
    ///
    /// Quality is recomputed from homogeneity and stress, so a quality
    /// supplied on input does not survive simulation.
    pub fn simulate_record(&self, record: &CanonicalRecord, levers: Levers) -> CanonicalRecord {
        let cfg = &self.config;
        let recycling = levers.recycling();
        let processing = levers.processing();

        let gross = record.gross_weight;
        let unit_price = if record.unit_price == 0.0 {
            1.0
        } else {
            record.unit_price
        };

        let waste_ratio = if gross > 0.0 {
            record.waste_weight / gross
        } else {
            warn!(
                date = %record.date,
                category = record.category_label(),
                "sample without gross weight, waste ratio set to zero"
            );
            0.0
        };
        let adjusted_ratio = (waste_ratio - recycling * cfg.recycling_waste_reduction).max(0.0);
        let waste = gross * adjusted_ratio;
        let net = gross - waste;

        let unit_cost = unit_price
            * (1.0 + recycling * cfg.recycling_cost_increase
                - processing * cfg.processing_cost_reduction);
        let profit = record.profit * (1.0 + processing * cfg.processing_profit_increase);
        let final_price = unit_cost + profit;

        let quality = quality_from_scores(
            record.homogeneity,
            record.stress,
            processing * cfg.processing_quality_penalty,
        );

        CanonicalRecord {
            waste_weight: round2(waste),
            net_weight: round2(net),
            unit_cost: round2(unit_cost),
            profit: round2(profit),
            final_price: round2(final_price),
            quality,
            ..record.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use catch_core::SampleRecord;
    use catch_ingestion::Normalizer;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn sardina() -> CanonicalRecord {
        let raw = SampleRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), "Sardina")
            .with_weights(700.0, 300.0)
            .with_unit_price(1.0);
        Normalizer::default().normalize_record(&raw)
    }

    fn levers(recycling: u32, processing: u32) -> Levers {
        Levers::new(recycling, processing).unwrap()
    }

    #[test]
    fn test_zero_levers_copy_baseline() {
        let baseline = vec![sardina()];
        let simulated = Simulator::default().simulate(&baseline, Levers::default());
        assert_eq!(simulated, baseline);

        let record = &simulated[0];
        assert_abs_diff_eq!(record.unit_cost, 1.0);
        assert_abs_diff_eq!(record.profit, 0.25);
        assert_abs_diff_eq!(record.quality, 3.0);
    }

    #[test]
    fn test_full_recycling() {
        let base = sardina();
        let record = Simulator::default().simulate_record(&base, levers(100, 0));

        assert_abs_diff_eq!(base.waste_ratio() - record.waste_ratio(), 0.12, epsilon = 1e-9);
        assert_abs_diff_eq!(record.waste_weight, 180.0);
        assert_abs_diff_eq!(record.net_weight, 820.0);
        assert_abs_diff_eq!(record.gross_weight, 1000.0);
        assert_abs_diff_eq!(record.unit_cost, 1.1);
        assert_abs_diff_eq!(record.profit, 0.25);
        assert_abs_diff_eq!(record.final_price, 1.35);
        assert_abs_diff_eq!(record.quality, 3.0);
    }

    #[test]
    fn test_full_processing() {
        let record = Simulator::default().simulate_record(&sardina(), levers(0, 100));

        assert_abs_diff_eq!(record.quality, 2.0);
        assert_abs_diff_eq!(record.profit, 0.3);
        assert_abs_diff_eq!(record.unit_cost, 0.8);
        assert_abs_diff_eq!(record.final_price, 1.1);
        assert_abs_diff_eq!(record.waste_weight, 300.0);
    }

    #[test]
    fn test_levers_offset_on_cost() {
        // +10% from recycling, -20% from processing at 50% each: -5%.
        let record = Simulator::default().simulate_record(&sardina(), levers(50, 50));
        assert_abs_diff_eq!(record.unit_cost, 0.95);
        assert_abs_diff_eq!(record.quality, 2.5);
    }

    #[test]
    fn test_quality_override_is_discarded() {
        let mut base = sardina();
        base.quality = 5.0;
        let record = Simulator::default().simulate_record(&base, levers(25, 0));
        assert_abs_diff_eq!(record.quality, 3.0);
    }

    #[test]
    fn test_zero_price_falls_back() {
        let mut base = sardina();
        base.unit_price = 0.0;
        let record = Simulator::default().simulate_record(&base, levers(100, 0));
        assert_abs_diff_eq!(record.unit_cost, 1.1);
        assert_eq!(record.unit_price, 0.0);
    }

    #[test]
    fn test_zero_weight_stays_finite() {
        let mut base = sardina();
        base.gross_weight = 0.0;
        base.net_weight = 0.0;
        base.waste_weight = 0.0;
        let record = Simulator::default().simulate_record(&base, levers(100, 100));
        assert_eq!(record.waste_weight, 0.0);
        assert_eq!(record.net_weight, 0.0);
        assert!(record.final_price.is_finite());
    }

    #[test]
    fn test_low_waste_does_not_go_negative() {
        let raw = SampleRecord::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), "Tonno rosso")
            .with_weights(950.0, 50.0)
            .with_unit_price(5.5);
        let base = Normalizer::default().normalize_record(&raw);
        let record = Simulator::default().simulate_record(&base, levers(100, 0));
        assert_eq!(record.waste_weight, 0.0);
        assert_abs_diff_eq!(record.net_weight, 1000.0);
    }

    #[test]
    fn test_input_not_mutated() {
        let baseline = vec![sardina()];
        let before = baseline.clone();
        let _ = Simulator::default().simulate(&baseline, levers(75, 25));
        assert_eq!(baseline, before);
    }

    proptest! {
        #[test]
        fn simulated_quality_in_bounds(
            h in 0i32..4,
            s in 0i32..4,
            recycling in 0u32..=100,
            processing in 0u32..=100,
        ) {
            let mut base = sardina();
            base.homogeneity = h;
            base.stress = s;
            let record = Simulator::default().simulate_record(&base, levers(recycling, processing));
            prop_assert!((0.0..=5.0).contains(&record.quality));
            prop_assert!(record.waste_weight >= 0.0);
        }
    }
}
