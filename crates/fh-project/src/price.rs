//! Concrete cost collaborator backed by the plan's price list.

use crate::schema::PriceListDef;
use fh_solver::{BomItem, CostBreakdown, CostLine, CostModel, Material};

/// Prices each material at the plan's fixed unit rate.
#[derive(Clone, Debug)]
pub struct PriceTable {
    prices: PriceListDef,
}

impl PriceTable {
    pub fn new(prices: PriceListDef) -> Self {
        Self { prices }
    }

    fn unit_price(&self, material: Material) -> f64 {
        match material {
            Material::Pipe => self.prices.pipe_per_m_eur,
            Material::Insulation => self.prices.insulation_per_m2_eur,
            Material::DistributionPlate => self.prices.distribution_plate_per_m2_eur,
            Material::Manifold => self.prices.manifold_eur,
            Material::Thermostat => self.prices.thermostat_eur,
        }
    }
}

impl CostModel for PriceTable {
    fn quote(&self, items: &[BomItem], budget_eur: f64) -> CostBreakdown {
        let lines: Vec<CostLine> = items
            .iter()
            .map(|item| {
                let unit_price_eur = self.unit_price(item.material);
                CostLine {
                    material: item.material,
                    quantity: item.quantity,
                    unit_price_eur,
                    total_eur: unit_price_eur * item.quantity,
                }
            })
            .collect();
        let total_spent_eur: f64 = lines.iter().map(|l| l.total_eur).sum();
        CostBreakdown {
            lines,
            total_spent_eur,
            remaining_budget_eur: budget_eur - total_spent_eur,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_prices_each_line_and_sums() {
        let table = PriceTable::new(PriceListDef::default());
        let items = [
            BomItem {
                material: Material::Pipe,
                quantity: 100.0,
            },
            BomItem {
                material: Material::Manifold,
                quantity: 1.0,
            },
        ];

        let breakdown = table.quote(&items, 1000.0);
        assert_eq!(breakdown.lines.len(), 2);
        assert!((breakdown.lines[0].total_eur - 120.0).abs() < 1e-9);
        assert!((breakdown.lines[1].total_eur - 185.0).abs() < 1e-9);
        assert!((breakdown.total_spent_eur - 305.0).abs() < 1e-9);
        assert!((breakdown.remaining_budget_eur - 695.0).abs() < 1e-9);
    }

    #[test]
    fn overspending_goes_negative_rather_than_failing() {
        let table = PriceTable::new(PriceListDef::default());
        let items = [BomItem {
            material: Material::Thermostat,
            quantity: 3.0,
        }];
        let breakdown = table.quote(&items, 100.0);
        assert!(breakdown.remaining_budget_eur < 0.0);
    }
}
