//! Order processing steps.

use crate::error::Result;
use crate::ui::UserInterface;

use super::WorkflowStep;

/// Checks an incoming order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOrder;

impl WorkflowStep for ValidateOrder {
    fn name(&self) -> &'static str {
        "validate_order"
    }

    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Validating Order...");
        Ok(())
    }
}

/// Charges the customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessPayment;

impl WorkflowStep for ProcessPayment {
    fn name(&self) -> &'static str {
        "process_payment"
    }

    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Processing Payment...");
        Ok(())
    }
}

/// Hands the order to shipping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipOrder;

impl WorkflowStep for ShipOrder {
    fn name(&self) -> &'static str {
        "ship_order"
    }

    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Shipping Order...");
        Ok(())
    }
}
