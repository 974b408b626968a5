//! Steps of the custom workflow.

use crate::error::Result;
use crate::ui::UserInterface;

use super::WorkflowStep;

/// Sets up an order that needs special handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrepareSpecialOrder;

impl WorkflowStep for PrepareSpecialOrder {
    fn name(&self) -> &'static str {
        "prepare_special_order"
    }

    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Preparing Special Order...");
        Ok(())
    }
}

/// Tells the customer their order is on its way.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyCustomer;

impl WorkflowStep for NotifyCustomer {
    fn name(&self) -> &'static str {
        "notify_customer"
    }

    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Notifying Customer...");
        Ok(())
    }
}
