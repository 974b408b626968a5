//! Invoicing steps.

use crate::error::Result;
use crate::ui::UserInterface;

use super::WorkflowStep;

/// Produces the invoice document.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateInvoice;

impl WorkflowStep for GenerateInvoice {
    fn name(&self) -> &'static str {
        "generate_invoice"
    }

    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Generating Invoice...");
        Ok(())
    }
}

/// Delivers the invoice to the customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendInvoice;

impl WorkflowStep for SendInvoice {
    fn name(&self) -> &'static str {
        "send_invoice"
    }

    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.message("Sending Invoice to Customer...");
        Ok(())
    }
}
