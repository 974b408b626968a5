//! Built-in workflow kinds.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::WorkflowError;
use crate::steps::{
    GenerateInvoice, NotifyCustomer, PrepareSpecialOrder, ProcessPayment, SendInvoice, ShipOrder,
    ValidateOrder, WorkflowStep,
};

use super::WorkflowFactory;

/// The built-in workflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum WorkflowKind {
    /// Validate, charge and ship an order.
    #[value(name = "order", alias = "order-processing")]
    OrderProcessing,
    /// Generate and send an invoice.
    #[value(name = "invoice", alias = "invoice-processing")]
    InvoiceProcessing,
    /// Prepare a special order and notify the customer.
    #[value(name = "custom")]
    Custom,
}

impl WorkflowKind {
    /// All kinds, in the order the default run executes them.
    pub const ALL: [WorkflowKind; 3] = [
        WorkflowKind::OrderProcessing,
        WorkflowKind::InvoiceProcessing,
        WorkflowKind::Custom,
    ];

    /// Short name accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowKind::OrderProcessing => "order",
            WorkflowKind::InvoiceProcessing => "invoice",
            WorkflowKind::Custom => "custom",
        }
    }

    /// Human-readable title, as used in section headers.
    pub fn title(&self) -> &'static str {
        match self {
            WorkflowKind::OrderProcessing => "Order Processing",
            WorkflowKind::InvoiceProcessing => "Invoice Processing",
            WorkflowKind::Custom => "Custom",
        }
    }

    /// Section header printed before the workflow runs.
    pub fn header(&self) -> String {
        format!("Executing {} Workflow:", self.title())
    }

    /// Ordered step names, without running anything.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.create_workflow_steps()
            .iter()
            .map(|step| step.name())
            .collect()
    }
}

impl WorkflowFactory for WorkflowKind {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn create_workflow_steps(&self) -> Vec<Box<dyn WorkflowStep>> {
        match self {
            WorkflowKind::OrderProcessing => vec![
                Box::new(ValidateOrder),
                Box::new(ProcessPayment),
                Box::new(ShipOrder),
            ],
            WorkflowKind::InvoiceProcessing => {
                vec![Box::new(GenerateInvoice), Box::new(SendInvoice)]
            }
            WorkflowKind::Custom => vec![Box::new(PrepareSpecialOrder), Box::new(NotifyCustomer)],
        }
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowKind {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <WorkflowKind as ValueEnum>::from_str(s, true).map_err(|_| {
            WorkflowError::UnknownWorkflow {
                name: s.to_string(),
            }
        })
    }
}
