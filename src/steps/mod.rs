//! Workflow steps.
//!
//! A step is one stateless unit of work. Every concrete step is its own type
//! implementing [`WorkflowStep`]; factories box them into ordered lists.
//!
//! - [`order`] - order processing steps
//! - [`invoice`] - invoicing steps
//! - [`custom`] - steps of the custom (special order) workflow
//!
//! # Example
//!
//! ```
//! use workflow_factory::steps::{ValidateOrder, WorkflowStep};
//! use workflow_factory::ui::MockUI;
//!
//! let mut ui = MockUI::new();
//! ValidateOrder.execute_step(&mut ui).unwrap();
//! assert_eq!(ui.messages(), &["Validating Order..."]);
//! ```

pub mod custom;
pub mod invoice;
pub mod order;

pub use custom::{NotifyCustomer, PrepareSpecialOrder};
pub use invoice::{GenerateInvoice, SendInvoice};
pub use order::{ProcessPayment, ShipOrder, ValidateOrder};

use crate::error::Result;
use crate::ui::UserInterface;

/// A single action within a workflow.
///
/// There is no default body for `execute_step`: a step type that does not
/// provide one fails to compile.
pub trait WorkflowStep {
    /// Stable snake_case identifier of this step.
    fn name(&self) -> &'static str;

    /// Perform the step's action, emitting its output through `ui`.
    fn execute_step(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

impl std::fmt::Debug for dyn WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WorkflowStep").field(&self.name()).finish()
    }
}
