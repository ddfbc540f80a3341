//! Statement Domain - Theatrical Billing Statements
//!
//! This crate computes and renders the billing statement a theatrical
//! booking agent sends a customer: what each performance costs, how many
//! volume credits it earns, and the totals owed and earned.
//!
//! # Pipeline
//!
//! Data flows one way with no shared mutable state:
//!
//! ```text
//! Invoice + PlayCatalog -> enrich -> aggregate -> render -> String
//! ```
//!
//! - **Pricing**: per play type charge and volume credit formulas
//! - **Enrichment**: joins a performance with its play and its pricing
//! - **Aggregation**: sums enriched performances into `StatementData`
//! - **Rendering**: plain text or HTML, with pluggable currency display
//!
//! # Example
//!
//! ```rust
//! use domain_statement::{Invoice, Play, PlayCatalog, StatementPrinter};
//!
//! let catalog = PlayCatalog::new().with_play("hamlet", Play::tragedy("Hamlet"));
//! let invoice = Invoice::new("BigCo").with_performance("hamlet", 55);
//!
//! let text = StatementPrinter::new().print(&invoice, &catalog)?;
//! assert!(text.starts_with("Statement for BigCo"));
//! # Ok::<(), domain_statement::StatementError>(())
//! ```

pub mod play;
pub mod invoice;
pub mod pricing;
pub mod enrichment;
pub mod statement;
pub mod render;
pub mod printer;
pub mod error;

pub use play::{Play, PlayType, PlayCatalog};
pub use invoice::{Invoice, Performance};
pub use pricing::{amount_for, volume_credits_for};
pub use enrichment::{enrich, EnrichedPerformance};
pub use statement::{aggregate, StatementData};
pub use render::{render_html, render_text, CurrencyFormatter, MoneyFormatter, StatementFormat};
pub use printer::StatementPrinter;
pub use error::StatementError;
