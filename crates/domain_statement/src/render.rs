//! Statement rendering
//!
//! Renderers only format what aggregation already computed; no amount or
//! credit is recalculated here. Currency display is delegated to a
//! `CurrencyFormatter` so callers can swap the locale without touching the
//! layout.

use std::fmt;
use std::str::FromStr;

use askama::Template;
use serde::{Deserialize, Serialize};

use core_kernel::{CoreError, Currency, Money};

use crate::error::StatementError;
use crate::statement::StatementData;

/// Turns an amount in cents into a display string
pub trait CurrencyFormatter {
    fn format(&self, cents: i64) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(i64) -> String,
{
    fn format(&self, cents: i64) -> String {
        self(cents)
    }
}

/// Locale-style currency display backed by `core_kernel::Money`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormatter {
    currency: Currency,
}

impl MoneyFormatter {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// US dollars, e.g. `$1,730.00`
    pub fn usd() -> Self {
        Self::new(Currency::USD)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::usd()
    }
}

impl CurrencyFormatter for MoneyFormatter {
    fn format(&self, cents: i64) -> String {
        Money::from_minor(cents, self.currency).to_localized_string()
    }
}

/// Output format of a rendered statement
///
/// Deserialization goes through `FromStr`, so configuration files, the
/// environment and the command line accept the same aliases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum StatementFormat {
    #[default]
    Text,
    Html,
}

impl StatementFormat {
    /// Renders the statement in this format
    pub fn render(
        &self,
        data: &StatementData,
        formatter: &impl CurrencyFormatter,
    ) -> Result<String, StatementError> {
        match self {
            StatementFormat::Text => render_text(data, formatter),
            StatementFormat::Html => render_html(data, formatter),
        }
    }
}

impl FromStr for StatementFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(StatementFormat::Text),
            "html" | "htm" => Ok(StatementFormat::Html),
            other => Err(CoreError::unsupported("statement format", other)),
        }
    }
}

impl TryFrom<String> for StatementFormat {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementFormat::Text => f.write_str("text"),
            StatementFormat::Html => f.write_str("html"),
        }
    }
}

/// One performance row, amounts already formatted
struct StatementLine<'a> {
    name: &'a str,
    audience: u32,
    cost: String,
}

#[derive(Template)]
#[template(path = "statement.txt")]
struct TextStatement<'a> {
    customer: &'a str,
    lines: Vec<StatementLine<'a>>,
    total_amount: String,
    total_volume_credits: u64,
}

/// Names and amounts are escaped by the `.html` template
#[derive(Template)]
#[template(path = "statement.html")]
struct HtmlStatement<'a> {
    customer: &'a str,
    lines: Vec<StatementLine<'a>>,
    total_amount: String,
    total_volume_credits: u64,
}

fn statement_lines<'a>(
    data: &'a StatementData,
    formatter: &impl CurrencyFormatter,
) -> Vec<StatementLine<'a>> {
    data.performances()
        .iter()
        .map(|performance| StatementLine {
            name: &performance.play().name,
            audience: performance.audience(),
            cost: formatter.format(performance.amount()),
        })
        .collect()
}

/// Renders the plain-text statement
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn render_text(
    data: &StatementData,
    formatter: &impl CurrencyFormatter,
) -> Result<String, StatementError> {
    let statement = TextStatement {
        customer: data.customer(),
        lines: statement_lines(data, formatter),
        total_amount: formatter.format(data.total_amount()),
        total_volume_credits: data.total_volume_credits(),
    };
    Ok(statement.render()?)
}

/// Renders the HTML statement
///
/// Header and data cells share the Play, Seats, Cost column order.
pub fn render_html(
    data: &StatementData,
    formatter: &impl CurrencyFormatter,
) -> Result<String, StatementError> {
    let statement = HtmlStatement {
        customer: data.customer(),
        lines: statement_lines(data, formatter),
        total_amount: formatter.format(data.total_amount()),
        total_volume_credits: data.total_volume_credits(),
    };
    Ok(statement.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invoice::Invoice;
    use crate::play::{Play, PlayCatalog};
    use crate::statement::aggregate;

    fn statement() -> StatementData {
        let catalog = PlayCatalog::new()
            .with_play("as-like", Play::comedy("As You Like It"))
            .with_play("othello", Play::tragedy("Othello"));
        let invoice = Invoice::new("BigCo")
            .with_performance("as-like", 35)
            .with_performance("othello", 40);
        aggregate(&invoice, &catalog).unwrap()
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&statement(), &MoneyFormatter::usd()).unwrap();
        assert_eq!(
            text,
            "Statement for BigCo\n  As You Like It: $580.00 (35 seats)\n  Othello: $500.00 (40 seats)\nAmount owed is $1,080.00\nYou earned 22 credits"
        );
    }

    #[test]
    fn test_render_html_row_order_matches_header() {
        let html = render_html(&statement(), &MoneyFormatter::usd()).unwrap();
        let row = "        <tr>\n            <td>Othello</td>\n            <td>40</td>\n            <td>$500.00</td>\n        </tr>\n";
        assert!(html.contains(row));
        assert!(html.ends_with("<p>You earned <em>22</em> credits</p>"));
    }

    #[test]
    fn test_render_html_escapes_markup() {
        let catalog = PlayCatalog::new().with_play("tj", Play::comedy("Tom & Jerry <Live>"));
        let invoice = Invoice::new("<Acme>").with_performance("tj", 10);
        let data = aggregate(&invoice, &catalog).unwrap();

        let html = render_html(&data, &MoneyFormatter::usd()).unwrap();

        assert!(html.starts_with("<h1>Statement for &lt;Acme&gt;</h1>\n"));
        assert!(html.contains("<td>Tom &amp; Jerry &lt;Live&gt;</td>"));
        assert!(!html.contains("<Acme>"));
    }

    #[test]
    fn test_render_text_leaves_markup_alone() {
        let catalog = PlayCatalog::new().with_play("tj", Play::comedy("Tom & Jerry"));
        let invoice = Invoice::new("<Acme>").with_performance("tj", 10);
        let data = aggregate(&invoice, &catalog).unwrap();

        let text = render_text(&data, &MoneyFormatter::usd()).unwrap();

        assert!(text.starts_with("Statement for <Acme>\n  Tom & Jerry: "));
    }

    #[test]
    fn test_render_empty_statement() {
        let data = aggregate(&Invoice::new("Nobody"), &PlayCatalog::new()).unwrap();

        let text = render_text(&data, &MoneyFormatter::usd()).unwrap();
        assert_eq!(text, "Statement for Nobody\nAmount owed is $0.00\nYou earned 0 credits");

        let html = render_html(&data, &MoneyFormatter::usd()).unwrap();
        assert!(html.contains("    <tbody>\n    </tbody>\n"));
    }

    #[test]
    fn test_closure_formatter() {
        let cents = |amount: i64| format!("{amount}c");
        let text = render_text(&statement(), &cents).unwrap();
        assert!(text.contains("Amount owed is 108000c"));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("HTML".parse::<StatementFormat>().unwrap(), StatementFormat::Html);
        assert_eq!("plain".parse::<StatementFormat>().unwrap(), StatementFormat::Text);
        assert!("pdf".parse::<StatementFormat>().is_err());
    }

    #[test]
    fn test_format_deserializes_aliases() {
        let format: StatementFormat = serde_json::from_str("\"txt\"").unwrap();
        assert_eq!(format, StatementFormat::Text);
        let format: StatementFormat = serde_json::from_str("\"HTM\"").unwrap();
        assert_eq!(format, StatementFormat::Html);
        assert!(serde_json::from_str::<StatementFormat>("\"pdf\"").is_err());
        assert_eq!(serde_json::to_string(&StatementFormat::Html).unwrap(), "\"html\"");
    }
}
