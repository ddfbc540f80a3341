//! Pre-built Test Fixtures
//!
//! Provides the sample catalog and invoices used across the statement test
//! suites, together with the statements they are known to produce.

use core_kernel::PlayId;
use domain_statement::{Invoice, Play, PlayCatalog};
use fake::faker::company::en::CompanyName;
use fake::Fake;

/// Fixture for play catalog test data
pub struct PlayFixtures;

impl PlayFixtures {
    /// The three-play sample catalog
    pub fn catalog() -> PlayCatalog {
        PlayCatalog::new()
            .with_play("hamlet", Play::tragedy("Hamlet"))
            .with_play("as-like", Play::comedy("As You Like It"))
            .with_play("othello", Play::tragedy("Othello"))
    }

    /// Sample catalog plus a play whose type has no pricing rule
    pub fn catalog_with_unknown_type() -> PlayCatalog {
        Self::catalog().with_play("henry-v", Play::new("Henry V", "history"))
    }

    /// Id of the play with an unrecognized type
    pub fn unknown_type_play_id() -> PlayId {
        PlayId::from("henry-v")
    }

    /// The sample catalog in its JSON file form
    pub fn catalog_json() -> &'static str {
        r#"{
    "hamlet": {"name": "Hamlet", "type": "tragedy"},
    "as-like": {"name": "As You Like It", "type": "comedy"},
    "othello": {"name": "Othello", "type": "tragedy"}
}"#
    }
}

/// Fixture for invoice test data
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// BigCo booking: Hamlet for 55, As You Like It for 35, Othello for 40
    pub fn big_co() -> Invoice {
        Invoice::new("BigCo")
            .with_performance("hamlet", 55)
            .with_performance("as-like", 35)
            .with_performance("othello", 40)
    }

    /// Invoice with no performances
    pub fn empty() -> Invoice {
        Invoice::new("Empty Co")
    }

    /// Invoice referencing a play missing from the sample catalog
    pub fn with_unknown_play() -> Invoice {
        Invoice::new("BigCo")
            .with_performance("hamlet", 55)
            .with_performance("macbeth", 20)
    }

    /// The BigCo invoice list in its JSON file form
    pub fn invoices_json() -> &'static str {
        r#"[
    {
        "customer": "BigCo",
        "performances": [
            {"playID": "hamlet", "audience": 55},
            {"playID": "as-like", "audience": 35},
            {"playID": "othello", "audience": 40}
        ]
    }
]"#
    }
}

/// Fixture for rendered statements
pub struct StatementFixtures;

impl StatementFixtures {
    /// BigCo amount owed in cents
    pub fn big_co_total_amount() -> i64 {
        173_000
    }

    /// BigCo volume credits
    pub fn big_co_total_credits() -> u64 {
        47
    }

    /// Plain-text statement for the BigCo invoice
    pub fn big_co_text() -> &'static str {
        concat!(
            "Statement for BigCo\n",
            "  Hamlet: $650.00 (55 seats)\n",
            "  As You Like It: $580.00 (35 seats)\n",
            "  Othello: $500.00 (40 seats)\n",
            "Amount owed is $1,730.00\n",
            "You earned 47 credits",
        )
    }

    /// HTML statement for the BigCo invoice
    pub fn big_co_html() -> &'static str {
        concat!(
            "<h1>Statement for BigCo</h1>\n",
            "<table>\n",
            "    <thead>\n",
            "        <tr>\n",
            "            <th>Play</th>\n",
            "            <th>Seats</th>\n",
            "            <th>Cost</th>\n",
            "        </tr>\n",
            "    </thead>\n",
            "    <tbody>\n",
            "        <tr>\n",
            "            <td>Hamlet</td>\n",
            "            <td>55</td>\n",
            "            <td>$650.00</td>\n",
            "        </tr>\n",
            "        <tr>\n",
            "            <td>As You Like It</td>\n",
            "            <td>35</td>\n",
            "            <td>$580.00</td>\n",
            "        </tr>\n",
            "        <tr>\n",
            "            <td>Othello</td>\n",
            "            <td>40</td>\n",
            "            <td>$500.00</td>\n",
            "        </tr>\n",
            "    </tbody>\n",
            "</table>\n",
            "<p>Amount owed is <em>$1,730.00</em>.</p>\n",
            "<p>You earned <em>47</em> credits</p>",
        )
    }
}

/// Fixture for customer names
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// A random, realistic company name
    pub fn company() -> String {
        CompanyName().fake()
    }
}
