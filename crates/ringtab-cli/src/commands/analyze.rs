//! Analyze command - submit a table file and render the verdict.

use std::path::PathBuf;

use colored::Colorize;
use ringtab::{AnalysisVerdict, HttpGateway, MockGateway, Ringtab};

pub fn run(
    file: PathBuf,
    url: Option<String>,
    json: bool,
    mock: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = if mock {
        Ringtab::new().with_gateway(MockGateway::cyclic_ring())
    } else {
        let gateway = match url {
            Some(url) => HttpGateway::new(url)?,
            None => HttpGateway::from_env()?,
        };
        if verbose {
            eprintln!("Submitting to {}", gateway.base_url());
        }
        Ringtab::new().with_gateway(gateway)
    };

    session.import_file(&file)?;
    let verdict = session.analyze()?;

    if json {
        println!("{}", serde_json::to_string_pretty(verdict)?);
        return Ok(());
    }

    print_verdict(verdict);
    Ok(())
}

fn print_verdict(verdict: &AnalysisVerdict) {
    println!("{}", "Addition properties".cyan().bold());
    property(
        "Closure",
        verdict.is_add_closed,
        &verdict.is_add_closed_contradiction,
    );
    property(
        "Associativity",
        verdict.is_add_associative,
        &verdict.is_add_associative_contradiction,
    );
    named_property("Identity element", verdict.has_add_identity, &verdict.add_identity);
    property(
        "Inverses for all elements",
        verdict.is_add_inverse,
        &verdict.is_add_inverse_contradiction,
    );
    property(
        "Commutativity",
        verdict.is_add_commutative,
        &verdict.is_add_commutative_contradiction,
    );
    property("Forms an additive group", verdict.is_add_group, "");

    println!();
    println!("{}", "Multiplication properties".cyan().bold());
    property(
        "Closure",
        verdict.is_mul_closed,
        &verdict.is_mul_closed_contradiction,
    );
    property(
        "Associativity",
        verdict.is_mul_associative,
        &verdict.is_mul_associative_contradiction,
    );
    property(
        "Distributivity over addition",
        verdict.is_distributive,
        &verdict.is_distributive_contradiction,
    );
    property("Is a ring", verdict.is_ring, &verdict.is_ring_contradiction);
    property(
        "Commutativity",
        verdict.is_mul_commutative,
        &verdict.is_mul_commutative_contradiction,
    );
    property(
        "Is a commutative ring",
        verdict.is_commutative_ring,
        &verdict.is_commutative_ring_contradiction,
    );
    named_property(
        "Multiplicative identity",
        verdict.has_mul_identity,
        &verdict.mul_identity,
    );
    property(
        "Has zero divisors",
        verdict.has_mul_zero_divisors,
        &verdict.has_mul_zero_divisors_contradiction,
    );
    property(
        "Is an integral domain",
        verdict.is_integral_domain,
        &verdict.is_integral_domain_contradiction,
    );
    property(
        "Multiplicative inverses for non-zero elements",
        verdict.is_mul_inverse,
        &verdict.is_mul_inverse_contradiction,
    );
    property(
        "Is a division ring",
        verdict.is_division_ring,
        &verdict.is_division_ring_contradiction,
    );
    property("Is a field", verdict.is_field, &verdict.is_field_contradiction);

    if !verdict.insight.is_empty() {
        println!();
        println!("{} {}", "Insight:".cyan().bold(), verdict.insight);
    }
}

fn property(label: &str, value: bool, contradiction: &str) {
    let mark = if value {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    if !value && !contradiction.is_empty() {
        println!("  {} {} {}", mark, label, contradiction.red().italic());
    } else {
        println!("  {} {}", mark, label);
    }
}

fn named_property(label: &str, value: bool, element: &str) {
    let mark = if value {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    if value && !element.is_empty() {
        println!("  {} {} ({})", mark, label, format!("element: {}", element).green());
    } else {
        println!("  {} {}", mark, label);
    }
}
