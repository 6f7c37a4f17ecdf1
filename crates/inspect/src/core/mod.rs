use std::time::Instant;

use colored::Colorize;
use mxabi_types::{AbiRegistry, EndpointDefinition, Token, TypeFormula, TypeFormulaParser};
use tracing::{debug, info};

use crate::{
    error::Error,
    interfaces::{FormulaArgs, InspectArgs},
};

/// The loaded contract interface, ready for display or output.
#[derive(Debug, Clone)]
pub struct InspectResult {
    /// The parsed registry
    pub registry: AbiRegistry,
}

impl InspectResult {
    /// Prints a summary of the contract interface to stdout.
    pub fn display(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }

    /// The summary printed by [`Self::display`], one entry per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{} {}", "abi:".bold(), self.registry.name)];

        match &self.registry.constructor {
            Some(constructor) => lines.push(format!(
                "{} {}",
                "constructor:".bold(),
                constructor.signature().green()
            )),
            None => lines.push(format!("{} none", "constructor:".bold())),
        }

        lines.push(format!("{} ({})", "endpoints:".bold(), self.registry.endpoints.len()));
        for endpoint in &self.registry.endpoints {
            lines.push(format!("  {} {}", endpoint.signature().green(), attributes(endpoint).dimmed()));
        }

        lines.push(format!("{} ({})", "types:".bold(), self.registry.types.len()));
        for formula in &self.registry.types {
            lines.push(format!("  {}", formula.to_string().cyan()));
        }

        lines
    }

    /// The normalized ABI document as a JSON string.
    pub fn to_json(&self, pretty: bool) -> Result<String, Error> {
        Ok(self.registry.to_json_string(pretty)?)
    }
}

fn attributes(endpoint: &EndpointDefinition) -> String {
    let mut attributes = Vec::new();
    if !endpoint.modifiers.mutability.is_empty() {
        attributes.push(endpoint.modifiers.mutability.clone());
    }
    if endpoint.modifiers.is_payable() {
        attributes.push(format!("payable in {}", endpoint.modifiers.payable_in_tokens.join(", ")));
    }

    format!("[{}]", attributes.join("; "))
}

/// Loads the ABI file at `args.target` with the requested parser limits.
pub fn inspect(args: InspectArgs) -> Result<InspectResult, Error> {
    let start_time = Instant::now();
    let parser = TypeFormulaParser::with_limits(args.parser_limits());

    let registry = AbiRegistry::from_file_with(&args.target, &parser)?;
    debug!("loading '{}' took {:?}", args.target, start_time.elapsed());

    info!(
        "inspected '{}': {} endpoints, {} types",
        registry.name,
        registry.endpoints.len(),
        registry.types.len()
    );

    Ok(InspectResult { registry })
}

/// A parsed type expression together with the tokens it was built from.
#[derive(Debug, Clone)]
pub struct FormulaResult {
    /// The parsed formula
    pub formula: TypeFormula,
    /// The tokens of the input expression
    pub tokens: Vec<Token>,
}

impl FormulaResult {
    /// The canonical rendering of the formula, e.g. `List<Option<u64>>`.
    pub fn canonical(&self) -> String {
        self.formula.to_string()
    }

    /// The formula as an indented tree, one type per line.
    ///
    /// ```text
    /// MultiResultVec
    /// └─ MultiResult2
    ///    ├─ Address
    ///    └─ u64
    /// ```
    pub fn tree(&self) -> Vec<String> {
        let mut lines = vec![self.formula.name().to_string()];
        tree_lines(&self.formula, "", &mut lines);
        lines
    }

    /// Prints the canonical form, the token count and the tree to stdout.
    pub fn display(&self) {
        println!("{} {}", "formula:".bold(), self.canonical().green());
        println!(
            "{} {} tokens, depth {}",
            "size:".bold(),
            self.tokens.len(),
            self.formula.depth()
        );
        for line in self.tree() {
            println!("  {line}");
        }
    }
}

fn tree_lines(formula: &TypeFormula, prefix: &str, lines: &mut Vec<String>) {
    let count = formula.type_parameters().len();
    for (i, parameter) in formula.type_parameters().iter().enumerate() {
        let last = i + 1 == count;
        let (branch, indent) = if last { ("└─ ", "   ") } else { ("├─ ", "│  ") };
        lines.push(format!("{prefix}{branch}{}", parameter.name()));
        tree_lines(parameter, &format!("{prefix}{indent}"), lines);
    }
}

/// Parses a single type expression with the requested parser limits.
pub fn formula(args: FormulaArgs) -> Result<FormulaResult, Error> {
    let parser = TypeFormulaParser::with_limits(args.parser_limits());

    let formula = parser.parse_expression(&args.expression).map_err(|source| {
        mxabi_types::Error::Parse { expression: args.expression.clone(), source }
    })?;
    debug!("parsed '{}' into '{}'", args.expression, formula);

    Ok(FormulaResult { formula, tokens: mxabi_types::tokenize(&args.expression) })
}
