use clap::Parser;
use derive_builder::Builder;
use mxabi_types::ParserLimits;

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Load a contract ABI file and display its constructor, endpoints and types",
    override_usage = "mxabi inspect <TARGET> [OPTIONS]"
)]
/// Arguments for the inspect operation
///
/// This struct contains all the configuration parameters needed to load an ABI file
/// and render it.
pub struct InspectArgs {
    /// The path of the ABI file to inspect.
    #[clap(required = true)]
    pub target: String,

    /// Maximum nesting depth of type parameters. Defaults to the configured value.
    #[clap(long = "max-type-depth")]
    pub max_type_depth: Option<usize>,

    /// Maximum number of tokens in a single type expression. Defaults to the configured value.
    #[clap(long = "max-type-tokens")]
    pub max_type_tokens: Option<usize>,

    /// Write the normalized ABI without indentation.
    #[clap(long)]
    pub compact: bool,

    /// Name for the output files.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,

    /// The output directory to write the normalized ABI to, or 'print' to print to the console.
    #[clap(long = "output", short = 'o', default_value = "print", hide_default_value = true)]
    pub output: String,
}

impl InspectArgs {
    /// The parser limits requested by these arguments, falling back to the defaults.
    pub fn parser_limits(&self) -> ParserLimits {
        limits(self.max_type_depth, self.max_type_tokens)
    }
}

impl InspectArgsBuilder {
    /// Creates a new InspectArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            max_type_depth: Some(None),
            max_type_tokens: Some(None),
            compact: Some(false),
            name: Some(String::new()),
            output: Some(String::from("print")),
        }
    }
}

#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Parse a single type expression and display its canonical form and type tree",
    override_usage = "mxabi formula <EXPRESSION> [OPTIONS]"
)]
/// Arguments for the formula operation
pub struct FormulaArgs {
    /// The type expression to parse, e.g. 'MultiResultVec<MultiResult2<Address, u64>>'.
    #[clap(required = true)]
    pub expression: String,

    /// Maximum nesting depth of type parameters. Defaults to the configured value.
    #[clap(long = "max-type-depth")]
    pub max_type_depth: Option<usize>,

    /// Maximum number of tokens in the expression. Defaults to the configured value.
    #[clap(long = "max-type-tokens")]
    pub max_type_tokens: Option<usize>,
}

impl FormulaArgs {
    /// The parser limits requested by these arguments, falling back to the defaults.
    pub fn parser_limits(&self) -> ParserLimits {
        limits(self.max_type_depth, self.max_type_tokens)
    }
}

impl FormulaArgsBuilder {
    /// Creates a new FormulaArgsBuilder with default values
    pub fn new() -> Self {
        Self {
            expression: Some(String::new()),
            max_type_depth: Some(None),
            max_type_tokens: Some(None),
        }
    }
}

fn limits(max_depth: Option<usize>, max_tokens: Option<usize>) -> ParserLimits {
    let defaults = ParserLimits::default();
    ParserLimits {
        max_depth: max_depth.unwrap_or(defaults.max_depth),
        max_tokens: max_tokens.unwrap_or(defaults.max_tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_limits_fall_back_to_defaults() {
        let args = InspectArgsBuilder::new()
            .target("adder.abi.json".to_string())
            .max_type_depth(Some(3))
            .build()
            .expect("failed to build args");

        assert_eq!(args.parser_limits().max_depth, 3);
        assert_eq!(args.parser_limits().max_tokens, ParserLimits::default().max_tokens);
    }

    #[test]
    fn test_formula_args_from_cli() {
        let args = FormulaArgs::parse_from(["formula", "List<u64>", "--max-type-tokens", "10"]);
        assert_eq!(args.expression, "List<u64>");
        assert_eq!(args.parser_limits().max_tokens, 10);
        assert_eq!(args.parser_limits().max_depth, ParserLimits::default().max_depth);
    }
}
