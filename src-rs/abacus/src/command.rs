use clap::{Args, Parser, Subcommand};

/// Abacus calculator CLI
#[derive(Parser)]
#[command(name = "abacus")]
#[command(version, about = "Evaluate arithmetic expressions and scientific operations", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: GlobalOptions,
}

/// Options shared by every command
#[derive(Args)]
pub struct GlobalOptions {
    /// Print results and errors as JSON objects
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Print errors in debug format
    #[arg(long, global = true)]
    pub print_debug: bool,

    /// Print results without thousands separators
    #[arg(long, global = true)]
    pub raw: bool,

    /// Reject expressions longer than this many characters
    #[arg(
        long,
        global = true,
        value_name = "N",
        env = "ABACUS_MAX_LENGTH",
        default_value_t = crate::config::DEFAULT_MAX_INPUT_LENGTH
    )]
    pub max_length: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an arithmetic expression
    Eval {
        /// The expression, for example `2 * (3 + 4)`
        ///
        /// Multiple arguments are joined with spaces.
        #[arg(value_name = "EXPRESSION", required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },
    /// Apply a scientific operation to a number
    Sci {
        /// The operation name, see `abacus ops`
        #[arg(value_name = "OPERATION")]
        operation: String,

        /// The number to apply the operation to
        #[arg(value_name = "VALUE", allow_negative_numbers = true)]
        value: f64,
    },
    /// List the scientific operations
    Ops,
    /// Read expressions and operations from standard input, one per line
    ///
    /// A line such as `sqrt 16` applies a scientific operation. Every other
    /// line is evaluated as an expression.
    Repl,
}
