use crate::command::GlobalOptions;

/// The maximum expression length used when none is configured
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1000;

/// Settings for how input is checked and how output is printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Longest accepted expression, in characters
    pub max_input_length: usize,
    /// Whether output may contain colors
    pub use_colors: bool,
    /// Whether errors are printed in debug format
    pub print_debug: bool,
    /// Whether results and errors are printed as JSON
    pub json: bool,
    /// Whether results are printed without thousands separators
    pub raw: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            use_colors: true,
            print_debug: false,
            json: false,
            raw: false,
        }
    }
}

impl From<&GlobalOptions> for Config {
    fn from(options: &GlobalOptions) -> Self {
        Self {
            max_input_length: options.max_length,
            use_colors: !options.no_colors,
            print_debug: options.print_debug,
            json: options.json,
            raw: options.raw,
        }
    }
}
