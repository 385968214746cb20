use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vest",
    about = "Byte text operations: KMP find, replace, split, repeat, range and %-formatting",
    version
)]
pub struct Cli {
    /// Print a JSON report instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every (overlapping) offset of PATTERN in TEXT
    Find {
        /// Input text, or `-` to read standard input
        text: String,

        /// Pattern to search for
        pattern: String,
    },

    /// Replace occurrences of OLD with NEW, left to right
    Replace {
        /// Input text, or `-` to read standard input
        text: String,

        /// Substring to replace
        old: String,

        /// Replacement
        new: String,

        /// Replace at most this many occurrences (default: all)
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Remove every occurrence of PATTERN
    Remove {
        /// Input text, or `-` to read standard input
        text: String,

        /// Substring to remove
        pattern: String,
    },

    /// Split TEXT on any of the separator bytes
    Split {
        /// Input text, or `-` to read standard input
        text: String,

        /// Separator bytes; runs of them collapse
        #[arg(short, long, default_value = " ")]
        sep: String,
    },

    /// Repeat TEXT COUNT times
    Repeat {
        /// Input text, or `-` to read standard input
        text: String,

        /// Number of copies (0 leaves the text unchanged)
        count: usize,
    },

    /// Print the bytes of TEXT between START and END (clamped, either order)
    Range {
        /// Input text, or `-` to read standard input
        text: String,

        start: usize,

        end: usize,
    },

    /// Render FMT with %s, %i, %l, %u and %f conversions
    Format {
        /// Format string
        fmt: String,

        /// One argument per conversion, parsed as the conversion requires
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
