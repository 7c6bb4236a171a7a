use clap::{Parser, Subcommand};

#[derive(Parser)]
#[clap(name = "fundamentals")]
#[clap(bin_name = "fundamentals")]
#[clap(about = "Runs the shape and generic printer examples", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence)
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print the area of a circle and a rectangle
    #[clap()]
    Shapes {
        #[clap(long, arg_enum, default_value = "oop")]
        style: Style,
    },
    /// Print a string, an integer and a float
    #[clap()]
    Generics {
        #[clap(long, arg_enum, default_value = "oop")]
        style: Style,
    },
    /// Run both examples
    #[clap()]
    All,
}

/// Which rendition of an example to run.
#[derive(clap::ArgEnum, Clone, Copy, Debug, PartialEq)]
pub enum Style {
    /// Trait and generic function
    Oop,
    /// Enum and free functions
    Fp,
}
