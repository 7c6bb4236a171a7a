pub mod cli;
pub mod examples;
pub mod utils;

use std::io::{self, Write};

use cli::cli::{Commands, Style};
use examples::{generics, shape};

/// Runs the example picked by `command`, writing its output to `out`.
pub fn run<W: Write>(command: &Commands, out: &mut W) -> io::Result<()> {
    log::debug!("running {:?}", command);
    match command {
        Commands::Shapes { style: Style::Oop } => shape::oop::demo_to(out),
        Commands::Shapes { style: Style::Fp } => shape::fp::demo_to(out),
        Commands::Generics { style: Style::Oop } => generics::oop::demo_to(out),
        Commands::Generics { style: Style::Fp } => generics::fp::demo_to(out),
        Commands::All => {
            shape::oop::demo_to(out)?;
            generics::oop::demo_to(out)
        }
    }
}
