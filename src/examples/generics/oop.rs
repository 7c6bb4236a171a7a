use std::fmt::Display;
use std::io::{self, Write};

/// Prints `value` using its `Display` form, followed by a newline.
pub fn print_value<T: Display>(value: T) {
    println!("{}", value);
}

pub fn write_value<W: Write, T: Display>(out: &mut W, value: T) -> io::Result<()> {
    log::trace!("writing {}", std::any::type_name::<T>());
    writeln!(out, "{}", value)
}

pub fn demo() {
    // print string
    print_value("String");
    // print integer
    print_value(55);
    // print double
    print_value(1.1);
}

pub fn demo_to<W: Write>(out: &mut W) -> io::Result<()> {
    write_value(out, "String")?;
    write_value(out, 55)?;
    write_value(out, 1.1)?;
    Ok(())
}
