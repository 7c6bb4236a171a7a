use std::io::{self, Write};

/// The approximation of pi the examples use for circle areas.
pub const PI_APPROX: f64 = 3.14159;

pub trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Circle {
        Circle { radius }
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI_APPROX * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Rectangle {
        Rectangle { width, height }
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Renders the report line for `shape`, area to two decimal places.
/// Exact ties round to even, so 0.125 renders as `0.12`.
pub fn format_area<S: Shape + ?Sized>(shape: &S) -> String {
    let area = shape.area();
    log::trace!("computed area {}", area);
    format!("Area: {:.2}\n", area)
}

pub fn write_area<W: Write, S: Shape + ?Sized>(out: &mut W, shape: &S) -> io::Result<()> {
    out.write_all(format_area(shape).as_bytes())
}

pub fn print_area<S: Shape + ?Sized>(shape: &S) {
    write_area(&mut io::stdout().lock(), shape).expect("Unable to write to stdout");
}

pub fn demo() {
    let c = Circle { radius: 10.0 };
    let r = Rectangle { width: 5.0, height: 6.0 };

    print_area(&c);
    print_area(&r);
}

/// Writes the demo's report lines to `out` instead of stdout.
pub fn demo_to<W: Write>(out: &mut W) -> io::Result<()> {
    let c = Circle::new(10.0);
    let r = Rectangle::new(5.0, 6.0);
    let shapes: [&dyn Shape; 2] = [&c, &r];
    for shape in shapes {
        write_area(out, shape)?;
    }
    Ok(())
}
