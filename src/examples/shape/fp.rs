use std::io::{self, Write};

use super::oop::PI_APPROX;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

pub fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle { radius } =>
            PI_APPROX * radius * radius,
        Shape::Rectangle { width, height } =>
            width * height,
    }
}

pub fn format_area(shape: &Shape) -> String {
    format!("Area: {:.2}\n", area(shape))
}

pub fn write_area<W: Write>(out: &mut W, shape: &Shape) -> io::Result<()> {
    out.write_all(format_area(shape).as_bytes())
}

pub fn print_area(shape: &Shape) {
    write_area(&mut io::stdout().lock(), shape).expect("Unable to write to stdout");
}

fn shapes() -> [Shape; 2] {
    [
        Shape::Circle { radius: 10.0 },
        Shape::Rectangle { width: 5.0, height: 6.0 },
    ]
}

pub fn demo() {
    for shape in &shapes() {
        print_area(shape);
    }
}

pub fn demo_to<W: Write>(out: &mut W) -> io::Result<()> {
    for shape in &shapes() {
        write_area(out, shape)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::examples::shape::oop::{self, Circle, Rectangle};
    use pretty_assertions::assert_eq;

    #[test]
    fn areas_agree_with_trait_impls() {
        use oop::Shape as _;
        assert_eq!(area(&Shape::Circle { radius: 4.5 }), Circle::new(4.5).area());
        assert_eq!(
            area(&Shape::Rectangle { width: 2.5, height: 8.0 }),
            Rectangle::new(2.5, 8.0).area()
        );
    }

    #[test]
    fn ties_round_like_oop() {
        let tie = Shape::Rectangle { width: 0.5, height: 0.25 };
        assert_eq!(format_area(&tie), oop::format_area(&Rectangle::new(0.5, 0.25)));
        assert_eq!(format_area(&tie), "Area: 0.12\n");
    }

    #[test]
    fn demo_matches_oop_demo() {
        let mut fp_out = Vec::new();
        let mut oop_out = Vec::new();
        demo_to(&mut fp_out).unwrap();
        oop::demo_to(&mut oop_out).unwrap();
        assert_eq!(String::from_utf8(fp_out).unwrap(), String::from_utf8(oop_out).unwrap());
    }
}
