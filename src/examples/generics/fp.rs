use std::fmt;
use std::io::{self, Write};

/// The kinds of value the printer is exercised with.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

pub fn print_value(value: &Value) {
    println!("{}", value);
}

pub fn write_value<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)
}

fn values() -> [Value; 3] {
    [Value::from("String"), Value::from(55_i64), Value::from(1.1_f64)]
}

pub fn demo() {
    for value in &values() {
        print_value(value);
    }
}

pub fn demo_to<W: Write>(out: &mut W) -> io::Result<()> {
    for value in &values() {
        write_value(out, value)?;
    }
    Ok(())
}
