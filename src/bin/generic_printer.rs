use fundamentals::examples::generics::oop::demo;
use fundamentals::utils::utils::init_logging;

fn main() {
    init_logging(false);
    demo();
}
