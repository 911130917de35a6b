use nmclean::{cleaner, logger};

fn main() {
    logger::init_logger();

    cleaner::clean();
}
