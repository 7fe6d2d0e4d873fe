fn main() {
    framelab::app::cli::run();
}
