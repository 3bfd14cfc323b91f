fn main() {
    gem_swap::run();
}
