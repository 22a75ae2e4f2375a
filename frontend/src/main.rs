fn main() {
    edutech_frontend::start();
}
