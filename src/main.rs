fn main() {
    natty::shell::main();
}
