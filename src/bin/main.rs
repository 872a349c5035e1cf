fn main() {
  pagination_plus::main();
}
