fn main() {
    // Device builds only.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
