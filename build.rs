fn main() {
    // ESP-IDF environment is only needed for the firmware image; host
    // builds and tests compile without the toolchain.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
