fn main() {
    // ESP-IDF link arguments are only needed when building the firmware
    // binary; host builds (tests, fuzzing) skip the toolchain probe.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
