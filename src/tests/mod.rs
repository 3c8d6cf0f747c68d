mod registry_tests;
mod derive_tests;
