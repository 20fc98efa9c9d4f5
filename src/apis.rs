pub mod logo_generator;
