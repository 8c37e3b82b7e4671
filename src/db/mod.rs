//! Storage layer for the development server.

pub mod memory;

pub use memory::ActivityRepository;
