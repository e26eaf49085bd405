//! Serializers for laid-out documents. PDF is the only target.

pub mod pdf;

pub use pdf::write_pdf;
