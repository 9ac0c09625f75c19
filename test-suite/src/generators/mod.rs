//! PDF Test Generators
//!
//! This module provides utilities for generating test PDFs programmatically.

pub mod invalid_pdfs;
pub mod test_pdf_builder;

pub use invalid_pdfs::{lexical_error_cases, MalformedCase};
pub use test_pdf_builder::{GeneratedPdf, LineEnding, PdfVersion, StreamLayout, TestPdfBuilder};
