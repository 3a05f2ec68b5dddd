//! Document serializer adapters.

mod docx_serializer;

pub use docx_serializer::DocxSerializer;
