//! Natural language utilities: sentence segmentation and stopword filtering.

pub mod segmenter;
pub mod stopwords;
