// zscope/src/ui/mod.rs
pub mod output_format;
pub mod report;
pub mod theme;
