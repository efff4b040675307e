use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Right-aligned columns followed by the file name
    #[default]
    Table,
    /// A single JSON object
    Json,
}
