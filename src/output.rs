use crate::Compound;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Just the compound word.
    #[default]
    Plain,
    /// The word, its subwords and how many there are.
    Verbose,
    Json,
}

pub fn render(compound: Option<&Compound>, format: Format) -> Result<String, serde_json::Error> {
    Ok(match format {
        Format::Plain => compound.map(|c| c.word.clone()).unwrap_or_default(),
        Format::Verbose => {
            let (word, subwords) = compound.map_or(("", &[][..]), |c| {
                (c.word.as_str(), c.subwords.as_slice())
            });
            format!("'{word}' -> [{}] ({})", subwords.join(" "), subwords.len())
        }
        Format::Json => serde_json::to_string(&compound)?,
    })
}
