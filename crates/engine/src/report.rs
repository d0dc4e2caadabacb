use crate::config::Config;
use crate::counter::Totals;

/// Renders the final report line.
///
/// The exclusive metrics are checked first, in priority order, and each wins
/// outright. Otherwise the requested subset of lines/words/chars/bytes is
/// printed in that fixed order; a chars request suppresses bytes.
#[must_use]
pub fn render(config: &Config, totals: &Totals) -> String {
    let config = config.clone().with_default_metrics();

    if config.spaces {
        return totals.spaces.to_string();
    }
    if config.lowercase {
        return totals.lowercase.to_string();
    }
    if config.uppercase {
        return totals.uppercase.to_string();
    }

    let mut fields: Vec<String> = Vec::with_capacity(4);
    if config.lines {
        fields.push(totals.lines.to_string());
    }
    if config.words {
        fields.push(totals.words.to_string());
    }
    if config.chars {
        fields.push(totals.chars.to_string());
    }
    if config.bytes && !config.chars {
        fields.push(totals.bytes.to_string());
    }
    fields.join(" ")
}
