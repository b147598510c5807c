//! Legend command implementation.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use inquiry_domain::Tier;

/// Execute the legend command.
pub async fn execute_legend(formatter: &Formatter) -> Result<()> {
    match formatter.output_format() {
        OutputFormat::Json => {
            let tiers: Vec<serde_json::Value> = Tier::ALL
                .iter()
                .map(|tier| {
                    serde_json::json!({
                        "name": tier.name(),
                        "label": tier.label(),
                        "icon": tier.icon(),
                        "color": tier.color(formatter.theme()).to_string(),
                        "description": tier.description(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tiers)?);
        }
        OutputFormat::Styled | OutputFormat::Raw => println!("{}", formatter.legend_table()),
    }

    Ok(())
}
