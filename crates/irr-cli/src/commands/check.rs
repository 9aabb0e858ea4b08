//! irr check command

use clap::Args;
use console::style;
use irr_usecase::ComputeAgreement;

use super::{InputArgs, Inputs};

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub inputs: InputArgs,
}

impl CheckCommand {
    pub async fn run(&self, json: bool) -> anyhow::Result<()> {
        let config = self.inputs.resolve_config()?;
        let inputs = Inputs::load(config).await?;

        let summary = ComputeAgreement::new().validate(
            &inputs.rater_a,
            &inputs.rater_b,
            &inputs.vocabulary,
        )?;

        if json {
            let output = serde_json::json!({
                "valid": true,
                "items": summary.item_count,
                "labels": summary.label_count,
                "unlabeledItems": summary.unlabeled_items,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        let ok = style("✓").green();
        println!(
            "{} Vocabulary: {} labels ({})",
            ok,
            summary.label_count,
            inputs.config.vocabulary.display()
        );
        println!(
            "{} Raters: {} and {} cover the same {} items",
            ok, inputs.config.rater_a.name, inputs.config.rater_b.name, summary.item_count
        );
        println!("{} Every applied label is in the vocabulary", ok);
        if summary.unlabeled_items > 0 {
            println!(
                "{} {} items have no label from either rater",
                style("!").yellow(),
                summary.unlabeled_items
            );
        }
        Ok(())
    }
}
