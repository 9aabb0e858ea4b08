//! irr compute command

use clap::Args;
use irr_adapter::AgreementReport;
use irr_usecase::ComputeAgreement;

use super::{InputArgs, Inputs};

#[derive(Debug, Args)]
pub struct ComputeCommand {
    #[command(flatten)]
    pub inputs: InputArgs,
}

impl ComputeCommand {
    pub async fn run(&self, json: bool) -> anyhow::Result<()> {
        let config = self.inputs.resolve_config()?;
        let inputs = Inputs::load(config).await?;

        let result =
            ComputeAgreement::new().execute(&inputs.rater_a, &inputs.rater_b, &inputs.vocabulary)?;

        let report = AgreementReport::new(
            &result,
            &inputs.config.rater_a.name,
            &inputs.config.rater_b.name,
        );

        if json {
            println!("{}", report.to_json()?);
        } else {
            print!("{}", report.render_text());
        }
        Ok(())
    }
}
