use anyhow::Result;
use clap::Args;
use petstore_api::Client;

use crate::output::{print_pets, OutputFormat};

#[derive(Args)]
pub struct GetArgs {
    /// Pet id, sent to the service exactly as typed
    pub id: String,
}

pub async fn run(args: &GetArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let pet = client.get_pet_by_id(&args.id).await?;
    print_pets(&[pet], format);
    Ok(())
}
