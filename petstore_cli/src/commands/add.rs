use anyhow::Result;
use clap::Args;
use petstore_api::{Client, Pet};

use crate::output::{print_pets, OutputFormat};

#[derive(Args)]
pub struct AddArgs {
    /// Pet name
    #[arg(long)]
    pub name: String,

    /// Explicit id; omit to let the service assign one
    #[arg(long)]
    pub id: Option<i64>,

    /// Status: available, pending, sold
    #[arg(long)]
    pub status: Option<String>,
}

pub fn build_pet(args: &AddArgs) -> Pet {
    let mut pet = Pet::new(&args.name);
    if let Some(id) = args.id {
        pet = pet.with_id(id);
    }
    if let Some(ref status) = args.status {
        pet = pet.with_status(status);
    }
    pet
}

pub async fn run(args: &AddArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let created = client.add_pet(&build_pet(args)).await?;
    print_pets(&[created], format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_pet_with_all_fields() {
        let args = AddArgs {
            name: "test".to_string(),
            id: Some(12),
            status: Some("available".to_string()),
        };
        assert_eq!(
            build_pet(&args),
            Pet::new("test").with_id(12).with_status("available")
        );
    }

    #[test]
    fn build_pet_name_only() {
        let args = AddArgs {
            name: "rex".to_string(),
            id: None,
            status: None,
        };
        assert_eq!(build_pet(&args), Pet::new("rex"));
    }
}
