use anyhow::Result;
use clap::Args;
use petstore_api::{Client, Pet};

use crate::output::{print_pets, OutputFormat};

#[derive(Args)]
pub struct UpdateArgs {
    /// Pet id in the request path, sent exactly as typed
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: String,

    /// New status: available, pending, sold
    #[arg(long)]
    pub status: Option<String>,

    /// Id to put in the body; defaults to the path id when it is numeric
    #[arg(long)]
    pub pet_id: Option<i64>,
}

pub fn build_pet(args: &UpdateArgs) -> Pet {
    let mut pet = Pet::new(&args.name);
    if let Some(id) = args.pet_id.or_else(|| args.id.parse().ok()) {
        pet = pet.with_id(id);
    }
    if let Some(ref status) = args.status {
        pet = pet.with_status(status);
    }
    pet
}

pub async fn run(args: &UpdateArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let updated = client.update_pet_by_id(&args.id, &build_pet(args)).await?;
    print_pets(&[updated], format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(id: &str, pet_id: Option<i64>) -> UpdateArgs {
        UpdateArgs {
            id: id.to_string(),
            name: "renamed".to_string(),
            status: Some("sold".to_string()),
            pet_id,
        }
    }

    #[test]
    fn numeric_path_id_fills_body_id() {
        let pet = build_pet(&args("12", None));
        assert_eq!(pet, Pet::new("renamed").with_id(12).with_status("sold"));
    }

    #[test]
    fn explicit_pet_id_wins() {
        let pet = build_pet(&args("12", Some(40)));
        assert_eq!(pet.id, Some(40));
    }

    #[test]
    fn non_numeric_path_id_leaves_body_id_unset() {
        let pet = build_pet(&args("abc", None));
        assert_eq!(pet.id, None);
    }
}
