use petstore_api::Pet;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to a plain table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled)]
struct PetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn build_pet_rows(pets: &[Pet]) -> Vec<PetRow> {
    pets.iter()
        .map(|p| PetRow {
            id: p.id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            name: p.name.clone(),
            status: p.status.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

pub fn print_pets(pets: &[Pet], format: &OutputFormat) {
    match format {
        OutputFormat::Table => print_pets_table(pets),
        OutputFormat::Json => print_json(&pets),
        OutputFormat::Markdown => print_pets_markdown(pets),
    }
}

pub fn print_pets_table(pets: &[Pet]) {
    println!("{}", Table::new(build_pet_rows(pets)));
}

pub fn print_pets_markdown(pets: &[Pet]) {
    let mut table = Table::new(build_pet_rows(pets));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_pet_fixture() -> Pet {
        let json_str = include_str!("../../petstore_api/tests/fixtures/pet.json");
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_name("markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_name("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_name("yaml"), OutputFormat::Table);
    }

    #[test]
    fn test_build_pet_rows_mapping() {
        let rows = build_pet_rows(&[load_pet_fixture()]);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.id, "12");
        assert_eq!(row.name, "test");
        assert_eq!(row.status, "available");
    }

    #[test]
    fn test_build_pet_rows_missing_fields() {
        let rows = build_pet_rows(&[Pet::new("rex")]);
        assert_eq!(rows[0].id, "-");
        assert_eq!(rows[0].status, "-");
    }

    #[test]
    fn test_table_has_headers() {
        let table = Table::new(build_pet_rows(&[load_pet_fixture()])).to_string();
        assert!(table.contains("ID"));
        assert!(table.contains("Name"));
        assert!(table.contains("Status"));
        assert!(table.contains("available"));
    }

    #[test]
    fn test_markdown_table_uses_pipes() {
        let mut table = Table::new(build_pet_rows(&[load_pet_fixture()]));
        table.with(Style::markdown());
        let rendered = table.to_string();
        assert!(rendered.starts_with("| ID"));
        assert!(rendered.contains("|---"));
    }
}
