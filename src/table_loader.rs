use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::nutrient_table::{NutrientLabel, NutrientRow, NutrientTable};

const FOOD_COL: &str = "Food";
const FDC_ID_COL: &str = "FDC ID";
const BRAND_COL: &str = "Brand";

fn parse_nutrient(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn text_field(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Copies the parsable nutrient cells of `record` into `row` and returns how
/// many labels were left at 0.0.
fn fill_nutrients(
    row: &mut NutrientRow,
    record: &StringRecord,
    nutrient_idx: &[(NutrientLabel, Option<usize>)],
) -> usize {
    let mut defaulted = 0;
    for (label, idx) in nutrient_idx {
        match idx.and_then(|i| record.get(i)).and_then(parse_nutrient) {
            Some(value) => *row.value_mut(*label) = value,
            None => defaulted += 1,
        }
    }
    defaulted
}

/// Reads a normalised nutrient table from CSV.
///
/// Absent, blank or non-numeric nutrient cells become 0.0. Rows that are
/// blank in every column are skipped.
pub fn read_nutrient_table<R: Read>(reader: R) -> Result<NutrientTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read nutrient table header")?.clone();

    let food_idx = column_index(&headers, FOOD_COL);
    let fdc_idx = column_index(&headers, FDC_ID_COL);
    let brand_idx = column_index(&headers, BRAND_COL);
    let nutrient_idx: Vec<(NutrientLabel, Option<usize>)> = NutrientLabel::ALL
        .iter()
        .map(|&label| (label, column_index(&headers, label.column())))
        .collect();

    for (label, idx) in &nutrient_idx {
        if idx.is_none() {
            warn!(column = label.column(), "nutrient column missing, defaulting to 0.0");
        }
    }

    let mut table = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read record at row index {}", row_index))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let mut row = NutrientRow {
            food: text_field(&record, food_idx),
            fdc_id: text_field(&record, fdc_idx),
            brand: text_field(&record, brand_idx),
            ..Default::default()
        };

        let defaulted = fill_nutrients(&mut row, &record, &nutrient_idx);
        if defaulted > 0 {
            warn!(row = row_index, food = %row.food, defaulted, "substituted 0.0 for missing nutrients");
        }

        table.push(row);
    }

    if table.is_empty() {
        return Err(anyhow::anyhow!("No nutrient rows found in table"));
    }

    debug!(rows = table.len(), "nutrient table loaded");
    Ok(table)
}

pub fn load_nutrient_table(csv_path: &Path) -> Result<NutrientTable> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Nutrient table not found at: {:?}", csv_path));
    }
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open nutrient table at {:?}", csv_path))?;
    read_nutrient_table(file).with_context(|| format!("Failed to load nutrient table from {:?}", csv_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "Food,FDC ID,Brand,Calories,Protein (g),Fat (g),Carbs (g),Sugar (g),Fiber (g),Sodium (mg)";

    fn create_test_csv_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", HEADER)?;
        writeln!(file, "Chicken breast,1001,Acme,165,31,3.6,0,0,0,74")?;
        writeln!(file, "Oat bar,1002,,190,,7,29,12,4,")?; // missing protein and sodium
        writeln!(file, "Mystery snack,1003,Snacko,n/a,2,3,4,5,6,7")?; // invalid calories
        writeln!(file, ",,,,,,,,,")?; // blank row
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_nutrient_table_success() -> Result<()> {
        let file = create_test_csv_file()?;
        let table = load_nutrient_table(file.path())?;

        assert_eq!(table.len(), 3);

        let chicken = &table[0];
        assert_eq!(chicken.food, "Chicken breast");
        assert_eq!(chicken.fdc_id, "1001");
        assert_eq!(chicken.brand, "Acme");
        assert_eq!(chicken.calories, 165.0);
        assert_eq!(chicken.protein_g, 31.0);
        assert_eq!(chicken.sodium_mg, 74.0);

        let bar = &table[1];
        assert_eq!(bar.brand, "");
        assert_eq!(bar.protein_g, 0.0);
        assert_eq!(bar.sodium_mg, 0.0);
        assert_eq!(bar.carbs_g, 29.0);

        let mystery = &table[2];
        assert_eq!(mystery.calories, 0.0);
        assert_eq!(mystery.sodium_mg, 7.0);
        Ok(())
    }

    #[test]
    fn test_fill_nutrients_counts_every_substitution() {
        let headers = StringRecord::from(HEADER.split(',').collect::<Vec<_>>());
        let nutrient_idx: Vec<(NutrientLabel, Option<usize>)> = NutrientLabel::ALL
            .iter()
            .map(|&label| (label, column_index(&headers, label.column())))
            .collect();

        let partial = StringRecord::from(vec!["Oat bar", "1002", "", "190", "", "7", "29", "12", "4", ""]);
        let mut row = NutrientRow::default();
        assert_eq!(fill_nutrients(&mut row, &partial, &nutrient_idx), 2);
        assert_eq!(row.calories, 190.0);

        let empty = StringRecord::from(vec!["Water", "1003", "", "", "", "", "", "", "", ""]);
        let mut row = NutrientRow::default();
        assert_eq!(fill_nutrients(&mut row, &empty, &nutrient_idx), NutrientLabel::ALL.len());
        assert_eq!(row, NutrientRow::default());

        let full = StringRecord::from(vec!["Egg", "1004", "", "78", "6", "5", "1", "1", "0", "62"]);
        let mut row = NutrientRow::default();
        assert_eq!(fill_nutrients(&mut row, &full, &nutrient_idx), 0);
    }

    #[test]
    fn test_missing_nutrient_column_defaults_to_zero() -> Result<()> {
        let csv = "Food,FDC ID,Calories,Protein (g)\nEgg,2001,78,6.3\n";
        let table = read_nutrient_table(csv.as_bytes())?;
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].protein_g, 6.3);
        assert_eq!(table[0].fat_g, 0.0);
        assert_eq!(table[0].fiber_g, 0.0);
        assert_eq!(table[0].brand, "");
        Ok(())
    }

    #[test]
    fn test_header_only_table_is_error() {
        let csv = format!("{}\n", HEADER);
        let result = read_nutrient_table(csv.as_bytes());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No nutrient rows"));
    }

    #[test]
    fn test_load_nutrient_table_file_not_found() {
        let path = Path::new("this_table_does_not_exist.csv");
        let result = load_nutrient_table(path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Nutrient table not found"));
    }
}
