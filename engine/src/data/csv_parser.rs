use crate::error::EngineError;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use shared::models::{CostKind, CostRecord, VendorRef};
use shared::utils::us_format;
use std::fs::File;
use std::io::{BufReader, Read};

type Result<T> = std::result::Result<T, EngineError>;

pub struct CostCsvParser;

impl CostCsvParser {
    // CSV Header: Id,Project,Vendor,VendorLink,AccountMain,AccountExpense,Class,Date,Notes,Amount,Category
    // Example Row: a0B1,P-100,Acme Rentals,https://acme.example,Acme,Equipment Rental,Equipment,2024-03-02,Lift,"$1,250.00",Primary
    pub fn load_records_from_csv(file_path: &str) -> Result<Vec<CostRecord>> {
        let file = File::open(file_path).map_err(|source| EngineError::CsvFileError {
            path: file_path.to_string(),
            source,
        })?;
        Self::parse_records(BufReader::new(file))
    }

    pub fn parse_records<R: Read>(reader: R) -> Result<Vec<CostRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut records = Vec::new();

        for result in rdr.records() {
            let record = result?;
            // Quoted fields may span lines, so the reader's position is the only reliable line number.
            let line = record.position().map_or(0, |pos| pos.line());

            let project_id = Self::required_field(&record, &headers, "Project", line)?.to_string();
            let vendor_name = Self::required_field(&record, &headers, "Vendor", line)?.to_string();
            let account_main = Self::required_field(&record, &headers, "AccountMain", line)?.to_string();
            let account_expense = Self::required_field(&record, &headers, "AccountExpense", line)?.to_string();
            let cost_class = Self::required_field(&record, &headers, "Class", line)?.to_string();
            let date_str = Self::required_field(&record, &headers, "Date", line)?;
            let amount_str = Self::required_field(&record, &headers, "Amount", line)?;
            let category_str = Self::required_field(&record, &headers, "Category", line)?;

            let cost_date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error parsing 'Date' at line {}: {}", line, e))
            })?;
            let amount = us_format::parse_amount(amount_str).map_err(|e| {
                EngineError::CsvDataFormatError(format!("Error parsing 'Amount' at line {}: {:#}", line, e))
            })?;
            let kind = Self::parse_kind(category_str).ok_or_else(|| {
                EngineError::CsvDataFormatError(format!(
                    "Error parsing 'Category' at line {}: unknown category '{}'",
                    line, category_str
                ))
            })?;

            let id = match Self::get_field(&record, &headers, "Id") {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => uuid::Uuid::new_v4().to_string(),
            };
            let link = Self::get_field(&record, &headers, "VendorLink").unwrap_or_default().to_string();
            let description = Self::get_field(&record, &headers, "Notes").unwrap_or_default().to_string();

            records.push(CostRecord {
                id,
                project_id,
                vendor: VendorRef { name: vendor_name, link },
                account_main,
                account_expense,
                cost_class,
                cost_date,
                description,
                amount,
                kind,
            });
        }
        Ok(records)
    }

    fn parse_kind(s: &str) -> Option<CostKind> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Some(CostKind::Primary),
            "secondary" => Some(CostKind::Secondary),
            _ => None,
        }
    }

    fn required_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str, line: u64) -> Result<&'a str> {
        Self::get_field(record, headers, name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                EngineError::CsvDataFormatError(format!("Missing '{}' field in CSV record at line {}", name, line))
            })
    }

    // Looks a field up by header name so column order in the file does not matter.
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}
